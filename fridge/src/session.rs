//! Per-page session context.
//!
//! One [`Session`] is built by the page bootstrap and handed to the engine.
//! It carries the protocol version baked into the build, the last displayed
//! participant count, and the outbound half of the event channel.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use wire::{ClientEvent, ProtocolVersion};

use crate::registry::RefreshMode;

/// Fire-and-forget writer for client events.
///
/// Implementations queue the event and return immediately; no
/// acknowledgment is awaited and failures are the transport's concern.
pub trait Outbound {
    fn send(&self, event: ClientEvent);
}

/// [`Outbound`] that keeps every sent event in order.
#[derive(Debug, Default)]
pub struct RecordingOutbound {
    sent: RefCell<Vec<ClientEvent>>,
}

impl RecordingOutbound {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything sent so far.
    #[must_use]
    pub fn sent(&self) -> Vec<ClientEvent> {
        self.sent.borrow().clone()
    }

    /// Drain and return everything sent so far.
    pub fn take(&self) -> Vec<ClientEvent> {
        self.sent.borrow_mut().drain(..).collect()
    }
}

impl Outbound for RecordingOutbound {
    fn send(&self, event: ClientEvent) {
        self.sent.borrow_mut().push(event);
    }
}

/// Behaviour switches read from page configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// How word-set events reconcile against rendered tiles.
    pub refresh: RefreshMode,
    /// Reply `pong` to liveness checks that pass the version check.
    pub ack_liveness: bool,
}

/// Process-wide state for one open page.
#[derive(Clone)]
pub struct Session {
    protocol_version: ProtocolVersion,
    poets: u32,
    channel: Rc<dyn Outbound>,
    config: SessionConfig,
}

impl Session {
    #[must_use]
    pub fn new(protocol_version: ProtocolVersion, channel: Rc<dyn Outbound>) -> Self {
        Self::with_config(protocol_version, channel, SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(protocol_version: ProtocolVersion, channel: Rc<dyn Outbound>, config: SessionConfig) -> Self {
        Self { protocol_version, poets: 0, channel, config }
    }

    #[must_use]
    pub fn protocol_version(&self) -> ProtocolVersion {
        self.protocol_version
    }

    /// Last participant count written to the counter.
    #[must_use]
    pub fn poets(&self) -> u32 {
        self.poets
    }

    /// Record a new participant count. Returns `true` when it differs from
    /// the previous value and the counter needs a write.
    pub fn update_poets(&mut self, count: u32) -> bool {
        if self.poets == count {
            return false;
        }
        self.poets = count;
        true
    }

    #[must_use]
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Queue an event on the outbound channel.
    pub fn send(&self, event: ClientEvent) {
        self.channel.send(event);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("protocol_version", &self.protocol_version)
            .field("poets", &self.poets)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
