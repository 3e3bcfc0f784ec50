//! Protocol version guard.
//!
//! Every liveness check carries the server's protocol version. A mismatch
//! means this page was built against an incompatible protocol or word-set
//! contract, and the only recovery is a full reload.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::cell::Cell;

use wire::{Hup, ProtocolVersion};

/// Outcome of checking one liveness payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The check has no id. Log and ignore.
    Invalid,
    /// Versions match. Carries the check id for an optional acknowledgment.
    Current(u64),
    /// Versions differ. The page must reload.
    Stale { server: ProtocolVersion },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionGuard {
    version: ProtocolVersion,
}

impl VersionGuard {
    #[must_use]
    pub fn new(version: ProtocolVersion) -> Self {
        Self { version }
    }

    #[must_use]
    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    #[must_use]
    pub fn check(&self, hup: &Hup) -> Verdict {
        match hup.id {
            None => Verdict::Invalid,
            Some(_) if hup.v != self.version => Verdict::Stale { server: hup.v },
            Some(id) => Verdict::Current(id),
        }
    }
}

/// The hosting page.
pub trait Page {
    /// Reload the whole page, discarding all client state.
    fn reload(&self);
}

/// [`Page`] that counts reload requests.
#[derive(Debug, Default)]
pub struct RecordingPage {
    reloads: Cell<usize>,
}

impl RecordingPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

impl Page for RecordingPage {
    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}
