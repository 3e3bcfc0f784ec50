//! Shared event envelope and payload types for the fridge websocket.
//!
//! This crate owns the wire representation used by both the relay server and
//! the browser client. Every message is a JSON text frame
//! `{"event": "<name>", "data": <payload>}`; the payload stays a loose
//! `serde_json::Value` in [`Frame`] and is narrowed into typed events by
//! [`ServerEvent`] and [`ClientEvent`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable, server-assigned tile identifier.
pub type TileId = u64;

/// Protocol version baked into a client build.
pub type ProtocolVersion = u32;

/// Event name for tile moves (both directions).
pub const EVENT_MOVE: &str = "move";
/// Event name for a forced reload.
pub const EVENT_RELOAD: &str = "reload";
/// Event name for the connected-participant count.
pub const EVENT_POETS: &str = "poets";
/// Event name for the liveness/version check.
pub const EVENT_HUP: &str = "hup";
/// Event name for the authoritative word set.
pub const EVENT_WORDS: &str = "words";
/// Event name for a client's liveness acknowledgment.
pub const EVENT_PONG: &str = "pong";

/// Error returned when decoding frames or narrowing them into typed events.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text could not be parsed as a JSON frame envelope.
    #[error("failed to decode frame: {0}")]
    Decode(#[from] serde_json::Error),
    /// The event name is not one this side of the protocol understands.
    #[error("unknown event: {0}")]
    UnknownEvent(String),
    /// The payload does not match the schema of its event.
    #[error("invalid payload for {event}: {source}")]
    Payload {
        event: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single message on the realtime wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Event name, e.g. `"move"`.
    pub event: String,
    /// Event payload. Absent payloads decode as `null`.
    #[serde(default)]
    pub data: Value,
}

impl Frame {
    /// Build a frame from an event name and a serializable payload.
    ///
    /// Payload types in this crate always serialize; a failure falls back to
    /// a `null` payload rather than panicking.
    #[must_use]
    pub fn new<T: Serialize>(event: &str, data: &T) -> Self {
        Self { event: event.to_owned(), data: serde_json::to_value(data).unwrap_or(Value::Null) }
    }

    fn payload<T: DeserializeOwned>(&self) -> Result<T, CodecError> {
        serde_json::from_value(self.data.clone())
            .map_err(|source| CodecError::Payload { event: self.event.clone(), source })
    }
}

/// Outbound move intent published by the client that finished a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub id: TileId,
    /// Protocol version of the publishing client.
    pub v: ProtocolVersion,
    pub x: i64,
    pub y: i64,
}

/// Inbound move relayed from another client. Any `v` on the wire is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMove {
    pub id: TileId,
    pub x: i64,
    pub y: i64,
}

impl From<MoveIntent> for RemoteMove {
    fn from(intent: MoveIntent) -> Self {
        Self { id: intent.id, x: intent.x, y: intent.y }
    }
}

/// Number of connected participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poets {
    pub count: u32,
}

/// Periodic liveness check carrying the server's protocol version.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hup {
    /// Check sequence number. A check without one is malformed.
    #[serde(default)]
    pub id: Option<u64>,
    pub v: ProtocolVersion,
}

/// Client acknowledgment of a liveness check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pong {
    pub id: u64,
}

/// One tile of an authoritative word set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: TileId,
    pub word: String,
    pub x: i64,
    pub y: i64,
}

/// Events sent from the server to clients.
#[derive(Clone, Debug, PartialEq)]
pub enum ServerEvent {
    Move(RemoteMove),
    Reload,
    Poets(Poets),
    Hup(Hup),
    Words(Vec<Word>),
}

impl ServerEvent {
    /// Wire name of this event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Move(_) => EVENT_MOVE,
            Self::Reload => EVENT_RELOAD,
            Self::Poets(_) => EVENT_POETS,
            Self::Hup(_) => EVENT_HUP,
            Self::Words(_) => EVENT_WORDS,
        }
    }

    #[must_use]
    pub fn to_frame(&self) -> Frame {
        match self {
            Self::Move(m) => Frame::new(EVENT_MOVE, m),
            Self::Reload => Frame { event: EVENT_RELOAD.to_owned(), data: Value::Null },
            Self::Poets(p) => Frame::new(EVENT_POETS, p),
            Self::Hup(h) => Frame::new(EVENT_HUP, h),
            Self::Words(w) => Frame::new(EVENT_WORDS, w),
        }
    }

    /// Narrow a frame into a server event.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownEvent`] for names outside the server
    /// vocabulary and [`CodecError::Payload`] for schema mismatches. A
    /// `reload` accepts any payload.
    pub fn from_frame(frame: &Frame) -> Result<Self, CodecError> {
        match frame.event.as_str() {
            EVENT_MOVE => frame.payload().map(Self::Move),
            EVENT_RELOAD => Ok(Self::Reload),
            EVENT_POETS => frame.payload().map(Self::Poets),
            EVENT_HUP => frame.payload().map(Self::Hup),
            EVENT_WORDS => frame.payload().map(Self::Words),
            other => Err(CodecError::UnknownEvent(other.to_owned())),
        }
    }
}

/// Events sent from a client to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientEvent {
    Move(MoveIntent),
    Pong(Pong),
}

impl ClientEvent {
    #[must_use]
    pub fn to_frame(&self) -> Frame {
        match self {
            Self::Move(m) => Frame::new(EVENT_MOVE, m),
            Self::Pong(p) => Frame::new(EVENT_PONG, p),
        }
    }

    /// Narrow a frame into a client event.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownEvent`] for names outside the client
    /// vocabulary and [`CodecError::Payload`] for schema mismatches.
    pub fn from_frame(frame: &Frame) -> Result<Self, CodecError> {
        match frame.event.as_str() {
            EVENT_MOVE => frame.payload().map(Self::Move),
            EVENT_PONG => frame.payload().map(Self::Pong),
            other => Err(CodecError::UnknownEvent(other.to_owned())),
        }
    }
}

/// Encode a frame as JSON text.
#[must_use]
pub fn encode_frame(frame: &Frame) -> String {
    // Serializing a `String` + `Value` pair cannot fail.
    serde_json::to_string(frame).unwrap_or_default()
}

/// Decode JSON text into a frame.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] when the text is not a JSON object with an
/// `event` string.
pub fn decode_frame(text: &str) -> Result<Frame, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
