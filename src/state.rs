//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! board (word positions plus connected clients) lives behind one `RwLock`;
//! moves are rare and tiny, so a single lock keeps position updates and
//! their fan-out ordered.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;
use wire::{Frame, ProtocolVersion};

use crate::services::words::WordList;

// =============================================================================
// BOARD
// =============================================================================

/// The single shared board.
pub struct Board {
    /// Current word positions, keyed by tile id.
    pub words: WordList,
    /// Connected clients: `client_id` -> sender for outgoing frames.
    pub clients: HashMap<Uuid, mpsc::Sender<Frame>>,
}

impl Board {
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self { words, clients: HashMap::new() }
    }

    /// Number of connected participants.
    #[must_use]
    pub fn poets(&self) -> u32 {
        u32::try_from(self.clients.len()).unwrap_or(u32::MAX)
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state. Clone is required by Axum; every field is
/// `Arc`-wrapped or `Copy`.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<RwLock<Board>>,
    pub protocol_version: ProtocolVersion,
    hup_seq: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(words: WordList, protocol_version: ProtocolVersion) -> Self {
        Self { board: Arc::new(RwLock::new(Board::new(words))), protocol_version, hup_seq: Arc::new(AtomicU64::new(0)) }
    }

    /// Next liveness-check sequence number, starting at 1.
    pub fn next_hup_id(&self) -> u64 {
        self.hup_seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
