//! Client membership and event fan-out.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use wire::{ClientEvent, Frame, Poets, ServerEvent};

use crate::state::AppState;

// =============================================================================
// MEMBERSHIP
// =============================================================================

/// Register a client. Returns the new participant count.
pub async fn join(state: &AppState, client_id: Uuid, tx: mpsc::Sender<Frame>) -> u32 {
    let mut board = state.board.write().await;
    board.clients.insert(client_id, tx);
    board.poets()
}

/// Remove a client. Returns the remaining participant count.
pub async fn part(state: &AppState, client_id: Uuid) -> u32 {
    let mut board = state.board.write().await;
    board.clients.remove(&client_id);
    board.poets()
}

/// The full word list as a `words` frame.
pub async fn words_frame(state: &AppState) -> Frame {
    let board = state.board.read().await;
    ServerEvent::Words(board.words.snapshot()).to_frame()
}

#[must_use]
pub fn poets_frame(count: u32) -> Frame {
    ServerEvent::Poets(Poets { count }).to_frame()
}

// =============================================================================
// BROADCAST
// =============================================================================

/// Broadcast a frame to every connected client, optionally excluding one.
/// Returns the number of clients the frame was queued for.
pub async fn broadcast(state: &AppState, frame: &Frame, exclude: Option<Uuid>) -> usize {
    let board = state.board.read().await;
    let mut delivered = 0;
    for (client_id, tx) in &board.clients {
        if exclude == Some(*client_id) {
            continue;
        }
        // Best-effort: a client whose queue is full misses this frame.
        match tx.try_send(frame.clone()) {
            Ok(()) => delivered += 1,
            Err(e) => debug!(%client_id, event = %frame.event, error = %e, "relay: frame not queued"),
        }
    }
    delivered
}

// =============================================================================
// INBOUND
// =============================================================================

/// Handle one text message from `client_id`.
pub async fn handle_client_text(state: &AppState, client_id: Uuid, text: &str) {
    let event = match wire::decode_frame(text).and_then(|frame| ClientEvent::from_frame(&frame)) {
        Ok(event) => event,
        Err(e) => {
            warn!(%client_id, error = %e, "relay: invalid inbound frame");
            return;
        }
    };

    match event {
        ClientEvent::Move(intent) => {
            if intent.v != state.protocol_version {
                debug!(%client_id, v = intent.v, "relay: move from client on another protocol version");
            }
            let remote = state.board.write().await.words.apply_move(&intent);
            let Some(remote) = remote else {
                warn!(%client_id, id = intent.id, "relay: move for unknown word");
                return;
            };
            let peers = broadcast(state, &ServerEvent::Move(remote).to_frame(), Some(client_id)).await;
            debug!(%client_id, id = remote.id, x = remote.x, y = remote.y, peers, "relay: move");
        }
        ClientEvent::Pong(pong) => {
            info!(%client_id, id = pong.id, "relay: liveness acknowledged");
        }
    }
}

#[cfg(test)]
#[path = "relay_test.rs"]
mod tests;
