//! WebSocket handler: one relay connection per browser.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → register the client, then send it the full `words` list
//! 2. Broadcast `poets` with the new count to everyone, including the client
//! 3. `select!` loop: inbound text → relay service; queued frames → socket
//! 4. Close → unregister and broadcast `poets` to the remaining clients

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use wire::Frame;

use crate::services::relay;
use crate::state::AppState;

/// Per-client outbound queue depth.
const CLIENT_QUEUE: usize = 256;

pub async fn handle_ws(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| run_ws(socket, state))
}

async fn run_ws(mut socket: WebSocket, state: AppState) {
    let client_id = Uuid::new_v4();
    let (client_tx, mut client_rx) = mpsc::channel::<Frame>(CLIENT_QUEUE);

    // Join before the snapshot so no move falls between the two.
    let poets = relay::join(&state, client_id, client_tx).await;
    let words = relay::words_frame(&state).await;
    if send_frame(&mut socket, &words).await.is_ok() {
        relay::broadcast(&state, &relay::poets_frame(poets), None).await;
        info!(%client_id, poets, "ws: client connected");
        relay_loop(&mut socket, &state, client_id, &mut client_rx).await;
    }

    let poets = relay::part(&state, client_id).await;
    relay::broadcast(&state, &relay::poets_frame(poets), None).await;
    info!(%client_id, poets, "ws: client disconnected");
}

async fn relay_loop(socket: &mut WebSocket, state: &AppState, client_id: Uuid, client_rx: &mut mpsc::Receiver<Frame>) {
    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(Ok(msg)) = msg else { break };
                match msg {
                    Message::Text(text) => relay::handle_client_text(state, client_id, text.as_str()).await,
                    Message::Close(_) => break,
                    other => debug!(%client_id, ?other, "ws: ignoring non-text message"),
                }
            }
            Some(frame) = client_rx.recv() => {
                if send_frame(socket, &frame).await.is_err() {
                    break;
                }
            }
        }
    }
}

async fn send_frame(socket: &mut WebSocket, frame: &Frame) -> Result<(), axum::Error> {
    let text = wire::encode_frame(frame);
    socket.send(Message::Text(text.into())).await.inspect_err(|e| {
        warn!(event = %frame.event, error = %e, "ws: send failed");
    })
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
