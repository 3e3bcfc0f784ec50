//! Periodic liveness check.
//!
//! Every interval the server broadcasts `hup {id, v}` carrying its protocol
//! version. Clients built against another version reload themselves.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};
use wire::{Hup, ServerEvent};

use crate::services::relay;
use crate::state::AppState;

/// Build the next liveness check.
#[must_use]
pub fn next_hup(state: &AppState) -> Hup {
    Hup { id: Some(state.next_hup_id()), v: state.protocol_version }
}

/// Spawn the liveness broadcaster. The first check goes out one full
/// interval after startup.
pub fn spawn_hup_task(state: AppState, interval: Duration) -> JoinHandle<()> {
    info!(interval_secs = interval.as_secs(), v = state.protocol_version, "liveness check configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let hup = next_hup(&state);
            let clients = relay::broadcast(&state, &ServerEvent::Hup(hup).to_frame(), None).await;
            debug!(id = ?hup.id, clients, "hup: broadcast");
        }
    })
}

#[cfg(test)]
#[path = "hup_test.rs"]
mod tests;
