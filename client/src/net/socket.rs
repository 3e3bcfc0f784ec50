//! Websocket transport for the fridge event stream.
//!
//! Outbound events are encoded to JSON text and queued on an unbounded
//! channel; the connection task drains it while connected, so events queued
//! during a reconnect are flushed once the socket is back. Inbound text is
//! handed to a callback unparsed. The reconnect delay starts at one second
//! and doubles up to ten, resetting after a successful open.
//!
//! Everything except [`Backoff`] needs a browser and is gated behind the
//! `browser` feature.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use std::time::Duration;

/// First reconnect delay.
pub const INITIAL_BACKOFF_MS: u32 = 1000;
/// Reconnect delay ceiling.
pub const MAX_BACKOFF_MS: u32 = 10_000;

/// Exponential reconnect delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backoff {
    current_ms: u32,
    max_ms: u32,
}

impl Default for Backoff {
    fn default() -> Self {
        Self::new(INITIAL_BACKOFF_MS, MAX_BACKOFF_MS)
    }
}

impl Backoff {
    #[must_use]
    pub fn new(initial_ms: u32, max_ms: u32) -> Self {
        Self { current_ms: initial_ms.min(max_ms), max_ms }
    }

    /// Delay to wait now. Doubles the following delay up to the ceiling.
    pub fn next_delay(&mut self) -> Duration {
        let delay = Duration::from_millis(u64::from(self.current_ms));
        self.current_ms = self.current_ms.saturating_mul(2).min(self.max_ms);
        delay
    }

    /// Connection succeeded; start over from the initial delay.
    pub fn reset(&mut self) {
        *self = Self::new(INITIAL_BACKOFF_MS, self.max_ms);
    }
}

#[cfg(feature = "browser")]
pub use browser::{SocketOutbound, channel, spawn_connection};

#[cfg(feature = "browser")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use fridge::session::Outbound;
    use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
    use wire::ClientEvent;

    use super::Backoff;

    /// [`fridge::session::Outbound`] over the websocket queue.
    #[derive(Debug, Clone)]
    pub struct SocketOutbound {
        tx: UnboundedSender<String>,
    }

    impl Outbound for SocketOutbound {
        fn send(&self, event: ClientEvent) {
            let text = wire::encode_frame(&event.to_frame());
            if let Err(e) = self.tx.unbounded_send(text) {
                log::warn!("outbound queue closed; dropped event: {e}");
            }
        }
    }

    /// Create the outbound queue. The receiver goes to [`spawn_connection`].
    #[must_use]
    pub fn channel() -> (SocketOutbound, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded::<String>();
        (SocketOutbound { tx }, rx)
    }

    /// Spawn the connection lifecycle as a local task. It never finishes.
    pub fn spawn_connection(url: String, rx: UnboundedReceiver<String>, on_text: impl Fn(&str) + 'static) {
        wasm_bindgen_futures::spawn_local(connection_loop(url, rx, on_text));
    }

    async fn connection_loop(url: String, rx: UnboundedReceiver<String>, on_text: impl Fn(&str)) {
        let rx = Rc::new(RefCell::new(rx));
        let mut backoff = Backoff::default();

        loop {
            match connect_and_run(&url, &rx, &on_text, &mut backoff).await {
                Ok(()) => log::info!("socket to {url} closed"),
                Err(e) => log::warn!("socket to {url} failed: {e}"),
            }

            let delay = backoff.next_delay();
            log::debug!("reconnecting in {}ms", delay.as_millis());
            gloo_timers::future::sleep(delay).await;
        }
    }

    async fn connect_and_run(
        url: &str,
        rx: &Rc<RefCell<UnboundedReceiver<String>>>,
        on_text: &impl Fn(&str),
        backoff: &mut Backoff,
    ) -> Result<(), String> {
        use futures::{SinkExt, StreamExt};
        use gloo_net::websocket::Message;
        use gloo_net::websocket::futures::WebSocket;

        let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
        let (mut ws_write, mut ws_read) = ws.split();
        backoff.reset();
        log::info!("socket to {url} open");

        let mut rx = rx.borrow_mut();
        let send_task = async {
            while let Some(text) = rx.next().await {
                if let Err(e) = ws_write.send(Message::Text(text)).await {
                    log::warn!("socket send failed: {e}");
                    break;
                }
            }
        };

        let recv_task = async {
            while let Some(msg) = ws_read.next().await {
                match msg {
                    Ok(Message::Text(text)) => on_text(&text),
                    Ok(Message::Bytes(_)) => log::debug!("ignoring binary message"),
                    Err(e) => {
                        log::warn!("socket receive failed: {e}");
                        break;
                    }
                }
            }
        };

        futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
        Ok(())
    }
}
