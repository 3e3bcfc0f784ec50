//! Inbound event dispatch.
//!
//! The transport hands every received frame to
//! [`EngineCore::handle_frame`]. Frames outside [`SUBSCRIBED_EVENTS`] or
//! with malformed payloads are logged and dropped; nothing reaches the user.

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;

use rand::Rng;
use wire::{
    ClientEvent, EVENT_HUP, EVENT_MOVE, EVENT_POETS, EVENT_RELOAD, EVENT_WORDS, Frame, Hup, Pong, RemoteMove, ServerEvent, Word,
};

use crate::engine::EngineCore;
use crate::guard::{Page, Verdict};
use crate::render::Renderer;

/// Event names the engine listens for.
pub const SUBSCRIBED_EVENTS: [&str; 5] = [EVENT_MOVE, EVENT_RELOAD, EVENT_POETS, EVENT_HUP, EVENT_WORDS];

impl<G: Rng> EngineCore<G> {
    /// Decode and dispatch a JSON text message.
    pub fn handle_text(&mut self, text: &str, renderer: &mut dyn Renderer, page: &dyn Page) {
        match wire::decode_frame(text) {
            Ok(frame) => self.handle_frame(&frame, renderer, page),
            Err(err) => log::warn!("dropping undecodable message: {err}"),
        }
    }

    /// Narrow a frame to a server event and dispatch it.
    pub fn handle_frame(&mut self, frame: &Frame, renderer: &mut dyn Renderer, page: &dyn Page) {
        if !SUBSCRIBED_EVENTS.contains(&frame.event.as_str()) {
            log::debug!("ignoring unsubscribed event {}", frame.event);
            return;
        }
        match ServerEvent::from_frame(frame) {
            Ok(event) => self.handle_event(event, renderer, page),
            Err(err) => log::warn!("dropping {} frame: {err}", frame.event),
        }
    }

    pub fn handle_event(&mut self, event: ServerEvent, renderer: &mut dyn Renderer, page: &dyn Page) {
        match event {
            ServerEvent::Move(remote) => self.on_move(&remote, renderer),
            ServerEvent::Reload => {
                log::info!("reload requested by server");
                page.reload();
            }
            ServerEvent::Poets(poets) => self.on_poets(poets.count, renderer),
            ServerEvent::Hup(hup) => self.on_hup(&hup, page),
            ServerEvent::Words(words) => self.on_words(&words, renderer),
        }
    }

    fn on_move(&mut self, remote: &RemoteMove, renderer: &mut dyn Renderer) {
        self.animator.animate(remote, renderer);
    }

    fn on_poets(&mut self, count: u32, renderer: &mut dyn Renderer) {
        if self.session.update_poets(count) {
            renderer.set_counter(count);
        }
    }

    fn on_hup(&mut self, hup: &Hup, page: &dyn Page) {
        match self.guard.check(hup) {
            Verdict::Invalid => log::warn!("ignoring liveness check without id (v={})", hup.v),
            Verdict::Stale { server } => {
                log::info!("protocol version {server} differs from {}; reloading", self.guard.version());
                page.reload();
            }
            Verdict::Current(id) => {
                if self.session.config().ack_liveness {
                    self.session.send(ClientEvent::Pong(Pong { id }));
                }
            }
        }
    }

    fn on_words(&mut self, words: &[Word], renderer: &mut dyn Renderer) {
        self.registry.apply_word_set(words, renderer);
    }
}
