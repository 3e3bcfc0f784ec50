//! Eased transitions for tile moves that arrive from other clients.
//!
//! Each remote move picks one of two curves per axis, independently and at
//! random, and plays both over a fixed duration. The random source is
//! injected so tests can seed it.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use rand::Rng;
use rand::rngs::SmallRng;
use wire::RemoteMove;

use crate::consts::{EASE_IN_OUT_EXPO, EASE_IN_OUT_QUAD, EASE_OUT_BACK, EASE_OUT_CIRC, REMOTE_MOVE_DURATION_MS};
use crate::geometry::{Point, TileDomId};
use crate::render::Renderer;

/// Timing curve for one axis of a remote move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// Horizontal option A.
    EaseInOutQuad,
    /// Horizontal option B.
    EaseOutCirc,
    /// Vertical option A.
    EaseInOutExpo,
    /// Vertical option B.
    EaseOutBack,
}

impl Easing {
    /// Curves permitted on the horizontal axis.
    pub const HORIZONTAL: [Easing; 2] = [Easing::EaseInOutQuad, Easing::EaseOutCirc];
    /// Curves permitted on the vertical axis.
    pub const VERTICAL: [Easing; 2] = [Easing::EaseInOutExpo, Easing::EaseOutBack];

    /// CSS timing function for this curve.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::EaseInOutQuad => EASE_IN_OUT_QUAD,
            Self::EaseOutCirc => EASE_OUT_CIRC,
            Self::EaseInOutExpo => EASE_IN_OUT_EXPO,
            Self::EaseOutBack => EASE_OUT_BACK,
        }
    }
}

/// Combined transition applied to a tile's `left` and `top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub left: Easing,
    pub top: Easing,
}

impl Transition {
    /// CSS `transition` value, e.g.
    /// `left 1500ms cubic-bezier(...), top 1500ms cubic-bezier(...)`.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "left {ms}ms {left}, top {ms}ms {top}",
            ms = self.duration_ms,
            left = self.left.css(),
            top = self.top.css()
        )
    }
}

/// Plays remote moves as time-boxed eased transitions.
#[derive(Debug, Clone)]
pub struct RemoteMoveAnimator<G = SmallRng> {
    rng: G,
}

impl<G: Rng> RemoteMoveAnimator<G> {
    #[must_use]
    pub fn new(rng: G) -> Self {
        Self { rng }
    }

    /// Pick a curve for each axis with a fair coin flip per axis.
    pub fn pick_transition(&mut self) -> Transition {
        let left = Easing::HORIZONTAL[usize::from(!self.rng.random_bool(0.5))];
        let top = Easing::VERTICAL[usize::from(!self.rng.random_bool(0.5))];
        Transition { duration_ms: REMOTE_MOVE_DURATION_MS, left, top }
    }

    /// Animate the tile named by `remote` to its new position.
    ///
    /// Returns the transition that was started, or `None` when the tile is
    /// not rendered locally. Missing tiles are skipped without retry.
    #[allow(clippy::cast_precision_loss)]
    pub fn animate(&mut self, remote: &RemoteMove, renderer: &mut dyn Renderer) -> Option<Transition> {
        let dom_id = TileDomId::from_tile(remote.id);
        if !renderer.contains_tile(&dom_id) {
            log::debug!("remote move for {dom_id} skipped: tile not rendered");
            return None;
        }

        let transition = self.pick_transition();
        renderer.animate_position(&dom_id, Point::new(remote.x as f64, remote.y as f64), &transition);
        Some(transition)
    }

    /// Transition finished: clear it so later instantaneous moves are not eased.
    pub fn finish(&self, dom_id: &TileDomId, renderer: &mut dyn Renderer) {
        if renderer.contains_tile(dom_id) {
            renderer.clear_transition(dom_id);
        }
    }
}
