use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wire::MoveIntent;

use crate::animator::RemoteMoveAnimator;
use crate::drag::DragError;
use crate::emitter;
use crate::geometry::{Point, TileDomId};
use crate::guard::VersionGuard;
use crate::input::PressSample;
use crate::registry::TileRegistry;
use crate::render::Renderer;
use crate::session::Session;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core engine state: everything that doesn't touch the DOM.
///
/// The browser host owns one of these per page, measures the DOM into
/// [`PressSample`]s, forwards pointer, scroll and network events, and
/// passes its [`Renderer`] into each call. Inbound network dispatch lives in
/// [`crate::listener`].
pub struct EngineCore<G = SmallRng> {
    pub session: Session,
    pub registry: TileRegistry,
    pub animator: RemoteMoveAnimator<G>,
    pub guard: VersionGuard,
}

impl EngineCore<SmallRng> {
    /// Build an engine whose easing choices come from a `SmallRng` seeded
    /// with `seed`.
    #[must_use]
    pub fn new(session: Session, seed: u64) -> Self {
        Self::with_rng(session, SmallRng::seed_from_u64(seed))
    }
}

impl<G: Rng> EngineCore<G> {
    #[must_use]
    pub fn with_rng(session: Session, rng: G) -> Self {
        let registry = TileRegistry::new(session.config().refresh);
        let guard = VersionGuard::new(session.protocol_version());
        Self { session, registry, animator: RemoteMoveAnimator::new(rng), guard }
    }

    // --- Local drag input ---

    /// Start a drag on `dom_id`.
    ///
    /// # Errors
    ///
    /// [`DragError::UnknownTile`] when the tile is not registered and
    /// [`DragError::NoOffsetParent`] when the sample has no container. In
    /// both cases no drag starts and the host must not register document
    /// listeners.
    ///
    /// A successful press drops any transition left by a remote move, so
    /// local samples are applied without easing.
    pub fn pointer_down(
        &mut self,
        dom_id: &TileDomId,
        sample: &PressSample,
        renderer: &mut dyn Renderer,
    ) -> Result<(), DragError> {
        let drag = self
            .registry
            .drag_mut(dom_id)
            .ok_or_else(|| DragError::UnknownTile(dom_id.clone()))?;
        drag.press(sample)?;
        renderer.clear_transition(dom_id);
        Ok(())
    }

    /// Pointer moved during a drag. Applies the clamped position
    /// synchronously and returns it.
    pub fn pointer_move(&mut self, dom_id: &TileDomId, pointer: Point, renderer: &mut dyn Renderer) -> Option<Point> {
        let position = self.registry.drag_mut(dom_id)?.pointer_move(pointer)?;
        renderer.set_position(dom_id, position);
        Some(position)
    }

    /// Viewport scrolled during a drag. Applies the recomputed position and
    /// returns it.
    pub fn scroll(&mut self, dom_id: &TileDomId, scroll: Point, renderer: &mut dyn Renderer) -> Option<Point> {
        let position = self.registry.drag_mut(dom_id)?.scroll(scroll)?;
        renderer.set_position(dom_id, position);
        Some(position)
    }

    /// Pointer released. Ends the drag and publishes the final position.
    ///
    /// Returns the emitted intent, or `None` when no drag was active.
    pub fn pointer_up(&mut self, dom_id: &TileDomId) -> Option<MoveIntent> {
        let (x, y) = self.registry.drag_mut(dom_id)?.release()?;
        match emitter::send_move(&self.session, dom_id, x, y) {
            Ok(intent) => Some(intent),
            Err(err) => {
                log::warn!("move for {dom_id} not sent: {err}");
                None
            }
        }
    }

    /// Whether a drag is in progress on `dom_id`.
    #[must_use]
    pub fn is_dragging(&self, dom_id: &TileDomId) -> bool {
        self.registry.drag(dom_id).is_some_and(crate::drag::DragController::is_active)
    }

    // --- Rendering callbacks ---

    /// A tile's transition ended.
    pub fn transition_finished(&self, dom_id: &TileDomId, renderer: &mut dyn Renderer) {
        self.animator.finish(dom_id, renderer);
    }
}
