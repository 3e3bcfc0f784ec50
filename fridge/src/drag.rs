//! Per-tile drag controller: press → move (+scroll) → release.
//!
//! Local drags move the tile synchronously; nothing here animates. The
//! controller never talks to the DOM. It returns the position the host
//! should apply, and on release the rounded position to publish.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::consts::BORDER_INSET_PX;
use crate::geometry::{Point, TileDomId, clamp_to_container};
use crate::input::{DragSession, DragState, PressSample, ScrollCompensator};

/// Error raised when a drag cannot start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    /// The tile has no positioned ancestor to clamp against.
    #[error("tile {0} has no offset parent")]
    NoOffsetParent(TileDomId),
    /// The pressed element is not a tile the registry knows about.
    #[error("tile {0} is not on the board")]
    UnknownTile(TileDomId),
}

/// Owns the drag lifecycle of one tile.
#[derive(Debug, Clone)]
pub struct DragController {
    dom_id: TileDomId,
    state: DragState,
}

impl DragController {
    #[must_use]
    pub fn new(dom_id: TileDomId) -> Self {
        Self { dom_id, state: DragState::Idle }
    }

    #[must_use]
    pub fn dom_id(&self) -> &TileDomId {
        &self.dom_id
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.state.is_idle()
    }

    /// Idle → Pressed. Starts a fresh session even if one is already active.
    ///
    /// # Errors
    ///
    /// Returns [`DragError::NoOffsetParent`] when the sample has no
    /// container; the controller stays idle and the host must not register
    /// any listeners.
    pub fn press(&mut self, sample: &PressSample) -> Result<(), DragError> {
        let Some(container) = sample.container else {
            self.state = DragState::Idle;
            return Err(DragError::NoOffsetParent(self.dom_id.clone()));
        };

        self.state = DragState::Pressed(DragSession {
            pointer_start: sample.pointer,
            element_start: sample.element,
            pointer_offset: sample.pointer.minus(sample.element),
            bounds: container.inset(BORDER_INSET_PX),
            tile: sample.tile,
            last_pointer: sample.pointer,
            scroll: ScrollCompensator::new(sample.scroll),
            current: sample.element,
        });
        Ok(())
    }

    /// Pointer moved. Returns the clamped position to apply, or `None` when
    /// no drag is active.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<Point> {
        let mut session = *self.state.session()?;
        session.last_pointer = pointer;
        session.current = resolve(&session);
        self.state = DragState::Dragging(session);
        Some(session.current)
    }

    /// Viewport scrolled. Folds the incremental delta into the session and
    /// returns the recomputed position, or `None` when no drag is active.
    pub fn scroll(&mut self, scroll: Point) -> Option<Point> {
        let mut session = *self.state.session()?;
        session.scroll.sample(scroll);
        session.current = resolve(&session);
        self.state = DragState::Dragging(session);
        Some(session.current)
    }

    /// Pointer released. Ends the session and returns the final position
    /// rounded to whole pixels, or `None` when no drag was active.
    pub fn release(&mut self) -> Option<(i64, i64)> {
        let session = *self.state.session()?;
        self.state = DragState::Idle;
        Some(session.current.rounded())
    }
}

/// Position implied by the latest pointer sample and accumulated scroll.
///
/// Scrolling down or right by `d` moves the tile by `-d`, for scroll
/// samples and for every pointer sample that follows them.
fn resolve(session: &DragSession) -> Point {
    let proposed = session
        .last_pointer
        .minus(session.pointer_offset)
        .minus(session.scroll.accumulated);
    clamp_to_container(proposed, session.tile, session.bounds)
}
