//! Input model: press samples and the drag state machine.
//!
//! The host measures the DOM at pointer-down and hands the engine a
//! [`PressSample`]. [`DragState`] is the gesture tracked between
//! pointer-down and pointer-up; the active variants carry the
//! [`DragSession`] needed to recompute positions and emit the final one.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::{Point, Size};

/// Everything measured from the DOM when a tile is pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressSample {
    /// Pointer position (viewport coordinates).
    pub pointer: Point,
    /// Rendered offset of the tile inside its container.
    pub element: Point,
    /// Rendered size of the tile.
    pub tile: Size,
    /// Client size of the tile's offset parent, or `None` if it has none.
    pub container: Option<Size>,
    /// Viewport scroll at the time of the press.
    pub scroll: Point,
}

/// Ephemeral state for one press-to-release interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub pointer_start: Point,
    pub element_start: Point,
    /// `pointer_start - element_start`.
    pub pointer_offset: Point,
    /// Usable container area, already reduced by the border inset.
    /// Captured once at press time.
    pub bounds: Size,
    pub tile: Size,
    /// Most recent pointer sample.
    pub last_pointer: Point,
    pub scroll: ScrollCompensator,
    /// Latest clamped position. This is what gets emitted on release.
    pub current: Point,
}

/// Tracks viewport scroll during a drag and folds it into the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCompensator {
    /// Scroll at press time.
    pub anchor: Point,
    /// Last scroll sample seen.
    pub last: Point,
    /// Sum of scroll deltas since the press.
    pub accumulated: Point,
}

impl ScrollCompensator {
    #[must_use]
    pub fn new(anchor: Point) -> Self {
        Self { anchor, last: anchor, accumulated: Point::default() }
    }

    /// Record a scroll sample and return the delta since the previous one.
    pub fn sample(&mut self, scroll: Point) -> Point {
        let delta = scroll.minus(self.last);
        self.accumulated = self.accumulated.offset_by(delta.x, delta.y);
        self.last = scroll;
        delta
    }
}

/// Drag lifecycle of a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down but nothing has moved yet.
    Pressed(DragSession),
    /// Pointer or page has moved since the press.
    Dragging(DragSession),
}

impl DragState {
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Pressed(session) | Self::Dragging(session) => Some(session),
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
