//! Pixel geometry, container clamping, and tile DOM identifiers.
//!
//! All coordinates are CSS pixels. Tile positions are top-left offsets
//! relative to the tile's container; pointer and scroll samples are viewport
//! values as reported by the browser.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::fmt;
use std::num::ParseIntError;

use wire::TileId;

use crate::consts::TILE_ID_PREFIX;

/// A point or offset in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    #[must_use]
    pub fn minus(self, other: Point) -> Self {
        Self { x: self.x - other.x, y: self.y - other.y }
    }

    /// Round both axes to the nearest whole pixel.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn rounded(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Shrink by `px` on every side.
    #[must_use]
    pub fn inset(self, px: f64) -> Self {
        Self { width: self.width - 2.0 * px, height: self.height - 2.0 * px }
    }
}

/// Clamp a proposed tile position into `[0, bounds - tile]` on each axis.
///
/// Axes are clamped independently. When the tile is larger than the bounds
/// the far edge wins, matching how the browser would pin it.
#[must_use]
pub fn clamp_to_container(proposed: Point, tile: Size, bounds: Size) -> Point {
    Point { x: clamp_axis(proposed.x, tile.width, bounds.width), y: clamp_axis(proposed.y, tile.height, bounds.height) }
}

fn clamp_axis(value: f64, extent: f64, bound: f64) -> f64 {
    let mut clamped = value;
    if clamped < 0.0 {
        clamped = 0.0;
    }
    if clamped + extent > bound {
        clamped = bound - extent;
    }
    clamped
}

/// Error returned when a DOM id does not name a tile.
#[derive(Debug, thiserror::Error)]
pub enum TileIdError {
    #[error("element id {0:?} is missing the tile prefix")]
    MissingPrefix(String),
    #[error("element id {id:?} has a non-numeric tile id: {source}")]
    NotANumber {
        id: String,
        #[source]
        source: ParseIntError,
    },
}

/// DOM identity of a tile, derived from its numeric id (`7` → `w-7`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileDomId(String);

impl TileDomId {
    #[must_use]
    pub fn from_tile(id: TileId) -> Self {
        Self(format!("{TILE_ID_PREFIX}{id}"))
    }

    /// Wrap an element id read back from the DOM without validating it.
    #[must_use]
    pub fn from_element_id(raw: &str) -> Self {
        Self(raw.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS selector for the element, e.g. `#w-7`.
    #[must_use]
    pub fn selector(&self) -> String {
        format!("#{}", self.0)
    }

    /// Strip the prefix and parse the remainder as a base-10 tile id.
    ///
    /// # Errors
    ///
    /// Returns [`TileIdError`] when the prefix is absent or the remainder is
    /// not a non-negative integer.
    pub fn tile_id(&self) -> Result<TileId, TileIdError> {
        let digits = self
            .0
            .strip_prefix(TILE_ID_PREFIX)
            .ok_or_else(|| TileIdError::MissingPrefix(self.0.clone()))?;
        digits
            .parse::<TileId>()
            .map_err(|source| TileIdError::NotANumber { id: self.0.clone(), source })
    }
}

impl fmt::Display for TileDomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TileId> for TileDomId {
    fn from(id: TileId) -> Self {
        Self::from_tile(id)
    }
}
