//! Rendering adapter between the engine and whatever draws the tiles.
//!
//! The browser client implements [`Renderer`] over the DOM.
//! [`MemoryRenderer`] keeps the same state in plain collections so the
//! registry, animator, and listener can be exercised headless.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::animator::Transition;
use crate::geometry::{Point, TileDomId};
use crate::tile::Tile;

/// Operations the engine needs from the rendering layer.
pub trait Renderer {
    /// Whether the tile container exists.
    fn has_canvas(&self) -> bool;

    /// Whether an element with this id is currently rendered.
    fn contains_tile(&self, dom_id: &TileDomId) -> bool;

    /// Create the tile element, place it, wire its drag input, and append it
    /// to the container.
    fn create_tile(&mut self, tile: &Tile);

    /// Remove the tile element and any input wiring attached to it.
    fn remove_tile(&mut self, dom_id: &TileDomId);

    /// Move the tile immediately.
    fn set_position(&mut self, dom_id: &TileDomId, position: Point);

    /// Move the tile using `transition`.
    fn animate_position(&mut self, dom_id: &TileDomId, position: Point, transition: &Transition);

    /// Drop any transition so the next position change is instantaneous.
    fn clear_transition(&mut self, dom_id: &TileDomId);

    /// Show the participant count. A missing counter element is a no-op.
    fn set_counter(&mut self, count: u32);
}

/// A tile as held by [`MemoryRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedTile {
    pub dom_id: TileDomId,
    pub text: String,
    pub position: Point,
    pub transition: Option<Transition>,
}

/// In-memory [`Renderer`]. Tiles keep container (append) order.
#[derive(Debug, Clone)]
pub struct MemoryRenderer {
    canvas: bool,
    tiles: Vec<RenderedTile>,
    counter: Option<String>,
    counter_writes: usize,
    created: usize,
    removed: usize,
}

impl Default for MemoryRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRenderer {
    /// A renderer with a container and a counter element.
    #[must_use]
    pub fn new() -> Self {
        Self { canvas: true, tiles: Vec::new(), counter: Some(String::new()), counter_writes: 0, created: 0, removed: 0 }
    }

    /// A renderer whose page has no tile container.
    #[must_use]
    pub fn without_canvas() -> Self {
        Self { canvas: false, ..Self::new() }
    }

    /// A renderer whose page has no counter element.
    #[must_use]
    pub fn without_counter() -> Self {
        Self { counter: None, ..Self::new() }
    }

    #[must_use]
    pub fn tile(&self, dom_id: &TileDomId) -> Option<&RenderedTile> {
        self.tiles.iter().find(|t| &t.dom_id == dom_id)
    }

    #[must_use]
    pub fn tiles(&self) -> &[RenderedTile] {
        &self.tiles
    }

    /// Rendered ids in container order.
    #[must_use]
    pub fn dom_ids(&self) -> Vec<TileDomId> {
        self.tiles.iter().map(|t| t.dom_id.clone()).collect()
    }

    /// Current counter text, or `None` when the page has no counter.
    #[must_use]
    pub fn counter_text(&self) -> Option<&str> {
        self.counter.as_deref()
    }

    /// Number of writes made to the counter element.
    #[must_use]
    pub fn counter_writes(&self) -> usize {
        self.counter_writes
    }

    /// Number of tile elements created over the renderer's lifetime.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created
    }

    /// Number of tile elements removed over the renderer's lifetime.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.removed
    }

    fn tile_mut(&mut self, dom_id: &TileDomId) -> Option<&mut RenderedTile> {
        self.tiles.iter_mut().find(|t| &t.dom_id == dom_id)
    }
}

impl Renderer for MemoryRenderer {
    fn has_canvas(&self) -> bool {
        self.canvas
    }

    fn contains_tile(&self, dom_id: &TileDomId) -> bool {
        self.tile(dom_id).is_some()
    }

    fn create_tile(&mut self, tile: &Tile) {
        if !self.canvas {
            return;
        }
        self.tiles.push(RenderedTile {
            dom_id: tile.dom_id(),
            text: tile.text.clone(),
            position: tile.position,
            transition: None,
        });
        self.created += 1;
    }

    fn remove_tile(&mut self, dom_id: &TileDomId) {
        let before = self.tiles.len();
        self.tiles.retain(|t| &t.dom_id != dom_id);
        self.removed += before - self.tiles.len();
    }

    fn set_position(&mut self, dom_id: &TileDomId, position: Point) {
        if let Some(tile) = self.tile_mut(dom_id) {
            tile.position = position;
        }
    }

    fn animate_position(&mut self, dom_id: &TileDomId, position: Point, transition: &Transition) {
        if let Some(tile) = self.tile_mut(dom_id) {
            tile.transition = Some(*transition);
            tile.position = position;
        }
    }

    fn clear_transition(&mut self, dom_id: &TileDomId) {
        if let Some(tile) = self.tile_mut(dom_id) {
            tile.transition = None;
        }
    }

    fn set_counter(&mut self, count: u32) {
        if let Some(text) = self.counter.as_mut() {
            *text = count.to_string();
            self.counter_writes += 1;
        }
    }
}
