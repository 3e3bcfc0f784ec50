//! Word-set reconciliation.
//!
//! [`TileRegistry`] owns the set of tracked tile ids and one
//! [`DragController`] per rendered tile. A word-set event is applied in one
//! synchronous pass: in [`RefreshMode::Replace`] every tracked tile is purged
//! first, then each incoming word clears any stale element with the same id
//! and is rendered fresh.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;
use std::str::FromStr;

use wire::{TileId, Word};

use crate::drag::DragController;
use crate::geometry::TileDomId;
use crate::render::Renderer;
use crate::tile::Tile;

/// How a word-set event reconciles against the rendered tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshMode {
    /// Purge every tracked tile, then rebuild from the incoming set.
    #[default]
    Replace,
    /// Add or refresh the incoming tiles and leave the rest alone.
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown refresh mode {0:?} (expected \"replace\" or \"append\")")]
pub struct ParseRefreshModeError(String);

impl FromStr for RefreshMode {
    type Err = ParseRefreshModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "append" => Ok(Self::Append),
            _ => Err(ParseRefreshModeError(s.to_owned())),
        }
    }
}

/// Tracked tiles and their drag controllers.
#[derive(Debug, Clone, Default)]
pub struct TileRegistry {
    mode: RefreshMode,
    tracked: Vec<TileId>,
    drags: HashMap<TileDomId, DragController>,
}

impl TileRegistry {
    #[must_use]
    pub fn new(mode: RefreshMode) -> Self {
        Self { mode, tracked: Vec::new(), drags: HashMap::new() }
    }

    #[must_use]
    pub fn mode(&self) -> RefreshMode {
        self.mode
    }

    /// Tracked ids in the order they were first rendered.
    #[must_use]
    pub fn tracked(&self) -> &[TileId] {
        &self.tracked
    }

    pub fn drag_mut(&mut self, dom_id: &TileDomId) -> Option<&mut DragController> {
        self.drags.get_mut(dom_id)
    }

    #[must_use]
    pub fn drag(&self, dom_id: &TileDomId) -> Option<&DragController> {
        self.drags.get(dom_id)
    }

    /// Apply an authoritative word set. Does nothing when the page has no
    /// tile container.
    pub fn apply_word_set(&mut self, words: &[Word], renderer: &mut dyn Renderer) {
        if !renderer.has_canvas() {
            log::debug!("word set of {} ignored: no canvas", words.len());
            return;
        }

        if self.mode == RefreshMode::Replace {
            self.purge(renderer);
        }

        for word in words {
            let tile = Tile::from(word);
            let dom_id = tile.dom_id();
            if renderer.contains_tile(&dom_id) {
                renderer.remove_tile(&dom_id);
            }
            renderer.create_tile(&tile);
            self.drags.insert(dom_id.clone(), DragController::new(dom_id));
            if !self.tracked.contains(&tile.id) {
                self.tracked.push(tile.id);
            }
        }
        log::debug!("word set applied: {} tiles tracked", self.tracked.len());
    }

    /// Remove every tracked tile and its drag controller.
    pub fn purge(&mut self, renderer: &mut dyn Renderer) {
        for id in self.tracked.drain(..) {
            let dom_id = TileDomId::from_tile(id);
            if renderer.contains_tile(&dom_id) {
                renderer.remove_tile(&dom_id);
            }
            self.drags.remove(&dom_id);
        }
    }
}
