//! The tile model: one draggable word on the board.

use wire::{TileId, Word};

use crate::geometry::{Point, TileDomId};

/// A word tile as known to the client.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Stable, server-assigned id.
    pub id: TileId,
    /// Display text. Never changes after creation.
    pub text: String,
    /// Top-left offset inside the container.
    pub position: Point,
}

impl Tile {
    #[must_use]
    pub fn dom_id(&self) -> TileDomId {
        TileDomId::from_tile(self.id)
    }
}

impl From<&Word> for Tile {
    #[allow(clippy::cast_precision_loss)]
    fn from(word: &Word) -> Self {
        Self { id: word.id, text: word.word.clone(), position: Point::new(word.x as f64, word.y as f64) }
    }
}
