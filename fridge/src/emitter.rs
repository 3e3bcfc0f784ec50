//! Move intent emission.
//!
//! A completed local drag becomes one `move` event carrying the tile's
//! numeric id, the client's protocol version, and the final whole-pixel
//! position. Publication is fire-and-forget. Remote-origin moves never pass
//! through here.

#[cfg(test)]
#[path = "emitter_test.rs"]
mod emitter_test;

use wire::{ClientEvent, MoveIntent, ProtocolVersion, TileId};

use crate::geometry::{TileDomId, TileIdError};
use crate::session::Session;

/// Build a move intent for a tile.
fn move_intent(id: TileId, v: ProtocolVersion, x: i64, y: i64) -> MoveIntent {
    MoveIntent { id, v, x, y }
}

/// Publish the final position of a dragged tile.
///
/// # Errors
///
/// Returns [`TileIdError`] when `dom_id` does not carry a tile id; nothing is
/// sent in that case.
pub fn send_move(session: &Session, dom_id: &TileDomId, x: i64, y: i64) -> Result<MoveIntent, TileIdError> {
    let intent = move_intent(dom_id.tile_id()?, session.protocol_version(), x, y);
    session.send(ClientEvent::Move(intent));
    Ok(intent)
}
