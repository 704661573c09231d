//! Win detection.

use crate::types::{Board, WIN_TILE};
use tracing::instrument;

/// Checks if any tile has reached [`WIN_TILE`].
///
/// Pure predicate; reaching the tile does not end the game.
#[instrument]
pub fn has_won(board: &Board) -> bool {
    board.max_tile() >= WIN_TILE
}
