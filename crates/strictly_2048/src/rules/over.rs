//! No-moves-left detection.

use crate::types::{Board, SIZE};
use tracing::instrument;

/// Checks if any two orthogonal neighbors hold the same tile.
///
/// Empty cells are compared like tiles, so two adjacent empties count as a
/// pair. Callers that care only about tiles check [`Board::is_full`] first.
#[instrument]
pub fn has_adjacent_pair(board: &Board) -> bool {
    let rows = board.rows();
    for row in 0..SIZE {
        for col in 0..SIZE {
            let value = rows[row][col];
            // Right and down neighbors cover every unordered pair exactly once.
            if col + 1 < SIZE && rows[row][col + 1] == value {
                return true;
            }
            if row + 1 < SIZE && rows[row + 1][col] == value {
                return true;
            }
        }
    }
    false
}

/// Checks if no legal move remains.
///
/// True iff the board is full and no two neighbors are equal.
#[instrument]
pub fn is_game_over(board: &Board) -> bool {
    board.is_full() && !has_adjacent_pair(board)
}
