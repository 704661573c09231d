//! Directional moves.
//!
//! Left is the only primitive. Right reverses each row around the merge,
//! and Up/Down run Left/Right on the transposed board.

use crate::direction::Direction;
use crate::rules::merge_line;
use crate::types::{Board, Line};
use tracing::instrument;

fn reversed(mut line: Line) -> Line {
    line.reverse();
    line
}

fn shift_rows(board: Board, toward_end: bool) -> Board {
    let mut rows = *board.rows();
    for row in rows.iter_mut() {
        *row = if toward_end {
            reversed(merge_line(reversed(*row)))
        } else {
            merge_line(*row)
        };
    }
    Board::from_cells(rows)
}

/// Returns the board after sliding and merging every tile in `direction`.
///
/// No tile is spawned. A result equal to the input means the move is a
/// no-op.
#[instrument]
pub fn shift(board: Board, direction: Direction) -> Board {
    match direction {
        Direction::Left => shift_rows(board, false),
        Direction::Right => shift_rows(board, true),
        Direction::Up => shift_rows(board.transpose(), false).transpose(),
        Direction::Down => shift_rows(board.transpose(), true).transpose(),
    }
}

/// Checks if moving in `direction` changes the board.
#[instrument]
pub fn can_move(board: Board, direction: Direction) -> bool {
    shift(board, direction) != board
}

/// Directions that change the board.
#[instrument]
pub fn legal_moves(board: Board) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|&d| can_move(board, d))
        .collect()
}
