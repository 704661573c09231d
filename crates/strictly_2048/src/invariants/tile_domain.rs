//! Tile domain invariant: every cell is empty or a power of two.

use super::Invariant;
use crate::types::{Board, SessionState, is_tile_value};

fn board_in_domain(board: &Board) -> bool {
    board.rows().iter().flatten().all(|&v| is_tile_value(v))
}

/// Invariant: every cell of the current board and the undo snapshot is 0
/// or a power of two >= 2.
///
/// Merging two equal powers of two yields a power of two, so no move can
/// leave the domain.
pub struct TileDomainInvariant;

impl Invariant<SessionState> for TileDomainInvariant {
    fn holds(state: &SessionState) -> bool {
        board_in_domain(state.current()) && state.previous().is_none_or(board_in_domain)
    }

    fn description() -> &'static str {
        "Every cell is empty or a power of two"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_board_holds() {
        let board = Board::from_rows([[2, 4, 8, 0], [0; 4], [0; 4], [0, 0, 0, 2048]]).unwrap();
        assert!(TileDomainInvariant::holds(&SessionState::new(board)));
    }

    #[test]
    fn test_corrupted_cell_violates() {
        let mut board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        board.set(2, 2, 6);
        assert!(!TileDomainInvariant::holds(&SessionState::new(board)));
    }

    #[test]
    fn test_corrupted_snapshot_violates() {
        let board = Board::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
        let mut bad = board;
        bad.set(0, 1, 3);
        let mut state = SessionState::new(board);
        state.set_previous(Some(bad));
        assert!(!TileDomainInvariant::holds(&state));
    }
}
