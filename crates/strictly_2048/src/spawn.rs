//! Random tile spawning.
//!
//! Randomness is injected as any [`rand::Rng`], so a seeded
//! [`rand::rngs::StdRng`] replays a game exactly.

use crate::types::Board;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Probability that a spawned tile is a 4 rather than a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// A tile written by the spawner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Spawn {
    /// Row of the new tile.
    pub row: usize,
    /// Column of the new tile.
    pub col: usize,
    /// Value of the new tile (2 or 4).
    pub value: u32,
}

/// Writes a 2 (p = 0.9) or 4 (p = 0.1) into a uniformly chosen empty cell.
///
/// Returns the new board and the spawned tile. A full board comes back
/// unchanged with `None`.
#[instrument(skip(rng))]
pub fn spawn_tile_reported<R: Rng + ?Sized>(board: Board, rng: &mut R) -> (Board, Option<Spawn>) {
    let empty = board.empty_cells();
    if empty.is_empty() {
        debug!("Board is full; nothing spawned");
        return (board, None);
    }

    let (row, col) = empty[rng.random_range(0..empty.len())];
    let value = if rng.random_bool(FOUR_PROBABILITY) { 4 } else { 2 };

    let mut next = board;
    next.set(row, col, value);
    debug!(row, col, value, "Spawned tile");

    (next, Some(Spawn { row, col, value }))
}

/// Like [`spawn_tile_reported`], returning only the board.
pub fn spawn_tile<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Board {
    spawn_tile_reported(board, rng).0
}

/// Creates a starting board: empty, then two spawned tiles.
#[instrument(skip(rng))]
pub fn new_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let board = spawn_tile(Board::new(), rng);
    spawn_tile(board, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_board_has_two_tiles() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let board = new_board(&mut rng);
            assert_eq!(board.count_tiles(), 2);
            assert!(board.rows().iter().flatten().all(|v| [0, 2, 4].contains(v)));
        }
    }

    #[test]
    fn test_spawn_fills_exactly_one_empty_cell() {
        let mut rng = StdRng::seed_from_u64(42);
        let board =
            Board::from_rows([[2, 4, 8, 16], [0, 0, 0, 0], [32, 0, 64, 0], [0; 4]]).unwrap();
        for _ in 0..200 {
            let (after, spawn) = spawn_tile_reported(board, &mut rng);
            let spawn = spawn.expect("board has room");
            assert_eq!(board.get(spawn.row, spawn.col), Some(0));
            assert!(spawn.value == 2 || spawn.value == 4);
            assert_eq!(after.get(spawn.row, spawn.col), Some(spawn.value));
            assert_eq!(after.count_tiles(), board.count_tiles() + 1);
            assert_eq!(after.tile_sum(), board.tile_sum() + u64::from(spawn.value));
        }
    }

    #[test]
    fn test_full_board_unchanged() {
        let mut rng = StdRng::seed_from_u64(1);
        let full =
            Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();
        assert_eq!(spawn_tile_reported(full, &mut rng), (full, None));
    }

    #[test]
    fn test_four_frequency_near_one_tenth() {
        let mut rng = StdRng::seed_from_u64(2048);
        let trials = 20_000;
        let fours = (0..trials)
            .filter_map(|_| spawn_tile_reported(Board::new(), &mut rng).1)
            .filter(|s| s.value == 4)
            .count();
        let ratio = fours as f64 / trials as f64;
        assert!((0.08..0.12).contains(&ratio), "ratio was {}", ratio);
    }

    #[test]
    fn test_every_empty_cell_reachable() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2_000 {
            if let (_, Some(spawn)) = spawn_tile_reported(Board::new(), &mut rng) {
                seen.insert((spawn.row, spawn.col));
            }
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_seeded_spawns_replay() {
        let a = new_board(&mut StdRng::seed_from_u64(99));
        let b = new_board(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
