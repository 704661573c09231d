//! Core domain types for 2048.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square board.
pub const SIZE: usize = 4;

/// Tile value that wins the game.
pub const WIN_TILE: u32 = 2048;

/// Largest tile accepted by [`Board::from_rows`].
///
/// 2^17 is the largest tile reachable on a 4x4 board, and capping input here
/// keeps every later merge well inside `u32`.
pub const MAX_TILE: u32 = 1 << 17;

/// One row or column of the board, ordered in the direction of travel.
pub type Line = [u32; SIZE];

/// Returns true for values a cell may hold: 0 (empty) or a power of two >= 2.
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Error constructing a board from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// A cell held something other than 0 or a power of two in range.
    #[display("Invalid tile {} at row {}, column {}", value, row, col)]
    InvalidTile {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u32,
    },
}

/// 4x4 2048 board.
///
/// `Board` is a small `Copy` value. Every transform in this crate returns a
/// new board instead of mutating one in place, so comparing the board before
/// and after a move is plain structural equality.
///
/// Serializes as a plain array of rows. Deserializing goes through
/// [`Board::from_rows`], so a payload cannot smuggle in values outside the
/// tile domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "[Line; SIZE]", into = "[Line; SIZE]")]
pub struct Board {
    /// Cells in row-major order.
    cells: [Line; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// Builds a board from rows, validating every cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidTile`] for a value that is neither 0 nor a
    /// power of two between 2 and [`MAX_TILE`].
    pub fn from_rows(rows: [Line; SIZE]) -> Result<Self, BoardError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_tile_value(value) || value > MAX_TILE {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Wraps rows produced by this crate's own transforms.
    pub(crate) fn from_cells(cells: [Line; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the value at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|line| line.get(col)).copied()
    }

    /// Writes a value. Callers guarantee the coordinates are in bounds.
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Line; SIZE] {
        &self.cells
    }

    /// Returns the transposed board (cell `[i][j]` moves to `[j][i]`).
    pub fn transpose(&self) -> Self {
        let mut cells = [[0; SIZE]; SIZE];
        for (i, line) in self.cells.iter().enumerate() {
            for (j, &value) in line.iter().enumerate() {
                cells[j][i] = value;
            }
        }
        Self { cells }
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .filter(|(_, value)| **value == 0)
                    .map(move |(col, _)| (row, col))
            })
            .collect()
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|v| **v == 0).count()
    }

    /// Number of occupied cells.
    pub fn count_tiles(&self) -> usize {
        SIZE * SIZE - self.count_empty()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Largest tile on the board (0 for an empty board).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }
}

impl TryFrom<[Line; SIZE]> for Board {
    type Error = BoardError;

    fn try_from(rows: [Line; SIZE]) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Board> for [Line; SIZE] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &value) in line.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{:>6}", value)?;
                }
            }
        }
        Ok(())
    }
}

/// Phase of a game session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Phase {
    /// Moves are accepted.
    Playing,
    /// No moves remain. Only undo and reset are accepted.
    Over,
}

/// Complete session state, without the random source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The board being played.
    current: Board,
    /// Single-slot undo snapshot.
    previous: Option<Board>,
    /// Game phase.
    phase: Phase,
    /// Whether the win has already been reported.
    win_announced: bool,
}

impl SessionState {
    /// Creates a state in `Playing` with no undo snapshot.
    pub fn new(board: Board) -> Self {
        Self {
            current: board,
            previous: None,
            phase: Phase::Playing,
            win_announced: false,
        }
    }

    /// Returns the current board.
    pub fn current(&self) -> &Board {
        &self.current
    }

    /// Returns the undo snapshot, if any.
    pub fn previous(&self) -> Option<&Board> {
        self.previous.as_ref()
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the winning tile has been reported.
    pub fn win_announced(&self) -> bool {
        self.win_announced
    }

    pub(crate) fn set_current(&mut self, board: Board) {
        self.current = board;
    }

    pub(crate) fn set_previous(&mut self, board: Option<Board>) {
        self.previous = board;
    }

    pub(crate) fn take_previous(&mut self) -> Option<Board> {
        self.previous.take()
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_win_announced(&mut self, announced: bool) {
        self.win_announced = announced;
    }
}
