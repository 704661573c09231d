//! First-class action types for 2048.
//!
//! A move is just a direction. Directions are parsed from the short tokens a
//! terminal player types as well as from their full names.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Direction in which every tile slides.
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
pub enum Direction {
    /// Slide toward column 0.
    Left,
    /// Slide toward the last column.
    Right,
    /// Slide toward row 0.
    Up,
    /// Slide toward the last row.
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parses a direction token.
    ///
    /// Accepts full names, vi keys (`h j k l`) and `w a s d`,
    /// case-insensitively.
    #[instrument]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "left" | "h" | "a" => Some(Direction::Left),
            "right" | "l" | "d" => Some(Direction::Right),
            "up" | "k" | "w" => Some(Direction::Up),
            "down" | "j" | "s" => Some(Direction::Down),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| DirectionParseError(s.trim().to_string()))
    }
}

/// Unknown direction token.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unknown direction '{}' (expected left/right/up/down, h/j/k/l or w/a/s/d)", _0)]
pub struct DirectionParseError(pub String);

impl std::error::Error for DirectionParseError {}

/// Error that can occur when applying a move to a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is over; only undo and reset are accepted.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
