//! Pure 2048 game logic.
//!
//! Boards, the single-line merge rule, directional moves, random tile
//! spawning, terminal-state detection, and a session that ties them together
//! with one level of undo.
//!
//! # Example
//!
//! ```
//! use strictly_2048::{Direction, Phase, Session};
//!
//! let mut session = Session::seeded(42);
//! let report = session.apply_move(Direction::Left)?;
//! if report.game_over {
//!     assert_eq!(session.phase(), Phase::Over);
//! }
//! let undo = session.undo();
//! assert!(undo.ok);
//! # Ok::<(), strictly_2048::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod direction;
pub mod invariants;
mod moves;
pub mod rules;
mod session;
mod spawn;
mod types;

#[cfg(kani)]
mod verification;

pub use contracts::{Contract, MoveContract, SessionPlaying, SnapshotTaken, TilesAccounted};
pub use direction::{Direction, DirectionParseError, MoveError};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SessionInvariants};
pub use moves::{can_move, legal_moves, shift};
pub use rules::{has_won, is_game_over, merge_line};
pub use session::{MoveReport, Session, UndoReport};
pub use spawn::{FOUR_PROBABILITY, Spawn, new_board, spawn_tile, spawn_tile_reported};
pub use types::{
    Board, BoardError, Line, MAX_TILE, Phase, SIZE, SessionState, WIN_TILE, is_tile_value,
};
