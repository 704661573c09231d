//! Strictly 2048 - terminal driver for the 2048 rules engine
//!
//! Re-exports the pure game logic from `strictly_2048` alongside the
//! driver pieces used by the `strictly_2048` binary.
//!
//! # Architecture
//!
//! - **Engine**: boards, merges, moves, spawning, sessions (`strictly_2048`)
//! - **Driver**: interactive play and seeded replay over text I/O
//! - **Config**: optional TOML file plus CLI overrides
//!
//! # Example
//!
//! ```
//! use strictly_2048_cli::{parse_moves, replay};
//!
//! let moves = parse_moves("left, up, right, down")?;
//! let summary = replay(7, &moves)?;
//! assert_eq!(summary.requested, 4);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod replay;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, DriverConfig};

// Crate-level exports - Driver
pub use driver::{Input, PlaySummary, play};
pub use replay::{ReplaySummary, parse_moves, replay};

// Crate-level exports - Game engine
pub use strictly_2048::{
    Board, BoardError, Direction, DirectionParseError, MoveError, MoveReport, Phase, SIZE,
    Session, SessionState, Spawn, UndoReport, WIN_TILE, can_move, has_won, is_game_over,
    legal_moves, merge_line, new_board, shift, spawn_tile, spawn_tile_reported,
};
