//! Game rules for 2048.
//!
//! Pure functions over boards and lines. The line merge is the only place
//! merge semantics live; every direction reduces to it.

pub mod merge;
pub mod over;
pub mod win;

pub use merge::merge_line;
pub use over::{has_adjacent_pair, is_game_over};
pub use win::has_won;
