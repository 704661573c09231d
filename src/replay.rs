//! Deterministic replay of a move script.

use serde::{Deserialize, Serialize};
use std::fmt;
use strictly_2048::{Board, Direction, DirectionParseError, MoveError, Phase, Session};
use tracing::{debug, info, instrument};

/// Parses a move script: tokens separated by whitespace or commas.
pub fn parse_moves(script: &str) -> Result<Vec<Direction>, DirectionParseError> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Result of replaying a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaySummary {
    /// Seed the session was created with.
    pub seed: u64,
    /// Moves in the script.
    pub requested: usize,
    /// Moves accepted by the session.
    pub applied: usize,
    /// Accepted moves that changed the board.
    pub changed: usize,
    /// Whether the game ended before the script did.
    pub stopped_early: bool,
    /// Final phase.
    pub phase: Phase,
    /// Whether the final board holds a winning tile.
    pub won: bool,
    /// Final board.
    pub board: Board,
}

impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(
            f,
            "seed {}: {}/{} moves applied, {} changed the board, max tile {}, {}",
            self.seed,
            self.applied,
            self.requested,
            self.changed,
            self.board.max_tile(),
            self.phase
        )?;
        if self.won {
            write!(f, ", won")?;
        }
        if self.stopped_early {
            write!(f, " (game ended before the script)")?;
        }
        Ok(())
    }
}

/// Replays `moves` on a session seeded with `seed`.
///
/// Stops at the first move rejected because the game is over.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(seed: u64, moves: &[Direction]) -> Result<ReplaySummary, MoveError> {
    let mut session = Session::seeded(seed);
    let mut applied = 0;
    let mut changed = 0;
    let mut stopped_early = false;

    for &direction in moves {
        match session.apply_move(direction) {
            Ok(report) => {
                applied += 1;
                if report.changed {
                    changed += 1;
                }
            }
            Err(MoveError::GameOver) => {
                debug!(applied, "Game over before end of script");
                stopped_early = true;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    let board = *session.board();
    info!(applied, changed, max_tile = board.max_tile(), "Replay finished");

    Ok(ReplaySummary {
        seed,
        requested: moves.len(),
        applied,
        changed,
        stopped_early,
        phase: session.phase(),
        won: strictly_2048::has_won(&board),
        board,
    })
}
