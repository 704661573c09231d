//! Game session orchestration.
//!
//! A [`Session`] owns the current board, a single undo snapshot, the game
//! phase and the random source. Each move runs shift, change detection,
//! spawn and terminal-state checks in that order.

use crate::contracts::{Contract, MoveContract};
use crate::direction::{Direction, MoveError};
use crate::moves::shift;
use crate::rules::{has_won, is_game_over};
use crate::spawn::{Spawn, new_board, spawn_tile_reported};
use crate::types::{Board, Phase, SessionState};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Outcome of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Board after the move (and spawn, if any).
    pub board: Board,
    /// Whether the move changed the board.
    pub changed: bool,
    /// Whether no moves remain; the session is now `Over`.
    pub game_over: bool,
    /// Whether any tile has reached the winning value.
    pub won: bool,
    /// True only on the move that first reached the winning value.
    pub first_win: bool,
    /// Tile written after a changing move.
    pub spawned: Option<Spawn>,
}

/// Outcome of an undo request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoReport {
    /// Board after the request.
    pub board: Board,
    /// False when there was nothing to undo.
    pub ok: bool,
}

/// A single-player 2048 session.
///
/// The random source is a type parameter so tests and replays can inject a
/// seeded generator. Every transition takes `&mut self`, so one move is
/// processed at a time.
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    state: SessionState,
    rng: R,
}

impl Session<StdRng> {
    /// Creates a session seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates a deterministic session.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Session<R> {
    /// Creates a session with a fresh two-tile board drawn from `rng`.
    #[instrument(skip(rng))]
    pub fn with_rng(mut rng: R) -> Self {
        let board = new_board(&mut rng);
        info!(%board, "New session");
        Self {
            state: SessionState::new(board),
            rng,
        }
    }

    /// Creates a session on a given board, in `Playing`.
    ///
    /// The phase is not evaluated until the first move, so a board with no
    /// moves left still accepts exactly one move, which then ends the game.
    #[instrument(skip(rng))]
    pub fn from_board(board: Board, rng: R) -> Self {
        Self {
            state: SessionState::new(board),
            rng,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        self.state.current()
    }

    /// Returns the full session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns true when an undo snapshot is available.
    pub fn can_undo(&self) -> bool {
        self.state.previous().is_some()
    }

    /// Applies a move.
    ///
    /// The pre-move board always becomes the undo snapshot, even when the
    /// move changes nothing. A changing move spawns one tile.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] when the session is `Over`; state is
    /// left untouched. In debug builds, returns
    /// [`MoveError::InvariantViolation`] if a postcondition fails, also
    /// leaving state untouched.
    #[instrument(skip(self), fields(phase = %self.state.phase()))]
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveReport, MoveError> {
        if let Err(e) = MoveContract::pre(&self.state, &direction) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let before = self.state.clone();
        let mut next = before.clone();
        next.set_previous(Some(*before.current()));

        let candidate = shift(*before.current(), direction);
        let changed = candidate != *before.current();

        let spawned = if changed {
            let (board, spawned) = spawn_tile_reported(candidate, &mut self.rng);
            next.set_current(board);
            spawned
        } else {
            debug!("Board unchanged; no tile spawned");
            None
        };

        let game_over = is_game_over(next.current());
        if game_over {
            next.set_phase(Phase::Over);
            info!(max_tile = next.current().max_tile(), "No moves remain; game over");
        }

        let won = has_won(next.current());
        let first_win = won && !next.win_announced();
        if first_win {
            next.set_win_announced(true);
            info!(max_tile = next.current().max_tile(), "Winning tile reached");
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &next)?;

        self.state = next;
        debug!(changed, game_over, won, "Move applied");

        Ok(MoveReport {
            board: *self.state.current(),
            changed,
            game_over,
            won,
            first_win,
            spawned,
        })
    }

    /// Restores the snapshot taken before the last move.
    ///
    /// The snapshot is single-use: a second undo without an intervening
    /// move reports `ok = false` and changes nothing.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> UndoReport {
        match self.state.take_previous() {
            Some(previous) => {
                self.state.set_current(previous);
                self.state.set_phase(Phase::Playing);
                info!("Undid last move");
                UndoReport {
                    board: previous,
                    ok: true,
                }
            }
            None => {
                info!("Nothing to undo");
                UndoReport {
                    board: *self.state.current(),
                    ok: false,
                }
            }
        }
    }

    /// Starts over with a fresh board, dropping the snapshot.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Board {
        let board = new_board(&mut self.rng);
        self.state = SessionState::new(board);
        info!(%board, "Session reset");
        board
    }
}
