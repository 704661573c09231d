//! Contract-based validation for 2048 moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}

use crate::direction::{Direction, MoveError};
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::types::{Phase, SessionState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the session accepts moves only while `Playing`.
pub struct SessionPlaying;

impl SessionPlaying {
    /// Rejects moves on a finished game.
    #[instrument(skip(state))]
    pub fn check(state: &SessionState) -> Result<(), MoveError> {
        match state.phase() {
            Phase::Playing => Ok(()),
            Phase::Over => Err(MoveError::GameOver),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: the pre-move board was saved as the undo snapshot.
///
/// Holds for no-op moves too; the snapshot is taken unconditionally.
pub struct SnapshotTaken;

impl SnapshotTaken {
    /// Checks the snapshot slot after a move.
    #[instrument(skip(before, after))]
    pub fn holds(before: &SessionState, after: &SessionState) -> bool {
        let valid = after.previous() == Some(before.current());
        if !valid {
            warn!("Undo snapshot does not match the pre-move board");
        }
        valid
    }
}

/// Postcondition: tile sum grows only by the spawned tile.
///
/// Sliding and merging preserve the sum. A move that changes the board
/// always leaves an empty cell, so it adds exactly one 2 or 4; a no-op
/// adds nothing.
pub struct TilesAccounted;

impl TilesAccounted {
    /// Checks the tile-sum delta between two states.
    #[instrument(skip(before, after))]
    pub fn holds(before: &SessionState, after: &SessionState) -> bool {
        let unchanged = after.current() == before.current();
        let added = after
            .current()
            .tile_sum()
            .checked_sub(before.current().tile_sum());

        let valid = matches!((unchanged, added), (true, Some(0)) | (false, Some(2 | 4)));
        if !valid {
            warn!(unchanged, ?added, "Tile sum accounting violated");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Session is `Playing`
///
/// Postconditions:
/// - Session invariants hold
/// - Undo snapshot equals the pre-move board
/// - Tile sum grew by exactly the spawned tile
pub struct MoveContract;

impl Contract<SessionState, Direction> for MoveContract {
    fn pre(state: &SessionState, _action: &Direction) -> Result<(), MoveError> {
        SessionPlaying::check(state)
    }

    fn post(before: &SessionState, after: &SessionState) -> Result<(), MoveError> {
        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        if !SnapshotTaken::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: undo snapshot not taken".to_string(),
            ));
        }

        if !TilesAccounted::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: tile sum changed by more than one spawn".to_string(),
            ));
        }

        Ok(())
    }
}
