//! Phase consistency invariant: `Over` exactly when no moves remain.

use super::Invariant;
use crate::rules::is_game_over;
use crate::types::{Phase, SessionState};

/// Invariant: the phase is `Over` iff the current board has no legal move.
///
/// Checked after moves. Undo and sessions built from an arbitrary board may
/// hold a dead board in `Playing` until the next move re-evaluates it.
pub struct PhaseConsistentInvariant;

impl Invariant<SessionState> for PhaseConsistentInvariant {
    fn holds(state: &SessionState) -> bool {
        (state.phase() == Phase::Over) == is_game_over(state.current())
    }

    fn description() -> &'static str {
        "Phase is Over exactly when no moves remain"
    }
}
