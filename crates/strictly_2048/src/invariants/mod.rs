//! First-class invariants for 2048 sessions.
//!
//! Invariants are logical properties checked after every move in debug
//! builds. Each one is testable on its own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod phase_consistent;
pub mod tile_domain;

pub use phase_consistent::PhaseConsistentInvariant;
pub use tile_domain::TileDomainInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (TileDomainInvariant, PhaseConsistentInvariant);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Direction, Phase, Session, SessionState};

    #[test]
    fn test_invariant_set_holds_for_new_session() {
        let session = Session::seeded(5);
        assert!(SessionInvariants::check_all(session.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = Session::seeded(11);
        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            if session.phase() == Phase::Playing {
                session.apply_move(direction).unwrap();
            }
        }
        assert!(SessionInvariants::check_all(session.state()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        let state = SessionState::new(Board::new());
        assert!(SessionInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let dead =
            Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();

        // Dead board still marked Playing.
        let violations = SessionInvariants::check_all(&SessionState::new(dead)).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(
                <PhaseConsistentInvariant as Invariant<SessionState>>::description()
            )]
        );

        let mut corrupted = dead;
        corrupted.set(0, 0, 6);
        let violations = SessionInvariants::check_all(&SessionState::new(corrupted)).unwrap_err();
        assert_eq!(violations.len(), 2);
    }
}
