//! First-class invariants for a match.
//!
//! Invariants are logical properties that must hold for every reachable
//! engine state. The engine checks them after each move; tests check them
//! directly.

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
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
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
        collect(violations)
    }
}

pub mod alternating_turn;
pub mod status_consistent;
pub mod valid_moves;

pub use alternating_turn::AlternatingTurnInvariant;
pub use status_consistent::StatusConsistentInvariant;
pub use valid_moves::ValidMovesInvariant;

/// All match invariants as a composable set.
pub type MatchInvariants = (
    AlternatingTurnInvariant,
    StatusConsistentInvariant,
    ValidMovesInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, MatchEngine, MatchStatus, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(MatchInvariants::check_all(&MatchEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = MatchEngine::new();
        engine.apply_move(0, 0).unwrap();
        engine.apply_move(1, 1).unwrap();
        engine.apply_move(2, 0).unwrap();
        assert!(MatchInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Two O marks and no X, claimed as X to move in a drawn game.
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Occupied(Player::O);
        cells[1] = Cell::Occupied(Player::O);
        let engine = MatchEngine::from_parts(Board::from_cells(cells), MatchStatus::Draw);

        let violations = MatchInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (AlternatingTurnInvariant, StatusConsistentInvariant);
        assert!(TwoInvariants::check_all(&MatchEngine::new()).is_ok());
    }
}
