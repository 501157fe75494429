//! Contract-based validation for moves.
//!
//! Contracts formalize Hoare-style reasoning: {P} action {Q}.

use crate::action::Move;
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::{BoardError, MatchEngine, MoveError};
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
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not reached a terminal status.
pub struct GameIsLive;

impl GameIsLive {
    /// Rejects moves on a won or drawn game.
    pub fn check(engine: &MatchEngine) -> Result<(), MoveError> {
        let status = engine.status();
        if status.is_terminal() {
            Err(MoveError::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell exists and is empty.
pub struct CellIsFree;

impl CellIsFree {
    /// Rejects out-of-range and occupied targets.
    pub fn check(mov: &Move, engine: &MatchEngine) -> Result<(), MoveError> {
        let cell = engine.board().get_cell(mov.x, mov.y)?;
        if cell.is_empty() {
            Ok(())
        } else {
            Err(BoardError::CellOccupied { x: mov.x, y: mov.y }.into())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is live
/// - Cell is in range and empty
///
/// Postconditions:
/// - Exactly one cell went from empty to marked; no mark changed
/// - All match invariants hold
pub struct MoveContract;

impl Contract<MatchEngine, Move> for MoveContract {
    fn pre(engine: &MatchEngine, action: &Move) -> Result<(), MoveError> {
        GameIsLive::check(engine)?;
        CellIsFree::check(action, engine)
    }

    #[instrument(skip_all)]
    fn post(before: &MatchEngine, after: &MatchEngine) -> Result<(), MoveError> {
        let changed: Vec<usize> = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(index, _)| index)
            .collect();

        let write_once = match changed.as_slice() {
            [index] => before.board().get(*index).is_some_and(|cell| cell.is_empty()),
            _ => false,
        };
        if !write_once {
            warn!(?changed, "Board write-once violated");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected exactly one new mark, cells changed: {:?}",
                changed
            )));
        }

        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
