//! Valid-move invariant: the mask in every snapshot matches the board.

use super::Invariant;
use crate::MatchEngine;

/// Invariant: `valid_moves[i]` iff cell `i` is empty and the game is on.
pub struct ValidMovesInvariant;

impl Invariant<MatchEngine> for ValidMovesInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        let state = engine.current_state();
        let live = !state.status().is_terminal();
        state
            .valid_moves()
            .iter()
            .zip(state.board().cells())
            .all(|(valid, cell)| *valid == (live && cell.is_empty()))
    }

    fn description() -> &'static str {
        "Valid moves are exactly the empty cells of a live game"
    }
}
