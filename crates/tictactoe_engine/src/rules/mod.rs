//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board (and status). They never mutate and
//! never cache; callers recompute them after every change.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::{compute_valid_moves, ValidMoves};
pub use win::{find_winner, LINES};

use crate::{Board, MatchStatus};

/// Derives the status a board implies.
///
/// A win is checked before a full board, so a filled board that also
/// completes a line is `Won`, never `Draw`.
pub fn derive_status(board: &Board) -> MatchStatus {
    if let Some(winner) = find_winner(board) {
        MatchStatus::Won(winner)
    } else if is_full(board) {
        MatchStatus::Draw
    } else {
        MatchStatus::InProgress(board.to_move())
    }
}
