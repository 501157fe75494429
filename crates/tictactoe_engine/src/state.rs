//! Read-only snapshot of a match.

use crate::rules::{compute_valid_moves, ValidMoves};
use crate::{Board, MatchStatus};
use serde::{Deserialize, Serialize};

/// Snapshot returned by every engine read and move.
///
/// `valid_moves` is derived from `board` and `status` when the snapshot is
/// built; the engine never stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    valid_moves: ValidMoves,
    status: MatchStatus,
}

impl GameState {
    /// Builds a snapshot from board and status.
    pub fn new(board: Board, status: MatchStatus) -> Self {
        Self {
            board,
            valid_moves: compute_valid_moves(&board, status),
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the legal-move mask.
    pub fn valid_moves(&self) -> &ValidMoves {
        &self.valid_moves
    }

    /// Returns the match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }
}
