//! Legal-move mask derived from board and status.

use crate::board::CELL_COUNT;
use crate::{Board, MatchStatus};
use tracing::instrument;

/// One flag per cell, in board index order.
pub type ValidMoves = [bool; CELL_COUNT];

/// Computes which cells currently accept a move.
///
/// All false once the status is terminal; otherwise true exactly where
/// the cell is empty.
#[instrument(skip(board))]
pub fn compute_valid_moves(board: &Board, status: MatchStatus) -> ValidMoves {
    if status.is_terminal() {
        return [false; CELL_COUNT];
    }
    board.cells().map(|cell| cell.is_empty())
}
