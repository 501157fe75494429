//! Full-board detection for tic-tac-toe.

use crate::Board;
use tracing::instrument;

/// Checks if the board is full (no cell is empty).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}
