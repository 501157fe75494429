//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player};
use tracing::instrument;

/// The eight winning lines as linear indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if any line holds three of that player's marks,
/// `None` otherwise. When several lines are complete the first in
/// [`LINES`] order is reported; on a reachable board they all belong to
/// the player who just moved.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| match cells[a] {
        Cell::Occupied(player) if cells[b] == cells[a] && cells[c] == cells[a] => Some(player),
        _ => None,
    })
}
