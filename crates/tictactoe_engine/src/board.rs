//! 3x3 board addressed by `(x, y)` coordinates.

use crate::{BoardError, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored at linear index `x + 3 * y`. A cell is written once:
/// [`Board::set_cell`] refuses to overwrite a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from cells in index order.
    ///
    /// No reachability check is made here; `MatchEngine::from_board` does that.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Maps coordinates to a linear index.
    pub fn index(x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= SIDE || y >= SIDE {
            return Err(BoardError::OutOfRange { x, y });
        }
        Ok(x + SIDE * y)
    }

    /// Gets the cell at `(x, y)`.
    pub fn get_cell(&self, x: usize, y: usize) -> Result<Cell, BoardError> {
        Ok(self.cells[Self::index(x, y)?])
    }

    /// Writes the player's mark at `(x, y)`.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, x: usize, y: usize, player: Player) -> Result<(), BoardError> {
        let index = Self::index(x, y)?;
        if !self.cells[index].is_empty() {
            return Err(BoardError::CellOccupied { x, y });
        }
        self.cells[index] = Cell::Occupied(player);
        Ok(())
    }

    /// Gets the cell at a linear index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells in index order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Counts the marks of one player.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Counts the marked cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Returns the player whose turn it is by mark parity.
    ///
    /// X moves first, so equal counts mean X is to move.
    pub fn to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let line: Vec<String> = cells.iter().map(ToString::to_string).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
