//! Error types for board access and move application.

use crate::MatchStatus;

/// Error raised by board addressing and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A coordinate lies outside `0..=2`.
    #[display("Coordinates ({x}, {y}) are out of range (must be 0-2)")]
    OutOfRange {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({x}, {y}) is already occupied")]
    CellOccupied {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error that can occur when applying a move.
///
/// Every variant except [`MoveError::InvariantViolation`] is an invalid move:
/// expected, recoverable, and leaves the engine untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// The target cell is out of range or occupied.
    #[display("{_0}")]
    #[from]
    Board(BoardError),

    /// The game has already reached a terminal status.
    #[display("Game is already over: {_0}")]
    GameOver(MatchStatus),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl MoveError {
    /// Returns true for rejections caused by the caller's input, false for
    /// engine defects.
    pub fn is_invalid_move(&self) -> bool {
        !matches!(self, MoveError::InvariantViolation(_))
    }
}

impl std::error::Error for MoveError {}
