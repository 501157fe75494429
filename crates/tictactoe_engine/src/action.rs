//! First-class move type.

use serde::{Deserialize, Serialize};

/// A request to mark the cell at `(x, y)`.
///
/// The mark is not part of the move: the engine takes it from the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Column (0-2).
    pub x: usize,
    /// Row (0-2).
    pub y: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
