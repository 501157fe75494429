//! Match engine: the authoritative state machine for one game.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::rules::derive_status;
use crate::{Board, GameState, MatchStatus, MoveError, Player};
use tracing::{debug, error, info, instrument, warn};

/// Tic-tac-toe match engine.
///
/// Owns a board and a status. The status starts at `InProgress(X)` and only
/// [`MatchEngine::apply_move`] changes either; `Won` and `Draw` are
/// absorbing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEngine {
    board: Board,
    status: MatchStatus,
}

impl MatchEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: MatchStatus::InProgress(Player::X),
        }
    }

    /// Rebuilds an engine from an existing board.
    ///
    /// The status is derived from the board. Boards that cannot arise from
    /// alternating play starting with X are rejected.
    #[instrument(skip(board))]
    pub fn from_board(board: Board) -> Result<Self, MoveError> {
        let engine = Self {
            board,
            status: derive_status(&board),
        };
        MatchInvariants::check_all(&engine).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected unreachable board");
            MoveError::InvariantViolation(descriptions)
        })?;
        Ok(engine)
    }

    /// Builds an engine without any consistency check.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, status: MatchStatus) -> Self {
        Self { board, status }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the match status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Marks `(x, y)` for the player to move and advances the status.
    ///
    /// Fails without touching the engine if the game is over, the
    /// coordinates are out of range, or the cell is occupied.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn apply_move(&mut self, x: usize, y: usize) -> Result<GameState, MoveError> {
        let mov = Move::new(x, y);
        if let Err(e) = MoveContract::pre(self, &mov) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }
        let player = self.status.to_move().ok_or(MoveError::GameOver(self.status))?;

        let before = self.clone();
        self.board.set_cell(x, y, player)?;
        self.status = derive_status(&self.board);

        if let Err(e) = MoveContract::post(&before, self) {
            error!(error = %e, board = %self.board, "Engine invariant violated, reverting move");
            *self = before;
            return Err(e);
        }

        info!(%player, %mov, status = %self.status, "Move applied");
        Ok(self.current_state())
    }

    /// Returns a fresh snapshot of the board, legal moves and status.
    pub fn current_state(&self) -> GameState {
        GameState::new(self.board, self.status)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
