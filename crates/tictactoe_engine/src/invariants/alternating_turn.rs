//! Alternating turn invariant: X moves first and players alternate.

use super::Invariant;
use crate::{MatchEngine, MatchStatus, Player};

/// Invariant: mark counts reflect strict alternation.
///
/// `|X| - |O|` is 0 or 1, an in-progress status names the player the
/// counts say is to move, and a winner made the last mark.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchEngine> for AlternatingTurnInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        let board = engine.board();
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        match engine.status() {
            MatchStatus::InProgress(player) => player == board.to_move(),
            MatchStatus::Won(winner) => board.to_move() == winner.opponent(),
            MatchStatus::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X first, then O, X, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&MatchEngine::new()));
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut engine = MatchEngine::new();
        for (x, y) in [(1, 1), (0, 0), (2, 2), (0, 2)] {
            engine.apply_move(x, y).unwrap();
            assert!(AlternatingTurnInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_o_ahead_violates() {
        let mut cells = [Cell::Empty; 9];
        cells[4] = Cell::Occupied(Player::O);
        let engine = MatchEngine::from_parts(
            Board::from_cells(cells),
            MatchStatus::InProgress(Player::X),
        );
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let engine = MatchEngine::from_parts(Board::new(), MatchStatus::InProgress(Player::O));
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_winner_moved_last() {
        let x = Cell::Occupied(Player::X);
        let o = Cell::Occupied(Player::O);
        let e = Cell::Empty;

        // X X X / O O _ / _ _ _: X made the fifth mark.
        let x_won = Board::from_cells([x, x, x, o, o, e, e, e, e]);
        let engine = MatchEngine::from_parts(x_won, MatchStatus::Won(Player::X));
        assert!(AlternatingTurnInvariant::holds(&engine));

        // X X X / O O _ / O _ _: O moved after the line was complete.
        let late = Board::from_cells([x, x, x, o, o, e, o, e, e]);
        let engine = MatchEngine::from_parts(late, MatchStatus::Won(Player::X));
        assert!(!AlternatingTurnInvariant::holds(&engine));

        // O O O / X X _ / X X _: X moved after O's line.
        let late = Board::from_cells([o, o, o, x, x, e, x, x, e]);
        let engine = MatchEngine::from_parts(late, MatchStatus::Won(Player::O));
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
