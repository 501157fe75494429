//! Status consistency invariant: the status is the one the board implies.

use super::Invariant;
use crate::rules::{find_winner, is_full, LINES};
use crate::{Board, Cell, MatchEngine, MatchStatus, Player};

/// Invariant: status agrees with the board.
///
/// `Won(p)` needs a completed line of `p` and none of the opponent's;
/// `Draw` needs a full board with no line; `InProgress` needs neither a
/// line nor a full board.
pub struct StatusConsistentInvariant;

impl Invariant<MatchEngine> for StatusConsistentInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        let board = engine.board();
        match engine.status() {
            MatchStatus::Won(player) => {
                has_line(board, player) && !has_line(board, player.opponent())
            }
            MatchStatus::Draw => is_full(board) && find_winner(board).is_none(),
            MatchStatus::InProgress(_) => !is_full(board) && find_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Status matches the board (win, draw, or open)"
    }
}

fn has_line(board: &Board, player: Player) -> bool {
    LINES.iter().any(|line| {
        line.iter()
            .all(|&index| board.get(index) == Some(Cell::Occupied(player)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(StatusConsistentInvariant::holds(&MatchEngine::new()));
    }

    #[test]
    fn test_unearned_win_violates() {
        let engine = MatchEngine::from_parts(Board::new(), MatchStatus::Won(Player::X));
        assert!(!StatusConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_overlooked_win_violates() {
        let mut board = Board::new();
        board.set_cell(0, 0, Player::X).unwrap();
        board.set_cell(1, 0, Player::X).unwrap();
        board.set_cell(2, 0, Player::X).unwrap();
        board.set_cell(1, 1, Player::O).unwrap();
        board.set_cell(2, 2, Player::O).unwrap();
        let engine = MatchEngine::from_parts(board, MatchStatus::InProgress(Player::O));
        assert!(!StatusConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_both_players_with_lines_violates() {
        let x = Cell::Occupied(Player::X);
        let o = Cell::Occupied(Player::O);
        let e = Cell::Empty;
        let board = Board::from_cells([x, x, x, o, o, o, e, e, e]);
        let engine = MatchEngine::from_parts(board, MatchStatus::Won(Player::X));
        assert!(!StatusConsistentInvariant::holds(&engine));
    }
}
