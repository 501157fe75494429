//! Match status and its wire representation.
//!
//! [`MatchStatus`] carries the player only where it means something. On
//! the wire it is an object `{"status": "...", "player": "X"|"O"}` where `player`
//! exists only for `InProgress` and `Won`. The conversion goes through
//! [`StatusRepr`] in both directions and rejects objects whose `player` field
//! disagrees with the variant.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(into = "StatusRepr", try_from = "StatusRepr")]
pub enum MatchStatus {
    /// Game is ongoing; the player is the one to move.
    #[display("InProgress({_0})")]
    InProgress(Player),
    /// Game ended with this player completing a line.
    #[display("Won({_0})")]
    Won(Player),
    /// Board filled with no line completed.
    #[display("Draw")]
    Draw,
}

impl MatchStatus {
    /// Checks whether the status is absorbing (`Won` or `Draw`).
    pub fn is_terminal(self) -> bool {
        !matches!(self, MatchStatus::InProgress(_))
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(self) -> Option<Player> {
        match self {
            MatchStatus::InProgress(player) => Some(player),
            MatchStatus::Won(_) | MatchStatus::Draw => None,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            MatchStatus::Won(player) => Some(player),
            MatchStatus::InProgress(_) | MatchStatus::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum StatusKind {
    InProgress,
    Won,
    Draw,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct StatusRepr {
    status: StatusKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    player: Option<Player>,
}

impl From<MatchStatus> for StatusRepr {
    fn from(status: MatchStatus) -> Self {
        let (status, player) = match status {
            MatchStatus::InProgress(player) => (StatusKind::InProgress, Some(player)),
            MatchStatus::Won(player) => (StatusKind::Won, Some(player)),
            MatchStatus::Draw => (StatusKind::Draw, None),
        };
        Self { status, player }
    }
}

/// A status object whose `player` field does not fit its variant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid status {status:?}: player field {player:?}")]
pub struct StatusReprError {
    status: String,
    player: Option<Player>,
}

impl std::error::Error for StatusReprError {}

impl TryFrom<StatusRepr> for MatchStatus {
    type Error = StatusReprError;

    fn try_from(repr: StatusRepr) -> Result<Self, Self::Error> {
        match (repr.status, repr.player) {
            (StatusKind::InProgress, Some(player)) => Ok(MatchStatus::InProgress(player)),
            (StatusKind::Won, Some(player)) => Ok(MatchStatus::Won(player)),
            (StatusKind::Draw, None) => Ok(MatchStatus::Draw),
            (kind, player) => Err(StatusReprError {
                status: format!("{:?}", kind),
                player,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_in_progress_carries_player() {
        let value = serde_json::to_value(MatchStatus::InProgress(Player::O)).unwrap();
        assert_eq!(value, json!({"status": "InProgress", "player": "O"}));
    }

    #[test]
    fn test_draw_omits_player() {
        let value = serde_json::to_value(MatchStatus::Draw).unwrap();
        assert_eq!(value, json!({"status": "Draw"}));
    }

    #[test]
    fn test_won_parses() {
        let status: MatchStatus =
            serde_json::from_value(json!({"status": "Won", "player": "X"})).unwrap();
        assert_eq!(status, MatchStatus::Won(Player::X));
    }

    #[test]
    fn test_mismatched_player_rejected() {
        let missing = serde_json::from_value::<MatchStatus>(json!({"status": "InProgress"}));
        assert!(missing.is_err());

        let extra =
            serde_json::from_value::<MatchStatus>(json!({"status": "Draw", "player": "O"}));
        assert!(extra.is_err());
    }

    #[test]
    fn test_terminal_classification() {
        assert!(!MatchStatus::InProgress(Player::X).is_terminal());
        assert!(MatchStatus::Won(Player::O).is_terminal());
        assert!(MatchStatus::Draw.is_terminal());
        assert_eq!(MatchStatus::Draw.to_move(), None);
        assert_eq!(MatchStatus::Won(Player::O).winner(), Some(Player::O));
    }
}
