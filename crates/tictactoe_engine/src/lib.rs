//! Pure tic-tac-toe match engine.
//!
//! The engine owns one game's board and status, enforces turn order,
//! computes the legal-move mask, and detects wins and draws. It performs
//! no I/O and has no notion of time; hosting many games concurrently is
//! the caller's job.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{MatchEngine, MatchStatus, Player};
//!
//! let mut engine = MatchEngine::new();
//! let state = engine.apply_move(0, 0).unwrap();
//! assert_eq!(state.status(), MatchStatus::InProgress(Player::O));
//! assert!(engine.apply_move(0, 0).is_err());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod state;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Move;
pub use board::{Board, CELL_COUNT, SIDE};
pub use engine::MatchEngine;
pub use error::{BoardError, MoveError};
pub use rules::ValidMoves;
pub use state::GameState;
pub use status::{MatchStatus, StatusReprError};
pub use types::{Cell, Player};
