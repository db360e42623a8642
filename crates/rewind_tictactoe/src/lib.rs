//! Pure tic-tac-toe game logic with time-travel move history.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] maps one [`Board`] to an [`Outcome`]
//! - **History**: [`History`] keeps every snapshot and a cursor into them
//! - **Game**: [`Game`] turns clicks into recorded moves and exposes a
//!   [`GameView`] for rendering
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Outcome, Player, Position};
//!
//! let mut game = Game::replay(&[
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::MiddleLeft,
//!     Position::TopRight,
//! ]);
//! assert_eq!(game.outcome(), Outcome::Won(Player::X));
//!
//! game.select_history(0).unwrap();
//! assert!(game.board().is_blank());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::{IgnoreReason, Move, Play};
pub use contracts::{ClickContract, Contract, GameNotWon, SquareIsEmpty};
pub use game::Game;
pub use history::{History, HistoryError, MoveEntry};
pub use position::Position;
pub use rules::{Outcome, check_winner, evaluate, winning_line};
pub use types::{Board, Player, Square};
pub use view::{GameView, Status};
