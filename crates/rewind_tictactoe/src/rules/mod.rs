//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`] snapshot. Rules never look at
//! history and never allocate beyond their result.

pub mod win;

pub use win::{LINES, check_winner, winning_line};

use super::{Board, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
///
/// There is no draw: a full board without a line is still `InProgress`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line of three yet.
    #[display("In progress")]
    InProgress,
    /// Player completed a line.
    #[display("Player {_0} wins")]
    Won(Player),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            Outcome::InProgress => None,
        }
    }
}

/// Evaluates a board snapshot.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(player) => Outcome::Won(player),
        None => Outcome::InProgress,
    }
}
