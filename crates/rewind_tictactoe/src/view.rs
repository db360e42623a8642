//! Presentation-facing snapshot of a game.

use super::history::MoveEntry;
use super::rules::{Outcome, winning_line};
use super::{Board, Game, Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Status line for the live board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// A line was completed.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Nobody has won; this player moves next.
    ///
    /// Also shown on a full board without a line.
    #[display("Next player is {_0}")]
    NextPlayer(Player),
}

impl Status {
    /// Chooses the status from an outcome and the current turn.
    pub fn from_outcome(outcome: Outcome, turn: Player) -> Self {
        match outcome {
            Outcome::Won(player) => Status::Winner(player),
            Outcome::InProgress => Status::NextPlayer(turn),
        }
    }
}

/// Everything a renderer needs, derived from one [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The live board.
    pub board: Board,
    /// Whose move extends the live board.
    pub turn: Player,
    /// Rules evaluation of the live board.
    pub outcome: Outcome,
    /// Status line text.
    pub status: String,
    /// Completed line, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Index of the live snapshot.
    pub current_index: usize,
    /// One entry per snapshot.
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    /// Derives the view for `game`.
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        Self {
            board,
            turn: game.turn(),
            outcome: game.outcome(),
            status: game.status().to_string(),
            winning_line: winning_line(&board).map(|(_, line)| line),
            current_index: game.history().current_index(),
            moves: game.move_list(),
        }
    }
}
