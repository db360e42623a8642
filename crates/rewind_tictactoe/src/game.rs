//! Game session: applies clicks to the history and answers queries.

use super::action::{Move, Play};
use super::contracts::{ClickContract, Contract};
use super::history::{History, HistoryError, MoveEntry};
use super::rules::{Outcome, evaluate};
use super::view::{GameView, Status};
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// One tic-tac-toe session.
///
/// Owns the snapshot history. The only mutations are [`Game::click`],
/// [`Game::select_history`] and [`Game::restart`]; everything else is
/// derived on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    history: History,
}

impl Game {
    /// Creates a new game at the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Builds a game by clicking each position in order.
    ///
    /// Clicks that would be ignored interactively are ignored here too.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Self {
        let mut game = Self::new();
        for pos in positions {
            game.click(*pos);
        }
        game
    }

    /// Handles a click on a cell.
    ///
    /// Clicking an occupied square, or any square once the live board is
    /// won, leaves the game unchanged and returns [`Play::Ignored`].
    /// Otherwise the turn's mark is placed on a copy of the live board,
    /// which is recorded after discarding any snapshots ahead of it.
    #[instrument(skip(self), fields(current = self.history.current_index()))]
    pub fn click(&mut self, pos: Position) -> Play {
        let action = Move::new(self.history.turn(), pos);

        if let Err(reason) = ClickContract::pre(&self.history, &action) {
            debug!(%reason, "Click ignored");
            return Play::Ignored(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.history.clone();

        let next = self
            .history
            .current_board()
            .with_mark(action.position, action.player);
        self.history.record_move(next);

        #[cfg(debug_assertions)]
        {
            let post = ClickContract::post(&before, &self.history);
            debug_assert!(post.is_ok(), "{:?}", post);
        }

        info!(%action, move_number = self.history.current_index(), "Move recorded");
        Play::Recorded(action)
    }

    /// Makes the snapshot at `index` live.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] for an index the move
    /// list never offered.
    #[instrument(skip(self))]
    pub fn select_history(&mut self, index: usize) -> Result<(), HistoryError> {
        self.history.jump_to(index)
    }

    /// Throws the whole history away and starts over.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(discarded = self.history.len(), "Restarting game");
        self.history = History::new();
    }

    /// Returns the underlying history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the live board.
    pub fn board(&self) -> Board {
        self.history.current_board()
    }

    /// Returns whose move extends the live board.
    pub fn turn(&self) -> Player {
        self.history.turn()
    }

    /// Evaluates the live board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.history.current_board())
    }

    /// Returns the status line policy for the live board.
    pub fn status(&self) -> Status {
        Status::from_outcome(self.outcome(), self.turn())
    }

    /// Returns one entry per snapshot.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.history.move_list()
    }

    /// Derives everything the presentation layer renders.
    ///
    /// Pure; call it after every mutating call.
    pub fn view(&self) -> GameView {
        GameView::from_game(self)
    }
}
