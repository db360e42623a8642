//! Contract-based validation for clicks.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. For a click, a failed precondition is not an error,
//! only a reason to ignore the click. A failed postcondition is a bug.

use super::action::{IgnoreReason, Move};
use super::history::{History, HistoryError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::evaluate;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a failed precondition yields.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), HistoryError>;
}

/// Precondition: The live board has no winner yet.
pub struct GameNotWon;

impl GameNotWon {
    /// Rejects any move once the live board has a completed line.
    #[instrument(skip(history))]
    pub fn check(history: &History) -> Result<(), IgnoreReason> {
        match evaluate(&history.current_board()).winner() {
            Some(player) => Err(IgnoreReason::GameOver(player)),
            None => Ok(()),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects a move onto an occupied square.
    #[instrument(skip(history))]
    pub fn check(mov: &Move, history: &History) -> Result<(), IgnoreReason> {
        if history.current_board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(IgnoreReason::SquareOccupied(mov.position))
        }
    }
}

/// Contract for clicks on a cell.
///
/// Preconditions, in order:
/// - Square must be empty
/// - Live board must not be won
///
/// Postconditions:
/// - The new snapshot is the last one and is live
/// - All history invariants hold
pub struct ClickContract;

impl Contract<History, Move> for ClickContract {
    type Rejection = IgnoreReason;

    fn pre(history: &History, action: &Move) -> Result<(), IgnoreReason> {
        SquareIsEmpty::check(action, history)?;
        GameNotWon::check(history)?;
        debug_assert_eq!(action.player, history.turn(), "Move built for the wrong turn");
        Ok(())
    }

    fn post(before: &History, after: &History) -> Result<(), HistoryError> {
        if after.len() != before.current_index() + 2 || !after.is_at_latest() {
            warn!(
                before_current = before.current_index(),
                after_len = after.len(),
                after_current = after.current_index(),
                "Move did not land at the end of the kept branch"
            );
            return Err(HistoryError::InvariantViolation(
                "Recorded snapshot is not the live tail".to_string(),
            ));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HistoryError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Game, Player, Position};

    #[test]
    fn test_precondition_empty_square() {
        let history = History::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(ClickContract::pre(&history, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = Game::replay(&[Position::Center]);
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            ClickContract::pre(game.history(), &action),
            Err(IgnoreReason::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_after_win() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ]);
        let action = Move::new(Player::O, Position::BottomRight);
        assert_eq!(
            ClickContract::pre(game.history(), &action),
            Err(IgnoreReason::GameOver(Player::X))
        );
    }

    #[test]
    fn test_occupied_square_reported_before_win() {
        let game = Game::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ]);
        let action = Move::new(Player::O, Position::TopLeft);
        assert_eq!(
            ClickContract::pre(game.history(), &action),
            Err(IgnoreReason::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = History::new();
        let mut after = before.clone();
        after.record_move(Board::new().with_mark(Position::Center, Player::X));
        assert!(ClickContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = History::new();
        let mut after = before.clone();
        after.record_move(Board::new().with_mark(Position::Center, Player::O));
        assert!(matches!(
            ClickContract::post(&before, &after),
            Err(HistoryError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_missing_append() {
        let before = History::new();
        let after = before.clone();
        assert!(ClickContract::post(&before, &after).is_err());
    }
}
