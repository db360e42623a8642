//! First-class action types for tic-tac-toe.
//!
//! A click either records a [`Move`] or is ignored. Ignored clicks are
//! ordinary user exploration, so they are values rather than errors.

use super::{Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[display("{player} -> {position}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

/// Why a click left the game unchanged.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
    /// The displayed board already has a winner.
    #[display("Player {_0} has already won")]
    GameOver(Player),
}

/// Result of a click on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Play {
    /// The move was recorded as a new snapshot.
    Recorded(Move),
    /// The click was a no-op.
    Ignored(IgnoreReason),
}

impl Play {
    /// Returns true if the click produced a new snapshot.
    pub fn is_recorded(&self) -> bool {
        matches!(self, Play::Recorded(_))
    }
}
