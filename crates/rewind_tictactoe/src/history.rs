//! Snapshot history with time-travel.
//!
//! The store keeps every board the game has passed through and a cursor
//! selecting the live one. Recording a move from an earlier snapshot
//! discards everything after the cursor first.

use super::invariants::{HistoryInvariants, InvariantSet};
use super::{Board, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Errors raised by the history store.
///
/// These are contract violations by the caller, never user mistakes.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// A jump targeted an index past the end of the history.
    #[display("History index {index} out of range (length {len})")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time of the request.
        len: usize,
    },
    /// A history invariant failed after a transition.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for HistoryError {}

/// One selectable entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index of the snapshot in the history.
    pub index: usize,
    /// The snapshot itself.
    pub board: Board,
    /// Button text for this entry.
    pub label: String,
    /// Whether this entry is the live snapshot.
    pub is_current: bool,
}

impl MoveEntry {
    /// Builds the label shown for a history index.
    pub fn label_for(index: usize) -> String {
        if index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", index)
        }
    }
}

/// Ordered board snapshots plus the index of the live one.
///
/// Deserializing checks the history invariants, so a loaded history is
/// as sound as one built by play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    snapshots: Vec<Board>,
    current: usize,
}

/// Wire form of [`History`] before validation.
#[derive(Deserialize)]
struct RawHistory {
    snapshots: Vec<Board>,
    current: usize,
}

impl TryFrom<RawHistory> for History {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            snapshots: raw.snapshots,
            current: raw.current,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            HistoryError::InvariantViolation(descriptions.join("; "))
        })?;
        Ok(history)
    }
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            current: 0,
        }
    }

    /// Builds a history without any checks, for exercising invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Board>, current: usize) -> Self {
        Self { snapshots, current }
    }

    /// Appends `board` after the current snapshot.
    ///
    /// Snapshots after the current index are dropped first. The board is
    /// not checked for legality here; move application owns that.
    #[instrument(skip(self, board), fields(current = self.current, len = self.snapshots.len()))]
    pub fn record_move(&mut self, board: Board) {
        let discarded = self.snapshots.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future branch");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(board);
        self.current = self.snapshots.len() - 1;
    }

    /// Moves the cursor to `index` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] if `index` is not a
    /// recorded snapshot.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.snapshots.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.snapshots.len(),
            });
        }
        debug!(from = self.current, to = index, "Time travel");
        self.current = index;
        Ok(())
    }

    /// Returns the live snapshot.
    pub fn current_board(&self) -> Board {
        self.snapshots[self.current]
    }

    /// Returns one entry per recorded snapshot, oldest first.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(index, board)| MoveEntry {
                index,
                board: *board,
                label: MoveEntry::label_for(index),
                is_current: index == self.current,
            })
            .collect()
    }

    /// Returns whose move extends the live snapshot.
    pub fn turn(&self) -> Player {
        Player::for_index(self.current)
    }

    /// Returns the index of the live snapshot.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of recorded snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the initial board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when the live snapshot is the last one recorded.
    pub fn is_at_latest(&self) -> bool {
        self.current + 1 == self.snapshots.len()
    }

    /// Returns all snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
