//! Initial snapshot invariant: history always starts from the empty board.

use super::Invariant;
use crate::History;

/// Invariant: The first snapshot is the empty board.
///
/// Branch discard keeps everything up to the cursor, so the initial
/// board survives every transition.
pub struct InitialEmptyInvariant;

impl Invariant<History> for InitialEmptyInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .first()
            .is_some_and(|board| board.is_blank())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
