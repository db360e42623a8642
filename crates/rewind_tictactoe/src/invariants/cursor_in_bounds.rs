//! Cursor invariant: the current index names a recorded snapshot.

use super::Invariant;
use crate::History;

/// Invariant: `0 <= current < len`.
pub struct CursorInBoundsInvariant;

impl Invariant<History> for CursorInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.current_index() < history.len()
    }

    fn description() -> &'static str {
        "Current index points at a recorded snapshot"
    }
}
