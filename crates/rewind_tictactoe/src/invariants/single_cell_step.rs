//! Single-cell step invariant: each snapshot fills exactly one empty cell.

use super::{Invariant, changed_cells};
use crate::{History, Square};

/// Invariant: Every snapshot after the first differs from its
/// predecessor in exactly one cell, and that cell was empty before.
///
/// This also rules out overwriting or erasing a mark.
pub struct SingleCellStepInvariant;

impl Invariant<History> for SingleCellStepInvariant {
    fn holds(history: &History) -> bool {
        history.snapshots().windows(2).all(|pair| {
            let changed = changed_cells(&pair[0], &pair[1]);
            match changed.as_slice() {
                [pos] => pair[0].get(*pos) == Square::Empty,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot fills exactly one previously empty cell"
    }
}
