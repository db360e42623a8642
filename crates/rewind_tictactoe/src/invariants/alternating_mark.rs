//! Alternating mark invariant: snapshots alternate X, O, X, O, ...

use super::{Invariant, changed_cells};
use crate::{History, Player, Square};

/// Invariant: The cell filled by move k carries the mark of the player
/// whose turn it was at index k - 1.
///
/// Move 1 is always X.
pub struct AlternatingMarkInvariant;

impl Invariant<History> for AlternatingMarkInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(index, pair)| {
                let expected = Square::Occupied(Player::for_index(index));
                changed_cells(&pair[0], &pair[1])
                    .into_iter()
                    .all(|pos| pair[1].get(pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
