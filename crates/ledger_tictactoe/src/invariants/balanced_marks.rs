//! Balanced marks invariant: X moves first and players alternate.

use super::Invariant;
use crate::{Game, Sign};

/// Invariant: `#X - #O` is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        let x_count = game.board().count(Sign::X);
        let o_count = game.board().count(Sign::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "Marks alternate starting with X"
    }
}
