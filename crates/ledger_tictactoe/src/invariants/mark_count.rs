//! Mark count invariant: marked cells track the turn counter.

use super::Invariant;
use crate::Game;

/// Invariant: the number of marked cells equals `turn - 1`.
///
/// An unstarted slot (`turn == 0`) has an empty board.
pub struct MarkCountInvariant;

impl Invariant<Game> for MarkCountInvariant {
    fn holds(game: &Game) -> bool {
        let expected = usize::from(game.turn().saturating_sub(1));
        game.board().filled_count() == expected
    }

    fn description() -> &'static str {
        "Marked cells equal turn - 1"
    }
}
