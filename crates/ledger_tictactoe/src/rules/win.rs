//! Win detection logic for tic-tac-toe.

use crate::{Board, Sign, Tile};
use tracing::instrument;

/// The eight lines that win the game, as `(row, col)` triples.
pub const WINNING_LINES: [[(u8, u8); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark that fills any line with three identical marks.
/// The first such line found is used.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Sign> {
    for [a, b, c] in WINNING_LINES {
        let first = board.get(Tile::from(a));
        if first.is_some() && first == board.get(Tile::from(b)) && first == board.get(Tile::from(c))
        {
            return first;
        }
    }

    None
}
