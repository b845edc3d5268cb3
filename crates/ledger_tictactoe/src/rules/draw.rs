//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(Option::is_some)
}

/// A tie is a full board with no winning line.
///
/// The win check runs first: a full board can still hold a line.
pub fn is_tie(board: &Board) -> bool {
    check_winner(board).is_none() && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sign;

    const X: Option<Sign> = Some(Sign::X);
    const O: Option<Sign> = Some(Sign::O);
    const E: Option<Sign> = None;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::from_rows([[X, O, X], [O, O, X], [X, X, E]]);
        assert!(!is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_tie_detection() {
        let board = Board::from_rows([[X, O, X], [O, O, X], [X, X, O]]);
        assert!(is_full(&board));
        assert!(is_tie(&board));
    }

    #[test]
    fn test_not_tie_if_winner() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
