//! Terminal state invariant: the recorded state agrees with the board.

use super::Invariant;
use crate::Game;
use crate::GameState;
use crate::rules::{check_winner, is_full};

/// Invariant: `state` is exactly what the board implies.
///
/// - `Won { winner }`: a line is complete and `winner` owns its mark
/// - `Tie`: the board is full and no line is complete
/// - `Active`: no line is complete and the board is not full
pub struct TerminalStateInvariant;

impl Invariant<Game> for TerminalStateInvariant {
    fn holds(game: &Game) -> bool {
        let line = check_winner(game.board());
        match game.state() {
            GameState::Won { winner } => match line {
                Some(sign) => game.players()[sign.player_index()] == *winner,
                None => false,
            },
            GameState::Tie => line.is_none() && is_full(game.board()),
            GameState::Active => line.is_none() && !is_full(game.board()),
        }
    }

    fn description() -> &'static str {
        "Game state matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Identity, Sign};

    const X: Option<Sign> = Some(Sign::X);
    const O: Option<Sign> = Some(Sign::O);
    const E: Option<Sign> = None;

    fn players() -> [Identity; 2] {
        [Identity::new("a").unwrap(), Identity::new("b").unwrap()]
    }

    #[test]
    fn test_won_by_line_owner_holds() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let winner = players()[0].clone();
        let game = Game::from_parts(players(), 6, board, GameState::Won { winner });
        assert!(TerminalStateInvariant::holds(&game));
    }

    #[test]
    fn test_won_by_wrong_player_violates() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let winner = players()[1].clone();
        let game = Game::from_parts(players(), 6, board, GameState::Won { winner });
        assert!(!TerminalStateInvariant::holds(&game));
    }

    #[test]
    fn test_active_with_line_violates() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let game = Game::from_parts(players(), 6, board, GameState::Active);
        assert!(!TerminalStateInvariant::holds(&game));
    }

    #[test]
    fn test_tie_on_full_board_holds() {
        let board = Board::from_rows([[X, O, X], [O, O, X], [X, X, O]]);
        let game = Game::from_parts(players(), 10, board, GameState::Tie);
        assert!(TerminalStateInvariant::holds(&game));
    }
}
