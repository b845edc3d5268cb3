//! The persisted game record.

use crate::rules;
use crate::{Board, GameState, Identity, Sign, TicTacToeError, Tile};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One match, exactly as it is persisted.
///
/// The [`Default`] value is a freshly allocated slot: `turn == 0`,
/// unassigned players, empty board. [`Game::start`] turns it into a
/// playable record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    players: [Identity; 2],
    turn: u8,
    board: Board,
    state: GameState,
}

impl Game {
    /// Creates an unstarted slot, as freshly allocated storage holds it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Initializes an allocated slot with its two players.
    ///
    /// # Errors
    ///
    /// Returns [`TicTacToeError::GameAlreadyStarted`] if the record has
    /// already been started.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn start(&mut self, players: [Identity; 2]) -> Result<(), TicTacToeError> {
        if self.turn != 0 {
            return Err(TicTacToeError::GameAlreadyStarted);
        }
        debug!(player_one = %players[0], player_two = %players[1], "Starting game");
        self.players = players;
        self.turn = 1;
        Ok(())
    }

    /// Returns both players, first mover first.
    pub fn players(&self) -> &[Identity; 2] {
        &self.players
    }

    /// Returns the 1-based move counter (0 for an unstarted slot).
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns true once [`Game::start`] has run.
    pub fn is_started(&self) -> bool {
        self.turn != 0
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Index into `players` of whoever moves on the current turn.
    pub fn current_player_index(&self) -> usize {
        Sign::for_turn(self.turn).player_index()
    }

    /// Identity expected to make the current move, if the game has started.
    pub fn current_player(&self) -> Option<&Identity> {
        self.is_started()
            .then(|| &self.players[self.current_player_index()])
    }

    /// Returns the mark at `tile`.
    pub fn mark_at(&self, tile: Tile) -> Option<Sign> {
        self.board.get(tile)
    }

    /// Mark placed by the current move.
    pub fn current_sign(&self) -> Sign {
        Sign::for_turn(self.turn)
    }

    /// Applies an already validated move: mark, detect, advance.
    ///
    /// The caller guarantees `tile` is in range and empty and the game
    /// is active.
    ///
    /// # Errors
    ///
    /// [`TicTacToeError::InvariantViolation`] if the turn counter is
    /// exhausted; `self` is left unchanged.
    pub(crate) fn apply(&mut self, row: usize, col: usize) -> Result<(), TicTacToeError> {
        let next_turn = self.turn.checked_add(1).ok_or_else(|| {
            TicTacToeError::InvariantViolation(format!("Turn counter overflow at {}", self.turn))
        })?;
        let sign = self.current_sign();
        let mover = self.players[self.current_player_index()].clone();
        self.board.mark(row, col, sign);

        if rules::check_winner(&self.board).is_some() {
            self.state = GameState::Won { winner: mover };
        } else if rules::is_full(&self.board) {
            self.state = GameState::Tie;
        }

        self.turn = next_turn;
        Ok(())
    }

    /// Builds a record from raw parts, bypassing validation.
    #[cfg(test)]
    pub(crate) fn from_parts(
        players: [Identity; 2],
        turn: u8,
        board: Board,
        state: GameState,
    ) -> Self {
        Self {
            players,
            turn,
            board,
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> [Identity; 2] {
        [
            Identity::new("alice").unwrap(),
            Identity::new("bob").unwrap(),
        ]
    }

    #[test]
    fn test_default_is_unstarted_slot() {
        let game = Game::new();
        assert_eq!(game, Game::default());
        assert_eq!(game.turn(), 0);
        assert!(!game.is_started());
        assert!(game.is_active());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_player(), None);
    }

    #[test]
    fn test_start_initializes_record() {
        let mut game = Game::default();
        game.start(players()).unwrap();
        assert_eq!(game.turn(), 1);
        assert_eq!(game.players(), &players());
        assert_eq!(game.state(), &GameState::Active);
        assert_eq!(game.current_player(), Some(&players()[0]));
        assert_eq!(game.current_sign(), Sign::X);
    }

    #[test]
    fn test_start_twice_fails() {
        let mut game = Game::default();
        game.start(players()).unwrap();
        let before = game.clone();
        assert_eq!(
            game.start(players()),
            Err(TicTacToeError::GameAlreadyStarted)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_apply_refuses_exhausted_turn_counter() {
        let mut game = Game::from_parts(players(), u8::MAX, Board::new(), GameState::Active);
        let before = game.clone();
        assert!(matches!(
            game.apply(0, 0),
            Err(TicTacToeError::InvariantViolation(_))
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn test_apply_alternates_movers() {
        let mut game = Game::default();
        game.start(players()).unwrap();
        game.apply(0, 0).unwrap();
        assert_eq!(game.current_player(), Some(&players()[1]));
        assert_eq!(game.current_sign(), Sign::O);
        assert_eq!(game.mark_at(Tile::new(0, 0)), Some(Sign::X));
    }
}
