//! Domain error taxonomy.

/// Error raised by a rejected transition.
///
/// Callers distinguish kinds by [`code`](Self::code) or
/// [`name`](Self::name), never by the display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, strum::IntoStaticStr)]
pub enum TicTacToeError {
    /// Row or column outside `0..=2`.
    #[display("Tile is out of bounds")]
    TileOutOfBounds,

    /// Target cell is already marked.
    #[display("Tile is already set")]
    TileAlreadySet,

    /// The game is no longer active.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// Caller is not the expected mover for the current turn.
    #[display("It is not this player's turn")]
    NotPlayersTurn,

    /// `start` was called on a record that has already been started.
    #[display("Game has already started")]
    GameAlreadyStarted,

    /// A persisted record failed a postcondition check.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl TicTacToeError {
    /// Stable numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            TicTacToeError::TileOutOfBounds => 6000,
            TicTacToeError::TileAlreadySet => 6001,
            TicTacToeError::GameAlreadyOver => 6002,
            TicTacToeError::NotPlayersTurn => 6003,
            TicTacToeError::GameAlreadyStarted => 6004,
            TicTacToeError::InvariantViolation(_) => 6100,
        }
    }

    /// Stable symbolic error code.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl std::error::Error for TicTacToeError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all() -> Vec<TicTacToeError> {
        vec![
            TicTacToeError::TileOutOfBounds,
            TicTacToeError::TileAlreadySet,
            TicTacToeError::GameAlreadyOver,
            TicTacToeError::NotPlayersTurn,
            TicTacToeError::GameAlreadyStarted,
            TicTacToeError::InvariantViolation("corrupt".to_string()),
        ]
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes: HashSet<u32> = all().iter().map(TicTacToeError::code).collect();
        assert_eq!(codes.len(), all().len());
    }

    #[test]
    fn test_names_are_variant_names() {
        assert_eq!(TicTacToeError::TileOutOfBounds.name(), "TileOutOfBounds");
        assert_eq!(TicTacToeError::NotPlayersTurn.name(), "NotPlayersTurn");
        assert_eq!(
            TicTacToeError::InvariantViolation(String::new()).name(),
            "InvariantViolation"
        );
    }

    #[test]
    fn test_display_is_human_readable() {
        assert_eq!(
            TicTacToeError::GameAlreadyOver.to_string(),
            "Game is already over"
        );
    }
}
