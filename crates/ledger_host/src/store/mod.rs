//! Record stores: where game records live between transactions.

mod memory;
mod models;
mod schema;
mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

use crate::HostError;
use ledger_tictactoe::Game;
use serde::{Deserialize, Serialize};

/// Caller-chosen identifier of a game record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameKey(String);

impl GameKey {
    /// Creates a key.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::InvalidInput`] for an empty or blank key.
    pub fn new(value: impl Into<String>) -> Result<Self, HostError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(HostError::InvalidInput(
                "Game key must not be empty".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the key as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GameKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for GameKey {
    type Err = HostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Keyed storage of game records.
///
/// Implementations serialize access per key: `update` reads, runs the
/// transition and writes back as one unit, and writes nothing when the
/// transition fails.
pub trait RecordStore {
    /// Reserves `key` with an initial record.
    ///
    /// # Errors
    ///
    /// [`HostError::AllocationConflict`] if the key is already occupied.
    fn allocate(&self, key: &GameKey, game: Game) -> Result<(), HostError>;

    /// Fetches the record under `key`.
    ///
    /// # Errors
    ///
    /// [`HostError::RecordNotFound`] if nothing is stored under `key`.
    fn load(&self, key: &GameKey) -> Result<Game, HostError>;

    /// Applies `transition` to the stored record and persists the result
    /// only if it succeeds.
    ///
    /// # Errors
    ///
    /// [`HostError::RecordNotFound`], or whatever `transition` returns.
    fn update<F>(&self, key: &GameKey, transition: F) -> Result<Game, HostError>
    where
        F: FnOnce(&Game) -> Result<Game, HostError>;

    /// Lists stored keys in ascending order.
    fn keys(&self) -> Result<Vec<GameKey>, HostError>;
}
