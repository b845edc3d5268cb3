//! Database rows for stored game records.

use derive_new::new;
use diesel::prelude::*;
use ledger_tictactoe::{Game, invariants};
use tracing::{instrument, warn};

use super::schema;
use crate::HostError;

/// The columns of a stored game record that the store reads back.
///
/// Timestamps are maintained by SQL defaults and `update`, never read.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schema::games)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GameRow {
    game_key: String,
    record: String,
}

impl GameRow {
    /// Decodes the record and re-checks its invariants.
    ///
    /// A record that decodes but violates an invariant was written by
    /// something other than the engine.
    #[instrument(skip(self), fields(game = %self.game_key))]
    pub fn game(&self) -> Result<Game, HostError> {
        let game: Game = serde_json::from_str(&self.record)?;
        invariants::verify(&game).inspect_err(|e| {
            warn!(code = e.code(), error = %e, "Stored record is corrupt");
        })?;
        Ok(game)
    }
}

/// Insertable row for a newly allocated slot.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::games)]
pub struct NewGameRow {
    game_key: String,
    record: String,
}

impl NewGameRow {
    /// Encodes `game` for storage under `game_key`.
    pub fn encode(game_key: &str, game: &Game) -> Result<Self, HostError> {
        Ok(Self::new(game_key.to_string(), serde_json::to_string(game)?))
    }
}
