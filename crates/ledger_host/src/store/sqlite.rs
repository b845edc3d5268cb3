//! SQLite record store.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use ledger_tictactoe::Game;
use tracing::{debug, info, instrument};

use super::models::{GameRow, NewGameRow};
use super::{GameKey, RecordStore, schema};
use crate::{HostError, StoreError};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Record store persisted in a SQLite database file.
///
/// Each record is one `games` row holding the JSON-encoded game. Every
/// write runs inside an immediate transaction, which takes the database
/// write lock up front.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: String,
}

impl SqliteStore {
    /// Opens the database at `db_path`, creating it and applying pending
    /// migrations as needed.
    ///
    /// `":memory:"` does not work here: every operation opens its own
    /// connection and would see a fresh database.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Storage`] if the database cannot be opened or
    /// migrated.
    #[instrument(skip(db_path), fields(db_path = %db_path.as_ref()))]
    pub fn open(db_path: impl AsRef<str>) -> Result<Self, HostError> {
        let store = Self {
            db_path: db_path.as_ref().to_string(),
        };
        let mut conn = store.connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| StoreError::new(format!("Migrations failed: {}", e)))?;
        info!(path = %store.db_path, migrations = applied.len(), "Opened SQLite record store");
        Ok(store)
    }

    /// Path of the backing database file.
    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Establishes a database connection.
    #[instrument(skip(self))]
    fn connection(&self) -> Result<SqliteConnection, HostError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path).map_err(|e| {
            StoreError::new(format!("Failed to connect to '{}': {}", self.db_path, e)).into()
        })
    }

    fn find(conn: &mut SqliteConnection, key: &GameKey) -> Result<Option<GameRow>, HostError> {
        Ok(schema::games::table
            .find(key.as_str())
            .select(GameRow::as_select())
            .first(conn)
            .optional()?)
    }

    fn read(conn: &mut SqliteConnection, key: &GameKey) -> Result<Game, HostError> {
        Self::find(conn, key)?
            .ok_or_else(|| HostError::RecordNotFound { key: key.clone() })?
            .game()
    }
}

impl RecordStore for SqliteStore {
    #[instrument(skip(self, game), fields(game = %key))]
    fn allocate(&self, key: &GameKey, game: Game) -> Result<(), HostError> {
        let row = NewGameRow::encode(key.as_str(), &game)?;
        let mut conn = self.connection()?;

        conn.immediate_transaction(|conn| {
            if Self::find(conn, key)?.is_some() {
                return Err(HostError::AllocationConflict { key: key.clone() });
            }
            diesel::insert_into(schema::games::table)
                .values(&row)
                .execute(conn)?;
            Ok(())
        })?;

        info!("Slot allocated");
        Ok(())
    }

    #[instrument(skip(self), fields(game = %key))]
    fn load(&self, key: &GameKey) -> Result<Game, HostError> {
        let mut conn = self.connection()?;
        let game = Self::read(&mut conn, key)?;
        debug!(turn = game.turn(), "Record loaded");
        Ok(game)
    }

    #[instrument(skip(self, transition), fields(game = %key))]
    fn update<F>(&self, key: &GameKey, transition: F) -> Result<Game, HostError>
    where
        F: FnOnce(&Game) -> Result<Game, HostError>,
    {
        let mut conn = self.connection()?;

        let next = conn.immediate_transaction(|conn| {
            let current = Self::read(conn, key)?;
            let next = transition(&current)?;
            let record = serde_json::to_string(&next)?;
            diesel::update(schema::games::table.find(key.as_str()))
                .set((
                    schema::games::record.eq(record),
                    schema::games::updated_at.eq(chrono::Utc::now().naive_utc()),
                ))
                .execute(conn)?;
            Ok::<_, HostError>(next)
        })?;

        debug!(turn = next.turn(), "Record updated");
        Ok(next)
    }

    #[instrument(skip(self))]
    fn keys(&self) -> Result<Vec<GameKey>, HostError> {
        let mut conn = self.connection()?;
        let keys = schema::games::table
            .select(schema::games::game_key)
            .order(schema::games::game_key.asc())
            .load::<String>(&mut conn)?;
        debug!(count = keys.len(), "Keys loaded");
        keys.into_iter().map(GameKey::new).collect()
    }
}
