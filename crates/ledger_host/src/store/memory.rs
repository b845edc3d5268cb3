//! In-process record store.

use super::{GameKey, RecordStore};
use crate::{HostError, StoreError};
use ledger_tictactoe::Game;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument};

/// Record store backed by a shared map.
///
/// Clones share the same records. The lock is held for the whole of an
/// `update`, so concurrent transitions on the store are serialized.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    records: Arc<Mutex<HashMap<GameKey, Game>>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating in-memory record store");
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<GameKey, Game>>, HostError> {
        self.records
            .lock()
            .map_err(|e| StoreError::new(format!("Record store lock poisoned: {}", e)).into())
    }
}

impl RecordStore for InMemoryStore {
    #[instrument(skip(self, game), fields(game = %key))]
    fn allocate(&self, key: &GameKey, game: Game) -> Result<(), HostError> {
        let mut records = self.lock()?;
        match records.entry(key.clone()) {
            Entry::Occupied(_) => Err(HostError::AllocationConflict { key: key.clone() }),
            Entry::Vacant(slot) => {
                slot.insert(game);
                debug!("Slot allocated");
                Ok(())
            }
        }
    }

    #[instrument(skip(self), fields(game = %key))]
    fn load(&self, key: &GameKey) -> Result<Game, HostError> {
        self.lock()?
            .get(key)
            .cloned()
            .ok_or_else(|| HostError::RecordNotFound { key: key.clone() })
    }

    #[instrument(skip(self, transition), fields(game = %key))]
    fn update<F>(&self, key: &GameKey, transition: F) -> Result<Game, HostError>
    where
        F: FnOnce(&Game) -> Result<Game, HostError>,
    {
        let mut records = self.lock()?;
        let current = records
            .get_mut(key)
            .ok_or_else(|| HostError::RecordNotFound { key: key.clone() })?;
        let next = transition(current)?;
        *current = next.clone();
        debug!(turn = next.turn(), "Record updated");
        Ok(next)
    }

    #[instrument(skip(self))]
    fn keys(&self) -> Result<Vec<GameKey>, HostError> {
        let mut keys: Vec<GameKey> = self.lock()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> GameKey {
        GameKey::new(name).unwrap()
    }

    #[test]
    fn test_allocate_then_load() {
        let store = InMemoryStore::new();
        store.allocate(&key("a"), Game::new()).unwrap();
        assert_eq!(store.load(&key("a")).unwrap(), Game::new());
    }

    #[test]
    fn test_allocate_twice_conflicts() {
        let store = InMemoryStore::new();
        store.allocate(&key("a"), Game::new()).unwrap();
        assert_eq!(
            store.allocate(&key("a"), Game::new()),
            Err(HostError::AllocationConflict { key: key("a") })
        );
    }

    #[test]
    fn test_load_missing() {
        let store = InMemoryStore::new();
        assert_eq!(
            store.load(&key("nope")),
            Err(HostError::RecordNotFound { key: key("nope") })
        );
    }

    #[test]
    fn test_failed_update_persists_nothing() {
        let store = InMemoryStore::new();
        store.allocate(&key("a"), Game::new()).unwrap();
        let result = store.update(&key("a"), |_| {
            Err(HostError::InvalidInput("rejected".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(store.load(&key("a")).unwrap(), Game::new());
    }

    #[test]
    fn test_clones_share_records() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.allocate(&key("b"), Game::new()).unwrap();
        store.allocate(&key("a"), Game::new()).unwrap();
        assert_eq!(other.keys().unwrap(), vec![key("a"), key("b")]);
    }
}
