//! Transaction envelope and the program entry points.
//!
//! The host authenticates callers and owns storage; the engine only
//! decides whether a transition is legal. A [`Transaction`] carries the
//! identities that signed a call, and [`GameProgram`] wires signer checks,
//! slot allocation and the engine together.

use crate::{GameKey, HostError, RecordStore};
use ledger_tictactoe::{Game, Identity, Tile};
use std::collections::BTreeSet;
use tracing::{info, instrument, warn};

/// The identities that authorized a call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    signers: BTreeSet<Identity>,
}

impl Transaction {
    /// Creates a transaction signed by `signers`.
    pub fn signed_by(signers: impl IntoIterator<Item = Identity>) -> Self {
        Self {
            signers: signers.into_iter().collect(),
        }
    }

    /// Returns true if `identity` signed.
    pub fn is_signed_by(&self, identity: &Identity) -> bool {
        self.signers.contains(identity)
    }

    /// Iterates over the signers in order.
    pub fn signers(&self) -> impl Iterator<Item = &Identity> {
        self.signers.iter()
    }

    /// Fails with [`HostError::MissingSignature`] unless `identity` signed.
    pub fn require_signer(&self, identity: &Identity) -> Result<(), HostError> {
        if self.is_signed_by(identity) {
            Ok(())
        } else {
            warn!(identity = %identity.short(), "Missing signature");
            Err(HostError::MissingSignature {
                identity: identity.clone(),
            })
        }
    }
}

/// The two program entry points over a record store.
#[derive(Debug, Clone, derive_new::new)]
pub struct GameProgram<S> {
    store: S,
}

impl<S: RecordStore> GameProgram<S> {
    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Allocates a started game record under `key` in one store write.
    ///
    /// `player_one` must sign. An occupied key fails with
    /// [`HostError::AllocationConflict`] and leaves the stored record as is.
    #[instrument(
        skip(self, tx, player_one, player_two),
        fields(game = %key, player_one = %player_one.short(), player_two = %player_two.short())
    )]
    pub fn setup_game(
        &self,
        tx: &Transaction,
        key: &GameKey,
        player_one: Identity,
        player_two: Identity,
    ) -> Result<Game, HostError> {
        tx.require_signer(&player_one)?;

        // Started before allocation so the slot is never visible unstarted.
        // A fresh slot cannot fail `start`, so an occupied key still
        // reports AllocationConflict first.
        let mut game = Game::new();
        game.start([player_one, player_two])?;
        self.store.allocate(key, game.clone())?;

        info!("Game created");
        Ok(game)
    }

    /// Submits a move by `player` to the game under `key`.
    ///
    /// `player` must sign. Engine rejections come back as
    /// [`HostError::Domain`] and leave the stored record untouched.
    #[instrument(skip(self, tx, player), fields(game = %key, player = %player.short()))]
    pub fn play(
        &self,
        tx: &Transaction,
        key: &GameKey,
        player: &Identity,
        tile: Tile,
    ) -> Result<Game, HostError> {
        tx.require_signer(player)?;

        let game = self
            .store
            .update(key, |current| Ok(ledger_tictactoe::play(current, tile, player)?))?;

        info!(turn = game.turn(), state = %game.state(), "Move recorded");
        Ok(game)
    }

    /// Fetches the record under `key`.
    #[instrument(skip(self), fields(game = %key))]
    pub fn game(&self, key: &GameKey) -> Result<Game, HostError> {
        self.store.load(key)
    }

    /// Lists all stored game keys.
    pub fn games(&self) -> Result<Vec<GameKey>, HostError> {
        self.store.keys()
    }
}
