//! Host surface for the ledger tic-tac-toe engine.
//!
//! The engine in [`ledger_tictactoe`] decides whether a transition is
//! legal. This crate supplies what a deployed program gets from its host:
//!
//! - **Envelope**: signed [`Transaction`]s and the [`GameProgram`] entry
//!   points that check signatures before touching a record
//! - **Stores**: keyed record storage, in memory or in SQLite
//! - **Scenarios**: scripted matches played through the program
//! - **Config**: TOML configuration for the `ledger-tictactoe` binary
//!
//! # Example
//!
//! ```
//! use ledger_host::{GameKey, GameProgram, InMemoryStore, Transaction};
//! use ledger_tictactoe::{Identity, Tile};
//!
//! # fn main() -> Result<(), ledger_host::HostError> {
//! let alice = Identity::new("alice")?;
//! let bob = Identity::new("bob")?;
//! let key = GameKey::new("game-1")?;
//!
//! let program = GameProgram::new(InMemoryStore::new());
//! let tx = Transaction::signed_by([alice.clone()]);
//! program.setup_game(&tx, &key, alice.clone(), bob)?;
//! let game = program.play(&tx, &key, &alice, Tile::new(1, 1))?;
//! assert_eq!(game.turn(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod envelope;
mod error;
mod scenarios;
mod store;

pub use config::{ConfigError, HostConfig, StoreBackend};
pub use envelope::{GameProgram, Transaction};
pub use error::{HostError, StoreError};
pub use scenarios::{Scenario, Step};
pub use store::{GameKey, InMemoryStore, RecordStore, SqliteStore};
