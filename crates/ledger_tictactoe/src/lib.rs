//! Ledger Tic-Tac-Toe - an authoritative two-player game record
//!
//! Every move is a validated state transition computed purely from the
//! persisted [`Game`] record and the caller's [`Identity`]. Nothing the
//! client computes is trusted.
//!
//! # Architecture
//!
//! - **Engine**: [`setup_game`] and [`play`], pure functions from
//!   `(record, input)` to a new record or a [`TicTacToeError`]
//! - **Rules**: stateless win/tie detection over the full board
//! - **Contracts**: ordered move preconditions plus postconditions
//!   re-checked against the [`invariants`] in debug builds
//! - **Boundary**: conversion of raw signed coordinates into a [`Tile`]
//!
//! # Example
//!
//! ```
//! use ledger_tictactoe::{GameState, Identity, Tile, play, setup_game};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let alice = Identity::new("alice")?;
//! let bob = Identity::new("bob")?;
//!
//! let game = setup_game(alice.clone(), bob.clone())?;
//! let game = play(&game, Tile::new(1, 1), &alice)?;
//!
//! assert_eq!(game.turn(), 2);
//! assert_eq!(game.state(), &GameState::Active);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod boundary;
mod contracts;
mod engine;
mod error;
mod game;
mod identity;
pub mod invariants;
pub mod rules;
mod types;

pub use boundary::{Axis, BoundaryError};
pub use contracts::{
    Contract, GameIsActive, LegalMove, MoveContract, PlayersTurn, RecordIsConsistent, TileInBounds,
    TileIsEmpty,
};
pub use engine::{Move, play, replay, setup_game};
pub use error::TicTacToeError;
pub use game::Game;
pub use identity::{Identity, IdentityError};
pub use types::{BOARD_SIZE, Board, GameState, Sign, Tile};
