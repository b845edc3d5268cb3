//! Command-line interface for ledger-tictactoe.

use clap::{Parser, Subcommand};
use ledger_host::{GameKey, Scenario, StoreBackend};
use ledger_tictactoe::Identity;
use std::path::PathBuf;

/// Ledger Tic-Tac-Toe - authoritative game records with signed moves
#[derive(Parser, Debug)]
#[command(name = "ledger-tictactoe")]
#[command(about = "Authoritative tic-tac-toe over a persistent record store", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "ledger_tictactoe.toml")]
    pub config: PathBuf,

    /// Database path, overriding the configuration
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a game, signed by player one
    Setup {
        /// Key of the new game record
        #[arg(long)]
        game: GameKey,

        /// First mover, plays X
        #[arg(long)]
        player_one: Identity,

        /// Second mover, plays O
        #[arg(long)]
        player_two: Identity,
    },

    /// Submit a move, signed by the player
    Play {
        /// Key of the game record
        #[arg(long)]
        game: GameKey,

        /// Player making the move
        #[arg(long)]
        player: Identity,

        /// Row, 0 to 2
        #[arg(long, allow_negative_numbers = true)]
        row: i64,

        /// Column, 0 to 2
        #[arg(long, allow_negative_numbers = true)]
        col: i64,
    },

    /// Print a game's board, turn and state
    Show {
        /// Key of the game record
        #[arg(long)]
        game: GameKey,
    },

    /// List stored game keys
    List,

    /// Play a scripted match against an in-memory store
    Demo {
        /// Which script to play (win or tie)
        scenario: Scenario,

        /// First mover
        #[arg(long, default_value = "alice")]
        player_one: Identity,

        /// Second mover
        #[arg(long, default_value = "bob")]
        player_two: Identity,
    },
}

impl Command {
    /// The store this command runs against, given the configured one.
    ///
    /// Demos always play against a fresh in-memory store.
    pub fn backend(&self, configured: StoreBackend) -> StoreBackend {
        match self {
            Command::Demo { .. } => StoreBackend::Memory,
            _ => configured,
        }
    }
}
