//! Ledger Tic-Tac-Toe - CLI
//!
//! Sets up games, submits signed moves and inspects stored records.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use ledger_host::{
    GameKey, GameProgram, HostConfig, HostError, InMemoryStore, RecordStore, Scenario,
    SqliteStore, StoreBackend, Transaction,
};
use ledger_tictactoe::{Game, Identity, Tile};
use std::process::ExitCode;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<HostError>() {
                Some(host) => eprintln!("Error {} ({}): {}", host.code(), host.name(), host),
                None => eprintln!("Error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = HostConfig::load_or_default(&cli.config)?;
    if let Some(db) = cli.db {
        config = config.with_db_path(db);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!(?config, "Configuration resolved");

    match cli.command.backend(*config.store()) {
        StoreBackend::Sqlite => {
            let store = SqliteStore::open(config.db_path())?;
            execute(&GameProgram::new(store), cli.command)
        }
        StoreBackend::Memory => execute(&GameProgram::new(InMemoryStore::new()), cli.command),
    }
}

/// Runs one command against the program.
#[instrument(skip(program))]
fn execute<S: RecordStore>(program: &GameProgram<S>, command: Command) -> Result<()> {
    match command {
        Command::Setup {
            game,
            player_one,
            player_two,
        } => {
            let tx = Transaction::signed_by([player_one.clone()]);
            let record = program.setup_game(&tx, &game, player_one, player_two)?;
            print_game(&game, &record);
        }
        Command::Play {
            game,
            player,
            row,
            col,
        } => {
            let tile = Tile::from_signed(row, col).map_err(HostError::from)?;
            let tx = Transaction::signed_by([player.clone()]);
            let record = program.play(&tx, &game, &player, tile)?;
            print_game(&game, &record);
        }
        Command::Show { game } => {
            let record = program.game(&game)?;
            print_game(&game, &record);
        }
        Command::List => {
            let keys = program.games()?;
            info!(count = keys.len(), "Listing games");
            for key in keys {
                println!("{}", key);
            }
        }
        Command::Demo {
            scenario,
            player_one,
            player_two,
        } => run_demo(program, scenario, player_one, player_two)?,
    }
    Ok(())
}

/// Plays a scripted match against the program.
#[instrument(skip(program, player_one, player_two))]
fn run_demo<S: RecordStore>(
    program: &GameProgram<S>,
    scenario: Scenario,
    player_one: Identity,
    player_two: Identity,
) -> Result<()> {
    let key = GameKey::new(format!("demo-{}", scenario))?;
    info!(%scenario, "Running demo");

    for step in scenario.run(program, &key, player_one, player_two)? {
        println!("{} plays {}", step.mover().short(), step.tile());
        println!("{}\n", step.game().board());
    }

    let game = program.game(&key)?;
    println!("Turn: {}", game.turn());
    println!("State: {}", game.state());
    Ok(())
}

fn print_game(key: &GameKey, game: &Game) {
    let [player_one, player_two] = game.players();
    println!("Game: {}", key);
    println!("X: {}", player_one);
    println!("O: {}", player_two);
    println!("Turn: {}", game.turn());
    println!("State: {}", game.state());
    println!("{}", game.board());
}
