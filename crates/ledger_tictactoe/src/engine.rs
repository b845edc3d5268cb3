//! The game engine: setup and play.
//!
//! Both entry points are pure. `play` never touches the record it is
//! given; it returns a new record on success, so a rejected move cannot
//! leave a partial write behind.

use crate::contracts::{Contract, MoveContract};
use crate::{Game, Identity, TicTacToeError, Tile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A move: a caller claiming a tile.
///
/// Moves are domain events, validated against the record before any
/// mutation happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The caller submitting the move.
    pub player: Identity,
    /// The tile being claimed.
    pub tile: Tile,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player.short(), self.tile)
    }
}

/// Creates a fresh, immediately playable record.
///
/// `player_two` may equal `player_one`.
///
/// # Errors
///
/// Propagates [`TicTacToeError::GameAlreadyStarted`] from
/// [`Game::start`]; a fresh slot never triggers it.
#[instrument(skip_all, fields(player_one = %player_one, player_two = %player_two))]
pub fn setup_game(player_one: Identity, player_two: Identity) -> Result<Game, TicTacToeError> {
    let mut game = Game::default();
    game.start([player_one, player_two])?;
    info!("Game set up");
    Ok(game)
}

/// Validates and applies one move.
///
/// Checks, in order: game active, tile in bounds, tile empty, caller is
/// the current mover. The first failure is returned and nothing changes.
/// A record that fails its invariants is refused before those checks.
/// On success the tile carries the mover's mark, the state is updated
/// (win checked before tie) and `turn` advances by one.
///
/// # Errors
///
/// [`TicTacToeError::GameAlreadyOver`], [`TicTacToeError::TileOutOfBounds`],
/// [`TicTacToeError::TileAlreadySet`] or [`TicTacToeError::NotPlayersTurn`].
/// [`TicTacToeError::InvariantViolation`] for an inconsistent input record,
/// or in debug builds for a postcondition failure.
#[instrument(skip(game, caller), fields(turn = game.turn(), caller = %caller.short()))]
pub fn play(game: &Game, tile: Tile, caller: &Identity) -> Result<Game, TicTacToeError> {
    let action = Move::new(caller.clone(), tile);

    if let Err(e) = MoveContract::pre(game, &action) {
        warn!(code = e.code(), error = %e, %tile, "Move rejected");
        return Err(e);
    }

    let Some((row, col)) = tile.indices() else {
        return Err(TicTacToeError::TileOutOfBounds);
    };

    let mut next = game.clone();
    debug!(sign = %next.current_sign(), row, col, "Applying move");
    next.apply(row, col)?;

    #[cfg(debug_assertions)]
    MoveContract::post(game, &next)?;

    info!(
        %tile,
        next_turn = next.turn(),
        state = %next.state(),
        "Move accepted"
    );
    Ok(next)
}

/// Replays `tiles` from a fresh setup, each attributed to whoever's turn
/// it is.
///
/// Replaying the accepted moves of a record reproduces it exactly.
///
/// # Errors
///
/// The first error raised by [`play`].
#[instrument(skip(players), fields(moves = tiles.len()))]
pub fn replay(players: [Identity; 2], tiles: &[Tile]) -> Result<Game, TicTacToeError> {
    let [player_one, player_two] = players;
    let mut game = setup_game(player_one, player_two)?;

    for &tile in tiles {
        let mover = game
            .current_player()
            .cloned()
            .ok_or(TicTacToeError::NotPlayersTurn)?;
        game = play(&game, tile, &mover)?;
    }

    debug!(turn = game.turn(), state = %game.state(), "Replay complete");
    Ok(game)
}
