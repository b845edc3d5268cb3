//! Scripted matches played through the program, one signed transaction
//! per move.

use crate::{GameKey, GameProgram, HostError, RecordStore, Transaction};
use derive_getters::Getters;
use ledger_tictactoe::{Game, Identity, Tile};
use tracing::{debug, info, instrument};

/// A scripted match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Scenario {
    /// Player one completes the top row on turn 5.
    Win,
    /// Nine moves, no line.
    Tie,
}

impl Scenario {
    /// The tiles of the script, in play order.
    pub fn script(self) -> &'static [(u8, u8)] {
        match self {
            Scenario::Win => &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
            Scenario::Tie => &[
                (0, 0),
                (1, 1),
                (2, 0),
                (1, 0),
                (1, 2),
                (0, 1),
                (2, 1),
                (2, 2),
                (0, 2),
            ],
        }
    }

    /// Sets up a game under `key` and plays the script, each move signed
    /// by whoever is on turn.
    ///
    /// # Errors
    ///
    /// The first error from [`GameProgram::setup_game`] or
    /// [`GameProgram::play`].
    #[instrument(skip(self, program, player_one, player_two), fields(scenario = %self, game = %key))]
    pub fn run<S: RecordStore>(
        self,
        program: &GameProgram<S>,
        key: &GameKey,
        player_one: Identity,
        player_two: Identity,
    ) -> Result<Vec<Step>, HostError> {
        let tx = Transaction::signed_by([player_one.clone()]);
        let mut game = program.setup_game(&tx, key, player_one, player_two)?;
        let mut steps = Vec::with_capacity(self.script().len());

        for &(row, col) in self.script() {
            let mover = game
                .current_player()
                .cloned()
                .ok_or_else(|| HostError::InvalidInput("Game has not started".to_string()))?;
            let tile = Tile::new(row, col);
            let tx = Transaction::signed_by([mover.clone()]);
            game = program.play(&tx, key, &mover, tile)?;
            debug!(%tile, turn = game.turn(), "Scripted move played");
            steps.push(Step {
                mover,
                tile,
                game: game.clone(),
            });
        }

        info!(state = %game.state(), turn = game.turn(), "Scenario finished");
        Ok(steps)
    }
}

/// One scripted move and the record it produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Step {
    /// Who moved.
    mover: Identity,
    /// Where.
    tile: Tile,
    /// The stored record after the move.
    game: Game,
}
