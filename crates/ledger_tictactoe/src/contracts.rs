//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::engine::Move;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::{Game, TicTacToeError};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), TicTacToeError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), TicTacToeError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must still be active.
pub struct GameIsActive;

impl GameIsActive {
    /// Fails with [`TicTacToeError::GameAlreadyOver`] for a finished game.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), TicTacToeError> {
        if game.is_active() {
            Ok(())
        } else {
            Err(TicTacToeError::GameAlreadyOver)
        }
    }
}

/// Precondition: row and column must both be in `0..=2`.
pub struct TileInBounds;

impl TileInBounds {
    /// Fails with [`TicTacToeError::TileOutOfBounds`].
    #[instrument]
    pub fn check(mov: &Move) -> Result<(), TicTacToeError> {
        mov.tile
            .indices()
            .map(|_| ())
            .ok_or(TicTacToeError::TileOutOfBounds)
    }
}

/// Precondition: the target cell must be empty.
pub struct TileIsEmpty;

impl TileIsEmpty {
    /// Fails with [`TicTacToeError::TileAlreadySet`].
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), TicTacToeError> {
        if game.board().is_empty_at(mov.tile) {
            Ok(())
        } else {
            Err(TicTacToeError::TileAlreadySet)
        }
    }
}

/// Precondition: the caller must be the mover for the current turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`TicTacToeError::NotPlayersTurn`].
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), TicTacToeError> {
        match game.current_player() {
            Some(expected) if *expected == mov.player => Ok(()),
            _ => Err(TicTacToeError::NotPlayersTurn),
        }
    }
}

/// Precondition: the stored record satisfies [`GameInvariants`].
///
/// Records arrive from storage and may not have come from the engine.
/// An inconsistent one, such as an exhausted turn counter, is refused
/// before any move check runs.
pub struct RecordIsConsistent;

impl RecordIsConsistent {
    /// Fails with [`TicTacToeError::InvariantViolation`].
    #[instrument(skip(game), fields(turn = game.turn()))]
    pub fn check(game: &Game) -> Result<(), TicTacToeError> {
        crate::invariants::verify(game)
    }
}

/// Composite precondition. The first failing check wins.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order: active game,
    /// bounds, empty cell, mover.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), TicTacToeError> {
        GameIsActive::check(game)?;
        TileInBounds::check(mov)?;
        TileIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: [`RecordIsConsistent`], then [`LegalMove`].
///
/// Postconditions:
/// - Turn advanced by exactly one
/// - Exactly one previously empty cell became marked, nothing else changed
/// - Players are unchanged
/// - All [`GameInvariants`] hold on the new record
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), TicTacToeError> {
        RecordIsConsistent::check(game)?;
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), TicTacToeError> {
        let mut failures = Vec::new();

        if after.turn() != before.turn().wrapping_add(1) {
            failures.push("turn advances by exactly one".to_string());
        }

        if after.players() != before.players() {
            failures.push("players are immutable".to_string());
        }

        let overwritten = before
            .board()
            .rows()
            .iter()
            .flatten()
            .zip(after.board().rows().iter().flatten())
            .any(|(old, new)| old.is_some() && old != new);
        if overwritten {
            failures.push("marked cells never change".to_string());
        }

        if after.board().filled_count() != before.board().filled_count() + 1 {
            failures.push("exactly one cell is marked per move".to_string());
        }

        if let Err(violations) = GameInvariants::check_all(after) {
            failures.extend(violations.into_iter().map(|v| v.description));
        }

        if failures.is_empty() {
            Ok(())
        } else {
            warn!(?failures, "Move postcondition failed");
            Err(TicTacToeError::InvariantViolation(format!(
                "Postcondition failed: {}",
                failures.join("; ")
            )))
        }
    }
}
