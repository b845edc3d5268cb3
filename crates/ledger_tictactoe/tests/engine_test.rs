//! Tests for the game engine: setup, validation order, win and tie.

use ledger_tictactoe::{
    Board, Game, GameState, Identity, Sign, TicTacToeError, Tile, play, replay, setup_game,
};

const X: Option<Sign> = Some(Sign::X);
const O: Option<Sign> = Some(Sign::O);
const E: Option<Sign> = None;

fn player_one() -> Identity {
    Identity::new("4Nd1mBQtrMJVYVfKf2PJy9NZUZdTAsp7D4xWLs4gDB4T").unwrap()
}

fn player_two() -> Identity {
    Identity::new("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin").unwrap()
}

fn tiles(coords: &[(u8, u8)]) -> Vec<Tile> {
    coords.iter().copied().map(Tile::from).collect()
}

fn new_game() -> Game {
    setup_game(player_one(), player_two()).expect("Setup failed")
}

/// Plays `tiles` alternately as player one and player two, asserting each
/// intermediate record.
fn play_expecting(mut game: Game, steps: &[((u8, u8), GameState, Board, u8)]) -> Game {
    for (tile, state, board, turn) in steps {
        let mover = game.current_player().cloned().expect("Started game");
        game = play(&game, Tile::from(*tile), &mover).expect("Valid move");
        assert_eq!(game.state(), state, "state after {tile:?}");
        assert_eq!(game.board(), board, "board after {tile:?}");
        assert_eq!(game.turn(), *turn, "turn after {tile:?}");
        assert_eq!(game.players(), &[player_one(), player_two()]);
    }
    game
}

#[test]
fn test_setup_initializes_record() {
    let game = new_game();
    assert_eq!(game.turn(), 1);
    assert_eq!(game.players(), &[player_one(), player_two()]);
    assert_eq!(game.state(), &GameState::Active);
    assert_eq!(game.board(), &Board::new());
}

#[test]
fn test_player_one_wins() {
    let won = GameState::Won {
        winner: player_one(),
    };
    let game = play_expecting(
        new_game(),
        &[
            ((0, 0), GameState::Active, Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]), 2),
            ((1, 0), GameState::Active, Board::from_rows([[X, E, E], [O, E, E], [E, E, E]]), 3),
            ((0, 1), GameState::Active, Board::from_rows([[X, X, E], [O, E, E], [E, E, E]]), 4),
            ((1, 1), GameState::Active, Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]), 5),
            ((0, 2), won.clone(), Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]), 6),
        ],
    );

    // Replaying the winning move is rejected and changes nothing.
    let before = game.clone();
    assert_eq!(
        play(&game, Tile::new(0, 2), &player_one()),
        Err(TicTacToeError::GameAlreadyOver)
    );
    assert_eq!(game, before);
    assert_eq!(game.state(), &won);
}

#[test]
fn test_tie_game() {
    let game = play_expecting(
        new_game(),
        &[
            ((0, 0), GameState::Active, Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]), 2),
            ((1, 1), GameState::Active, Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]), 3),
            ((2, 0), GameState::Active, Board::from_rows([[X, E, E], [E, O, E], [X, E, E]]), 4),
            ((1, 0), GameState::Active, Board::from_rows([[X, E, E], [O, O, E], [X, E, E]]), 5),
            ((1, 2), GameState::Active, Board::from_rows([[X, E, E], [O, O, X], [X, E, E]]), 6),
            ((0, 1), GameState::Active, Board::from_rows([[X, O, E], [O, O, X], [X, E, E]]), 7),
            ((2, 1), GameState::Active, Board::from_rows([[X, O, E], [O, O, X], [X, X, E]]), 8),
            ((2, 2), GameState::Active, Board::from_rows([[X, O, E], [O, O, X], [X, X, O]]), 9),
            ((0, 2), GameState::Tie, Board::from_rows([[X, O, X], [O, O, X], [X, X, O]]), 10),
        ],
    );

    assert_eq!(game.board().filled_count(), 9);
    assert_eq!(
        play(&game, Tile::new(0, 0), &player_one()),
        Err(TicTacToeError::GameAlreadyOver)
    );
}

#[test]
fn test_win_on_last_cell_is_not_a_tie() {
    // X completes the main diagonal with the ninth mark.
    let tiles = tiles(&[(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (2, 0), (1, 0), (2, 1), (2, 2)]);
    let game = replay([player_one(), player_two()], &tiles).unwrap();
    assert_eq!(
        game.state(),
        &GameState::Won {
            winner: player_one()
        }
    );
    assert_eq!(game.turn(), 10);
}

#[test]
fn test_second_mover_can_win() {
    let tiles = tiles(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    let game = replay([player_one(), player_two()], &tiles).unwrap();
    assert_eq!(
        game.state(),
        &GameState::Won {
            winner: player_two()
        }
    );
    assert_eq!(game.turn(), 7);
}

#[test]
fn test_out_of_bounds() {
    let game = new_game();
    for tile in [Tile::new(3, 0), Tile::new(0, 3), Tile::new(255, 255)] {
        assert_eq!(
            play(&game, tile, &player_one()),
            Err(TicTacToeError::TileOutOfBounds)
        );
    }
}

#[test]
fn test_tile_already_set() {
    let game = play(&new_game(), Tile::new(0, 0), &player_one()).unwrap();
    let before = game.clone();
    // Correct mover, taken tile.
    assert_eq!(
        play(&game, Tile::new(0, 0), &player_two()),
        Err(TicTacToeError::TileAlreadySet)
    );
    // Wrong mover, taken tile: the tile check comes first.
    assert_eq!(
        play(&game, Tile::new(0, 0), &player_one()),
        Err(TicTacToeError::TileAlreadySet)
    );
    assert_eq!(game, before);
}

#[test]
fn test_not_players_turn() {
    let game = new_game();
    let stranger = Identity::new("mallory").unwrap();
    assert_eq!(
        play(&game, Tile::new(1, 1), &player_two()),
        Err(TicTacToeError::NotPlayersTurn)
    );
    assert_eq!(
        play(&game, Tile::new(1, 1), &stranger),
        Err(TicTacToeError::NotPlayersTurn)
    );
    assert_eq!(game, new_game());
}

#[test]
fn test_start_on_started_record() {
    let mut game = new_game();
    assert_eq!(
        game.start([player_two(), player_one()]),
        Err(TicTacToeError::GameAlreadyStarted)
    );
    assert_eq!(game.players(), &[player_one(), player_two()]);
}

#[test]
fn test_record_layout_serializes() {
    let game = play(&new_game(), Tile::new(1, 2), &player_one()).unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["turn"], 2);
    assert_eq!(json["state"], "Active");
    assert_eq!(json["board"]["cells"][1][2], "X");
    assert_eq!(json["players"][0], player_one().as_str());

    let back: Game = serde_json::from_value(json).unwrap();
    assert_eq!(back, game);
}

#[test]
fn test_won_state_serializes_winner() {
    let tiles = tiles(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let game = replay([player_one(), player_two()], &tiles).unwrap();
    let json = serde_json::to_value(game.state()).unwrap();
    assert_eq!(json["Won"]["winner"], player_one().as_str());
}

#[test]
fn test_exhausted_turn_counter_is_rejected() {
    let json = serde_json::json!({
        "players": [player_one().as_str(), player_two().as_str()],
        "turn": 255,
        "board": { "cells": [[null, null, null], [null, null, null], [null, null, null]] },
        "state": "Active",
    });
    let game: Game = serde_json::from_value(json).unwrap();
    let result = play(&game, Tile::new(0, 0), &player_two());
    assert!(matches!(result, Err(TicTacToeError::InvariantViolation(_))));
    assert_eq!(result.unwrap_err().code(), 6100);
}

#[test]
fn test_inconsistent_record_is_rejected_before_move_checks() {
    // Turn 3 claims two marks, the board has none.
    let json = serde_json::json!({
        "players": [player_one().as_str(), player_two().as_str()],
        "turn": 3,
        "board": { "cells": [[null, null, null], [null, null, null], [null, null, null]] },
        "state": "Active",
    });
    let game: Game = serde_json::from_value(json).unwrap();
    assert!(matches!(
        play(&game, Tile::new(9, 9), &player_two()),
        Err(TicTacToeError::InvariantViolation(_))
    ));
}
