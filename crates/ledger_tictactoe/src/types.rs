//! Core domain types for tic-tac-toe.

use crate::Identity;
use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// Mark placed on a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Sign {
    /// Mark of the first mover.
    X,
    /// Mark of the second mover.
    O,
}

impl Sign {
    /// Returns the mark placed on move number `turn` (1-based, odd is X).
    pub fn for_turn(turn: u8) -> Self {
        if turn % 2 == 1 { Sign::X } else { Sign::O }
    }

    /// Index into `players` of the player who owns this mark.
    pub fn player_index(self) -> usize {
        match self {
            Sign::X => 0,
            Sign::O => 1,
        }
    }

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Sign::X => Sign::O,
            Sign::O => Sign::X,
        }
    }
}

/// Target cell of a move, as submitted by the caller.
///
/// Coordinates are unsigned and unchecked; the engine rejects anything
/// outside `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Tile {
    /// Row index.
    pub row: u8,
    /// Column index.
    pub col: u8,
}

impl Tile {
    /// Returns `(row, col)` as board indices if both are in range.
    pub fn indices(self) -> Option<(usize, usize)> {
        let (row, col) = (usize::from(self.row), usize::from(self.col));
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some((row, col))
    }
}

impl From<(u8, u8)> for Tile {
    fn from((row, col): (u8, u8)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 board. A cell goes from empty to marked exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Sign>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit rows.
    pub fn from_rows(cells: [[Option<Sign>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the mark at `tile`, or `None` if empty or out of range.
    pub fn get(&self, tile: Tile) -> Option<Sign> {
        tile.indices().and_then(|(row, col)| self.cells[row][col])
    }

    /// Returns true if `tile` is in range and unmarked.
    pub fn is_empty_at(&self, tile: Tile) -> bool {
        matches!(tile.indices(), Some((row, col)) if self.cells[row][col].is_none())
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Option<Sign>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Number of marked cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Returns true once every cell is marked.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }

    /// Number of cells carrying `sign`.
    pub fn count(&self, sign: Sign) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(sign))
            .count()
    }

    /// Marks an in-range cell. Validation is the engine's job.
    pub(crate) fn mark(&mut self, row: usize, col: usize, sign: Sign) {
        self.cells[row][col] = Some(sign);
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(sign) => sign.to_string(),
                    None => ".".to_string(),
                })
                .collect();
            write!(f, "{}", line.join("|"))?;
            if r + 1 < BOARD_SIZE {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Lifecycle state of a game. Once `Tie` or `Won`, it never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Moves are accepted.
    #[default]
    Active,
    /// Board filled with no winning line.
    Tie,
    /// A line of three was completed by `winner`.
    Won {
        /// The mover who completed the line.
        winner: Identity,
    },
}

impl GameState {
    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, GameState::Active)
    }

    /// Returns the winner if the game was won.
    pub fn winner(&self) -> Option<&Identity> {
        match self {
            GameState::Won { winner } => Some(winner),
            GameState::Active | GameState::Tie => None,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Active => write!(f, "Active"),
            GameState::Tie => write!(f, "Tie"),
            GameState::Won { winner } => write!(f, "Won by {}", winner),
        }
    }
}
