//! Caller-boundary validation of raw coordinates.
//!
//! The engine only sees unsigned tiles. Signed or textual input is
//! converted here first, and negative values are rejected as their own
//! error class instead of being wrapped into large unsigned numbers.

use crate::Tile;
use tracing::{instrument, warn};

/// Which coordinate a [`BoundaryError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// The row coordinate.
    Row,
    /// The column coordinate.
    Col,
}

/// Raw coordinate input that cannot become a [`Tile`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoundaryError {
    /// A coordinate was below zero.
    #[display("{} coordinate {} is negative", _0, _1)]
    NegativeCoordinate(Axis, i64),

    /// A coordinate does not fit the unsigned tile type.
    #[display("{} coordinate {} is too large", _0, _1)]
    CoordinateTooLarge(Axis, i64),

    /// Text input was not of the form `row,col`.
    #[display("Malformed tile '{}', expected 'row,col'", _0)]
    Malformed(String),
}

impl std::error::Error for BoundaryError {}

fn coordinate(axis: Axis, value: i64) -> Result<u8, BoundaryError> {
    if value < 0 {
        warn!(%axis, value, "Negative coordinate rejected at boundary");
        return Err(BoundaryError::NegativeCoordinate(axis, value));
    }
    u8::try_from(value).map_err(|_| BoundaryError::CoordinateTooLarge(axis, value))
}

impl Tile {
    /// Converts signed caller input into a tile.
    ///
    /// Values in `3..=255` are accepted here; the engine rejects them
    /// with `TileOutOfBounds`.
    ///
    /// # Errors
    ///
    /// [`BoundaryError::NegativeCoordinate`] or
    /// [`BoundaryError::CoordinateTooLarge`].
    #[instrument]
    pub fn from_signed(row: i64, col: i64) -> Result<Self, BoundaryError> {
        Ok(Tile::new(coordinate(Axis::Row, row)?, coordinate(Axis::Col, col)?))
    }
}

impl std::str::FromStr for Tile {
    type Err = BoundaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || BoundaryError::Malformed(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(malformed)?;
        let row: i64 = row.trim().parse().map_err(|_| malformed())?;
        let col: i64 = col.trim().parse().map_err(|_| malformed())?;
        Tile::from_signed(row, col)
    }
}
