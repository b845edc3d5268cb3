//! Host error types.

use crate::GameKey;
use derive_more::{Display, Error};
use ledger_tictactoe::{BoundaryError, Identity, IdentityError, TicTacToeError};
use tracing::instrument;

/// Storage failure with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Storage error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new storage error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error returned by a [`GameProgram`](crate::GameProgram) entry point.
///
/// Domain rejections pass through untouched in [`HostError::Domain`], so
/// their codes survive the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum HostError {
    /// The record slot is already occupied.
    #[display("Game '{key}' is already allocated")]
    AllocationConflict {
        /// Key of the occupied slot.
        key: GameKey,
    },

    /// No record exists under the key.
    #[display("Game '{key}' not found")]
    RecordNotFound {
        /// Requested key.
        key: GameKey,
    },

    /// The identity did not sign the transaction.
    #[display("Missing signature from {}", identity.short())]
    MissingSignature {
        /// Identity whose signature is required.
        identity: Identity,
    },

    /// The backing store failed.
    #[display("{}", _0)]
    Storage(StoreError),

    /// A stored record could not be encoded or decoded.
    #[display("Serialization error: {}", _0)]
    Serialization(String),

    /// Caller input was rejected before reaching the engine.
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),

    /// The engine rejected the transition.
    #[display("{}", _0)]
    Domain(TicTacToeError),
}

impl HostError {
    /// Stable numeric error code. Domain errors keep their own code.
    pub fn code(&self) -> u32 {
        match self {
            HostError::AllocationConflict { .. } => 100,
            HostError::RecordNotFound { .. } => 101,
            HostError::MissingSignature { .. } => 102,
            HostError::Storage(_) => 103,
            HostError::Serialization(_) => 104,
            HostError::InvalidInput(_) => 105,
            HostError::Domain(e) => e.code(),
        }
    }

    /// Stable symbolic error code.
    pub fn name(&self) -> &'static str {
        match self {
            HostError::AllocationConflict { .. } => "AllocationConflict",
            HostError::RecordNotFound { .. } => "RecordNotFound",
            HostError::MissingSignature { .. } => "MissingSignature",
            HostError::Storage(_) => "Storage",
            HostError::Serialization(_) => "Serialization",
            HostError::InvalidInput(_) => "InvalidInput",
            HostError::Domain(e) => e.name(),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HostError::Storage(e) => Some(e),
            HostError::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TicTacToeError> for HostError {
    fn from(err: TicTacToeError) -> Self {
        Self::Domain(err)
    }
}

impl From<StoreError> for HostError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err)
    }
}

impl From<diesel::result::Error> for HostError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        Self::Storage(StoreError::new(format!("Diesel error: {}", err)))
    }
}

impl From<diesel::ConnectionError> for HostError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        Self::Storage(StoreError::new(format!("Connection error: {}", err)))
    }
}

impl From<serde_json::Error> for HostError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<IdentityError> for HostError {
    fn from(err: IdentityError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}

impl From<BoundaryError> for HostError {
    fn from(err: BoundaryError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
