//! Bracket generation error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during bracket generation
#[derive(Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum BracketError {
    #[error("unknown tournament format: {0:?}")]
    InvalidFormat(String),

    #[error("participant count mismatch: declared {declared}, got {actual}")]
    ParticipantCountMismatch { declared: usize, actual: usize },

    #[error("participant {index} has an empty display name")]
    UnnamedParticipant { index: usize },

    #[error("group capacity must be at least 1, got {0}")]
    InvalidGroupCapacity(usize),
}

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;
