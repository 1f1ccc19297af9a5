//! Financial engine error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during financial calculations
#[derive(Debug, Deserialize, Error, PartialEq, Serialize)]
pub enum FinanceError {
    /// Non-finite numeric input (NaN or infinity)
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: String, value: f64 },

    /// Configured fee rate is unusable
    #[error("platform fee percent must be finite and non-negative, got {0}")]
    InvalidFeePercent(f64),
}

/// Result type for financial operations
pub type FinanceResult<T> = Result<T, FinanceError>;
