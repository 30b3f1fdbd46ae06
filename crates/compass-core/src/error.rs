//! Centralized error types for Niche Compass.

use thiserror::Error;

/// Main error type for analysis operations.
#[derive(Error, Debug)]
pub enum CompassError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Fees ({fee_pct}%) plus desired margin ({margin_pct}%) must stay below 100%")]
    DegenerateMargin { fee_pct: f64, margin_pct: f64 },

    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type for analysis operations.
pub type CompassResult<T> = Result<T, CompassError>;

impl CompassError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }
}
