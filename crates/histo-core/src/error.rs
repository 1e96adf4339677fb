//! Error types for the histogram engine
//!
//! Provides a unified error type for all histo crates.

use thiserror::Error;

/// Core error type for histogram computations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data (missing or empty column, malformed values)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// The category column is not numeric
    #[error("Invalid column type: expected {expected}, got {got}")]
    InvalidColumnType { expected: String, got: String },

    /// Bin geometry that cannot be rendered (NaN or infinite edges)
    #[error("Degenerate domain: {0}")]
    DegenerateDomain(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Host settings could not be decoded
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(context: &str) -> Self {
        Self::InvalidInput(format!("{context} is empty"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::DegenerateDomain(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error means "nothing to render" rather than a failed computation
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::InsufficientData { .. }
                | Self::InvalidColumnType { .. }
                | Self::DegenerateDomain(_)
        )
    }
}
