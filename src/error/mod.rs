//! Error handling for the sampling roster and its reporting helpers.

pub mod util;

use std::io;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Specialized error type for roster, estimator and export operations
///
/// None of these are fatal: an operation that fails leaves the roster
/// exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum SamplingError {
    /// Operation referenced a group outside the configured set
    #[error("Unknown group: {group}")]
    UnknownGroup { group: String },

    /// Stage 1 selection attempted on an empty house frame
    #[error("No houses registered for {group}; register candidates first")]
    NoHousesRegistered { group: String },

    /// Outcome recorded for a name that was never registered
    #[error("No candidate named '{name}' in {group}")]
    CandidateNotFound { group: String, name: String },

    /// Export attempted before anyone consented
    #[error("No participants to export yet")]
    NothingToExport,

    /// Out-of-range argument or configuration value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error opening, creating or writing a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing a CSV table
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error reading or writing a Parquet table
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error building Arrow record batches
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error converting records to or from Arrow
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SamplingError {
    /// Create an invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Whether this error is a recoverable warning rather than a refusal
    ///
    /// Only an empty Stage 1 frame qualifies; callers typically log it and
    /// continue with an empty selection.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::NoHousesRegistered { .. })
    }
}

impl From<serde_arrow::Error> for SamplingError {
    fn from(error: serde_arrow::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Result type for sampling operations
pub type Result<T> = std::result::Result<T, SamplingError>;
