//! Error types for the analytics layer.
//!
//! Only contract violations surface as errors. A value that cannot be
//! computed from otherwise well-formed input (zero volume, too little
//! history, a first observation with no prior close) is encoded as a null
//! or an excluded row in the output, never as an `Err`.

use thiserror::Error;

/// Result type for analytics operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;

/// Errors that can occur while deriving analytics from a price table.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Missing required column in the input table
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Polars DataFrame error
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}
