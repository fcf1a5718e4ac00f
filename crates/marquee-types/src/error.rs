//! Error types for marquee.

use thiserror::Error;

/// Result type alias for marquee operations.
pub type Result<T> = std::result::Result<T, MarqueeError>;

/// Errors that can occur while loading and aggregating sales data.
#[derive(Error, Debug)]
pub enum MarqueeError {
    /// A sales row could not be interpreted.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The data source failed.
    #[error("Source error: {0}")]
    Source(String),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),
}

/// Error for sales fields that cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The transaction date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid transaction date: {value:?}")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
    },
}
