//! Error types for the reading engine.

use thiserror::Error;

/// Result type for reading operations.
pub type ArcanaResult<T> = Result<T, ArcanaError>;

/// Errors that can occur while building or drawing a reading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArcanaError {
    /// More unique elements were requested than the source holds.
    #[error("invalid argument: cannot draw {requested} unique items from {available}")]
    InvalidArgument {
        /// Number of elements asked for.
        requested: usize,
        /// Number of elements available in the source.
        available: usize,
    },

    /// A zodiac sign name that is not one of the twelve.
    #[error("unknown sign: {0}")]
    UnknownSign(String),

    /// A reading mode name that is not recognized.
    #[error("unknown reading mode: {0} (expected daily or spread3)")]
    UnknownMode(String),

    /// A date string that is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
