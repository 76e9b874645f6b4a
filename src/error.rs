//! Error types for the attendance computation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during attendance calculation.

use thiserror::Error;

/// The main error type for the attendance computation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimestamp {
///     field: "check_in_at".to_string(),
///     value: "not-a-timestamp".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid timestamp in 'check_in_at': not-a-timestamp"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required timestamp could not be parsed as an RFC 3339 instant.
    #[error("Invalid timestamp in '{field}': {value}")]
    InvalidTimestamp {
        /// The input field that failed to parse.
        field: String,
        /// The raw value that was rejected.
        value: String,
    },

    /// A shift boundary time was not a valid `HH:MM` wall-clock string.
    #[error("Invalid shift time in '{field}': {value}")]
    InvalidShiftTime {
        /// The shift field that failed to parse.
        field: String,
        /// The raw value that was rejected.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
