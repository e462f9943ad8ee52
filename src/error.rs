//! Error types for the attendance engine.
//!
//! Attendance data itself never fails: missing or contradictory times degrade
//! into a day without a valid interval. The errors here cover configuration
//! loading and calendar preconditions only.

use thiserror::Error;

/// The main error type for the attendance engine.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidMonth { year: 2026, month: 13 };
/// assert_eq!(error.to_string(), "Invalid month 13 for year 2026 (expected 1-12)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was syntactically valid but not usable.
    #[error("Invalid setting '{field}': {message}")]
    InvalidSettings {
        /// The setting that was rejected.
        field: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A month number outside 1-12 was passed to a calendar operation.
    #[error("Invalid month {month} for year {year} (expected 1-12)")]
    InvalidMonth {
        /// The requested year.
        year: i32,
        /// The rejected month number.
        month: u32,
    },

    /// A year outside the range the holiday calendar supports.
    #[error("Unsupported year {year} (expected 1583-9999)")]
    InvalidYear {
        /// The rejected year.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
