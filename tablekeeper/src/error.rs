//! Error types for the tablekeeper library.
//!
//! Running out of tables and stale waitlist entries are ordinary outcomes,
//! not errors. This module covers the conditions that callers must handle:
//! bad input, configuration problems and, when the restaurant is configured
//! to report them, releases of tables that do not exist.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a tablekeeper error.
///
/// # Examples
///
/// ```
/// use tablekeeper::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tablekeeper library.
#[derive(Debug, Error)]
pub enum Error {
    /// A release named a table number the restaurant does not have.
    #[error("table {number} not found")]
    TableNotFound {
        /// The requested table number.
        number: u32,
    },

    /// An invalid table number was provided.
    #[error("invalid table number {value}: {reason}")]
    InvalidTableNumber {
        /// The invalid value.
        value: u32,
        /// The reason the number is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration or scenario document could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A snapshot could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<crate::table::InvalidTableNumberError> for Error {
    fn from(err: crate::table::InvalidTableNumberError) -> Self {
        Self::InvalidTableNumber {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::customer::ValidationError> for Error {
    fn from(err: crate::customer::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a table does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablekeeper::Error;
    ///
    /// let err = Error::TableNotFound { number: 9 };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound { .. })
    }
}
