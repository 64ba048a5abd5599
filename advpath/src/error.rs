//! Error types for the advpath library.
//!
//! Path values themselves never fail to construct; the only core failure is a
//! common-prefix request with too few inputs. The remaining variants cover the
//! configuration layer and host lookups.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an advpath error.
///
/// # Examples
///
/// ```
/// use advpath::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(2)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the advpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation was called with arguments outside its contract.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },

    /// A filesystem path could not be used.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The offending path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error is an argument contract violation.
    ///
    /// # Examples
    ///
    /// ```
    /// use advpath::Error;
    ///
    /// let err = Error::InvalidArgument { reason: "need two paths".into() };
    /// assert!(err.is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
