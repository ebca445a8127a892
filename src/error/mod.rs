//! Error definitions
//!
//! This module provides the error taxonomy shared by every check in
//! testkit-assert. Checks return [`Result`]; the fluent assertions in
//! [`crate::assertions`] panic with the rendered error instead.

use thiserror::Error;

/// Main error type for testkit-assert
#[derive(Error, Debug)]
pub enum Error {
    /// A precondition on an argument was violated before any work was done.
    #[error("{0}")]
    InvalidArgument(String),

    /// The subject under test did not meet the expectation.
    ///
    /// The message already embeds the diff describing the mismatch.
    #[error("{0}")]
    AssertionFailed(String),

    /// An I/O error occurred while reading, walking or resolving a path.
    #[error("{message}")]
    Io {
        /// What the check was doing when the error occurred.
        message: String,
        /// The underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// The requested digest algorithm is not available.
    #[error("Unable to find digest implementation for: <{algorithm}>")]
    UnknownAlgorithm {
        /// The algorithm name as given by the caller.
        algorithm: String,
        /// The underlying lookup failure.
        #[source]
        source: UnsupportedAlgorithm,
    },
}

/// Lookup failure for a digest algorithm name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0} MessageDigest not available")]
pub struct UnsupportedAlgorithm(pub String);

impl Error {
    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an assertion failure.
    #[must_use]
    pub fn assertion_failed(message: impl Into<String>) -> Self {
        Self::AssertionFailed(message.into())
    }

    /// Wrap an I/O error with a message describing the failed operation.
    #[must_use]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Returns `true` for precondition violations.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` for assertion failures (missing subject or mismatch).
    pub fn is_assertion_failure(&self) -> bool {
        matches!(self, Self::AssertionFailed(_))
    }

    /// Returns `true` for wrapped I/O errors.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = Error::io("Unable to list directory content: </tmp/x>", cause);

        assert!(err.is_io());
        assert_eq!(err.to_string(), "Unable to list directory content: </tmp/x>");
        assert_eq!(err.source().map(ToString::to_string), Some("gone".to_string()));
    }

    #[test]
    fn test_unknown_algorithm_wraps_lookup_failure() {
        let err = Error::UnknownAlgorithm {
            algorithm: "SHA-0".to_string(),
            source: UnsupportedAlgorithm("SHA-0".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "Unable to find digest implementation for: <SHA-0>"
        );
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("SHA-0 MessageDigest not available".to_string())
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        assert!(Error::invalid_argument("x").is_invalid_argument());
        assert!(!Error::invalid_argument("x").is_assertion_failure());
        assert!(Error::assertion_failed("x").is_assertion_failure());
    }
}
