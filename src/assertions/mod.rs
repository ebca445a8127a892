//! Fluent assertions.
//!
//! Each entry point wraps a subject in a builder whose methods run one
//! check and return the builder, so checks chain. A failing check panics
//! with the rendered [`Error`]; wrapped I/O errors and unknown digest
//! algorithms also show their cause.
//!
//! - [`assert_path`] - Files and directories
//! - [`assert_input`] - Byte streams
//! - [`assert_map`] - Maps and association lists
//! - [`assert_uri`] - URLs and their query parameters
//! - [`assert_range_set`] - Sets of ranges
//! - [`assert_temporal`] - Dates, times and date-times
//! - [`matcher`] - Reusable conditions and [`assert_that!`](crate::assert_that)
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use testkit_assert::assertions::assert_map;
//!
//! let ages = BTreeMap::from([("Yoda", 900), ("Luke", 19)]);
//! assert_map(&ages)
//!     .described_as("ages")
//!     .has_size(2)
//!     .contains_entry("Yoda", 900)
//!     .does_not_contain_key("Vader");
//! ```
//!
//! # Descriptions
//!
//! Every builder accepts `described_as`, which prefixes failure messages
//! with `[description] `, and `with_fail_message`, which replaces them.
//!
//! ```rust,should_panic
//! use testkit_assert::assertions::assert_path;
//!
//! assert_path("/definitely/missing")
//!     .described_as("config file")
//!     .exists();
//! ```

use std::error::Error as _;

use crate::error::{Error, Result};

mod input_stream;
mod map;
pub mod matcher;
mod path;
mod range_set;
mod temporal;
mod uri;

pub use input_stream::{assert_input, InputStreamAssert};
pub use map::{assert_map, MapAssert};
pub use path::{assert_path, PathAssert};
pub use range_set::{assert_range_set, RangeSetAssert};
pub use temporal::{assert_temporal, TemporalAssert};
pub use uri::{assert_uri, UriAssert};

/// Adds `described_as` and `with_fail_message` to a builder holding an
/// `info: AssertionInfo` field.
macro_rules! descriptive {
    (impl [$($generics:tt)*] $builder:ty) => {
        impl<$($generics)*> $builder {
            /// Prefix failure messages with `[description] `.
            #[must_use]
            pub fn described_as(mut self, description: impl Into<String>) -> Self {
                self.info.set_description(description);
                self
            }

            /// Replace failure messages with `message`.
            #[must_use]
            pub fn with_fail_message(mut self, message: impl Into<String>) -> Self {
                self.info.set_overriding_message(message);
                self
            }
        }
    };
}
pub(crate) use descriptive;

/// Panic with the rendered error if `result` is an error.
#[track_caller]
pub(crate) fn verify(result: Result<()>) {
    if let Err(error) = result {
        tracing::debug!(error = %error, "assertion failed");
        panic!("{}", render(&error));
    }
}

/// Unwrap a value needed to run an assertion, panicking like a failed one.
#[track_caller]
pub(crate) fn require<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{}", render(&error)),
    }
}

fn render(error: &Error) -> String {
    match error {
        Error::Io { .. } | Error::UnknownAlgorithm { .. } => match error.source() {
            Some(cause) => format!("{error}\ncaused by: {cause}"),
            None => error.to_string(),
        },
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_appends_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = Error::io("Unable to list directory content: </root>", cause);
        assert_eq!(
            render(&error),
            "Unable to list directory content: </root>\ncaused by: denied"
        );
    }

    #[test]
    fn test_render_plain_failure() {
        assert_eq!(render(&Error::assertion_failed("boom")), "boom");
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn test_verify_panics() {
        verify(Err(Error::assertion_failed("boom")));
    }
}
