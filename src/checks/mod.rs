//! Result-returning checks.
//!
//! Each check verifies one expectation about its subject and reports
//! through [`Error`](crate::error::Error):
//!
//! - precondition violations are [`Error::InvalidArgument`](crate::error::Error::InvalidArgument)
//!   and are raised before any I/O,
//! - a missing subject or a mismatch is an assertion failure built by
//!   [`AssertionInfo::failure`](crate::config::AssertionInfo::failure),
//! - environment failures are wrapped in [`Error::Io`](crate::error::Error::Io).
//!
//! The fluent builders in [`crate::assertions`] call these and panic on
//! error; the checks can also be used directly:
//!
//! ```rust
//! use std::path::Path;
//! use testkit_assert::checks::paths;
//! use testkit_assert::config::AssertionInfo;
//!
//! let info = AssertionInfo::new();
//! assert!(paths::assert_is_absolute(&info, Path::new("/tmp")).is_ok());
//! assert!(paths::assert_is_relative(&info, Path::new("/tmp")).is_err());
//! ```

pub mod input_streams;
pub mod maps;
pub mod paths;
pub mod range_sets;
pub mod temporals;
pub mod uris;

use crate::error::{Error, Result};

/// Validate a "look for" argument.
///
/// Returns `Ok(true)` when both the argument and the subject are empty, in
/// which case the check trivially passes.
pub(crate) fn check_look_for(look_for_len: usize, subject_is_empty: bool, what: &str) -> Result<bool> {
    if look_for_len > 0 {
        return Ok(false);
    }
    if subject_is_empty {
        return Ok(true);
    }
    Err(Error::invalid_argument(format!(
        "The {what} to look for should not be empty"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_look_for() {
        assert!(!check_look_for(2, false, "keys").unwrap());
        assert!(check_look_for(0, true, "keys").unwrap());
        let err = check_look_for(0, false, "keys").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "The keys to look for should not be empty");
    }
}
