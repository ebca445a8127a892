//! # testkit-assert
//!
//! > Fluent assertions with readable failure messages
//!
//! **testkit-assert** checks files, byte streams, maps, URLs, range sets and
//! temporal values, and explains failures with diffs: line diffs for text,
//! the first differing offset for binary content, missing and unexpected
//! entries for maps and query parameters.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::HashMap;
//! use testkit_assert::prelude::*;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let report = dir.path().join("report.txt");
//! std::fs::write(&report, "ok\n").unwrap();
//!
//! assert_path(&report)
//!     .is_regular_file()
//!     .has_extension("txt")
//!     .has_content("ok\n");
//!
//! assert_path(dir.path()).is_directory_containing_pattern("glob:**/*.txt");
//!
//! let codes = HashMap::from([("ok", 200), ("missing", 404)]);
//! assert_map(&codes).contains_key("ok").does_not_contain_value(500);
//! ```
//!
//! ## Features
//!
//! - **Paths** - Existence, kind, permissions, content, digests and directory listings
//! - **Streams** - Text and binary content of any [`io::InputStream`]
//! - **Maps** - Entries, keys, values and conditions, with custom value equality
//! - **URIs** - Components and query parameters
//! - **Range sets** - Containment, enclosure and intersection
//! - **Temporal values** - Ordering, periods and closeness for chrono types
//! - **Matchers** - Reusable conditions and [`assert_that!`]
//!
//! Every check is also available as a plain function in [`checks`] that
//! returns [`Result`] instead of panicking.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod checks;
pub mod config;
pub mod diff;
pub mod error;
pub mod io;
pub mod path;
pub mod range;
pub mod representation;
pub mod temporal;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit_assert::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assert_that;
    pub use crate::assertions::matcher::{
        all_of, any_of, contains_str, ends_with, eq, ge, gt, has_extension, has_file_name, le, lt,
        not, satisfies, starts_with, Matcher,
    };
    pub use crate::assertions::{
        assert_input, assert_map, assert_path, assert_range_set, assert_temporal, assert_uri,
    };
    pub use crate::config::Configuration;
    pub use crate::diff::charset::Charset;
    pub use crate::diff::digest::DigestAlgorithm;
    pub use crate::diff::parameters::ParameterMap;
    pub use crate::error::{Error, Result};
    pub use crate::range::{Range, RangeSet};
    pub use crate::temporal::{by_less_than, within, TemporalOffset};
}

// Re-exports
pub use error::{Error, Result};
