//! Comparison engines backing the assertions.
//!
//! Every engine is a pure function from its inputs to a small diff value
//! that is rendered into the failure message:
//!
//! - [`binary`] - first differing byte between two sources
//! - [`text`] - line-based edit list between two decoded texts
//! - [`digest`] - streamed message digests
//! - [`parameters`] - URI query parameters and their reconciliation
//! - [`entries`] - set differences between map entries
//! - [`charset`] - the character sets text content is decoded with
//!
//! # Example
//!
//! ```rust
//! use testkit_assert::diff::{binary, text};
//!
//! assert!(binary::diff_bytes(b"abc", b"abc").has_no_diff());
//! assert!(text::diff_text("x\r\ny", "x\ny").is_empty());
//! ```

pub mod binary;
pub mod charset;
pub mod digest;
pub mod entries;
pub mod parameters;
pub mod text;
