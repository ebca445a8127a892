//! `syntax:pattern` path matchers.

use std::fmt;
use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;

use crate::assertions::matcher::Matcher;
use crate::error::{Error, Result};

/// A path matcher built from a `glob:` or `regex:` pattern.
///
/// The pattern is matched against the whole path as given, not just its
/// file name. In globs `*` stays within one segment and `**` crosses
/// segments.
///
/// ```rust
/// use std::path::Path;
/// use testkit_assert::assertions::matcher::Matcher;
/// use testkit_assert::path::PathPattern;
///
/// let pattern = PathPattern::parse("glob:**/*.txt").unwrap();
/// assert!(pattern.matches(Path::new("/tmp/dir/notes.txt")));
///
/// let pattern = PathPattern::parse("regex:.*/file[0-9]").unwrap();
/// assert!(pattern.matches(Path::new("/tmp/file7")));
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
    source: String,
    kind: PatternKind,
}

#[derive(Debug, Clone)]
enum PatternKind {
    Glob(GlobMatcher),
    Regex(Regex),
}

impl PathPattern {
    /// Parse a `syntax:pattern` string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the syntax is neither `glob`
    /// nor `regex`, or when the pattern does not compile.
    pub fn parse(syntax_and_pattern: &str) -> Result<Self> {
        let Some((syntax, pattern)) = syntax_and_pattern.split_once(':') else {
            return Err(Error::invalid_argument(format!(
                "The syntax and pattern <{syntax_and_pattern}> should be of the form syntax:pattern"
            )));
        };
        let kind = match syntax.to_ascii_lowercase().as_str() {
            "glob" => {
                let glob = GlobBuilder::new(pattern)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| {
                        Error::invalid_argument(format!("Invalid glob pattern <{pattern}>: {e}"))
                    })?;
                PatternKind::Glob(glob.compile_matcher())
            }
            "regex" => {
                let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
                    Error::invalid_argument(format!("Invalid regex pattern <{pattern}>: {e}"))
                })?;
                PatternKind::Regex(regex)
            }
            _ => {
                return Err(Error::invalid_argument(format!(
                    "Syntax <{syntax}> is not recognized, expecting glob or regex"
                )))
            }
        };
        tracing::trace!(pattern = syntax_and_pattern, "compiled path pattern");
        Ok(Self {
            source: syntax_and_pattern.to_string(),
            kind,
        })
    }

    /// The `syntax:pattern` text this matcher was built from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Matcher<Path> for PathPattern {
    fn matches(&self, value: &Path) -> bool {
        match &self.kind {
            PatternKind::Glob(glob) => glob.is_match(value),
            PatternKind::Regex(regex) => regex.is_match(&value.to_string_lossy()),
        }
    }

    fn describe(&self) -> String {
        format!("the '{}' pattern", self.source)
    }

    fn describe_mismatch(&self, value: &Path) -> String {
        format!("{} does not match {}", value.display(), self.describe())
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
