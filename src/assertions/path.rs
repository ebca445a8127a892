//! Fluent assertions on filesystem paths.

use std::path::{Path, PathBuf};

use super::matcher::{satisfies, Matcher};
use super::{descriptive, require, verify};
use crate::checks::paths;
use crate::config::{AssertionInfo, Configuration};
use crate::diff::charset::Charset;
use crate::diff::digest::{DigestAlgorithmRef, ExpectedDigest};
use crate::path::PathPattern;

/// Create a path assertion builder.
///
/// ```rust
/// use testkit_assert::assertions::assert_path;
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(dir.path().join("notes.txt"), "hello\n").unwrap();
///
/// assert_path(dir.path())
///     .is_directory()
///     .is_directory_containing_pattern("glob:**/*.txt");
/// assert_path(dir.path().join("notes.txt"))
///     .has_extension("txt")
///     .has_content("hello\n");
/// ```
pub fn assert_path(actual: impl AsRef<Path>) -> PathAssert {
    PathAssert {
        actual: actual.as_ref().to_path_buf(),
        info: AssertionInfo::new(),
        charset: None,
    }
}

/// Fluent assertion builder for paths.
///
/// Created by [`assert_path`]. Methods without a `_raw` suffix resolve the
/// path through the filesystem and follow symbolic links.
#[derive(Debug)]
pub struct PathAssert {
    actual: PathBuf,
    info: AssertionInfo,
    charset: Option<Charset>,
}

descriptive!(impl [] PathAssert);

impl PathAssert {
    /// Read text content with `charset` instead of the configured default.
    #[must_use]
    pub fn using_charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    /// Read text content with the charset named `name`.
    ///
    /// # Panics
    ///
    /// Panics if the charset is unknown.
    #[track_caller]
    #[must_use]
    pub fn using_charset_name(self, name: &str) -> Self {
        let charset = require(Charset::for_name(name));
        self.using_charset(charset)
    }

    fn charset(&self) -> Charset {
        self.charset
            .unwrap_or_else(|| Configuration::current().default_charset())
    }

    // -------------------------------------------------------------------------
    // Existence and kind
    // -------------------------------------------------------------------------

    /// Assert the path exists, following symbolic links.
    ///
    /// # Panics
    ///
    /// Panics if nothing exists at the path, or if it is a dangling link.
    #[track_caller]
    pub fn exists(self) -> Self {
        verify(paths::assert_exists(&self.info, &self.actual));
        self
    }

    /// Assert the path exists, without following a final symbolic link.
    #[track_caller]
    pub fn exists_no_follow_links(self) -> Self {
        verify(paths::assert_exists_no_follow_links(&self.info, &self.actual));
        self
    }

    /// Assert nothing exists at the path.
    #[track_caller]
    pub fn does_not_exist(self) -> Self {
        verify(paths::assert_does_not_exist(&self.info, &self.actual));
        self
    }

    /// Assert the path is a regular file.
    #[track_caller]
    pub fn is_regular_file(self) -> Self {
        verify(paths::assert_is_regular_file(&self.info, &self.actual));
        self
    }

    /// Assert the path is a directory.
    #[track_caller]
    pub fn is_directory(self) -> Self {
        verify(paths::assert_is_directory(&self.info, &self.actual));
        self
    }

    /// Assert the path is a symbolic link.
    #[track_caller]
    pub fn is_symbolic_link(self) -> Self {
        verify(paths::assert_is_symbolic_link(&self.info, &self.actual));
        self
    }

    /// Assert the path exists and can be read.
    #[track_caller]
    pub fn is_readable(self) -> Self {
        verify(paths::assert_is_readable(&self.info, &self.actual));
        self
    }

    /// Assert the path exists and is not read-only.
    #[track_caller]
    pub fn is_writable(self) -> Self {
        verify(paths::assert_is_writable(&self.info, &self.actual));
        self
    }

    /// Assert the path exists and can be executed.
    #[track_caller]
    pub fn is_executable(self) -> Self {
        verify(paths::assert_is_executable(&self.info, &self.actual));
        self
    }

    // -------------------------------------------------------------------------
    // Shape and relationships
    // -------------------------------------------------------------------------

    /// Assert the path is absolute.
    #[track_caller]
    pub fn is_absolute(self) -> Self {
        verify(paths::assert_is_absolute(&self.info, &self.actual));
        self
    }

    /// Assert the path is relative.
    #[track_caller]
    pub fn is_relative(self) -> Self {
        verify(paths::assert_is_relative(&self.info, &self.actual));
        self
    }

    /// Assert the path has no `.` segment and no foldable `..` segment.
    #[track_caller]
    pub fn is_normalized(self) -> Self {
        verify(paths::assert_is_normalized(&self.info, &self.actual));
        self
    }

    /// Assert the path is already canonical.
    #[track_caller]
    pub fn is_canonical(self) -> Self {
        verify(paths::assert_is_canonical(&self.info, &self.actual));
        self
    }

    /// Assert the canonical parent of the path is the canonical `expected`.
    #[track_caller]
    pub fn has_parent(self, expected: impl AsRef<Path>) -> Self {
        verify(paths::assert_has_parent(&self.info, &self.actual, expected.as_ref()));
        self
    }

    /// Assert the lexical parent of the path is `expected`.
    #[track_caller]
    pub fn has_parent_raw(self, expected: impl AsRef<Path>) -> Self {
        verify(paths::assert_has_parent_raw(&self.info, &self.actual, expected.as_ref()));
        self
    }

    /// Assert the canonical path is a root.
    #[track_caller]
    pub fn has_no_parent(self) -> Self {
        verify(paths::assert_has_no_parent(&self.info, &self.actual));
        self
    }

    /// Assert the path has at most one segment.
    #[track_caller]
    pub fn has_no_parent_raw(self) -> Self {
        verify(paths::assert_has_no_parent_raw(&self.info, &self.actual));
        self
    }

    /// Assert the canonical path starts with the canonical `other`.
    #[track_caller]
    pub fn starts_with(self, other: impl AsRef<Path>) -> Self {
        verify(paths::assert_starts_with(&self.info, &self.actual, other.as_ref()));
        self
    }

    /// Assert the path's segments start with those of `other`.
    #[track_caller]
    pub fn starts_with_raw(self, other: impl AsRef<Path>) -> Self {
        verify(paths::assert_starts_with_raw(&self.info, &self.actual, other.as_ref()));
        self
    }

    /// Assert the canonical path ends with the normalized `other`.
    #[track_caller]
    pub fn ends_with(self, other: impl AsRef<Path>) -> Self {
        verify(paths::assert_ends_with(&self.info, &self.actual, other.as_ref()));
        self
    }

    /// Assert the path's segments end with those of `other`.
    #[track_caller]
    pub fn ends_with_raw(self, other: impl AsRef<Path>) -> Self {
        verify(paths::assert_ends_with_raw(&self.info, &self.actual, other.as_ref()));
        self
    }

    /// Assert the last segment of the path is `expected`.
    #[track_caller]
    pub fn has_file_name(self, expected: &str) -> Self {
        verify(paths::assert_has_file_name(&self.info, &self.actual, expected));
        self
    }

    // -------------------------------------------------------------------------
    // Files
    // -------------------------------------------------------------------------

    /// Assert the path is a regular file of `expected` bytes.
    #[track_caller]
    pub fn has_size(self, expected: u64) -> Self {
        verify(paths::assert_has_size(&self.info, &self.actual, expected));
        self
    }

    /// Assert the path is an empty regular file.
    #[track_caller]
    pub fn is_empty_file(self) -> Self {
        verify(paths::assert_is_empty_file(&self.info, &self.actual));
        self
    }

    /// Assert the path is a regular file with content.
    #[track_caller]
    pub fn is_not_empty_file(self) -> Self {
        verify(paths::assert_is_not_empty_file(&self.info, &self.actual));
        self
    }

    /// Assert the path is a regular file with extension `expected`.
    #[track_caller]
    pub fn has_extension(self, expected: &str) -> Self {
        verify(paths::assert_has_extension(&self.info, &self.actual, expected));
        self
    }

    /// Assert the path is a regular file without extension.
    #[track_caller]
    pub fn has_no_extension(self) -> Self {
        verify(paths::assert_has_no_extension(&self.info, &self.actual));
        self
    }

    /// Assert the file's text equals `expected`, modulo line endings.
    #[track_caller]
    pub fn has_content(self, expected: &str) -> Self {
        verify(paths::assert_has_text_content(
            &self.info,
            &self.actual,
            expected,
            self.charset(),
        ));
        self
    }

    /// Assert the file has the same text as `expected`, both read with the
    /// current charset.
    #[track_caller]
    pub fn has_same_text_content_as(self, expected: impl AsRef<Path>) -> Self {
        let charset = self.charset();
        self.has_same_text_content_as_with_charset(expected, charset)
    }

    /// Assert the file has the same text as `expected` read with
    /// `expected_charset`.
    #[track_caller]
    pub fn has_same_text_content_as_with_charset(
        self,
        expected: impl AsRef<Path>,
        expected_charset: Charset,
    ) -> Self {
        verify(paths::assert_has_same_text_content_as(
            &self.info,
            &self.actual,
            self.charset(),
            expected.as_ref(),
            expected_charset,
        ));
        self
    }

    /// Assert the file's bytes are `expected`.
    #[track_caller]
    pub fn has_binary_content(self, expected: &[u8]) -> Self {
        verify(paths::assert_has_binary_content(&self.info, &self.actual, expected));
        self
    }

    /// Assert the file holds the same bytes as `expected`.
    #[track_caller]
    pub fn has_same_binary_content_as(self, expected: impl AsRef<Path>) -> Self {
        verify(paths::assert_has_same_binary_content_as(
            &self.info,
            &self.actual,
            expected.as_ref(),
        ));
        self
    }

    /// Assert the digest of the file's content.
    ///
    /// `algorithm` is a name such as `"SHA-256"` or a
    /// [`DigestAlgorithm`](crate::diff::digest::DigestAlgorithm);
    /// `expected` is hex text or raw bytes.
    ///
    /// ```rust
    /// use testkit_assert::assertions::assert_path;
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let file = dir.path().join("abc");
    /// std::fs::write(&file, "abc").unwrap();
    ///
    /// assert_path(&file).has_digest("MD5", "900150983cd24fb0d6963f7d28e17f72");
    /// ```
    #[track_caller]
    pub fn has_digest(
        self,
        algorithm: impl Into<DigestAlgorithmRef>,
        expected: impl Into<ExpectedDigest>,
    ) -> Self {
        verify(paths::assert_has_digest(
            &self.info,
            &self.actual,
            &algorithm.into(),
            &expected.into(),
        ));
        self
    }

    // -------------------------------------------------------------------------
    // Directories
    // -------------------------------------------------------------------------

    /// Assert a direct entry of the directory matches `filter`.
    #[track_caller]
    pub fn is_directory_containing(self, filter: impl Matcher<Path>) -> Self {
        verify(paths::assert_is_directory_containing(&self.info, &self.actual, &filter));
        self
    }

    /// Assert a direct entry of the directory satisfies `filter`.
    #[track_caller]
    pub fn is_directory_containing_matching<F>(self, filter: F) -> Self
    where
        F: Fn(&Path) -> bool,
    {
        self.is_directory_containing(satisfies(filter, "the given filter"))
    }

    /// Assert a direct entry of the directory matches a `glob:` or `regex:`
    /// pattern.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is invalid, before touching the filesystem.
    #[track_caller]
    pub fn is_directory_containing_pattern(self, syntax_and_pattern: &str) -> Self {
        let pattern = require(PathPattern::parse(syntax_and_pattern));
        self.is_directory_containing(pattern)
    }

    /// Assert an entry at any depth below the directory matches `filter`.
    #[track_caller]
    pub fn is_directory_recursively_containing(self, filter: impl Matcher<Path>) -> Self {
        verify(paths::assert_is_directory_recursively_containing(
            &self.info,
            &self.actual,
            &filter,
        ));
        self
    }

    /// Assert an entry at any depth satisfies `filter`.
    #[track_caller]
    pub fn is_directory_recursively_containing_matching<F>(self, filter: F) -> Self
    where
        F: Fn(&Path) -> bool,
    {
        self.is_directory_recursively_containing(satisfies(filter, "the given filter"))
    }

    /// Assert an entry at any depth matches a `glob:` or `regex:` pattern.
    #[track_caller]
    pub fn is_directory_recursively_containing_pattern(self, syntax_and_pattern: &str) -> Self {
        let pattern = require(PathPattern::parse(syntax_and_pattern));
        self.is_directory_recursively_containing(pattern)
    }

    /// Assert no direct entry of the directory matches `filter`.
    #[track_caller]
    pub fn is_directory_not_containing(self, filter: impl Matcher<Path>) -> Self {
        verify(paths::assert_is_directory_not_containing(
            &self.info,
            &self.actual,
            &filter,
        ));
        self
    }

    /// Assert no direct entry of the directory satisfies `filter`.
    #[track_caller]
    pub fn is_directory_not_containing_matching<F>(self, filter: F) -> Self
    where
        F: Fn(&Path) -> bool,
    {
        self.is_directory_not_containing(satisfies(filter, "the given filter"))
    }

    /// Assert no direct entry of the directory matches a pattern.
    #[track_caller]
    pub fn is_directory_not_containing_pattern(self, syntax_and_pattern: &str) -> Self {
        let pattern = require(PathPattern::parse(syntax_and_pattern));
        self.is_directory_not_containing(pattern)
    }

    /// Assert the directory's entries are named exactly `expected`.
    #[track_caller]
    pub fn is_directory_containing_exactly(self, expected: &[&str]) -> Self {
        verify(paths::assert_is_directory_containing_exactly(
            &self.info,
            &self.actual,
            expected,
        ));
        self
    }

    /// Assert the directory has no entries.
    #[track_caller]
    pub fn is_empty_directory(self) -> Self {
        verify(paths::assert_is_empty_directory(&self.info, &self.actual));
        self
    }

    /// Assert the directory has entries.
    #[track_caller]
    pub fn is_not_empty_directory(self) -> Self {
        verify(paths::assert_is_not_empty_directory(&self.info, &self.actual));
        self
    }
}
