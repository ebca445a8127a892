//! Fluent assertions on byte streams.

use super::{descriptive, require, verify};
use crate::checks::input_streams;
use crate::config::{AssertionInfo, Configuration};
use crate::diff::charset::Charset;
use crate::diff::digest::{DigestAlgorithmRef, ExpectedDigest};
use crate::io::InputStream;

/// Create a stream assertion builder.
///
/// Streams that support reset, like [`std::io::Cursor`], are rewound after
/// every check so checks can be chained. Other streams are consumed by the
/// first check that reads them.
///
/// ```rust
/// use std::io::Cursor;
/// use testkit_assert::assertions::assert_input;
///
/// let mut stream = Cursor::new(b"line 1\r\nline 2\r\n".to_vec());
/// assert_input(&mut stream)
///     .is_not_empty()
///     .has_content("line 1\nline 2\n");
///
/// let mut abc = Cursor::new(b"abc".to_vec());
/// assert_input(&mut abc).has_digest("MD5", "900150983cd24fb0d6963f7d28e17f72");
/// ```
pub fn assert_input<S>(actual: &mut S) -> InputStreamAssert<'_, S>
where
    S: InputStream + ?Sized,
{
    InputStreamAssert {
        actual,
        info: AssertionInfo::new(),
        charset: None,
    }
}

/// Fluent assertion builder for streams.
///
/// Created by [`assert_input`].
pub struct InputStreamAssert<'a, S: ?Sized> {
    actual: &'a mut S,
    info: AssertionInfo,
    charset: Option<Charset>,
}

descriptive!(impl ['a, S: ?Sized] InputStreamAssert<'a, S>);

impl<S> InputStreamAssert<'_, S>
where
    S: InputStream + ?Sized,
{
    /// Decode text with `charset` instead of the configured default.
    #[must_use]
    pub fn using_charset(mut self, charset: Charset) -> Self {
        self.charset = Some(charset);
        self
    }

    /// Decode text with the charset named `name`.
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

    /// Assert the stream has the same lines as `expected`.
    ///
    /// # Panics
    ///
    /// Panics with a line diff if the contents differ.
    #[track_caller]
    pub fn has_same_content_as<E>(mut self, expected: &mut E) -> Self
    where
        E: InputStream + ?Sized,
    {
        let charset = self.charset();
        verify(input_streams::assert_has_same_content_as(
            &self.info,
            &mut *self.actual,
            expected,
            charset,
        ));
        self
    }

    /// Assert the stream's text equals `expected`, modulo line endings.
    #[track_caller]
    pub fn has_content(mut self, expected: &str) -> Self {
        let charset = self.charset();
        verify(input_streams::assert_has_content(
            &self.info,
            &mut *self.actual,
            expected,
            charset,
        ));
        self
    }

    /// Assert the stream's bytes are `expected`.
    #[track_caller]
    pub fn has_binary_content(mut self, expected: &[u8]) -> Self {
        verify(input_streams::assert_has_binary_content(
            &self.info,
            &mut *self.actual,
            expected,
        ));
        self
    }

    /// Assert the digest of the stream's bytes.
    #[track_caller]
    pub fn has_digest(
        mut self,
        algorithm: impl Into<DigestAlgorithmRef>,
        expected: impl Into<ExpectedDigest>,
    ) -> Self {
        verify(input_streams::assert_has_digest(
            &self.info,
            &mut *self.actual,
            &algorithm.into(),
            &expected.into(),
        ));
        self
    }

    /// Assert the stream has no bytes left.
    #[track_caller]
    pub fn is_empty(mut self) -> Self {
        verify(input_streams::assert_is_empty(&self.info, &mut *self.actual));
        self
    }

    /// Assert the stream has bytes left.
    #[track_caller]
    pub fn is_not_empty(mut self) -> Self {
        verify(input_streams::assert_is_not_empty(&self.info, &mut *self.actual));
        self
    }
}
