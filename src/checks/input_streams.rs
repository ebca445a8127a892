//! Checks on byte streams.
//!
//! Every check reads the stream through [`preserving_position`], so streams
//! that support reset are left where they were found.

use std::io::Read;

use crate::config::AssertionInfo;
use crate::diff::charset::Charset;
use crate::diff::digest::{self, DigestAlgorithmRef, ExpectedDigest};
use crate::diff::{binary, text};
use crate::error::{Error, Result};
use crate::io::{preserving_position, InputStream};

/// `actual` and `expected` have the same lines, both decoded with `charset`.
pub fn assert_has_same_content_as<A, E>(
    info: &AssertionInfo,
    actual: &mut A,
    expected: &mut E,
    charset: Charset,
) -> Result<()>
where
    A: InputStream + ?Sized,
    E: InputStream + ?Sized,
{
    let deltas = preserving_position(actual, |actual| {
        preserving_position(expected, |expected| {
            text::diff_streams(actual, expected, charset)
        })
    })
    .map_err(|e| Error::io("Unable to compare contents of InputStreams", e))?;
    if deltas.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "InputStreams do not have same content:\n\n{}",
        text::describe(&deltas)
    )))
}

/// The lines of `actual`, decoded with `charset`, are those of `expected`.
pub fn assert_has_content<S>(
    info: &AssertionInfo,
    actual: &mut S,
    expected: &str,
    charset: Charset,
) -> Result<()>
where
    S: InputStream + ?Sized,
{
    let deltas = preserving_position(actual, |actual| {
        text::diff_stream_with_text(actual, charset, expected)
    })
    .map_err(|e| Error::io("Unable to compare contents of InputStream and String", e))?;
    if deltas.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "InputStream does not have same content as String:\n\n{}",
        text::describe(&deltas)
    )))
}

/// The bytes of `actual` are exactly `expected`.
pub fn assert_has_binary_content<S>(info: &AssertionInfo, actual: &mut S, expected: &[u8]) -> Result<()>
where
    S: InputStream + ?Sized,
{
    let result = preserving_position(actual, |actual| binary::diff_stream(actual, expected))
        .map_err(|e| Error::io("Unable to verify binary contents of InputStream", e))?;
    if result.has_no_diff() {
        return Ok(());
    }
    Err(info.failure(format!(
        "InputStream does not have expected binary content {result}"
    )))
}

/// The digest of the bytes of `actual` equals `expected`.
///
/// The algorithm and the expected digest are validated before the stream
/// is read.
pub fn assert_has_digest<S>(
    info: &AssertionInfo,
    actual: &mut S,
    algorithm: &DigestAlgorithmRef,
    expected: &ExpectedDigest,
) -> Result<()>
where
    S: InputStream + ?Sized,
{
    let algorithm = algorithm.resolve()?;
    let expected = expected.to_bytes()?;
    let diff = preserving_position(actual, |actual| {
        digest::digest_diff(actual, algorithm, &expected)
    })
    .map_err(|e| Error::io("Unable to calculate digest of InputStream", e))?;
    if !diff.digests_differ() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting InputStream to have {} digest:\n  <{}>\nbut was:\n  <{}>",
        diff.algorithm(),
        diff.expected(),
        diff.actual()
    )))
}

/// `actual` has no bytes left.
pub fn assert_is_empty<S>(info: &AssertionInfo, actual: &mut S) -> Result<()>
where
    S: InputStream + ?Sized,
{
    if !has_next_byte(actual)? {
        return Ok(());
    }
    Err(info.failure("Expecting InputStream to be empty"))
}

/// `actual` has at least one byte left.
pub fn assert_is_not_empty<S>(info: &AssertionInfo, actual: &mut S) -> Result<()>
where
    S: InputStream + ?Sized,
{
    if has_next_byte(actual)? {
        return Ok(());
    }
    Err(info.failure("Expecting InputStream not to be empty"))
}

fn has_next_byte<S: InputStream + ?Sized>(actual: &mut S) -> Result<bool> {
    preserving_position(actual, |actual| {
        let mut byte = [0u8; 1];
        loop {
            match actual.read(&mut byte) {
                Ok(n) => return Ok(n > 0),
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    })
    .map_err(|e| Error::io("Unable to read InputStream", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::Forward;
    use std::io::{Cursor, Read};

    fn info() -> AssertionInfo {
        AssertionInfo::new()
    }

    /// Rewindable stream whose reads fail once `fail_at` is reached.
    struct Failing {
        inner: Cursor<Vec<u8>>,
        fail_at: u64,
    }

    impl Failing {
        fn new(fail_at: u64) -> Self {
            Self {
                inner: Cursor::new(b"abcdefgh".to_vec()),
                fail_at,
            }
        }
    }

    impl Read for Failing {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let left = self.fail_at.saturating_sub(self.inner.position());
            if left == 0 {
                return Err(std::io::Error::other("device gone"));
            }
            let len = buf.len().min(usize::try_from(left).unwrap_or(usize::MAX));
            self.inner.read(&mut buf[..len])
        }
    }

    impl InputStream for Failing {
        fn supports_reset(&self) -> bool {
            true
        }

        fn mark(&mut self) -> std::io::Result<Option<u64>> {
            self.inner.mark()
        }

        fn reset(&mut self, mark: u64) -> std::io::Result<()> {
            self.inner.reset(mark)
        }
    }

    #[test]
    fn test_content_ignores_line_endings() {
        let mut stream = Cursor::new(b"a\r\nb\r\n".to_vec());
        assert!(assert_has_content(&info(), &mut stream, "a\nb\n", Charset::Utf8).is_ok());
        assert_eq!(stream.position(), 0);
    }

    #[test]
    fn test_content_mismatch_reports_deltas() {
        let mut stream = Cursor::new(b"a\nb\n".to_vec());
        let err = assert_has_content(&info(), &mut stream, "a\nc\n", Charset::Utf8).unwrap_err();
        assert!(err
            .to_string()
            .starts_with("InputStream does not have same content as String:\n\n"));
    }

    #[test]
    fn test_same_content_rewinds_both() {
        let mut actual = Cursor::new(b"x\ny".to_vec());
        let mut expected = Cursor::new(b"x\ny".to_vec());
        assert!(assert_has_same_content_as(&info(), &mut actual, &mut expected, Charset::Utf8).is_ok());
        assert_eq!(actual.position(), 0);
        assert_eq!(expected.position(), 0);
    }

    #[test]
    fn test_forward_stream_is_consumed() {
        let mut stream = Forward::new(&b"abc"[..]);
        assert!(assert_has_binary_content(&info(), &mut stream, b"abc").is_ok());
        let mut rest = Vec::new();
        stream.read_to_end(&mut rest).unwrap();
        assert!(rest.is_empty());
    }

    #[test]
    fn test_binary_mismatch() {
        let mut stream = Cursor::new(vec![1u8, 2, 3]);
        let err = assert_has_binary_content(&info(), &mut stream, &[1, 2]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "InputStream does not have expected binary content at offset <2>, expecting:\n  <EOF>\nbut was:\n  <0x03>"
        );
    }

    #[test]
    fn test_digest() {
        let mut stream = Cursor::new(b"abc".to_vec());
        let md5 = "900150983cd24fb0d6963f7d28e17f72";
        assert!(assert_has_digest(&info(), &mut stream, &"MD5".into(), &md5.into()).is_ok());
        assert!(assert_has_digest(&info(), &mut stream, &"MD5".into(), &md5.to_uppercase().into()).is_ok());
        let err = assert_has_digest(&info(), &mut stream, &"SHA-1".into(), &md5.into()).unwrap_err();
        assert!(err.to_string().contains("to have SHA-1 digest"));
    }

    #[test]
    fn test_read_failure_is_wrapped() {
        let mut stream = Failing::new(3);
        let err = assert_has_binary_content(&info(), &mut stream, b"abcdefgh").unwrap_err();
        assert!(err.is_io());
        assert_eq!(err.to_string(), "Unable to verify binary contents of InputStream");
        assert_eq!(stream.inner.position(), 0);

        let err = assert_has_content(&info(), &mut stream, "abcdefgh", Charset::Utf8).unwrap_err();
        assert!(err.is_io());
        assert_eq!(stream.inner.position(), 0);

        let err = assert_has_digest(&info(), &mut stream, &"SHA-256".into(), &"00".into()).unwrap_err();
        assert!(err.is_io());
        assert_eq!(stream.inner.position(), 0);
    }

    #[test]
    fn test_read_failure_rewinds_from_mark() {
        let mut stream = Failing::new(5);
        stream.inner.set_position(2);
        let err = assert_has_binary_content(&info(), &mut stream, b"cdefgh").unwrap_err();
        assert!(err.is_io());
        assert_eq!(stream.inner.position(), 2);
    }

    #[test]
    fn test_emptiness() {
        let mut empty = Cursor::new(Vec::<u8>::new());
        let mut full = Cursor::new(b"z".to_vec());
        assert!(assert_is_empty(&info(), &mut empty).is_ok());
        assert!(assert_is_not_empty(&info(), &mut full).is_ok());
        assert!(assert_is_empty(&info(), &mut full).is_err());
        assert_eq!(full.position(), 0);
    }
}
