//! Byte streams under test.
//!
//! [`InputStream`] is a [`Read`] with an explicit rewind capability.
//! Checks consume a stream once; when [`InputStream::supports_reset`] is
//! `true` they put the stream back where they found it, otherwise the
//! stream stays advanced.
//!
//! ```rust
//! use std::io::Cursor;
//! use testkit_assert::io::{InputStream, Forward};
//!
//! assert!(Cursor::new(b"abc").supports_reset());
//! assert!(!Forward::new(&b"abc"[..]).supports_reset());
//! ```

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};

/// A readable stream that may be able to rewind to a marked position.
pub trait InputStream: Read {
    /// Whether [`mark`](Self::mark) and [`reset`](Self::reset) are supported.
    fn supports_reset(&self) -> bool {
        false
    }

    /// Remember the current position.
    ///
    /// Returns `None` when the stream cannot rewind.
    fn mark(&mut self) -> io::Result<Option<u64>> {
        Ok(None)
    }

    /// Return to a position obtained from [`mark`](Self::mark).
    fn reset(&mut self, _mark: u64) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "reset not supported",
        ))
    }
}

impl<T: AsRef<[u8]>> InputStream for Cursor<T> {
    fn supports_reset(&self) -> bool {
        true
    }

    fn mark(&mut self) -> io::Result<Option<u64>> {
        Ok(Some(self.position()))
    }

    fn reset(&mut self, mark: u64) -> io::Result<()> {
        self.set_position(mark);
        Ok(())
    }
}

impl InputStream for File {}

impl InputStream for &[u8] {}

impl<R: Read> InputStream for BufReader<R> {}

impl<S: InputStream + ?Sized> InputStream for &mut S {
    fn supports_reset(&self) -> bool {
        (**self).supports_reset()
    }

    fn mark(&mut self) -> io::Result<Option<u64>> {
        (**self).mark()
    }

    fn reset(&mut self, mark: u64) -> io::Result<()> {
        (**self).reset(mark)
    }
}

impl<S: InputStream + ?Sized> InputStream for Box<S> {
    fn supports_reset(&self) -> bool {
        (**self).supports_reset()
    }

    fn mark(&mut self) -> io::Result<Option<u64>> {
        (**self).mark()
    }

    fn reset(&mut self, mark: u64) -> io::Result<()> {
        (**self).reset(mark)
    }
}

/// Wraps a seekable reader so that it supports reset.
#[derive(Debug)]
pub struct Rewindable<R> {
    inner: R,
}

impl<R: Read + Seek> Rewindable<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for Rewindable<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read + Seek> InputStream for Rewindable<R> {
    fn supports_reset(&self) -> bool {
        true
    }

    fn mark(&mut self) -> io::Result<Option<u64>> {
        self.inner.stream_position().map(Some)
    }

    fn reset(&mut self, mark: u64) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(mark)).map(|_| ())
    }
}

/// Wraps any reader as a forward-only stream.
#[derive(Debug)]
pub struct Forward<R> {
    inner: R,
}

impl<R: Read> Forward<R> {
    /// Wrap `inner`.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for Forward<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> InputStream for Forward<R> {}

/// Run `body` on `stream`, rewinding it afterwards when it supports reset.
///
/// The stream is rewound on both the success and the error path. An error
/// from `body` takes precedence over an error from rewinding.
pub fn preserving_position<S, T, F>(stream: &mut S, body: F) -> io::Result<T>
where
    S: InputStream + ?Sized,
    F: FnOnce(&mut S) -> io::Result<T>,
{
    let mark = if stream.supports_reset() {
        stream.mark()?
    } else {
        None
    };
    let result = body(stream);
    match mark {
        Some(position) => {
            let reset = stream.reset(position);
            tracing::trace!(position, "stream rewound after check");
            let value = result?;
            reset?;
            Ok(value)
        }
        None => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_is_rewound() {
        let mut cursor = Cursor::new(b"abcdef".to_vec());
        cursor.set_position(2);

        let read = preserving_position(&mut cursor, |s| {
            let mut buf = Vec::new();
            s.read_to_end(&mut buf)?;
            Ok(buf)
        })
        .unwrap();

        assert_eq!(read, b"cdef");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_forward_stream_stays_consumed() {
        let mut stream = Forward::new(&b"abc"[..]);
        preserving_position(&mut stream, |s| {
            let mut buf = [0u8; 2];
            s.read_exact(&mut buf)
        })
        .unwrap();

        let mut rest = Vec::new();
        stream.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"c");
    }

    #[test]
    fn test_rewound_on_error() {
        let mut cursor = Cursor::new(b"abc".to_vec());
        let result: io::Result<()> = preserving_position(&mut cursor, |s| {
            let mut buf = [0u8; 1];
            s.read_exact(&mut buf)?;
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        });

        assert!(result.is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_rewindable_seekable_reader() {
        let mut stream = Rewindable::new(Cursor::new(b"xyz".to_vec()));
        assert!(stream.supports_reset());
        preserving_position(&mut stream, |s| {
            let mut buf = Vec::new();
            s.read_to_end(&mut buf).map(|_| ())
        })
        .unwrap();
        assert_eq!(stream.into_inner().position(), 0);
    }

    #[test]
    fn test_default_reset_is_unsupported() {
        let mut stream = Forward::new(&b""[..]);
        assert_eq!(stream.mark().unwrap(), None);
        assert_eq!(
            stream.reset(0).unwrap_err().kind(),
            io::ErrorKind::Unsupported
        );
    }
}
