//! Binary content comparison.
//!
//! Locates the first byte at which an actual source and the expected bytes
//! differ. The actual source is read in chunks and never buffered whole.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::representation;

const CHUNK_SIZE: usize = 8 * 1024;

/// Outcome of a binary comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryDiffResult {
    /// Both sources hold the same bytes.
    NoDiff,
    /// The sources differ at `offset`.
    ///
    /// A `None` byte means that source ended at `offset`.
    Mismatch {
        /// Zero-based offset of the first difference.
        offset: u64,
        /// Actual byte at `offset`.
        actual: Option<u8>,
        /// Expected byte at `offset`.
        expected: Option<u8>,
    },
}

impl BinaryDiffResult {
    /// Returns `true` when the sources are equal.
    pub fn has_no_diff(&self) -> bool {
        matches!(self, Self::NoDiff)
    }

    /// Returns `true` when the sources differ.
    pub fn has_diff(&self) -> bool {
        !self.has_no_diff()
    }

    /// Offset of the first difference, if any.
    pub fn offset(&self) -> Option<u64> {
        match self {
            Self::NoDiff => None,
            Self::Mismatch { offset, .. } => Some(*offset),
        }
    }
}

impl fmt::Display for BinaryDiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDiff => f.write_str("no difference"),
            Self::Mismatch {
                offset,
                actual,
                expected,
            } => write!(
                f,
                "at offset <{offset}>, expecting:\n  <{}>\nbut was:\n  <{}>",
                representation::byte(*expected),
                representation::byte(*actual)
            ),
        }
    }
}

/// Compare two in-memory byte slices.
pub fn diff_bytes(actual: &[u8], expected: &[u8]) -> BinaryDiffResult {
    let result = match actual.iter().zip(expected).position(|(a, e)| a != e) {
        Some(i) => mismatch_at(i, actual, expected),
        None if actual.len() == expected.len() => BinaryDiffResult::NoDiff,
        None => mismatch_at(actual.len().min(expected.len()), actual, expected),
    };
    tracing::trace!(?result, "compared byte slices");
    result
}

fn mismatch_at(index: usize, actual: &[u8], expected: &[u8]) -> BinaryDiffResult {
    BinaryDiffResult::Mismatch {
        offset: index as u64,
        actual: actual.get(index).copied(),
        expected: expected.get(index).copied(),
    }
}

/// Compare the bytes of a stream with the expected bytes.
///
/// The stream is read until the first difference or until it ends.
///
/// # Errors
///
/// Returns any I/O error raised while reading the stream.
pub fn diff_stream<R: Read + ?Sized>(actual: &mut R, expected: &[u8]) -> io::Result<BinaryDiffResult> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut consumed = 0usize;
    loop {
        let n = read_chunk(actual, &mut buf)?;
        let remaining = &expected[consumed..];
        if n == 0 {
            let result = if remaining.is_empty() {
                BinaryDiffResult::NoDiff
            } else {
                BinaryDiffResult::Mismatch {
                    offset: consumed as u64,
                    actual: None,
                    expected: Some(remaining[0]),
                }
            };
            tracing::debug!(?result, "compared stream content");
            return Ok(result);
        }
        let chunk = &buf[..n];
        let window = &remaining[..remaining.len().min(n)];
        if let Some(i) = chunk.iter().zip(window).position(|(a, e)| a != e) {
            return Ok(BinaryDiffResult::Mismatch {
                offset: (consumed + i) as u64,
                actual: Some(chunk[i]),
                expected: Some(window[i]),
            });
        }
        if window.len() < n {
            return Ok(BinaryDiffResult::Mismatch {
                offset: (consumed + window.len()) as u64,
                actual: Some(chunk[window.len()]),
                expected: None,
            });
        }
        consumed += n;
    }
}

/// Compare the content of a file with the expected bytes.
///
/// # Errors
///
/// Returns any I/O error raised while opening or reading the file.
pub fn diff_path(actual: &Path, expected: &[u8]) -> io::Result<BinaryDiffResult> {
    let mut reader = BufReader::new(File::open(actual)?);
    diff_stream(&mut reader, expected)
}

fn read_chunk<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}
