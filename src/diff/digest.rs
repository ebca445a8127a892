//! Message digest computation and comparison.
//!
//! Input is streamed through the digest in fixed-size chunks. Expected
//! digests can be given as hex (either case) or as raw bytes; they are
//! compared as bytes and rendered as lowercase hex.

use std::fmt;
use std::io::{self, Read};

use md5::Md5;
use sha1::Sha1;
use sha2::digest::DynDigest;
use sha2::{Sha224, Sha256, Sha384, Sha512};

use crate::error::{Error, Result, UnsupportedAlgorithm};

const CHUNK_SIZE: usize = 8 * 1024;

/// A supported digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl DigestAlgorithm {
    /// Every supported algorithm.
    pub const ALL: [DigestAlgorithm; 6] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Look up an algorithm by its standard name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] wrapping the lookup failure.
    pub fn for_name(name: &str) -> Result<Self> {
        let algorithm = match name.to_ascii_uppercase().as_str() {
            "MD5" => Self::Md5,
            "SHA-1" | "SHA1" | "SHA" => Self::Sha1,
            "SHA-224" | "SHA224" => Self::Sha224,
            "SHA-256" | "SHA256" => Self::Sha256,
            "SHA-384" | "SHA384" => Self::Sha384,
            "SHA-512" | "SHA512" => Self::Sha512,
            _ => {
                return Err(Error::UnknownAlgorithm {
                    algorithm: name.to_string(),
                    source: UnsupportedAlgorithm(name.to_string()),
                })
            }
        };
        Ok(algorithm)
    }

    /// Standard name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA-1",
            Self::Sha224 => "SHA-224",
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    fn hasher(self) -> Box<dyn DynDigest> {
        match self {
            Self::Md5 => Box::<Md5>::default(),
            Self::Sha1 => Box::<Sha1>::default(),
            Self::Sha224 => Box::<Sha224>::default(),
            Self::Sha256 => Box::<Sha256>::default(),
            Self::Sha384 => Box::<Sha384>::default(),
            Self::Sha512 => Box::<Sha512>::default(),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An algorithm given either by name or as a resolved handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestAlgorithmRef {
    /// Resolved lazily with [`DigestAlgorithm::for_name`].
    Named(String),
    /// Already resolved.
    Algorithm(DigestAlgorithm),
}

impl DigestAlgorithmRef {
    /// Resolve to an algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAlgorithm`] for unknown names.
    pub fn resolve(&self) -> Result<DigestAlgorithm> {
        match self {
            Self::Named(name) => DigestAlgorithm::for_name(name),
            Self::Algorithm(algorithm) => Ok(*algorithm),
        }
    }
}

impl From<&str> for DigestAlgorithmRef {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for DigestAlgorithmRef {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<DigestAlgorithm> for DigestAlgorithmRef {
    fn from(algorithm: DigestAlgorithm) -> Self {
        Self::Algorithm(algorithm)
    }
}

/// An expected digest, as hex text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpectedDigest {
    /// Hex encoded, either case.
    Hex(String),
    /// Raw digest bytes.
    Bytes(Vec<u8>),
}

impl ExpectedDigest {
    /// The expected digest as bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the hex text is malformed.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Self::Hex(text) => from_hex(text),
            Self::Bytes(bytes) => Ok(bytes.clone()),
        }
    }
}

impl From<&str> for ExpectedDigest {
    fn from(hex: &str) -> Self {
        Self::Hex(hex.to_string())
    }
}

impl From<String> for ExpectedDigest {
    fn from(hex: String) -> Self {
        Self::Hex(hex)
    }
}

impl From<&[u8]> for ExpectedDigest {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for ExpectedDigest {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for ExpectedDigest {
    fn from(bytes: [u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for ExpectedDigest {
    fn from(bytes: &[u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

/// Actual and expected digests of one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestDiff {
    actual: String,
    expected: String,
    algorithm: DigestAlgorithm,
}

impl DigestDiff {
    /// Build a diff from raw digests.
    pub fn new(actual: &[u8], expected: &[u8], algorithm: DigestAlgorithm) -> Self {
        Self {
            actual: hex::encode(actual),
            expected: hex::encode(expected),
            algorithm,
        }
    }

    /// Returns `true` when the digests differ.
    pub fn digests_differ(&self) -> bool {
        self.actual != self.expected
    }

    /// Lowercase hex of the actual digest.
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Lowercase hex of the expected digest.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The algorithm used.
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}

/// Decode a hex digest, ignoring case.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `text` is not valid hex.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    hex::decode(text).map_err(|e| {
        Error::invalid_argument(format!(
            "The string representation of digest <{text}> is not valid hex: {e}"
        ))
    })
}

/// Compute the digest of everything remaining in `stream`.
///
/// # Errors
///
/// Returns any I/O error raised while reading the stream.
pub fn digest_of<R: Read + ?Sized>(stream: &mut R, algorithm: DigestAlgorithm) -> io::Result<Vec<u8>> {
    let mut hasher = algorithm.hasher();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0usize;
    loop {
        let n = match stream.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
        total += n;
    }
    tracing::debug!(algorithm = algorithm.name(), bytes = total, "computed digest");
    Ok(hasher.finalize().into_vec())
}

/// Compute the digest of in-memory bytes.
pub fn digest_bytes(bytes: &[u8], algorithm: DigestAlgorithm) -> Vec<u8> {
    let mut hasher = algorithm.hasher();
    hasher.update(bytes);
    hasher.finalize().into_vec()
}

/// Digest `stream` and compare with `expected`.
///
/// # Errors
///
/// Returns any I/O error raised while reading the stream.
pub fn digest_diff<R: Read + ?Sized>(
    stream: &mut R,
    algorithm: DigestAlgorithm,
    expected: &[u8],
) -> io::Result<DigestDiff> {
    let actual = digest_of(stream, algorithm)?;
    Ok(DigestDiff::new(&actual, expected, algorithm))
}
