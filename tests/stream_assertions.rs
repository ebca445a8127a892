//! Integration tests for stream assertions.

mod common;

use std::fs::File;
use std::io::{Cursor, Read};

use common::{init_tracing, write};
use testkit_assert::io::{Forward, Rewindable};
use testkit_assert::prelude::*;

/// Checks chained on a rewindable stream all see the whole content.
#[test]
fn test_cursor_is_rewound_between_checks() {
    init_tracing();
    let mut stream = Cursor::new(b"alpha\nbeta\n".to_vec());
    stream.set_position(0);

    assert_input(&mut stream)
        .is_not_empty()
        .has_content("alpha\r\nbeta")
        .has_binary_content(b"alpha\nbeta\n")
        .has_digest(DigestAlgorithm::Sha256, testkit_assert::diff::digest::digest_bytes(
            b"alpha\nbeta\n",
            DigestAlgorithm::Sha256,
        ));

    assert_eq!(stream.position(), 0);
}

/// A file wrapped in `Rewindable` can be checked more than once.
#[test]
fn test_rewindable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "data.txt", "one\ntwo\n");
    let mut file = Rewindable::new(File::open(&path).unwrap());

    assert_input(&mut file)
        .has_content("one\ntwo")
        .has_content("one\ntwo");
}

/// A forward-only stream is consumed by the first check that reads it.
#[test]
fn test_forward_stream_is_consumed() {
    let mut stream = Forward::new(&b"payload"[..]);
    assert_input(&mut stream).has_binary_content(b"payload").is_empty();

    let mut rest = Vec::new();
    stream.read_to_end(&mut rest).unwrap();
    assert!(rest.is_empty());
}

/// Two streams with the same lines compare equal regardless of endings.
#[test]
fn test_same_content_as() {
    let mut actual = Cursor::new("a\r\nb\rc".as_bytes());
    let mut expected = Cursor::new("a\nb\nc\n".as_bytes());
    assert_input(&mut actual).has_same_content_as(&mut expected);
}

/// Missing lines are reported with their line number.
#[test]
#[should_panic(expected = "Missing content at line 3:\n  [\"c\"]")]
fn test_same_content_as_missing_line() {
    let mut actual = Cursor::new(b"a\nb\n".to_vec());
    let mut expected = Cursor::new(b"a\nb\nc\n".to_vec());
    assert_input(&mut actual).has_same_content_as(&mut expected);
}

/// Extra lines in the stream are reported too.
#[test]
#[should_panic(expected = "InputStream does not have same content as String:\n\nExtra content at line 2:\n  [\"b\"]")]
fn test_content_extra_line() {
    let mut actual = Cursor::new(b"a\nb\n".to_vec());
    assert_input(&mut actual).has_content("a\n");
}

/// Text is decoded with the builder's charset.
#[test]
fn test_content_with_charset() {
    let mut stream = Cursor::new(vec![0x63, 0x61, 0x66, 0xE9]);
    assert_input(&mut stream)
        .using_charset(Charset::Iso8859_1)
        .has_content("café");
}

/// Binary mismatches report the offset and both bytes.
#[test]
#[should_panic(expected = "InputStream does not have expected binary content at offset <2>, expecting:\n  <EOF>\nbut was:\n  <0x03>")]
fn test_binary_content_longer_stream() {
    let mut stream = Cursor::new(vec![1, 2, 3]);
    assert_input(&mut stream).has_binary_content(&[1, 2]);
}

/// Digest mismatches show both digests as lowercase hex.
#[test]
#[should_panic(expected = "Expecting InputStream to have SHA-1 digest:\n  <0000000000000000000000000000000000000000>\nbut was:\n  <a9993e364706816aba3e25717850c26c9cd0d89d>")]
fn test_digest_mismatch() {
    let mut stream = Cursor::new(b"abc".to_vec());
    assert_input(&mut stream).has_digest("SHA-1", "0000000000000000000000000000000000000000");
}

/// Invalid hex is rejected as an invalid argument.
#[test]
#[should_panic(expected = "is not valid hex")]
fn test_digest_invalid_hex() {
    let mut stream = Cursor::new(b"abc".to_vec());
    assert_input(&mut stream).has_digest("MD5", "zz");
}

/// An exhausted stream is empty.
#[test]
fn test_exhausted_stream_is_empty() {
    let mut stream = Cursor::new(b"abc".to_vec());
    stream.set_position(3);
    assert_input(&mut stream).is_empty();
}

/// A non-empty stream fails the emptiness check.
#[test]
#[should_panic(expected = "Expecting InputStream to be empty")]
fn test_not_empty() {
    let mut stream = Cursor::new(b"x".to_vec());
    assert_input(&mut stream).is_empty();
}
