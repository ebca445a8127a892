//! Process-wide configuration.
//!
//! Kept in its own test binary with a single test, since applying a
//! configuration affects every assertion running in the process.

mod common;

use std::collections::BTreeMap;
use std::io::Cursor;

use common::{init_tracing, write};
use testkit_assert::checks::maps;
use testkit_assert::config::{AssertionInfo, DEFAULT_MAX_ELEMENTS_FOR_PRINTING};
use testkit_assert::prelude::*;

#[test]
fn test_configuration_lifecycle() {
    init_tracing();
    assert_eq!(Configuration::current(), Configuration::default());
    assert_eq!(
        Configuration::current().max_elements_for_printing(),
        DEFAULT_MAX_ELEMENTS_FOR_PRINTING
    );
    assert_eq!(Configuration::current().default_charset(), Charset::Utf8);

    // Default charset is used when the builder sets none.
    Configuration::default()
        .with_default_charset(Charset::Iso8859_1)
        .apply();
    let dir = tempfile::tempdir().unwrap();
    let latin = write(dir.path(), "latin.txt", [0x63, 0x61, 0x66, 0xE9]);
    assert_path(&latin).has_content("café");
    assert_input(&mut Cursor::new(vec![0xE9])).has_content("é");

    // Listings are truncated past the configured size.
    Configuration::default()
        .with_max_elements_for_printing(2)
        .apply();
    let map = BTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    let entries: Vec<_> = map.iter().collect();
    let error = maps::assert_is_empty(&AssertionInfo::new(), &entries).unwrap_err();
    assert_eq!(error.to_string(), "Expecting empty but was: {1: 'a', 2: 'b', ...}");

    // Zero is clamped to one.
    Configuration::default()
        .with_max_elements_for_printing(0)
        .apply();
    assert_eq!(Configuration::current().max_elements_for_printing(), 1);

    Configuration::reset();
    assert_eq!(Configuration::current(), Configuration::default());
}
