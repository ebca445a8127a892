//! Integration tests for map assertions.

mod common;

use std::collections::{BTreeMap, HashMap};

use common::init_tracing;
use testkit_assert::checks::maps;
use testkit_assert::config::AssertionInfo;
use testkit_assert::prelude::*;

fn jedi() -> HashMap<&'static str, &'static str> {
    HashMap::from([("name", "Yoda"), ("color", "green")])
}

/// Entry, key and value checks on a hash map.
#[test]
fn test_hash_map_chain() {
    init_tracing();
    let map = jedi();
    assert_map(&map)
        .is_not_empty()
        .has_size(2)
        .has_size_between(1, 3)
        .has_same_size_as(["a", "b"])
        .contains(&[("name", "Yoda")])
        .contains_entry("color", "green")
        .contains_any_of(&[("name", "Luke"), ("color", "green")])
        .contains_only(&[("color", "green"), ("name", "Yoda")])
        .does_not_contain(&[("name", "Vader")])
        .does_not_contain_entry("color", "red")
        .contains_key("name")
        .contains_keys(&["name", "color"])
        .does_not_contain_key("job")
        .does_not_contain_keys(&["job", "age"])
        .contains_only_keys(&["color", "name"])
        .contains_value("Yoda")
        .contains_values(&["green", "Yoda"])
        .does_not_contain_value("red");
}

/// Keys in any order pass; a missing expected key leaves an unexpected one.
#[test]
fn test_contains_only_keys_reports_unexpected() {
    let map = jedi();
    let entries: Vec<_> = map.iter().collect();
    let info = AssertionInfo::new();

    assert!(maps::assert_contains_only_keys(&info, &entries, &["color", "name"]).is_ok());

    let error = maps::assert_contains_only_keys(&info, &entries, &["name"]).unwrap_err();
    assert!(error.is_assertion_failure());
    assert!(error
        .to_string()
        .ends_with("but the following keys were unexpected:\n  [\"color\"]"));
}

/// Missing entries are listed, sorted.
#[test]
#[should_panic(expected = "but could not find the following map entries:\n  {\"name\": \"Luke\"}")]
fn test_contains_missing_entry() {
    let map = jedi();
    assert_map(&map).contains(&[("name", "Yoda"), ("name", "Luke")]);
}

/// Contains-only reports both missing and unexpected entries.
#[test]
#[should_panic(expected = "but could not find the following map entries:\n  {\"job\": \"master\"}\nand the following map entries were unexpected:\n  {\"color\": \"green\"}")]
fn test_contains_only_both_sides() {
    let map = jedi();
    assert_map(&map).contains_only(&[("name", "Yoda"), ("job", "master")]);
}

/// Ordered maps are checked in iteration order.
#[test]
fn test_contains_exactly_in_order() {
    let map = BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
    let other = BTreeMap::from([(3, "three"), (1, "one"), (2, "two")]);
    assert_map(&map)
        .contains_exactly(&[(1, "one"), (2, "two"), (3, "three")])
        .contains_exactly_entries_of(&other)
        .contains_all_entries_of(&other);
}

/// Same entries in another order fail with the first differing index.
#[test]
#[should_panic(expected = "but there were differences in order, at index 0 actual entry was:\n  1: \"one\"\nwhereas expected entry was:\n  2: \"two\"")]
fn test_contains_exactly_wrong_order() {
    let map = BTreeMap::from([(1, "one"), (2, "two")]);
    assert_map(&map).contains_exactly(&[(2, "two"), (1, "one")]);
}

/// Association lists keep their order and may repeat keys.
#[test]
fn test_association_list() {
    let pairs = vec![("b", 2), ("a", 1)];
    assert_map(pairs.iter().map(|(k, v)| (k, v)))
        .contains_exactly(&[("b", 2), ("a", 1)])
        .has_key_satisfying(eq("a"))
        .has_value_satisfying(gt(1))
        .has_entry_satisfying(eq("a"), le(1));
}

/// A custom comparator replaces value equality everywhere.
#[test]
fn test_value_comparator() {
    let map = jedi();
    assert_map(&map)
        .using_value_comparator(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b))
        .contains_entry("name", "YODA")
        .contains_value("GREEN")
        .does_not_contain_value("BLUE");
}

/// Entry conditions over closures.
#[test]
fn test_entry_conditions() {
    let scores = BTreeMap::from([("luke", 70), ("yoda", 99)]);
    assert_map(&scores)
        .all_satisfy(|_, score| *score >= 70)
        .any_satisfies(|name, _| name.starts_with('y'))
        .none_satisfy(|_, score| *score > 100);
}

/// Failing entries are reported for all-satisfy.
#[test]
#[should_panic(expected = "\"luke\": 70")]
fn test_all_satisfy_failure() {
    let scores = BTreeMap::from([("luke", 70), ("yoda", 99)]);
    assert_map(&scores).all_satisfy(|_, score| *score > 80);
}

/// An empty look-for list is an invalid argument unless the map is empty.
#[test]
fn test_empty_look_for() {
    let map = jedi();
    let entries: Vec<_> = map.iter().collect();
    let info = AssertionInfo::new();
    let equal = |a: &&str, b: &&str| a == b;

    let error = maps::assert_contains(&info, &entries, &[], &equal).unwrap_err();
    assert!(error.is_invalid_argument());
    assert_eq!(error.to_string(), "The array of entries to look for should not be empty");

    let empty: Vec<(&&str, &&str)> = Vec::new();
    assert!(maps::assert_contains(&info, &empty, &[], &equal).is_ok());

    let error = maps::assert_does_not_contain(&info, &empty, &[], &equal).unwrap_err();
    assert!(error.is_invalid_argument());
}

/// Size bounds must be ordered.
#[test]
#[should_panic(expected = "The higher boundary <1> must be greater than the lower boundary <3>.")]
fn test_size_between_invalid_bounds() {
    let map = jedi();
    assert_map(&map).has_size_between(3, 1);
}

/// Descriptions apply to map messages.
#[test]
#[should_panic(expected = "[jedi] Expecting actual not to be empty")]
fn test_description_on_empty() {
    let map: HashMap<&str, i32> = HashMap::new();
    assert_map(&map).described_as("jedi").is_not_empty();
}
