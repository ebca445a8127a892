//! Checks on maps.
//!
//! The actual map is given as its entries in iteration order, which lets
//! `HashMap`, `BTreeMap` and association lists share one implementation.
//! Value comparisons go through a [`ValueEquality`] so callers can swap in
//! their own notion of equal values.

use std::fmt::Debug;

use crate::assertions::matcher::Matcher;
use crate::config::AssertionInfo;
use crate::diff::entries::{self, ValueEquality};
use crate::error::{Error, Result};
use crate::representation;

use super::check_look_for;

/// Entries of the actual map, in iteration order.
pub type Entries<'a, K, V> = [(&'a K, &'a V)];

fn render<K: Debug, V: Debug>(actual: &Entries<'_, K, V>) -> String {
    representation::entries(actual.iter().copied())
}

fn render_pairs<K: Debug, V: Debug>(pairs: &[(K, V)]) -> String {
    representation::entries(pairs.iter().map(|(k, v)| (k, v)))
}

// =============================================================================
// Entries
// =============================================================================

/// `actual` holds every entry of `expected`.
pub fn assert_contains<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    expected: &[(K, V)],
    equality: &ValueEquality<'_, V>,
) -> Result<()>
where
    K: PartialEq + Debug,
    V: Debug,
{
    if check_look_for(expected.len(), actual.is_empty(), "array of entries")? {
        return Ok(());
    }
    let missing: Vec<(&K, &V)> = expected
        .iter()
        .filter(|(k, v)| !entries::contains_entry(actual, k, v, equality))
        .map(|(k, v)| (k, v))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting map:\n  {}\nto contain:\n  {}\nbut could not find the following map entries:\n  {}",
        render(actual),
        render_pairs(expected),
        representation::entries(missing)
    )))
}

/// `actual` holds at least one entry of `expected`.
pub fn assert_contains_any_of<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    expected: &[(K, V)],
    equality: &ValueEquality<'_, V>,
) -> Result<()>
where
    K: PartialEq + Debug,
    V: Debug,
{
    if check_look_for(expected.len(), actual.is_empty(), "array of entries")? {
        return Ok(());
    }
    if expected
        .iter()
        .any(|(k, v)| entries::contains_entry(actual, k, v, equality))
    {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting map:\n  {}\nto contain at least one of the following entries:\n  {}\nbut none were found",
        render(actual),
        render_pairs(expected)
    )))
}

/// `actual` holds the entries of `expected` and nothing else.
pub fn assert_contains_only<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    expected: &[(K, V)],
    equality: &ValueEquality<'_, V>,
) -> Result<()>
where
    K: PartialEq + Debug,
    V: Debug,
{
    if check_look_for(expected.len(), actual.is_empty(), "array of entries")? {
        return Ok(());
    }
    let differences = entries::entry_differences(actual, expected, equality);
    if differences.is_empty() {
        return Ok(());
    }
    Err(info.failure(entries_mismatch(
        "to contain only",
        actual,
        expected,
        &differences,
    )))
}

/// `actual` holds the entries of `expected` and nothing else, in the same
/// order.
pub fn assert_contains_exactly<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    expected: &[(K, V)],
    equality: &ValueEquality<'_, V>,
) -> Result<()>
where
    K: PartialEq + Debug,
    V: Debug,
{
    if check_look_for(expected.len(), actual.is_empty(), "array of entries")? {
        return Ok(());
    }
    assert_has_same_size_as(info, actual, expected.len())?;
    let differences = entries::entry_differences(actual, expected, equality);
    if !differences.is_empty() {
        return Err(info.failure(entries_mismatch(
            "to contain exactly (and in same order)",
            actual,
            expected,
            &differences,
        )));
    }
    let out_of_order = actual
        .iter()
        .zip(expected)
        .position(|((ak, av), (ek, ev))| *ak != ek || !equality(*av, ev));
    match out_of_order {
        None => Ok(()),
        Some(index) => {
            let (ak, av) = actual[index];
            let (ek, ev) = &expected[index];
            Err(info.failure(format!(
                "Expecting map:\n  {}\nto contain exactly (and in same order):\n  {}\nbut there were differences in order, at index {index} actual entry was:\n  {}\nwhereas expected entry was:\n  {}",
                render(actual),
                render_pairs(expected),
                representation::entry(ak, av),
                representation::entry(ek, ev)
            )))
        }
    }
}

fn entries_mismatch<K: Debug, V: Debug>(
    verb: &str,
    actual: &Entries<'_, K, V>,
    expected: &[(K, V)],
    differences: &entries::EntryDifferences<'_, K, V>,
) -> String {
    let mut message = format!(
        "Expecting map:\n  {}\n{verb}:\n  {}",
        render(actual),
        render_pairs(expected)
    );
    if !differences.missing.is_empty() {
        message.push_str(&format!(
            "\nbut could not find the following map entries:\n  {}",
            representation::entries(differences.missing.iter().copied())
        ));
    }
    if !differences.unexpected.is_empty() {
        let lead = if differences.missing.is_empty() { "but" } else { "and" };
        message.push_str(&format!(
            "\n{lead} the following map entries were unexpected:\n  {}",
            representation::entries(differences.unexpected.iter().copied())
        ));
    }
    message
}

/// `actual` holds none of the entries of `expected`.
pub fn assert_does_not_contain<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    expected: &[(K, V)],
    equality: &ValueEquality<'_, V>,
) -> Result<()>
where
    K: PartialEq + Debug,
    V: Debug,
{
    check_look_for(expected.len(), false, "array of entries")?;
    let found: Vec<(&K, &V)> = expected
        .iter()
        .filter(|(k, v)| entries::contains_entry(actual, k, v, equality))
        .map(|(k, v)| (k, v))
        .collect();
    if found.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting map:\n  {}\nnot to contain:\n  {}\nbut found:\n  {}",
        render(actual),
        render_pairs(expected),
        representation::entries(found)
    )))
}

// =============================================================================
// Keys and values
// =============================================================================

/// `actual` holds every key of `expected`.
pub fn assert_contains_keys<K, V>(info: &AssertionInfo, actual: &Entries<'_, K, V>, expected: &[K]) -> Result<()>
where
    K: PartialEq + Debug,
    V: Debug,
{
    if check_look_for(expected.len(), actual.is_empty(), "array of keys")? {
        return Ok(());
    }
    let not_found = entries::keys_not_found(actual, expected);
    if not_found.is_empty() {
        return Ok(());
    }
    let noun = if expected.len() == 1 { "key" } else { "keys" };
    Err(info.failure(format!(
        "Expecting actual:\n  {}\nto contain {noun}:\n  {}\nbut could not find:\n  {}",
        render(actual),
        representation::debug_list(expected),
        representation::debug_list(not_found)
    )))
}

/// `actual` holds none of the keys of `expected`.
pub fn assert_does_not_contain_keys<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    expected: &[K],
) -> Result<()>
where
    K: PartialEq + Debug,
    V: Debug,
{
    check_look_for(expected.len(), false, "array of keys")?;
    let found = entries::keys_found(actual, expected);
    if found.is_empty() {
        return Ok(());
    }
    let noun = if expected.len() == 1 { "key" } else { "keys" };
    Err(info.failure(format!(
        "Expecting actual:\n  {}\nnot to contain {noun}:\n  {}\nbut found:\n  {}",
        render(actual),
        representation::debug_list(expected),
        representation::debug_list(found)
    )))
}

/// The keys of `actual` are exactly those of `expected`, in any order.
pub fn assert_contains_only_keys<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    expected: &[K],
) -> Result<()>
where
    K: PartialEq + Debug,
    V: Debug,
{
    if check_look_for(expected.len(), actual.is_empty(), "array of keys")? {
        return Ok(());
    }
    let differences = entries::key_differences(actual, expected);
    if differences.is_empty() {
        return Ok(());
    }
    let mut message = format!(
        "Expecting actual:\n  {}\nto contain only following keys:\n  {}",
        render(actual),
        representation::debug_list(expected)
    );
    if !differences.missing.is_empty() {
        message.push_str(&format!(
            "\nbut could not find the following keys:\n  {}",
            representation::debug_list(differences.missing.iter().copied())
        ));
    }
    if !differences.unexpected.is_empty() {
        let lead = if differences.missing.is_empty() { "but" } else { "and" };
        message.push_str(&format!(
            "\n{lead} the following keys were unexpected:\n  {}",
            representation::debug_set(differences.unexpected.iter().copied())
        ));
    }
    Err(info.failure(message))
}

/// `actual` holds every value of `expected`.
pub fn assert_contains_values<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    expected: &[V],
    equality: &ValueEquality<'_, V>,
) -> Result<()>
where
    K: Debug,
    V: Debug,
{
    if check_look_for(expected.len(), actual.is_empty(), "array of values")? {
        return Ok(());
    }
    let not_found = entries::values_not_found(actual, expected, equality);
    if not_found.is_empty() {
        return Ok(());
    }
    let noun = if expected.len() == 1 { "value" } else { "values" };
    Err(info.failure(format!(
        "Expecting actual:\n  {}\nto contain {noun}:\n  {}\nbut could not find:\n  {}",
        render(actual),
        representation::debug_list(expected),
        representation::debug_list(not_found)
    )))
}

/// No value of `actual` equals `value`.
pub fn assert_does_not_contain_value<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    value: &V,
    equality: &ValueEquality<'_, V>,
) -> Result<()>
where
    K: Debug,
    V: Debug,
{
    if !entries::contains_value(actual, value, equality) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  {}\nnot to contain value:\n  {value:?}",
        render(actual)
    )))
}

// =============================================================================
// Size
// =============================================================================

/// `actual` has no entries.
pub fn assert_is_empty<K: Debug, V: Debug>(info: &AssertionInfo, actual: &Entries<'_, K, V>) -> Result<()> {
    if actual.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!("Expecting empty but was: {}", render(actual))))
}

/// `actual` has entries.
pub fn assert_is_not_empty<K, V>(info: &AssertionInfo, actual: &Entries<'_, K, V>) -> Result<()> {
    if !actual.is_empty() {
        return Ok(());
    }
    Err(info.failure("Expecting actual not to be empty"))
}

/// `actual` has `expected` entries.
pub fn assert_has_size<K: Debug, V: Debug>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    expected: usize,
) -> Result<()> {
    if actual.len() == expected {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expected size: {expected} but was: {} in:\n{}",
        actual.len(),
        render(actual)
    )))
}

/// `actual` has between `lower` and `upper` entries, both inclusive.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`]
/// when `lower > upper`.
pub fn assert_has_size_between<K: Debug, V: Debug>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    lower: usize,
    upper: usize,
) -> Result<()> {
    if lower > upper {
        return Err(Error::invalid_argument(format!(
            "The higher boundary <{upper}> must be greater than the lower boundary <{lower}>."
        )));
    }
    if (lower..=upper).contains(&actual.len()) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expected size to be between: {lower} and {upper} but was: {} in:\n{}",
        actual.len(),
        render(actual)
    )))
}

/// `actual` has as many entries as a collection of `other_len` elements.
pub fn assert_has_same_size_as<K: Debug, V: Debug>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    other_len: usize,
) -> Result<()> {
    if actual.len() == other_len {
        return Ok(());
    }
    Err(info.failure(format!(
        "Actual and expected should have same size but actual size is:\n  {}\nwhile expected size is:\n  {other_len}\nActual was:\n  {}",
        actual.len(),
        render(actual)
    )))
}

// =============================================================================
// Conditions
// =============================================================================

/// Some entry of `actual` has a key matching `key` and a value matching
/// `value`.
pub fn assert_has_entry_satisfying<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    key: &dyn Matcher<K>,
    value: &dyn Matcher<V>,
) -> Result<()>
where
    K: Debug,
    V: Debug,
{
    if actual.iter().any(|(k, v)| key.matches(k) && value.matches(v)) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  {}\nto contain an entry satisfying:\n  (key {}, value {})\nbut none was found",
        render(actual),
        key.describe(),
        value.describe()
    )))
}

/// Some key of `actual` matches `condition`.
pub fn assert_has_key_satisfying<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    condition: &dyn Matcher<K>,
) -> Result<()>
where
    K: Debug,
    V: Debug,
{
    if actual.iter().any(|(k, _)| condition.matches(k)) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  {}\nto contain a key satisfying:\n  {}\nbut none was found",
        render(actual),
        condition.describe()
    )))
}

/// Some value of `actual` matches `condition`.
pub fn assert_has_value_satisfying<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    condition: &dyn Matcher<V>,
) -> Result<()>
where
    K: Debug,
    V: Debug,
{
    if actual.iter().any(|(_, v)| condition.matches(v)) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  {}\nto contain a value satisfying:\n  {}\nbut none was found",
        render(actual),
        condition.describe()
    )))
}

/// A condition on a whole entry.
pub type EntryCondition<'a, K, V> = dyn Fn(&K, &V) -> bool + 'a;

/// Every entry of `actual` satisfies `condition`.
pub fn assert_all_satisfy<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    condition: &EntryCondition<'_, K, V>,
) -> Result<()>
where
    K: Debug,
    V: Debug,
{
    let failing: Vec<(&K, &V)> = actual
        .iter()
        .copied()
        .filter(|(k, v)| !condition(k, v))
        .collect();
    if failing.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting all elements of:\n  {}\nto satisfy given requirements, but these elements did not:\n  {}",
        render(actual),
        representation::entries(failing)
    )))
}

/// At least one entry of `actual` satisfies `condition`.
pub fn assert_any_satisfies<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    condition: &EntryCondition<'_, K, V>,
) -> Result<()>
where
    K: Debug,
    V: Debug,
{
    if actual.iter().any(|(k, v)| condition(k, v)) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting any element of:\n  {}\nto satisfy the given requirements but none did",
        render(actual)
    )))
}

/// No entry of `actual` satisfies `condition`.
pub fn assert_none_satisfy<K, V>(
    info: &AssertionInfo,
    actual: &Entries<'_, K, V>,
    condition: &EntryCondition<'_, K, V>,
) -> Result<()>
where
    K: Debug,
    V: Debug,
{
    let matching: Vec<(&K, &V)> = actual
        .iter()
        .copied()
        .filter(|(k, v)| condition(k, v))
        .collect();
    if matching.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting no elements of:\n  {}\nto satisfy the given requirements but these elements did:\n  {}",
        render(actual),
        representation::entries(matching)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::matcher::{eq, starts_with};

    fn same(a: &&str, b: &&str) -> bool {
        a == b
    }

    fn yoda() -> (Vec<&'static str>, Vec<&'static str>) {
        (vec!["name", "color"], vec!["Yoda", "green"])
    }

    #[test]
    fn test_contains_reports_missing_entries() {
        let (keys, values) = yoda();
        let actual: Vec<(&&str, &&str)> = keys.iter().zip(values.iter()).collect();
        let info = AssertionInfo::new();

        assert!(assert_contains(&info, &actual, &[("name", "Yoda")], &same).is_ok());
        let err = assert_contains(&info, &actual, &[("name", "Yoda"), ("job", "Jedi")], &same).unwrap_err();
        assert!(err
            .to_string()
            .ends_with("but could not find the following map entries:\n  {\"job\": \"Jedi\"}"));
    }

    #[test]
    fn test_contains_only_keys() {
        let (keys, values) = yoda();
        let actual: Vec<(&&str, &&str)> = keys.iter().zip(values.iter()).collect();
        let info = AssertionInfo::new();

        assert!(assert_contains_only_keys(&info, &actual, &["color", "name"]).is_ok());
        let err = assert_contains_only_keys(&info, &actual, &["name"]).unwrap_err();
        assert!(err
            .to_string()
            .ends_with("but the following keys were unexpected:\n  [\"color\"]"));
    }

    #[test]
    fn test_contains_exactly_checks_order() {
        let (keys, values) = yoda();
        let actual: Vec<(&&str, &&str)> = keys.iter().zip(values.iter()).collect();
        let info = AssertionInfo::new();

        assert!(assert_contains_exactly(&info, &actual, &[("name", "Yoda"), ("color", "green")], &same).is_ok());
        let err = assert_contains_exactly(&info, &actual, &[("color", "green"), ("name", "Yoda")], &same)
            .unwrap_err();
        assert!(err.to_string().contains("differences in order, at index 0"));
        // contains_only does not care
        assert!(assert_contains_only(&info, &actual, &[("color", "green"), ("name", "Yoda")], &same).is_ok());
    }

    #[test]
    fn test_contains_exactly_checks_size() {
        let info = AssertionInfo::new();
        let one: Vec<(&&str, &i32)> = vec![(&"a", &1)];
        let err = assert_contains_exactly(&info, &one, &[("a", 1), ("a", 1)], &|x: &i32, y: &i32| x == y)
            .unwrap_err();
        assert!(err.is_assertion_failure());
        assert!(err
            .to_string()
            .starts_with("Actual and expected should have same size but actual size is:\n  1\nwhile expected size is:\n  2"));

        let repeated: Vec<(&&str, &i32)> = vec![(&"a", &1), (&"a", &1), (&"b", &2)];
        let err = assert_contains_exactly(&info, &repeated, &[("a", 1), ("b", 2)], &|x: &i32, y: &i32| x == y)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("actual size is:\n  3\nwhile expected size is:\n  2"));
        assert!(!message.contains("differences in order"));
    }

    #[test]
    fn test_empty_look_for() {
        let (keys, values) = yoda();
        let actual: Vec<(&&str, &&str)> = keys.iter().zip(values.iter()).collect();
        let empty: Vec<(&&str, &&str)> = Vec::new();
        let info = AssertionInfo::new();

        assert!(assert_contains(&info, &actual, &[], &same).unwrap_err().is_invalid_argument());
        assert!(assert_contains_keys::<&str, &str>(&info, &empty, &[]).is_ok());
        assert!(assert_contains_values(&info, &actual, &[], &same)
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_size() {
        let (keys, values) = yoda();
        let actual: Vec<(&&str, &&str)> = keys.iter().zip(values.iter()).collect();
        let info = AssertionInfo::new();

        assert!(assert_has_size(&info, &actual, 2).is_ok());
        assert!(assert_has_size_between(&info, &actual, 1, 3).is_ok());
        assert!(assert_has_size_between(&info, &actual, 3, 1).unwrap_err().is_invalid_argument());
        let err = assert_has_size(&info, &actual, 3).unwrap_err();
        assert!(err.to_string().starts_with("Expected size: 3 but was: 2 in:\n"));
    }

    #[test]
    fn test_conditions() {
        let (keys, values) = yoda();
        let actual: Vec<(&&str, &&str)> = keys.iter().zip(values.iter()).collect();
        let info = AssertionInfo::new();

        assert!(assert_has_entry_satisfying(&info, &actual, &eq("name"), &starts_with("Yo")).is_ok());
        assert!(assert_has_key_satisfying(&info, &actual, &starts_with("co")).is_ok());
        assert!(assert_has_value_satisfying(&info, &actual, &starts_with("x")).is_err());
        assert!(assert_all_satisfy(&info, &actual, &|k: &&str, _: &&str| !k.is_empty()).is_ok());
        assert!(assert_none_satisfy(&info, &actual, &|_: &&str, v: &&str| v.is_empty()).is_ok());
        assert!(assert_any_satisfies(&info, &actual, &|_: &&str, v: &&str| *v == "green").is_ok());
    }
}
