//! Fluent assertions on maps.

use std::fmt::Debug;

use super::matcher::Matcher;
use super::{descriptive, verify};
use crate::checks::maps;
use crate::config::AssertionInfo;

/// Create a map assertion builder.
///
/// Accepts anything iterable as `(&K, &V)`: `&HashMap`, `&BTreeMap`, or an
/// iterator over an association list. Entries are compared in iteration
/// order, which only matters for
/// [`contains_exactly`](MapAssert::contains_exactly).
///
/// ```rust
/// use std::collections::HashMap;
/// use testkit_assert::assertions::assert_map;
///
/// let jedi = HashMap::from([("name", "Yoda"), ("color", "green")]);
/// assert_map(&jedi)
///     .contains_only_keys(&["color", "name"])
///     .contains_entry("name", "Yoda")
///     .contains_value("green");
/// ```
pub fn assert_map<'a, K, V, I>(map: I) -> MapAssert<'a, K, V>
where
    I: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: PartialEq + 'a,
{
    MapAssert {
        entries: map.into_iter().collect(),
        info: AssertionInfo::new(),
        equality: Box::new(partial_eq::<V>),
    }
}

fn partial_eq<V: PartialEq>(a: &V, b: &V) -> bool {
    a == b
}

/// Fluent assertion builder for maps.
///
/// Created by [`assert_map`].
pub struct MapAssert<'a, K, V> {
    entries: Vec<(&'a K, &'a V)>,
    info: AssertionInfo,
    equality: Box<dyn Fn(&V, &V) -> bool + 'a>,
}

descriptive!(impl ['a, K, V] MapAssert<'a, K, V>);

impl<'a, K, V> MapAssert<'a, K, V>
where
    K: PartialEq + Debug,
    V: Debug,
{
    /// Compare values with `comparator` instead of `PartialEq`.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use testkit_assert::assertions::assert_map;
    ///
    /// let map = BTreeMap::from([("name", "YODA")]);
    /// assert_map(&map)
    ///     .using_value_comparator(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b))
    ///     .contains_entry("name", "yoda");
    /// ```
    #[must_use]
    pub fn using_value_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&V, &V) -> bool + 'a,
    {
        self.equality = Box::new(comparator);
        self
    }

    // -------------------------------------------------------------------------
    // Entries
    // -------------------------------------------------------------------------

    /// Assert the map holds every entry of `expected`.
    ///
    /// # Panics
    ///
    /// Panics listing the entries that could not be found.
    #[track_caller]
    pub fn contains(self, expected: &[(K, V)]) -> Self {
        verify(maps::assert_contains(&self.info, &self.entries, expected, &*self.equality));
        self
    }

    /// Assert the map holds `key` mapped to `value`.
    #[track_caller]
    pub fn contains_entry(self, key: K, value: V) -> Self {
        self.contains(&[(key, value)])
    }

    /// Assert the map holds every entry of `other`.
    #[track_caller]
    pub fn contains_all_entries_of<'b, I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = (&'b K, &'b V)>,
        K: Clone + 'b,
        V: Clone + 'b,
    {
        let expected = owned_entries(other);
        self.contains(&expected)
    }

    /// Assert the map holds at least one entry of `expected`.
    #[track_caller]
    pub fn contains_any_of(self, expected: &[(K, V)]) -> Self {
        verify(maps::assert_contains_any_of(
            &self.info,
            &self.entries,
            expected,
            &*self.equality,
        ));
        self
    }

    /// Assert the map holds the entries of `expected` and nothing else.
    #[track_caller]
    pub fn contains_only(self, expected: &[(K, V)]) -> Self {
        verify(maps::assert_contains_only(
            &self.info,
            &self.entries,
            expected,
            &*self.equality,
        ));
        self
    }

    /// Assert the map holds exactly `expected`, in iteration order.
    #[track_caller]
    pub fn contains_exactly(self, expected: &[(K, V)]) -> Self {
        verify(maps::assert_contains_exactly(
            &self.info,
            &self.entries,
            expected,
            &*self.equality,
        ));
        self
    }

    /// Assert the map holds exactly the entries of `other`, in the same
    /// iteration order.
    #[track_caller]
    pub fn contains_exactly_entries_of<'b, I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = (&'b K, &'b V)>,
        K: Clone + 'b,
        V: Clone + 'b,
    {
        let expected = owned_entries(other);
        self.contains_exactly(&expected)
    }

    /// Assert the map holds none of the entries of `expected`.
    #[track_caller]
    pub fn does_not_contain(self, expected: &[(K, V)]) -> Self {
        verify(maps::assert_does_not_contain(
            &self.info,
            &self.entries,
            expected,
            &*self.equality,
        ));
        self
    }

    /// Assert the map does not hold `key` mapped to `value`.
    #[track_caller]
    pub fn does_not_contain_entry(self, key: K, value: V) -> Self {
        self.does_not_contain(&[(key, value)])
    }

    // -------------------------------------------------------------------------
    // Keys and values
    // -------------------------------------------------------------------------

    /// Assert the map holds `key`.
    #[track_caller]
    pub fn contains_key(self, key: K) -> Self {
        self.contains_keys(&[key])
    }

    /// Assert the map holds every key of `keys`.
    #[track_caller]
    pub fn contains_keys(self, keys: &[K]) -> Self {
        verify(maps::assert_contains_keys(&self.info, &self.entries, keys));
        self
    }

    /// Assert the map does not hold `key`.
    #[track_caller]
    pub fn does_not_contain_key(self, key: K) -> Self {
        self.does_not_contain_keys(&[key])
    }

    /// Assert the map holds none of `keys`.
    #[track_caller]
    pub fn does_not_contain_keys(self, keys: &[K]) -> Self {
        verify(maps::assert_does_not_contain_keys(&self.info, &self.entries, keys));
        self
    }

    /// Assert the keys of the map are exactly `keys`, in any order.
    #[track_caller]
    pub fn contains_only_keys(self, keys: &[K]) -> Self {
        verify(maps::assert_contains_only_keys(&self.info, &self.entries, keys));
        self
    }

    /// Assert some value of the map equals `value`.
    #[track_caller]
    pub fn contains_value(self, value: V) -> Self {
        self.contains_values(&[value])
    }

    /// Assert the map holds every value of `values`.
    #[track_caller]
    pub fn contains_values(self, values: &[V]) -> Self {
        verify(maps::assert_contains_values(
            &self.info,
            &self.entries,
            values,
            &*self.equality,
        ));
        self
    }

    /// Assert no value of the map equals `value`.
    #[track_caller]
    pub fn does_not_contain_value(self, value: V) -> Self {
        verify(maps::assert_does_not_contain_value(
            &self.info,
            &self.entries,
            &value,
            &*self.equality,
        ));
        self
    }

    // -------------------------------------------------------------------------
    // Size
    // -------------------------------------------------------------------------

    /// Assert the map has no entries.
    #[track_caller]
    pub fn is_empty(self) -> Self {
        verify(maps::assert_is_empty(&self.info, &self.entries));
        self
    }

    /// Assert the map has entries.
    #[track_caller]
    pub fn is_not_empty(self) -> Self {
        verify(maps::assert_is_not_empty(&self.info, &self.entries));
        self
    }

    /// Assert the map has `expected` entries.
    #[track_caller]
    pub fn has_size(self, expected: usize) -> Self {
        verify(maps::assert_has_size(&self.info, &self.entries, expected));
        self
    }

    /// Assert the map has between `lower` and `upper` entries, inclusive.
    #[track_caller]
    pub fn has_size_between(self, lower: usize, upper: usize) -> Self {
        verify(maps::assert_has_size_between(&self.info, &self.entries, lower, upper));
        self
    }

    /// Assert the map has as many entries as `other` has elements.
    #[track_caller]
    pub fn has_same_size_as<I: IntoIterator>(self, other: I) -> Self {
        let other_len = other.into_iter().count();
        verify(maps::assert_has_same_size_as(&self.info, &self.entries, other_len));
        self
    }

    // -------------------------------------------------------------------------
    // Conditions
    // -------------------------------------------------------------------------

    /// Assert some entry has a key matching `key` and a value matching
    /// `value`.
    #[track_caller]
    pub fn has_entry_satisfying(self, key: impl Matcher<K>, value: impl Matcher<V>) -> Self {
        verify(maps::assert_has_entry_satisfying(
            &self.info,
            &self.entries,
            &key,
            &value,
        ));
        self
    }

    /// Assert some key matches `condition`.
    #[track_caller]
    pub fn has_key_satisfying(self, condition: impl Matcher<K>) -> Self {
        verify(maps::assert_has_key_satisfying(&self.info, &self.entries, &condition));
        self
    }

    /// Assert some value matches `condition`.
    #[track_caller]
    pub fn has_value_satisfying(self, condition: impl Matcher<V>) -> Self {
        verify(maps::assert_has_value_satisfying(&self.info, &self.entries, &condition));
        self
    }

    /// Assert every entry satisfies `condition`.
    #[track_caller]
    pub fn all_satisfy<F: Fn(&K, &V) -> bool>(self, condition: F) -> Self {
        verify(maps::assert_all_satisfy(&self.info, &self.entries, &condition));
        self
    }

    /// Assert at least one entry satisfies `condition`.
    #[track_caller]
    pub fn any_satisfies<F: Fn(&K, &V) -> bool>(self, condition: F) -> Self {
        verify(maps::assert_any_satisfies(&self.info, &self.entries, &condition));
        self
    }

    /// Assert no entry satisfies `condition`.
    #[track_caller]
    pub fn none_satisfy<F: Fn(&K, &V) -> bool>(self, condition: F) -> Self {
        verify(maps::assert_none_satisfy(&self.info, &self.entries, &condition));
        self
    }
}

fn owned_entries<'b, K, V, I>(entries: I) -> Vec<(K, V)>
where
    I: IntoIterator<Item = (&'b K, &'b V)>,
    K: Clone + 'b,
    V: Clone + 'b,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertions::matcher::{contains_str, gt};
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn test_hash_map() {
        let map = HashMap::from([("name", "Yoda"), ("color", "green")]);
        assert_map(&map)
            .has_size(2)
            .contains_keys(&["name", "color"])
            .contains_only(&[("color", "green"), ("name", "Yoda")])
            .does_not_contain_entry("name", "Luke")
            .has_value_satisfying(contains_str("od"));
    }

    #[test]
    fn test_option_keys() {
        let map = BTreeMap::from([(None, 0), (Some("a"), 1)]);
        assert_map(&map)
            .contains_entry(None, 0)
            .contains_exactly(&[(None, 0), (Some("a"), 1)])
            .has_entry_satisfying(crate::assertions::matcher::eq(Some("a")), gt(0));
    }

    #[test]
    fn test_entries_of_other_map() {
        let map = BTreeMap::from([(1, "one"), (2, "two"), (3, "three")]);
        let subset = BTreeMap::from([(3, "three"), (1, "one")]);
        assert_map(&map)
            .contains_all_entries_of(&subset)
            .has_same_size_as([0; 3])
            .all_satisfy(|k, v| *k > 0 && !v.is_empty())
            .none_satisfy(|_, v| v.is_empty());
    }

    #[test]
    #[should_panic(expected = "and the following keys were unexpected")]
    fn test_contains_only_keys_reports_both_sides() {
        let map = BTreeMap::from([("name", "Yoda"), ("color", "green")]);
        assert_map(&map).contains_only_keys(&["name", "job"]);
    }

    #[test]
    #[should_panic(expected = "The array of entries to look for should not be empty")]
    fn test_empty_look_for_panics() {
        let map = BTreeMap::from([("name", "Yoda")]);
        assert_map(&map).contains(&[]);
    }
}
