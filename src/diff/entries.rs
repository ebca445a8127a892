//! Set differences between map entries.
//!
//! Actual maps are seen as ordered slices of `(key, value)` references so
//! that any map type can be compared. Keys compare with `PartialEq`; values
//! compare with a caller-provided equality, which defaults to `PartialEq`.

/// Equality used to compare values.
pub type ValueEquality<'a, V> = dyn Fn(&V, &V) -> bool + 'a;

/// Entries found on one side and not on the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDifferences<'a, K, V> {
    /// Expected entries absent from the actual map.
    pub missing: Vec<(&'a K, &'a V)>,
    /// Actual entries that were not expected.
    pub unexpected: Vec<(&'a K, &'a V)>,
}

impl<K, V> EntryDifferences<'_, K, V> {
    /// Whether both sides hold the same entries.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Keys found on one side and not on the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDifferences<'a, K> {
    /// Expected keys absent from the actual map.
    pub missing: Vec<&'a K>,
    /// Actual keys that were not expected.
    pub unexpected: Vec<&'a K>,
}

impl<K> KeyDifferences<'_, K> {
    /// Whether both sides hold the same keys.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Value stored under `key`, if any.
pub fn value_of<'a, K: PartialEq, V>(actual: &[(&'a K, &'a V)], key: &K) -> Option<&'a V> {
    actual.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Whether `actual` holds `key` mapped to a value equal to `value`.
pub fn contains_entry<K: PartialEq, V>(
    actual: &[(&K, &V)],
    key: &K,
    value: &V,
    equality: &ValueEquality<'_, V>,
) -> bool {
    value_of(actual, key).is_some_and(|v| equality(v, value))
}

/// Whether `actual` holds `key`.
pub fn contains_key<K: PartialEq, V>(actual: &[(&K, &V)], key: &K) -> bool {
    value_of(actual, key).is_some()
}

/// Whether any value of `actual` equals `value`.
pub fn contains_value<K, V>(actual: &[(&K, &V)], value: &V, equality: &ValueEquality<'_, V>) -> bool {
    actual.iter().any(|(_, v)| equality(*v, value))
}

/// Differences between the entries of `actual` and `expected`.
///
/// An expected entry is matched when its key is present with an equal
/// value; every actual entry not matched this way is unexpected.
pub fn entry_differences<'a, K: PartialEq, V>(
    actual: &[(&'a K, &'a V)],
    expected: &'a [(K, V)],
    equality: &ValueEquality<'_, V>,
) -> EntryDifferences<'a, K, V> {
    let missing: Vec<(&K, &V)> = expected
        .iter()
        .filter(|(k, v)| !contains_entry(actual, k, v, equality))
        .map(|(k, v)| (k, v))
        .collect();
    let unexpected: Vec<(&K, &V)> = actual
        .iter()
        .filter(|(k, v)| {
            !expected
                .iter()
                .any(|(ek, ev)| ek == *k && equality(*v, ev))
        })
        .copied()
        .collect();
    tracing::debug!(
        missing = missing.len(),
        unexpected = unexpected.len(),
        "computed entry differences"
    );
    EntryDifferences {
        missing,
        unexpected,
    }
}

/// Differences between the keys of `actual` and `expected`.
pub fn key_differences<'a, K: PartialEq, V>(
    actual: &[(&'a K, &'a V)],
    expected: &'a [K],
) -> KeyDifferences<'a, K> {
    let mut missing: Vec<&K> = Vec::new();
    for key in expected {
        if !contains_key(actual, key) && !missing.contains(&key) {
            missing.push(key);
        }
    }
    let unexpected = actual
        .iter()
        .map(|(k, _)| *k)
        .filter(|k| !expected.contains(*k))
        .collect();
    KeyDifferences {
        missing,
        unexpected,
    }
}

/// Expected keys absent from `actual`, without duplicates.
pub fn keys_not_found<'a, K: PartialEq, V>(actual: &[(&K, &V)], expected: &'a [K]) -> Vec<&'a K> {
    let mut not_found: Vec<&K> = Vec::new();
    for key in expected {
        if !contains_key(actual, key) && !not_found.contains(&key) {
            not_found.push(key);
        }
    }
    not_found
}

/// Expected keys present in `actual`, without duplicates.
pub fn keys_found<'a, K: PartialEq, V>(actual: &[(&K, &V)], expected: &'a [K]) -> Vec<&'a K> {
    let mut found: Vec<&K> = Vec::new();
    for key in expected {
        if contains_key(actual, key) && !found.contains(&key) {
            found.push(key);
        }
    }
    found
}

/// Expected values absent from `actual`, without duplicates.
pub fn values_not_found<'a, K, V>(
    actual: &[(&K, &V)],
    expected: &'a [V],
    equality: &ValueEquality<'_, V>,
) -> Vec<&'a V> {
    let mut not_found: Vec<&V> = Vec::new();
    for value in expected {
        if !contains_value(actual, value, equality) && !not_found.iter().any(|v| equality(*v, value)) {
            not_found.push(value);
        }
    }
    not_found
}
