//! Query string parameters and their reconciliation.
//!
//! A [`ParameterMap`] maps each parameter name to the values it was given,
//! in occurrence order. A name without `=` has the value `None`.
//!
//! ```rust
//! use testkit_assert::diff::parameters::ParameterMap;
//!
//! let params = ParameterMap::parse(Some("a=v1&a=v2&b=v1&flag"));
//! assert_eq!(params.values("a"), Some(&[Some("v1".to_string()), Some("v2".to_string())][..]));
//! assert_eq!(params.values("flag"), Some(&[None][..]));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use percent_encoding::percent_decode_str;

/// Values of one parameter, in occurrence order.
pub type ParameterValues = Vec<Option<String>>;

/// Parameter name to ordered values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterMap {
    parameters: BTreeMap<String, ParameterValues>,
}

impl ParameterMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw (still percent-encoded) query string.
    ///
    /// Names and values are percent-decoded and `+` reads as a space.
    /// Empty segments between `&` separators are ignored.
    pub fn parse(raw_query: Option<&str>) -> Self {
        let mut map = Self::new();
        let Some(query) = raw_query else {
            return map;
        };
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (name, value) = match pair.split_once('=') {
                Some((name, value)) => (name, Some(decode(value))),
                None => (pair, None),
            };
            map.add(decode(name), value);
        }
        map
    }

    /// Fold name/value pairs into a map.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut map = Self::new();
        for (name, value) in entries {
            map.add(name.to_string(), value.map(str::to_string));
        }
        map
    }

    /// Append a value to a parameter.
    pub fn add(&mut self, name: String, value: Option<String>) {
        self.parameters.entry(name).or_default().push(value);
    }

    /// Values of a parameter, if present.
    pub fn values(&self, name: &str) -> Option<&[Option<String>]> {
        self.parameters.get(name).map(Vec::as_slice)
    }

    /// Whether a parameter is present.
    pub fn contains(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Parameter names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    /// Iterate over parameters, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<String>])> {
        self.parameters
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct parameter names.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl fmt::Display for ParameterMap {
    /// One `name=[values]` per line, sorted by name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .iter()
            .map(|(name, values)| format!("{name}={}", describe_values(values)))
            .collect();
        f.write_str(&lines.join(",\n"))
    }
}

/// Render values as `[v1, v2]`, showing a valueless parameter as `(no value)`.
pub fn describe_values(values: &[Option<String>]) -> String {
    let rendered: Vec<&str> = values
        .iter()
        .map(|v| v.as_deref().unwrap_or("(no value)"))
        .collect();
    format!("[{}]", rendered.join(", "))
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Outcome of comparing actual parameters with expected ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterDifferences {
    /// Expected values absent from the actual parameters.
    pub missing: ParameterMap,
    /// Actual values that were not expected.
    pub unexpected: ParameterMap,
}

impl ParameterDifferences {
    /// Whether both sides hold the same parameters.
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Compare actual parameters with expected ones.
///
/// For each name, values present on both sides cancel out (by value, not
/// by count); what remains on the expected side is missing and what
/// remains on the actual side is unexpected.
pub fn reconcile(actual: &ParameterMap, expected: &ParameterMap) -> ParameterDifferences {
    let mut differences = ParameterDifferences::default();
    for (name, actual_values) in actual.iter() {
        let expected_values = expected.values(name).unwrap_or_default();
        for value in actual_values.iter().filter(|v| !expected_values.contains(v)) {
            differences.unexpected.add(name.to_string(), value.clone());
        }
    }
    for (name, expected_values) in expected.iter() {
        let actual_values = actual.values(name).unwrap_or_default();
        for value in expected_values.iter().filter(|v| !actual_values.contains(v)) {
            differences.missing.add(name.to_string(), value.clone());
        }
    }
    tracing::debug!(
        missing = differences.missing.len(),
        unexpected = differences.unexpected.len(),
        "reconciled query parameters"
    );
    differences
}
