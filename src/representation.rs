//! Rendering of values inside failure messages.
//!
//! Listings are truncated after [`Configuration::max_elements_for_printing`]
//! elements. Unordered collections are rendered sorted so messages are
//! stable across runs.

use std::fmt::Debug;
use std::path::Path;

use crate::config::Configuration;

/// Render already formatted elements as `[a, b, c]`, truncating long lists.
pub fn list<I>(items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let max = Configuration::current().max_elements_for_printing();
    let items: Vec<String> = items.into_iter().collect();
    let mut out = String::from("[");
    for (i, item) in items.iter().take(max).enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item);
    }
    if items.len() > max {
        out.push_str(", ...");
    }
    out.push(']');
    out
}

/// Render elements with `Debug`, keeping their order.
pub fn debug_list<'a, T, I>(items: I) -> String
where
    T: Debug + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    list(items.into_iter().map(|item| format!("{item:?}")))
}

/// Render elements with `Debug`, sorted by their rendering.
pub fn debug_set<'a, T, I>(items: I) -> String
where
    T: Debug + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut rendered: Vec<String> = items.into_iter().map(|item| format!("{item:?}")).collect();
    rendered.sort();
    list(rendered)
}

/// Render key/value entries as `{k1: v1, k2: v2}`, sorted by rendering.
pub fn entries<'a, K, V, I>(entries: I) -> String
where
    K: Debug + 'a,
    V: Debug + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let max = Configuration::current().max_elements_for_printing();
    let mut rendered: Vec<String> = entries.into_iter().map(|(k, v)| entry(k, v)).collect();
    rendered.sort();
    let total = rendered.len();
    rendered.truncate(max);
    let mut out = format!("{{{}", rendered.join(", "));
    if total > max {
        out.push_str(", ...");
    }
    out.push('}');
    out
}

/// Render one entry as `k: v`.
pub fn entry<K: Debug + ?Sized, V: Debug + ?Sized>(key: &K, value: &V) -> String {
    format!("{key:?}: {value:?}")
}

/// Render paths sorted, using their display form.
pub fn paths<P: AsRef<Path>>(paths: &[P]) -> String {
    let mut rendered: Vec<String> = paths
        .iter()
        .map(|p| p.as_ref().display().to_string())
        .collect();
    rendered.sort();
    list(rendered)
}

/// Render a byte as `0x1F`, or `EOF` when absent.
pub fn byte(value: Option<u8>) -> String {
    match value {
        Some(b) => format!("0x{b:02X}"),
        None => "EOF".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_set_is_sorted() {
        assert_eq!(debug_set(&["b", "a"]), r#"["a", "b"]"#);
    }

    #[test]
    fn test_entries_rendering() {
        let k = ["name", "color"];
        let v = ["Yoda", "green"];
        assert_eq!(
            entries(k.iter().zip(v.iter())),
            r#"{"color": "green", "name": "Yoda"}"#
        );
    }

    #[test]
    fn test_byte_rendering() {
        assert_eq!(byte(Some(0x0A)), "0x0A");
        assert_eq!(byte(None), "EOF");
    }

    #[test]
    fn test_paths_rendering() {
        assert_eq!(paths(&["/b", "/a"]), "[/a, /b]");
    }
}
