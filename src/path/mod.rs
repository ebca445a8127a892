//! Lexical path helpers and path patterns.
//!
//! The raw comparisons work on the literal segments of a path: separators
//! split segments, repeated separators collapse, and `.` / `..` are kept as
//! written. Nothing here touches the filesystem.
//!
//! ```rust
//! use std::path::Path;
//! use testkit_assert::path;
//!
//! assert!(path::raw_starts_with(Path::new("/a/b/c"), Path::new("/a/b")));
//! assert!(!path::raw_starts_with(Path::new("/a/./b"), Path::new("/a/b")));
//! assert_eq!(path::extension(Path::new("notes.txt")), Some("txt".to_string()));
//! ```

mod pattern;

pub use pattern::PathPattern;

use std::path::{is_separator, Path, PathBuf};

const ROOT: &str = "/";

/// Literal segments of `path`.
///
/// An absolute path starts with a `/` segment.
pub fn raw_segments(path: &Path) -> Vec<String> {
    let text = path.as_os_str().to_string_lossy();
    let mut segments = Vec::new();
    if text.starts_with(is_separator) {
        segments.push(ROOT.to_string());
    }
    segments.extend(
        text.split(is_separator)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string),
    );
    segments
}

/// Whether `path` starts with all segments of `prefix`.
pub fn raw_starts_with(path: &Path, prefix: &Path) -> bool {
    let path = raw_segments(path);
    let prefix = raw_segments(prefix);
    !prefix.is_empty() && path.starts_with(&prefix)
}

/// Whether `path` ends with all segments of `suffix`.
///
/// An absolute suffix only matches the whole path.
pub fn raw_ends_with(path: &Path, suffix: &Path) -> bool {
    let path = raw_segments(path);
    let suffix = raw_segments(suffix);
    if suffix.is_empty() {
        return false;
    }
    if suffix[0] == ROOT {
        return path == suffix;
    }
    path.ends_with(&suffix)
}

/// Lexical parent of `path`, if it has one.
///
/// `a` and `/` have no parent; the parent of `/a` is `/`.
pub fn raw_parent(path: &Path) -> Option<PathBuf> {
    let segments = raw_segments(path);
    if segments.len() < 2 {
        return None;
    }
    Some(join(&segments[..segments.len() - 1]))
}

/// Whether two paths have the same literal segments.
pub fn raw_eq(left: &Path, right: &Path) -> bool {
    raw_segments(left) == raw_segments(right)
}

/// Lexically normalize `path`, removing `.` and folding `name/..`.
///
/// Leading `..` segments of a relative path are kept; `..` directly under
/// the root is dropped.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized: Vec<String> = Vec::new();
    for segment in raw_segments(path) {
        match segment.as_str() {
            "." => {}
            ".." => match normalized.last().map(String::as_str) {
                Some(ROOT) => {}
                Some("..") | None => normalized.push(segment),
                Some(_) => {
                    normalized.pop();
                }
            },
            _ => normalized.push(segment),
        }
    }
    join(&normalized)
}

/// Whether `path` is already in normal form.
pub fn is_normalized(path: &Path) -> bool {
    raw_segments(&normalize(path)) == raw_segments(path)
}

/// Last segment of `path`, if any.
pub fn file_name(path: &Path) -> Option<String> {
    raw_segments(path)
        .pop()
        .filter(|segment| segment != ROOT)
}

/// Extension of the file name: the text after its last `.`.
///
/// A name without a dot, or ending with one, has no extension.
pub fn extension(path: &Path) -> Option<String> {
    let name = file_name(path)?;
    let (_, extension) = name.rsplit_once('.')?;
    if extension.is_empty() {
        None
    } else {
        Some(extension.to_string())
    }
}

fn join(segments: &[String]) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in segments {
        path.push(segment);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_segments() {
        assert_eq!(raw_segments(Path::new("/a//b/")), vec!["/", "a", "b"]);
        assert_eq!(raw_segments(Path::new("a/./b")), vec!["a", ".", "b"]);
        assert!(raw_segments(Path::new("")).is_empty());
    }

    #[test]
    fn test_raw_starts_with() {
        assert!(raw_starts_with(Path::new("/a/b"), Path::new("/a")));
        assert!(!raw_starts_with(Path::new("/ab"), Path::new("/a")));
        assert!(!raw_starts_with(Path::new("a/b"), Path::new("/a")));
        assert!(!raw_starts_with(Path::new("/a/../a/b"), Path::new("/a/b")));
    }

    #[test]
    fn test_raw_ends_with() {
        assert!(raw_ends_with(Path::new("/a/b/c"), Path::new("b/c")));
        assert!(!raw_ends_with(Path::new("/a/b/c"), Path::new("/b/c")));
        assert!(raw_ends_with(Path::new("/a/b"), Path::new("/a/b")));
        assert!(!raw_ends_with(Path::new("/a/b/c"), Path::new("./c")));
    }

    #[test]
    fn test_raw_parent() {
        assert_eq!(raw_parent(Path::new("/a/b")), Some(PathBuf::from("/a")));
        assert_eq!(raw_parent(Path::new("/a")), Some(PathBuf::from("/")));
        assert_eq!(raw_parent(Path::new("a")), None);
        assert_eq!(raw_parent(Path::new("/")), None);
        assert_eq!(raw_parent(Path::new("a/..")), Some(PathBuf::from("a")));
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
        assert_eq!(normalize(Path::new("../a/..")), PathBuf::from(".."));
        assert_eq!(normalize(Path::new("/..")), PathBuf::from("/"));
        assert!(is_normalized(Path::new("/a/b")));
        assert!(!is_normalized(Path::new("a/./b")));
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension(Path::new("dir/file.txt")), Some("txt".to_string()));
        assert_eq!(extension(Path::new("archive.tar.gz")), Some("gz".to_string()));
        assert_eq!(extension(Path::new("file")), None);
        assert_eq!(extension(Path::new("file.")), None);
        assert_eq!(extension(Path::new(".bashrc")), Some("bashrc".to_string()));
    }
}
