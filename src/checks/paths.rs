//! Checks on filesystem paths.
//!
//! Raw variants (`*_raw`) only look at the literal path segments. The
//! others resolve paths through the filesystem, following symbolic links,
//! and surface resolution failures as [`Error::Io`].

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::assertions::matcher::Matcher;
use crate::config::AssertionInfo;
use crate::diff::charset::Charset;
use crate::diff::digest::{self, DigestAlgorithmRef, ExpectedDigest};
use crate::diff::{binary, text};
use crate::error::{Error, Result};
use crate::path;
use crate::representation;

// =============================================================================
// Existence and kind
// =============================================================================

/// `actual` exists, following symbolic links.
pub fn assert_exists(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if actual.exists() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting path:\n  <{}>\nto exist (symbolic links were followed)",
        actual.display()
    )))
}

/// `actual` exists, without following a final symbolic link.
pub fn assert_exists_no_follow_links(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if fs::symlink_metadata(actual).is_ok() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting path:\n  <{}>\nto exist (symbolic links were not followed)",
        actual.display()
    )))
}

/// Nothing exists at `actual`, not even a dangling symbolic link.
pub fn assert_does_not_exist(info: &AssertionInfo, actual: &Path) -> Result<()> {
    match fs::symlink_metadata(actual) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        _ => Err(info.failure(format!(
            "Expecting path:\n  <{}>\nnot to exist",
            actual.display()
        ))),
    }
}

/// `actual` is a regular file, following symbolic links.
pub fn assert_is_regular_file(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if actual.is_file() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting path:\n  <{}>\nto be a regular file",
        actual.display()
    )))
}

/// `actual` is a directory, following symbolic links.
pub fn assert_is_directory(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if actual.is_dir() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting path:\n  <{}>\nto be a directory",
        actual.display()
    )))
}

/// `actual` is itself a symbolic link.
pub fn assert_is_symbolic_link(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if actual.is_symlink() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting path:\n  <{}>\nto be a symbolic link",
        actual.display()
    )))
}

// =============================================================================
// Access
// =============================================================================

/// `actual` exists and can be opened for reading.
pub fn assert_is_readable(info: &AssertionInfo, actual: &Path) -> Result<()> {
    assert_exists(info, actual)?;
    let readable = if actual.is_dir() {
        fs::read_dir(actual).is_ok()
    } else {
        File::open(actual).is_ok()
    };
    if readable {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting path:\n  <{}>\nto be readable",
        actual.display()
    )))
}

/// `actual` exists and is not read-only.
pub fn assert_is_writable(info: &AssertionInfo, actual: &Path) -> Result<()> {
    assert_exists(info, actual)?;
    let metadata = metadata(actual)?;
    if !metadata.permissions().readonly() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting path:\n  <{}>\nto be writable",
        actual.display()
    )))
}

/// `actual` exists and carries an execute permission.
pub fn assert_is_executable(info: &AssertionInfo, actual: &Path) -> Result<()> {
    assert_exists(info, actual)?;
    if is_executable(&metadata(actual)?) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting path:\n  <{}>\nto be executable",
        actual.display()
    )))
}

#[cfg(unix)]
fn is_executable(metadata: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(metadata: &fs::Metadata) -> bool {
    metadata.is_dir() || metadata.is_file()
}

// =============================================================================
// Lexical shape
// =============================================================================

/// `actual` is absolute.
pub fn assert_is_absolute(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if actual.is_absolute() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  <{}>\nto be an absolute path",
        actual.display()
    )))
}

/// `actual` is relative.
pub fn assert_is_relative(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if actual.is_relative() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  <{}>\nto be a relative path",
        actual.display()
    )))
}

/// `actual` holds no `.` segment and no foldable `..` segment.
pub fn assert_is_normalized(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if path::is_normalized(actual) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  <{}>\nto be normalized",
        actual.display()
    )))
}

/// `actual` equals its canonical form.
pub fn assert_is_canonical(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if canonicalize(actual)? == actual {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting actual:\n  <{}>\nto be a canonical path",
        actual.display()
    )))
}

// =============================================================================
// Relationships
// =============================================================================

/// The canonical parent of `actual` is the canonical form of `expected`.
pub fn assert_has_parent(info: &AssertionInfo, actual: &Path, expected: &Path) -> Result<()> {
    let canonical = canonicalize(actual)?;
    let parent = canonical.parent().map(Path::to_path_buf);
    let expected_canonical = canonicalize(expected)?;
    check_parent(info, actual, parent, expected, |parent| {
        parent == expected_canonical.as_path()
    })
}

/// The lexical parent of `actual` is `expected`, segment by segment.
pub fn assert_has_parent_raw(info: &AssertionInfo, actual: &Path, expected: &Path) -> Result<()> {
    let parent = path::raw_parent(actual);
    check_parent(info, actual, parent, expected, |parent| {
        path::raw_eq(parent, expected)
    })
}

fn check_parent<F>(
    info: &AssertionInfo,
    actual: &Path,
    parent: Option<PathBuf>,
    expected: &Path,
    is_expected: F,
) -> Result<()>
where
    F: Fn(&Path) -> bool,
{
    match parent {
        None => Err(info.failure(format!(
            "Expecting path\n  <{}>\nto have parent:\n  <{}>\nbut did not have one",
            actual.display(),
            expected.display()
        ))),
        Some(parent) if is_expected(&parent) => Ok(()),
        Some(parent) => Err(info.failure(format!(
            "Expecting path\n  <{}>\nto have parent:\n  <{}>\nbut had:\n  <{}>",
            actual.display(),
            expected.display(),
            parent.display()
        ))),
    }
}

/// The canonical form of `actual` is a filesystem root.
pub fn assert_has_no_parent(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if canonicalize(actual)?.parent().is_none() {
        return Ok(());
    }
    Err(no_parent_failure(info, actual))
}

/// `actual` has at most one literal segment.
pub fn assert_has_no_parent_raw(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if path::raw_parent(actual).is_none() {
        return Ok(());
    }
    Err(no_parent_failure(info, actual))
}

fn no_parent_failure(info: &AssertionInfo, actual: &Path) -> Error {
    info.failure(format!(
        "Expecting path\n  <{}>\nnot to have a parent",
        actual.display()
    ))
}

/// The canonical form of `actual` starts with the canonical form of `other`.
pub fn assert_starts_with(info: &AssertionInfo, actual: &Path, other: &Path) -> Result<()> {
    if canonicalize(actual)?.starts_with(canonicalize(other)?) {
        return Ok(());
    }
    Err(starts_with_failure(info, actual, other))
}

/// The literal segments of `actual` start with those of `other`.
pub fn assert_starts_with_raw(info: &AssertionInfo, actual: &Path, other: &Path) -> Result<()> {
    if path::raw_starts_with(actual, other) {
        return Ok(());
    }
    Err(starts_with_failure(info, actual, other))
}

fn starts_with_failure(info: &AssertionInfo, actual: &Path, other: &Path) -> Error {
    info.failure(format!(
        "Expected path:\n  <{}>\nto start with:\n  <{}>\nbut it did not",
        actual.display(),
        other.display()
    ))
}

/// The canonical form of `actual` ends with the normalized form of `other`.
pub fn assert_ends_with(info: &AssertionInfo, actual: &Path, other: &Path) -> Result<()> {
    if canonicalize(actual)?.ends_with(path::normalize(other)) {
        return Ok(());
    }
    Err(ends_with_failure(info, actual, other))
}

/// The literal segments of `actual` end with those of `other`.
pub fn assert_ends_with_raw(info: &AssertionInfo, actual: &Path, other: &Path) -> Result<()> {
    if path::raw_ends_with(actual, other) {
        return Ok(());
    }
    Err(ends_with_failure(info, actual, other))
}

fn ends_with_failure(info: &AssertionInfo, actual: &Path, other: &Path) -> Error {
    info.failure(format!(
        "Expected path:\n  <{}>\nto end with:\n  <{}>\nbut it did not",
        actual.display(),
        other.display()
    ))
}

/// The last segment of `actual` is `expected`.
pub fn assert_has_file_name(info: &AssertionInfo, actual: &Path, expected: &str) -> Result<()> {
    let name = path::file_name(actual);
    if name.as_deref() == Some(expected) {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting\n  <{}>\nto have name:\n  <{expected}>\nbut had:\n  <{}>",
        actual.display(),
        name.unwrap_or_default()
    )))
}

// =============================================================================
// Files
// =============================================================================

/// `actual` is a regular file of `expected` bytes.
pub fn assert_has_size(info: &AssertionInfo, actual: &Path, expected: u64) -> Result<()> {
    assert_is_regular_file(info, actual)?;
    let size = metadata(actual)?.len();
    if size == expected {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting path\n  <{}>\nto have a size of:\n  <{expected}> bytes\nbut had:\n  <{size}> bytes",
        actual.display()
    )))
}

/// `actual` is an empty regular file.
pub fn assert_is_empty_file(info: &AssertionInfo, actual: &Path) -> Result<()> {
    assert_is_regular_file(info, actual)?;
    if metadata(actual)?.len() == 0 {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting file\n  <{}>\nto be empty",
        actual.display()
    )))
}

/// `actual` is a regular file with content.
pub fn assert_is_not_empty_file(info: &AssertionInfo, actual: &Path) -> Result<()> {
    assert_is_regular_file(info, actual)?;
    if metadata(actual)?.len() > 0 {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting file\n  <{}>\nnot to be empty",
        actual.display()
    )))
}

/// `actual` is a regular file with extension `expected`.
///
/// A file without extension is reported distinctly from a file with a
/// different one.
pub fn assert_has_extension(info: &AssertionInfo, actual: &Path, expected: &str) -> Result<()> {
    assert_is_regular_file(info, actual)?;
    match path::extension(actual) {
        None => Err(info.failure(format!(
            "Expecting\n  <{}>\nto have extension:\n  <{expected}>\nbut had no extension",
            actual.display()
        ))),
        Some(extension) if extension == expected => Ok(()),
        Some(extension) => Err(info.failure(format!(
            "Expecting\n  <{}>\nto have extension:\n  <{expected}>\nbut had:\n  <{extension}>",
            actual.display()
        ))),
    }
}

/// `actual` is a regular file without extension.
pub fn assert_has_no_extension(info: &AssertionInfo, actual: &Path) -> Result<()> {
    assert_is_regular_file(info, actual)?;
    match path::extension(actual) {
        None => Ok(()),
        Some(extension) => Err(info.failure(format!(
            "Expected actual\n  <{}>\nnot to have an extension, but extension was:\n  <{extension}>",
            actual.display()
        ))),
    }
}

// =============================================================================
// Content
// =============================================================================

/// The content of `actual`, decoded with `charset`, equals `expected`
/// modulo line endings.
pub fn assert_has_text_content(
    info: &AssertionInfo,
    actual: &Path,
    expected: &str,
    charset: Charset,
) -> Result<()> {
    assert_is_readable(info, actual)?;
    let deltas = text::diff_path_with_text(actual, charset, expected).map_err(|e| {
        Error::io(
            format!("Unable to verify text contents of path:<{}>", actual.display()),
            e,
        )
    })?;
    if deltas.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "File:\n  <{}>\nread with charset <{charset}> does not have the expected content:\n\n{}",
        actual.display(),
        text::describe(&deltas)
    )))
}

/// `actual` and `expected` have the same textual content, each decoded
/// with its own charset.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `expected` does not exist or is
/// not readable.
pub fn assert_has_same_text_content_as(
    info: &AssertionInfo,
    actual: &Path,
    actual_charset: Charset,
    expected: &Path,
    expected_charset: Charset,
) -> Result<()> {
    check_comparable(expected)?;
    assert_is_readable(info, actual)?;
    let deltas = text::diff_paths(actual, actual_charset, expected, expected_charset)
        .map_err(|e| compare_error(actual, expected, e))?;
    if deltas.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Path:\n  <{}>\nand path:\n  <{}>\ndo not have same content:\n\n{}",
        actual.display(),
        expected.display(),
        text::describe(&deltas)
    )))
}

/// The bytes of `actual` equal `expected`.
pub fn assert_has_binary_content(info: &AssertionInfo, actual: &Path, expected: &[u8]) -> Result<()> {
    assert_is_readable(info, actual)?;
    let result = binary::diff_path(actual, expected).map_err(|e| {
        Error::io(
            format!("Unable to verify binary contents of path:<{}>", actual.display()),
            e,
        )
    })?;
    check_binary(info, actual, result)
}

/// `actual` and `expected` hold the same bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `expected` does not exist or is
/// not readable.
pub fn assert_has_same_binary_content_as(
    info: &AssertionInfo,
    actual: &Path,
    expected: &Path,
) -> Result<()> {
    check_comparable(expected)?;
    assert_is_readable(info, actual)?;
    let expected_bytes = fs::read(expected).map_err(|e| compare_error(actual, expected, e))?;
    let result = binary::diff_path(actual, &expected_bytes)
        .map_err(|e| compare_error(actual, expected, e))?;
    check_binary(info, actual, result)
}

fn check_binary(info: &AssertionInfo, actual: &Path, result: binary::BinaryDiffResult) -> Result<()> {
    if result.has_no_diff() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Path:\n  <{}>\ndoes not have expected binary content {result}",
        actual.display()
    )))
}

fn check_comparable(expected: &Path) -> Result<()> {
    if !expected.exists() {
        return Err(Error::invalid_argument(format!(
            "The given Path <{}> to compare actual content to should exist",
            expected.display()
        )));
    }
    if File::open(expected).is_err() {
        return Err(Error::invalid_argument(format!(
            "The given Path <{}> to compare actual content to should be readable",
            expected.display()
        )));
    }
    Ok(())
}

fn compare_error(actual: &Path, expected: &Path, source: io::Error) -> Error {
    Error::io(
        format!(
            "Unable to compare contents of paths:<{}> and:<{}>",
            actual.display(),
            expected.display()
        ),
        source,
    )
}

/// The digest of the content of `actual` equals `expected`.
///
/// The algorithm is resolved and the expected digest decoded before the
/// file is touched.
pub fn assert_has_digest(
    info: &AssertionInfo,
    actual: &Path,
    algorithm: &DigestAlgorithmRef,
    expected: &ExpectedDigest,
) -> Result<()> {
    let algorithm = algorithm.resolve()?;
    let expected = expected.to_bytes()?;
    assert_is_regular_file(info, actual)?;
    assert_is_readable(info, actual)?;
    let digest_error = |e| {
        Error::io(
            format!("Unable to calculate digest of path:<{}>", actual.display()),
            e,
        )
    };
    let mut file = File::open(actual).map_err(digest_error)?;
    let diff = digest::digest_diff(&mut file, algorithm, &expected).map_err(digest_error)?;
    if !diff.digests_differ() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting Path\n  <{}>\nto have {} digest:\n  <{}>\nbut was:\n  <{}>",
        actual.display(),
        diff.algorithm(),
        diff.expected(),
        diff.actual()
    )))
}

// =============================================================================
// Directories
// =============================================================================

/// At least one direct entry of `actual` matches `filter`.
pub fn assert_is_directory_containing(
    info: &AssertionInfo,
    actual: &Path,
    filter: &dyn Matcher<Path>,
) -> Result<()> {
    let content = directory_content(info, actual)?;
    if content.iter().any(|entry| filter.matches(entry)) {
        return Ok(());
    }
    Err(info.failure(directory_should_contain(
        "Expecting directory:",
        actual,
        &content,
        &filter.describe(),
    )))
}

/// At least one entry of `actual`, at any depth, matches `filter`.
///
/// Symbolic links are reported as entries but never followed.
pub fn assert_is_directory_recursively_containing(
    info: &AssertionInfo,
    actual: &Path,
    filter: &dyn Matcher<Path>,
) -> Result<()> {
    let content = recursive_content(info, actual)?;
    if content.iter().any(|entry| filter.matches(entry)) {
        return Ok(());
    }
    Err(info.failure(directory_should_contain(
        "Expecting directory or any of its subdirectories (recursively):",
        actual,
        &content,
        &filter.describe(),
    )))
}

fn directory_should_contain(header: &str, actual: &Path, content: &[PathBuf], filter: &str) -> String {
    if content.is_empty() {
        return format!(
            "{header}\n  {}\nto contain at least one file matching {filter} but it did not contain any files",
            actual.display()
        );
    }
    format!(
        "{header}\n  {}\nto contain at least one file matching {filter} but there was none.\nThe directory content was:\n  {}",
        actual.display(),
        representation::paths(content)
    )
}

/// No direct entry of `actual` matches `filter`.
pub fn assert_is_directory_not_containing(
    info: &AssertionInfo,
    actual: &Path,
    filter: &dyn Matcher<Path>,
) -> Result<()> {
    let matching: Vec<PathBuf> = directory_content(info, actual)?
        .into_iter()
        .filter(|entry| filter.matches(entry))
        .collect();
    if matching.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting directory:\n  {}\nnot to contain any files matching {} but found some:\n  {}",
        actual.display(),
        filter.describe(),
        representation::paths(&matching)
    )))
}

/// The names of the direct entries of `actual` are exactly `expected`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `expected` is empty but the
/// directory is not.
pub fn assert_is_directory_containing_exactly(
    info: &AssertionInfo,
    actual: &Path,
    expected: &[&str],
) -> Result<()> {
    let content = directory_content(info, actual)?;
    if super::check_look_for(expected.len(), content.is_empty(), "file names")? {
        return Ok(());
    }
    let names: Vec<String> = content.iter().filter_map(|p| path::file_name(p)).collect();
    let mut missing: Vec<&str> = expected
        .iter()
        .copied()
        .filter(|name| !names.iter().any(|n| n.as_str() == *name))
        .collect();
    missing.sort_unstable();
    missing.dedup();
    let mut unexpected: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| !expected.contains(name))
        .collect();
    unexpected.sort_unstable();
    if missing.is_empty() && unexpected.is_empty() {
        return Ok(());
    }
    let mut message = format!(
        "Expecting directory:\n  {}\nto contain exactly:\n  {}",
        actual.display(),
        representation::debug_set(expected)
    );
    if !missing.is_empty() {
        message.push_str(&format!(
            "\nbut could not find:\n  {}",
            representation::debug_list(&missing)
        ));
    }
    if !unexpected.is_empty() {
        message.push_str(&format!(
            "\nand found unexpected:\n  {}",
            representation::debug_list(&unexpected)
        ));
    }
    Err(info.failure(message))
}

/// `actual` is a directory without entries.
pub fn assert_is_empty_directory(info: &AssertionInfo, actual: &Path) -> Result<()> {
    let content = directory_content(info, actual)?;
    if content.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting directory:\n  {}\nto be empty but it contained:\n  {}",
        actual.display(),
        representation::paths(&content)
    )))
}

/// `actual` is a directory with at least one entry.
pub fn assert_is_not_empty_directory(info: &AssertionInfo, actual: &Path) -> Result<()> {
    if !directory_content(info, actual)?.is_empty() {
        return Ok(());
    }
    Err(info.failure(format!(
        "Expecting directory:\n  {}\nnot to be empty",
        actual.display()
    )))
}

/// Direct entries of a directory, as `actual` joined with each name.
fn directory_content(info: &AssertionInfo, actual: &Path) -> Result<Vec<PathBuf>> {
    assert_is_directory(info, actual)?;
    let list_error = |e| {
        Error::io(
            format!("Unable to list directory content: <{}>", actual.display()),
            e,
        )
    };
    let mut content = Vec::new();
    for entry in fs::read_dir(actual).map_err(list_error)? {
        content.push(entry.map_err(list_error)?.path());
    }
    content.sort();
    tracing::trace!(directory = %actual.display(), entries = content.len(), "listed directory");
    Ok(content)
}

/// Every entry below `actual`, without following symbolic links.
fn recursive_content(info: &AssertionInfo, actual: &Path) -> Result<Vec<PathBuf>> {
    assert_is_directory(info, actual)?;
    let mut content = Vec::new();
    for entry in WalkDir::new(actual).min_depth(1).follow_links(false) {
        let entry = entry.map_err(|e| {
            Error::io(
                format!(
                    "Unable to walk recursively the directory :<{}>",
                    actual.display()
                ),
                io::Error::from(e),
            )
        })?;
        content.push(entry.into_path());
    }
    content.sort();
    tracing::debug!(directory = %actual.display(), entries = content.len(), "walked directory");
    Ok(content)
}

fn metadata(actual: &Path) -> Result<fs::Metadata> {
    fs::metadata(actual).map_err(|e| {
        Error::io(
            format!("Unable to read metadata of path:<{}>", actual.display()),
            e,
        )
    })
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| {
        Error::io(
            format!("Unable to resolve path:<{}>", path.display()),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathPattern;
    use tempfile::TempDir;

    fn info() -> AssertionInfo {
        AssertionInfo::new()
    }

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
        fs::write(dir.path().join("b.log"), "").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("deep.md"), "# deep").unwrap();
        dir
    }

    #[test]
    fn test_kind_checks() {
        let dir = fixture();
        let file = dir.path().join("a.txt");
        assert!(assert_is_regular_file(&info(), &file).is_ok());
        assert!(assert_is_directory(&info(), dir.path()).is_ok());
        let err = assert_is_directory(&info(), &file).unwrap_err();
        assert!(err.is_assertion_failure());
        assert!(err.to_string().ends_with("to be a directory"));
        assert!(assert_does_not_exist(&info(), &dir.path().join("nope")).is_ok());
    }

    #[test]
    fn test_extension_reports_missing_distinctly() {
        let dir = fixture();
        let plain = dir.path().join("file");
        fs::write(&plain, "x").unwrap();

        assert!(assert_has_extension(&info(), &dir.path().join("a.txt"), "txt").is_ok());
        let missing = assert_has_extension(&info(), &plain, "log").unwrap_err();
        assert!(missing.to_string().ends_with("but had no extension"));
        let wrong = assert_has_extension(&info(), &dir.path().join("a.txt"), "log").unwrap_err();
        assert!(wrong.to_string().ends_with("but had:\n  <txt>"));
    }

    #[test]
    fn test_directory_containing_pattern() {
        let dir = fixture();
        let txt = PathPattern::parse("glob:**/*.txt").unwrap();
        let md = PathPattern::parse("glob:**/*.md").unwrap();

        assert!(assert_is_directory_containing(&info(), dir.path(), &txt).is_ok());
        let err = assert_is_directory_containing(&info(), dir.path(), &md).unwrap_err();
        assert!(err.to_string().contains("the 'glob:**/*.md' pattern but there was none"));
        assert!(assert_is_directory_recursively_containing(&info(), dir.path(), &md).is_ok());
        assert!(assert_is_directory_not_containing(&info(), dir.path(), &md).is_ok());
    }

    #[test]
    fn test_directory_containing_exactly() {
        let dir = fixture();
        assert!(assert_is_directory_containing_exactly(&info(), dir.path(), &["sub", "b.log", "a.txt"]).is_ok());
        let err = assert_is_directory_containing_exactly(&info(), dir.path(), &["a.txt", "c.txt"]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("but could not find:\n  [\"c.txt\"]"));
        assert!(message.contains("and found unexpected:\n  [\"b.log\", \"sub\"]"));
        assert!(assert_is_directory_containing_exactly(&info(), dir.path(), &[])
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_directory_checks_on_missing_root() {
        let dir = fixture();
        let missing = dir.path().join("missing");
        let err = assert_is_empty_directory(&info(), &missing).unwrap_err();
        assert!(err.is_assertion_failure());
    }

    #[test]
    fn test_raw_parent_is_lexical() {
        assert!(assert_has_parent_raw(&info(), Path::new("/a/b"), Path::new("/a")).is_ok());
        assert!(assert_has_parent_raw(&info(), Path::new("/a/./b"), Path::new("/a")).is_err());
        assert!(assert_has_no_parent_raw(&info(), Path::new("a")).is_ok());
    }

    #[test]
    fn test_canonical_checks_wrap_io_errors() {
        let err = assert_starts_with(&info(), Path::new("/definitely/not/here"), Path::new("/")).unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_binary_content_mismatch_message() {
        let dir = fixture();
        let err = assert_has_binary_content(&info(), &dir.path().join("a.txt"), b"alps\n").unwrap_err();
        assert!(err
            .to_string()
            .ends_with("does not have expected binary content at offset <3>, expecting:\n  <0x73>\nbut was:\n  <0x68>"));
    }

    #[test]
    fn test_digest_checks_arguments_first() {
        let dir = fixture();
        let missing = dir.path().join("missing");
        let err = assert_has_digest(&info(), &missing, &"SHA-0".into(), &"00".into()).unwrap_err();
        assert!(matches!(err, Error::UnknownAlgorithm { .. }));
        let err = assert_has_digest(&info(), &missing, &"MD5".into(), &"zz".into()).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
