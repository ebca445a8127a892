//! Line-based textual diff.
//!
//! Content is decoded, split into lines with normalized line endings and
//! diffed with the Myers algorithm from the `similar` crate. Adjacent
//! deletions and insertions are folded into a single change so a modified
//! line reads as one delta.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use similar::{capture_diff_slices, Algorithm, DiffOp};

use super::charset::Charset;

/// Kind of a line-level edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaKind {
    /// Lines of the expected content were replaced in the actual content.
    Change,
    /// Lines of the expected content are missing from the actual content.
    Delete,
    /// Lines of the actual content are absent from the expected content.
    Insert,
}

/// A run of consecutive lines at a zero-based line position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Zero-based index of the first line.
    pub position: usize,
    /// The lines of the run.
    pub lines: Vec<String>,
}

/// One line-level edit turning the expected content into the actual one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta {
    /// What kind of edit this is.
    pub kind: DeltaKind,
    /// The affected lines of the expected content.
    pub original: Chunk,
    /// The affected lines of the actual content.
    pub revised: Chunk,
}

impl Delta {
    /// One-based line number used in messages.
    pub fn line_number(&self) -> usize {
        self.original.position + 1
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DeltaKind::Change => write!(
                f,
                "Changed content at line {}:\nexpecting:\n  {:?}\nbut was:\n  {:?}",
                self.line_number(),
                self.original.lines,
                self.revised.lines
            ),
            DeltaKind::Delete => write!(
                f,
                "Missing content at line {}:\n  {:?}",
                self.line_number(),
                self.original.lines
            ),
            DeltaKind::Insert => write!(
                f,
                "Extra content at line {}:\n  {:?}",
                self.line_number(),
                self.revised.lines
            ),
        }
    }
}

/// Render deltas one per paragraph.
pub fn describe(deltas: &[Delta]) -> String {
    deltas
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Split text into lines.
///
/// `\n`, `\r\n` and `\r` all terminate a line, and a terminator at the
/// very end does not produce a trailing empty line.
pub fn lines_of(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Diff two line sequences.
///
/// `original` is the expected content and `revised` the actual content.
pub fn diff_lines(original: &[String], revised: &[String]) -> Vec<Delta> {
    let ops = capture_diff_slices(Algorithm::Myers, original, revised);
    let mut deltas: Vec<Delta> = Vec::new();
    for op in ops {
        let delta = match op {
            DiffOp::Equal { .. } => continue,
            DiffOp::Delete {
                old_index,
                old_len,
                new_index,
            } => Delta {
                kind: DeltaKind::Delete,
                original: chunk(original, old_index, old_len),
                revised: chunk(revised, new_index, 0),
            },
            DiffOp::Insert {
                old_index,
                new_index,
                new_len,
            } => Delta {
                kind: DeltaKind::Insert,
                original: chunk(original, old_index, 0),
                revised: chunk(revised, new_index, new_len),
            },
            DiffOp::Replace {
                old_index,
                old_len,
                new_index,
                new_len,
            } => Delta {
                kind: DeltaKind::Change,
                original: chunk(original, old_index, old_len),
                revised: chunk(revised, new_index, new_len),
            },
        };
        push_folded(&mut deltas, delta);
    }
    tracing::debug!(deltas = deltas.len(), "computed line diff");
    deltas
}

fn chunk(lines: &[String], position: usize, len: usize) -> Chunk {
    Chunk {
        position,
        lines: lines[position..position + len].to_vec(),
    }
}

/// Fold a delete directly followed by an insert (or the reverse) into a change.
fn push_folded(deltas: &mut Vec<Delta>, delta: Delta) {
    if let Some(last) = deltas.last_mut() {
        let adjacent = last.original.position + last.original.lines.len() == delta.original.position
            && last.revised.position + last.revised.lines.len() == delta.revised.position;
        let folds = matches!(
            (last.kind, delta.kind),
            (DeltaKind::Delete, DeltaKind::Insert) | (DeltaKind::Insert, DeltaKind::Delete)
        );
        if adjacent && folds {
            last.kind = DeltaKind::Change;
            last.original.lines.extend(delta.original.lines);
            last.revised.lines.extend(delta.revised.lines);
            return;
        }
    }
    deltas.push(delta);
}

/// Diff two texts line by line.
pub fn diff_text(actual: &str, expected: &str) -> Vec<Delta> {
    diff_lines(&lines_of(expected), &lines_of(actual))
}

/// Diff a file's content against an expected text.
///
/// # Errors
///
/// Returns any I/O error raised while reading the file.
pub fn diff_path_with_text(actual: &Path, charset: Charset, expected: &str) -> io::Result<Vec<Delta>> {
    let bytes = fs::read(actual)?;
    Ok(diff_text(&charset.decode(&bytes), expected))
}

/// Diff the contents of two files, each decoded with its own charset.
///
/// # Errors
///
/// Returns any I/O error raised while reading either file.
pub fn diff_paths(
    actual: &Path,
    actual_charset: Charset,
    expected: &Path,
    expected_charset: Charset,
) -> io::Result<Vec<Delta>> {
    let actual_text = actual_charset.decode(&fs::read(actual)?);
    let expected_text = expected_charset.decode(&fs::read(expected)?);
    Ok(diff_text(&actual_text, &expected_text))
}

/// Diff a stream's content against an expected text.
///
/// # Errors
///
/// Returns any I/O error raised while reading the stream.
pub fn diff_stream_with_text<R: Read + ?Sized>(
    actual: &mut R,
    charset: Charset,
    expected: &str,
) -> io::Result<Vec<Delta>> {
    let mut bytes = Vec::new();
    actual.read_to_end(&mut bytes)?;
    Ok(diff_text(&charset.decode(&bytes), expected))
}

/// Diff the contents of two streams.
///
/// # Errors
///
/// Returns any I/O error raised while reading either stream.
pub fn diff_streams<A, E>(actual: &mut A, expected: &mut E, charset: Charset) -> io::Result<Vec<Delta>>
where
    A: Read + ?Sized,
    E: Read + ?Sized,
{
    let mut actual_bytes = Vec::new();
    actual.read_to_end(&mut actual_bytes)?;
    let mut expected_bytes = Vec::new();
    expected.read_to_end(&mut expected_bytes)?;
    Ok(diff_text(
        &charset.decode(&actual_bytes),
        &charset.decode(&expected_bytes),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_line_endings_are_normalized() {
        assert_eq!(lines_of("x\ny"), strings(&["x", "y"]));
        assert_eq!(lines_of("x\r\ny\r\n"), strings(&["x", "y"]));
        assert_eq!(lines_of("x\ry"), strings(&["x", "y"]));
        assert_eq!(lines_of("x\n\ny"), strings(&["x", "", "y"]));
        assert!(lines_of("").is_empty());
    }

    #[test]
    fn test_equivalent_texts_have_no_delta() {
        assert!(diff_text("x\r\ny", "x\ny").is_empty());
        assert!(diff_text("", "").is_empty());
    }

    #[test]
    fn test_changed_line() {
        let deltas = diff_text("a\nX\nc", "a\nb\nc");
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].kind, DeltaKind::Change);
        assert_eq!(deltas[0].line_number(), 2);
        assert_eq!(deltas[0].original.lines, strings(&["b"]));
        assert_eq!(deltas[0].revised.lines, strings(&["X"]));
    }

    #[test]
    fn test_missing_and_extra_lines() {
        let deltas = diff_text("a\nc", "a\nb\nc");
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].kind, DeltaKind::Delete);
        assert_eq!(
            deltas[0].to_string(),
            "Missing content at line 2:\n  [\"b\"]"
        );

        let deltas = diff_text("a\nb\nc\nd", "a\nb\nc");
        assert_eq!(deltas.len(), 1);
        assert_eq!(deltas[0].kind, DeltaKind::Insert);
        assert_eq!(deltas[0].to_string(), "Extra content at line 4:\n  [\"d\"]");
    }

    #[test]
    fn test_diff_is_deterministic() {
        let actual = "a\nb\na\nb\nc";
        let expected = "b\na\nc\nb";
        assert_eq!(diff_text(actual, expected), diff_text(actual, expected));
    }

    #[test]
    fn test_change_rendering() {
        let deltas = diff_text("one\nTWO", "one\ntwo");
        assert_eq!(
            describe(&deltas),
            "Changed content at line 2:\nexpecting:\n  [\"two\"]\nbut was:\n  [\"TWO\"]"
        );
    }
}
