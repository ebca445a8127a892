//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test writer; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Write `content` to `name` under `dir`, creating parent directories.
pub fn write(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// A temporary directory laid out as:
///
/// ```text
/// root/
///   notes.txt
///   data.bin
///   nested/
///     deep/
///       report.log
/// ```
pub fn fixture_tree() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write(dir.path(), "notes.txt", "first line\nsecond line\n");
    write(dir.path(), "data.bin", [0x00, 0x0A, 0xFF]);
    write(dir.path(), "nested/deep/report.log", "done\n");
    dir
}
