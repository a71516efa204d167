//! Shared test utilities for integration tests.
//!
//! Import from integration test files as:
//! ```ignore
//! mod common;
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write `contents` to `root/rel`, creating parent directories.
#[allow(dead_code)]
pub fn write_note(root: &Path, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}

/// Create a vault with Root.md (allow-listed, links to Note1), Note1.md and Note2.md.
///
/// Returns the path to the vault directory (e.g. `<temp_dir>/vault/`).
#[allow(dead_code)]
pub fn create_test_vault(temp_dir: &TempDir) -> PathBuf {
    let vault = temp_dir.path().join("vault");
    std::fs::create_dir(&vault).unwrap();

    write_note(&vault, "Root.md", "# Root\n\nStart with [[Note1|the first note]].\n");
    write_note(&vault, "Note1.md", "# Note 1\n\nLinked from the root.\n");
    write_note(&vault, "Note2.md", "# Note 2\n\nNothing links here.\n");

    vault
}

/// Sorted list of every file under `root`, relative to it, with '/' separators.
#[allow(dead_code)]
pub fn list_files(root: &Path) -> Vec<String> {
    let mut files = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            noet_sweep::paths::os_path_to_string(e.path().strip_prefix(root).unwrap())
        })
        .collect::<Vec<String>>();
    files.sort();
    files
}
