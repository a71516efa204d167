//! Shared fixtures for the in-memory detector tests

use crate::scan::Note;

/// Initialize logging for tests
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init()
        .ok();
}

/// Build an in-memory corpus from `(path, text)` pairs.
pub fn corpus(entries: &[(&str, &str)]) -> Vec<Note> {
    init_logging();
    entries
        .iter()
        .map(|(path, text)| Note::new(path, *text))
        .collect()
}

/// The three-note vault used throughout: an allow-listed root linking to one of two notes.
pub fn root_and_two_notes() -> Vec<Note> {
    corpus(&[
        ("vault/Root.md", "# Root\n\nSee [[Note1]] for details.\n"),
        ("vault/Note1.md", "# Note 1\n\nLinked from the root.\n"),
        ("vault/Note2.md", "# Note 2\n\nNothing points here.\n"),
    ])
}
