//! Run configuration for a sweep.
//!
//! The defaults below are the compile-time constants the CLI runs with. The library never reads
//! them implicitly: every entry point takes a [SweepConfig], so tests can point a sweep at a
//! temporary directory with a custom allow-list.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

/// Note file names that are never treated as orphans. These are the entry points of the vault.
pub const DEFAULT_ALLOW_LIST: [&str; 3] = ["Root.md", "Informatics.md", "Economics.md"];

/// Name of the directory, relative to the sweep root, that receives orphaned notes.
pub const QUARANTINE_DIR_NAME: &str = "_TRASH";

/// Extension (without the leading '.') that identifies a note file.
pub const NOTE_EXTENSION: &str = "md";

/// Whether a link from a note to its own file name counts as a reference to that note.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SelfLinkPolicy {
    /// Any link counts, including `[[Self]]` inside `Self.md`.
    #[default]
    Counts,
    /// A note's links to its own file name are dropped before aggregation.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub root: PathBuf,
    pub note_extension: String,
    pub allow_list: BTreeSet<String>,
    pub quarantine_dir_name: String,
    pub self_links: SelfLinkPolicy,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            root: PathBuf::from("."),
            note_extension: NOTE_EXTENSION.to_string(),
            allow_list: DEFAULT_ALLOW_LIST.iter().map(|s| s.to_string()).collect(),
            quarantine_dir_name: QUARANTINE_DIR_NAME.to_string(),
            self_links: SelfLinkPolicy::default(),
        }
    }
}

impl SweepConfig {
    pub fn with_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    pub fn with_note_extension(mut self, extension: &str) -> Self {
        self.note_extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_allow_list<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_list = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_quarantine_dir_name(mut self, name: &str) -> Self {
        self.quarantine_dir_name = name.to_string();
        self
    }

    pub fn with_self_links(mut self, policy: SelfLinkPolicy) -> Self {
        self.self_links = policy;
        self
    }

    /// Absolute (or root-relative) location of the quarantine directory.
    pub fn quarantine_dir(&self) -> PathBuf {
        self.root.join(&self.quarantine_dir_name)
    }

    pub fn is_allowed(&self, file_name: &str) -> bool {
        self.allow_list.contains(file_name)
    }
}
