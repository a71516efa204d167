//! Note discovery and decoding.
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::SweepConfig,
    error::BuildonomyError,
    paths::file_name_string,
};

/// A note file as read at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub path: PathBuf,
    /// Base file name. This, not `path`, is the note's identity when matching links.
    pub name: String,
    pub text: String,
}

impl Note {
    pub fn new<P: AsRef<Path>>(path: P, text: impl Into<String>) -> Note {
        Note {
            path: path.as_ref().to_path_buf(),
            name: file_name_string(&path),
            text: text.into(),
        }
    }
}

/// Recursively lists the note files under `config.root`, sorted by path.
///
/// The quarantine directory directly under the root is pruned so that notes already moved there
/// are not rediscovered on a later run. Symlinks to files are listed like regular notes, but
/// symlinked directories are not followed. Entries that can't be read are logged and skipped;
/// failing to read the root itself is an error.
pub fn iter_note_paths(config: &SweepConfig) -> Result<Vec<PathBuf>, BuildonomyError> {
    let root = config.root.as_path();
    let quarantine = config.quarantine_dir();
    let is_quarantine = |entry: &DirEntry| entry.depth() == 1 && entry.path() == quarantine;

    let mut note_paths = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| !is_quarantine(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            // A missing or unreadable root is an error, not an empty vault
            Err(err) if err.depth() == 0 => return Err(err.into()),
            Err(err) => {
                tracing::warn!("Skipping unreadable entry: {err}");
                continue;
            }
        };
        // A symlinked note is a note; symlinked directories are still not descended into
        let is_file = entry.file_type().is_file()
            || (entry.file_type().is_symlink() && entry.path().is_file());
        if is_file && is_note_name(&entry.file_name().to_string_lossy(), &config.note_extension)
        {
            note_paths.push(entry.into_path());
        }
    }
    note_paths.sort();
    tracing::debug!(
        "Found {} note files under {}",
        note_paths.len(),
        root.display()
    );
    Ok(note_paths)
}

/// True when `name` ends with `.{extension}`, compared case-sensitively: `Note.MD` is not an
/// `md` note.
pub fn is_note_name(name: &str, extension: &str) -> bool {
    name.strip_suffix(extension.trim_start_matches('.'))
        .is_some_and(|stem| stem.ends_with('.'))
}

/// Reads a note as UTF-8, falling back to lossy decoding rather than failing.
pub fn read_note_text<P: AsRef<Path>>(path: P) -> Result<String, BuildonomyError> {
    let bytes = fs::read(path.as_ref())?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::debug!(
                "{} is not valid UTF-8 ({}), decoding lossily",
                path.as_ref().display(),
                err.utf8_error()
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// SCAN step: discovers every note under the root and reads it once.
///
/// Undecodable bytes never fail the scan, but a note that can't be read at all (permissions, a
/// dangling path) does: the sweep stops before anything is moved.
pub fn scan_notes(config: &SweepConfig) -> Result<Vec<Note>, BuildonomyError> {
    iter_note_paths(config)?
        .into_iter()
        .map(|path| {
            let text = read_note_text(&path)?;
            Ok(Note::new(path, text))
        })
        .collect()
}
