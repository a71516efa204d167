//! Moving orphaned notes into the quarantine directory.
//!
//! Moves are not journaled. The quarantine directory is the backup: nothing is deleted, and a
//! run that fails halfway leaves the already-moved notes where they landed.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    error::BuildonomyError,
    paths::{file_name_string, NotePath},
};

/// Where a note was moved from and to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovedNote {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Creates `dir` (and any missing parents) unless it already exists.
pub fn ensure_quarantine_dir<P: AsRef<Path>>(dir: P) -> Result<(), BuildonomyError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        tracing::debug!("Creating quarantine directory {}", dir.display());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Picks an unused destination for `file_name` inside `dir`.
///
/// `dir/Name.md` when free, otherwise the first free `dir/Name (1).md`, `dir/Name (2).md`, ...
pub fn resolve_destination<P: AsRef<Path>>(dir: P, file_name: &str) -> PathBuf {
    let dir = dir.as_ref();
    let destination = dir.join(file_name);
    if !destination.exists() {
        return destination;
    }
    let name = NotePath::new(file_name);
    (1..)
        .map(|n| dir.join(name.with_disambiguator(n)))
        .find(|candidate| !candidate.exists())
        .expect("an unbounded range to contain an unused file name")
}

/// Moves `from` to `to`, removing the source.
///
/// Uses a rename when possible. When `from` and `to` are on different filesystems the file is
/// copied and the source removed afterwards.
pub fn move_note<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<(), BuildonomyError> {
    let (from, to) = (from.as_ref(), to.as_ref());
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!(
                "Rename {} -> {} crosses devices, copying instead",
                from.display(),
                to.display()
            );
            fs::copy(from, to)?;
            fs::remove_file(from)?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// MOVE step: moves each candidate into `dir` in order, calling `on_move` after every
/// successful move.
///
/// The first failure is returned immediately. Moves that already happened stay in place.
pub fn quarantine_notes<P, F>(
    candidates: &[PathBuf],
    dir: P,
    mut on_move: F,
) -> Result<Vec<MovedNote>, BuildonomyError>
where
    P: AsRef<Path>,
    F: FnMut(&MovedNote) -> Result<(), BuildonomyError>,
{
    let dir = dir.as_ref();
    ensure_quarantine_dir(dir)?;
    let mut moved = Vec::with_capacity(candidates.len());
    for from in candidates {
        let to = resolve_destination(dir, &file_name_string(from));
        move_note(from, &to)?;
        tracing::info!("Moved {} to {}", from.display(), to.display());
        let record = MovedNote {
            from: from.clone(),
            to,
        };
        on_move(&record)?;
        moved.push(record);
    }
    Ok(moved)
}
