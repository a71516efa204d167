//! Orphan detection: which notes does no link point at?
//!
//! Detection is a set difference over base file names. A note is reachable when any note
//! anywhere links to its name, so two notes with the same name in different folders share one
//! fate.
use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use crate::{
    config::{SelfLinkPolicy, SweepConfig},
    link::normalized_links,
    scan::Note,
};

/// The normalized link targets of a single note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLinks {
    pub path: PathBuf,
    pub name: String,
    pub targets: BTreeSet<String>,
}

impl NoteLinks {
    pub fn new<P: AsRef<Path>>(path: P, name: &str, targets: BTreeSet<String>) -> Self {
        NoteLinks {
            path: path.as_ref().to_path_buf(),
            name: name.to_string(),
            targets,
        }
    }

    pub fn links_to_self(&self) -> bool {
        self.targets.contains(&self.name)
    }
}

/// EXTRACT step: extracts and normalizes the links of every note.
pub fn collect_note_links(notes: &[Note], extension: &str) -> Vec<NoteLinks> {
    notes
        .iter()
        .map(|note| {
            let targets = normalized_links(&note.text, extension);
            tracing::trace!("{} links to {:?}", note.path.display(), targets);
            NoteLinks::new(&note.path, &note.name, targets)
        })
        .collect()
}

/// Aggregates every note's targets into the global set of referenced file names.
pub fn link_target_index(links: &[NoteLinks], policy: SelfLinkPolicy) -> BTreeSet<String> {
    links
        .iter()
        .flat_map(|note| {
            note.targets
                .iter()
                .filter(move |target| policy == SelfLinkPolicy::Counts || **target != note.name)
        })
        .cloned()
        .collect()
}

/// Returns the paths of notes that are neither allow-listed nor named by any target, sorted.
pub fn detect_orphans(
    links: &[NoteLinks],
    targets: &BTreeSet<String>,
    allow_list: &BTreeSet<String>,
) -> Vec<PathBuf> {
    let mut orphans = links
        .iter()
        .filter(|note| !allow_list.contains(&note.name))
        .filter(|note| !targets.contains(&note.name))
        .map(|note| note.path.clone())
        .collect::<Vec<PathBuf>>();
    orphans.sort();
    orphans
}

/// EXTRACT and DETECT in one call, using the extension, allow-list and self-link policy from
/// `config`.
pub fn find_orphans(notes: &[Note], config: &SweepConfig) -> Vec<PathBuf> {
    let links = collect_note_links(notes, &config.note_extension);
    let targets = link_target_index(&links, config.self_links);
    if config.self_links == SelfLinkPolicy::Counts {
        for note in links.iter().filter(|n| n.links_to_self()) {
            tracing::debug!("{} links to itself", note.path.display());
        }
    }
    let orphans = detect_orphans(&links, &targets, &config.allow_list);
    tracing::info!(
        "{} of {} notes are orphaned ({} distinct link targets)",
        orphans.len(),
        links.len(),
        targets.len()
    );
    orphans
}
