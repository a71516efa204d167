//! # noet-sweep
//!
//! Find notes in a wikilinked vault that nothing links to, and move them out of the way.
//!
//! ## Overview
//!
//! A vault is a directory tree of Markdown notes that reference each other with wikilinks
//! (`[[Note]]` or `[[folder/Note|Alias]]`). noet-sweep collects every link target in the vault,
//! reduces each to the file name it names, and reports the notes whose file name never shows up
//! as a target. After confirmation those orphans are moved into a quarantine directory
//! (`_TRASH` by default) inside the vault, renamed `Name (1).md`, `Name (2).md`, ... on collision.
//!
//! A fixed allow-list of entry-point notes (`Root.md`, `Informatics.md`, `Economics.md`) is never
//! reported.
//!
//! ## Architecture
//!
//! Data flows one way: file set → extracted links → normalized target set → set difference →
//! moves.
//!
//! - **[`link`]**: wikilink extraction and target normalization (pure)
//! - **[`detect`]**: target aggregation and orphan detection (pure)
//! - **[`scan`]**: note discovery and lossy UTF-8 reading
//! - **[`quarantine`]**: collision-free moves into the quarantine directory
//! - **[`sweep`]**: the interactive run, over any `BufRead`/`Write` pair
//! - **[`config`]**: [`config::SweepConfig`] and the compile-time defaults
//!
//! ## Quick Start
//!
//! Detection works on in-memory notes, no filesystem needed:
//!
//! ```rust
//! use noet_sweep::{config::SweepConfig, detect::find_orphans, scan::Note};
//! use std::path::PathBuf;
//!
//! let notes = vec![
//!     Note::new("vault/Root.md", "Start at [[Note1]]."),
//!     Note::new("vault/Note1.md", "Linked from root."),
//!     Note::new("vault/Note2.md", "Nobody links here."),
//! ];
//! let orphans = find_orphans(&notes, &SweepConfig::default());
//! assert_eq!(orphans, vec![PathBuf::from("vault/Note2.md")]);
//! ```
//!
//! A full interactive run against a directory:
//!
//! ```rust,no_run
//! use noet_sweep::{config::SweepConfig, console::Locale, sweep::run_sweep};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SweepConfig::default().with_root(std::env::current_dir()?);
//! let stdin = std::io::stdin();
//! let outcome = run_sweep(&config, Locale::En, &mut stdin.lock(), &mut std::io::stdout())?;
//! println!("{outcome:?}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Matching Rules
//!
//! - A note's identity is its base file name, case-sensitive. Two notes with the same name in
//!   different folders are indistinguishable.
//! - Link targets keep only their last path component and get the note extension appended unless
//!   they already end with it (case-insensitive): `[[folder/Note]]` and `[[Note]]` both name
//!   `Note.md`, while `[[Note.MD]]` names `Note.MD`.
//! - Self-links count as references by default. See [`config::SelfLinkPolicy`].
//!
//! ## Features
//!
//! - **bin** (default): the `noet-sweep` command-line tool

pub mod config;
pub mod console;
pub mod detect;
pub mod error;
pub mod link;
pub mod paths;
pub mod quarantine;
pub mod scan;
pub mod sweep;
#[cfg(test)]
mod tests;

pub use error::*;
