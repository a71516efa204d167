//! String-level path helpers shared by link normalization and the quarantine mover.
//!
//! Link targets are not OS paths: `[[folder/Note]]` uses '/' regardless of platform, so these
//! helpers work on `&str` and only convert to [PathBuf] at the filesystem boundary.
use std::{
    borrow::Cow,
    path::{Component, Path},
};

/// Characters that separate directory components inside a link target.
pub const TARGET_SEPARATORS: [char; 2] = ['/', '\\'];

/// Utility function to replace separators and convert to unicode (via to_string_lossy) on os path.
pub fn os_path_to_string<P: AsRef<Path>>(os_path_ref: P) -> String {
    os_path_ref
        .as_ref()
        .components()
        .map(|c| match c {
            Component::RootDir => Cow::from("".to_string()),
            _ => c.as_os_str().to_string_lossy(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Render `path` relative to `root` for display, falling back to the full path when `path` does
/// not live under `root`.
pub fn display_relative<P: AsRef<Path>, R: AsRef<Path>>(path: P, root: R) -> String {
    match path.as_ref().strip_prefix(root.as_ref()) {
        Ok(rel) if !rel.as_os_str().is_empty() => os_path_to_string(rel),
        _ => path.as_ref().display().to_string(),
    }
}

/// File name of an OS path as a (lossy) string. Empty when the path has no final component.
pub fn file_name_string<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// A note name or slash-separated link target, split into directory, stem and extension.
///
/// ```
/// use noet_sweep::paths::NotePath;
///
/// let p = NotePath::new("folder/sub/Note.md");
/// assert_eq!(p.dir(), "folder/sub");
/// assert_eq!(p.filename(), "Note.md");
/// assert_eq!(p.filestem(), "Note");
/// assert_eq!(p.ext(), "md");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotePath<'a> {
    pub path: &'a str,
    /// Index of the separator between directory and file name
    dir_sep: Option<usize>,
    /// Index of the '.' separating file stem from extension
    ext_sep: Option<usize>,
}

impl<'a> NotePath<'a> {
    pub fn new(path: &'a str) -> NotePath<'a> {
        // "folder/" names "folder", not an empty file
        let path = path.trim_end_matches(TARGET_SEPARATORS);
        let dir_sep = path.rfind(TARGET_SEPARATORS);
        let name_start = dir_sep.map(|sep| sep + 1).unwrap_or(0);
        let ext_sep = match path[name_start..].rfind('.') {
            // Don't count hidden files as extension markers
            Some(0) | None => None,
            Some(dot_idx) => Some(name_start + dot_idx),
        };
        NotePath {
            path,
            dir_sep,
            ext_sep,
        }
    }

    pub fn dir(&self) -> &'a str {
        self.dir_sep.map(|sep| &self.path[..sep]).unwrap_or("")
    }

    /// Last path component.
    pub fn filename(&self) -> &'a str {
        let start = self.dir_sep.map(|sep| sep + 1).unwrap_or(0);
        &self.path[start..]
    }

    /// File name without its extension.
    pub fn filestem(&self) -> &'a str {
        let start = self.dir_sep.map(|sep| sep + 1).unwrap_or(0);
        let end = self.ext_sep.unwrap_or(self.path.len());
        &self.path[start..end]
    }

    /// Extension without the leading '.', or "" when there is none.
    pub fn ext(&self) -> &'a str {
        self.ext_sep.map(|sep| &self.path[sep + 1..]).unwrap_or("")
    }

    /// True when the file name ends with `.{extension}`, compared case-insensitively.
    pub fn has_extension(&self, extension: &str) -> bool {
        has_extension(self.filename(), extension)
    }

    /// `{stem} ({n}).{ext}`, or `{stem} ({n})` for a name without an extension.
    pub fn with_disambiguator(&self, n: usize) -> String {
        match self.ext() {
            "" => format!("{} ({n})", self.filestem()),
            ext => format!("{} ({n}).{ext}", self.filestem()),
        }
    }
}

/// Case-insensitive check that `name` ends with `.{extension}`.
pub fn has_extension(name: &str, extension: &str) -> bool {
    let extension = extension.trim_start_matches('.');
    let Some(dot_idx) = name.len().checked_sub(extension.len() + 1) else {
        return false;
    };
    name.is_char_boundary(dot_idx)
        && name[dot_idx..].starts_with('.')
        && name[dot_idx + 1..].eq_ignore_ascii_case(extension)
}
