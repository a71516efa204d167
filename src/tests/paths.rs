//! Tests for the string path helpers

use crate::paths::{display_relative, has_extension, os_path_to_string, NotePath};
use std::path::Path;
use test_log::test;

#[test]
fn test_note_path_components() {
    let p = NotePath::new("a/b/Note.md");
    assert_eq!(p.dir(), "a/b");
    assert_eq!(p.filename(), "Note.md");
    assert_eq!(p.filestem(), "Note");
    assert_eq!(p.ext(), "md");

    let bare = NotePath::new("Note");
    assert_eq!(bare.dir(), "");
    assert_eq!(bare.filename(), "Note");
    assert_eq!(bare.filestem(), "Note");
    assert_eq!(bare.ext(), "");
}

#[test]
fn test_note_path_hidden_and_multi_dot_names() {
    let hidden = NotePath::new("dir/.hidden");
    assert_eq!(hidden.filestem(), ".hidden");
    assert_eq!(hidden.ext(), "");

    let multi = NotePath::new("archive.tar.md");
    assert_eq!(multi.filestem(), "archive.tar");
    assert_eq!(multi.ext(), "md");

    // A dot in a directory name is not an extension
    let dotted_dir = NotePath::new("v1.0/Note");
    assert_eq!(dotted_dir.filename(), "Note");
    assert_eq!(dotted_dir.ext(), "");
}

#[test]
fn test_with_disambiguator() {
    assert_eq!(NotePath::new("A.md").with_disambiguator(1), "A (1).md");
    assert_eq!(NotePath::new("A.md").with_disambiguator(12), "A (12).md");
    assert_eq!(NotePath::new("archive.tar.md").with_disambiguator(2), "archive.tar (2).md");
    assert_eq!(NotePath::new("README").with_disambiguator(1), "README (1)");
    assert_eq!(NotePath::new(".hidden").with_disambiguator(1), ".hidden (1)");
}

#[test]
fn test_has_extension() {
    assert!(has_extension("Note.md", "md"));
    assert!(has_extension("Note.MD", "md"));
    assert!(has_extension("Note.md", ".md"));
    assert!(has_extension(".md", "md"));
    assert!(!has_extension("Notemd", "md"));
    assert!(!has_extension("md", "md"));
    assert!(!has_extension("Note.mdx", "md"));
    assert!(!has_extension("ノート", "md"));
    assert!(has_extension("ノート.md", "md"));
}

#[test]
fn test_os_path_to_string_and_display_relative() {
    assert_eq!(os_path_to_string(Path::new("a").join("b").join("c.md")), "a/b/c.md");

    let root = Path::new("/vault");
    assert_eq!(display_relative(root.join("sub").join("N.md"), root), "sub/N.md");
    assert_eq!(
        display_relative(Path::new("/elsewhere/N.md"), root),
        Path::new("/elsewhere/N.md").display().to_string()
    );
}
