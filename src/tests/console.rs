use crate::console::{is_affirmative, Locale};
use test_log::test;

#[test]
fn test_only_y_is_affirmative() {
    assert!(is_affirmative("y"));
    assert!(is_affirmative("y\n"));
    assert!(is_affirmative("  Y\r\n"));
    for answer in ["", "\n", "n", "yes", "Yes", "yy", "y y", "はい"] {
        assert!(!is_affirmative(answer), "{answer:?}");
    }
}

#[test]
fn test_locale_from_lang() {
    assert_eq!(Locale::from_lang("en_US.UTF-8"), Locale::En);
    assert_eq!(Locale::from_lang("EN"), Locale::En);
    assert_eq!(Locale::from_lang("ja_JP.UTF-8"), Locale::Ja);
    assert_eq!(Locale::from_lang("C"), Locale::Ja);
    assert_eq!(Locale::default(), Locale::Ja);
}

#[test]
fn test_moved_message_names_quarantine() {
    assert_eq!(
        Locale::Ja.moved("sub/Note.md", "_TRASH"),
        "sub/Note.md を _TRASH に移動しました"
    );
    assert_eq!(Locale::En.moved("Note.md", "_TRASH"), "Moved Note.md to _TRASH");
}
