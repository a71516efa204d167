//! Localized console text for the interactive sweep.

/// Language of the messages printed by a sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ja,
    En,
}

impl Locale {
    /// Picks a locale from a POSIX locale string such as `en_US.UTF-8`.
    ///
    /// Only English is recognized; anything else keeps the Japanese default.
    pub fn from_lang(lang: &str) -> Locale {
        if lang.to_ascii_lowercase().starts_with("en") {
            Locale::En
        } else {
            Locale::Ja
        }
    }

    /// Reads `LC_ALL`, `LC_MESSAGES` and `LANG`, in that order of precedence.
    pub fn from_env() -> Locale {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|value| Locale::from_lang(&value))
            .unwrap_or_default()
    }

    pub fn no_orphans(&self) -> &'static str {
        match self {
            Locale::Ja => "孤立したノートは見つかりませんでした。",
            Locale::En => "No orphaned notes found.",
        }
    }

    pub fn orphans_header(&self) -> &'static str {
        match self {
            Locale::Ja => "以下のファイルが孤立しています:",
            Locale::En => "The following files are orphaned:",
        }
    }

    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            Locale::Ja => "実行しますか？ (y/n): ",
            Locale::En => "Proceed? (y/n): ",
        }
    }

    pub fn aborted(&self) -> &'static str {
        match self {
            Locale::Ja => "中止しました。",
            Locale::En => "Aborted.",
        }
    }

    pub fn moved(&self, note: &str, quarantine_dir_name: &str) -> String {
        match self {
            Locale::Ja => format!("{note} を {quarantine_dir_name} に移動しました"),
            Locale::En => format!("Moved {note} to {quarantine_dir_name}"),
        }
    }
}

/// The only answer that lets a sweep proceed, after trimming and lowercasing.
pub const AFFIRMATIVE: &str = "y";

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase() == AFFIRMATIVE
}
