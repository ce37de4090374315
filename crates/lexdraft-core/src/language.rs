//! Supported language codes. English is the base language; localized
//! templates that are missing or unreadable fall back to it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Bn,
    Te,
    Mr,
    Ur,
    Gu,
    Kn,
    Or,
    Ta,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::En,
        Language::Hi,
        Language::Bn,
        Language::Te,
        Language::Mr,
        Language::Ur,
        Language::Gu,
        Language::Kn,
        Language::Or,
        Language::Ta,
    ];

    /// ISO 639-1 code, also the template subdirectory name.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Bn => "bn",
            Language::Te => "te",
            Language::Mr => "mr",
            Language::Ur => "ur",
            Language::Gu => "gu",
            Language::Kn => "kn",
            Language::Or => "or",
            Language::Ta => "ta",
        }
    }

    /// English display name, used for prompt language detection.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Bn => "Bengali",
            Language::Te => "Telugu",
            Language::Mr => "Marathi",
            Language::Ur => "Urdu",
            Language::Gu => "Gujarati",
            Language::Kn => "Kannada",
            Language::Or => "Odia",
            Language::Ta => "Tamil",
        }
    }

    /// Parse a language code. Unknown codes return `None`; callers fall
    /// back to the base language rather than erroring.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.iter().copied().find(|l| l.code() == code)
    }

    /// Look up a language by its English display name, case-insensitively.
    pub fn from_display_name(name: &str) -> Option<Language> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.display_name().eq_ignore_ascii_case(name))
    }

    pub fn is_base(&self) -> bool {
        *self == Language::En
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known() {
        assert_eq!(Language::from_code("ta"), Some(Language::Ta));
        assert_eq!(Language::from_code("en"), Some(Language::En));
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code(""), None);
    }

    #[test]
    fn test_from_display_name_case_insensitive() {
        assert_eq!(Language::from_display_name("tamil"), Some(Language::Ta));
        assert_eq!(Language::from_display_name("HINDI"), Some(Language::Hi));
        assert_eq!(Language::from_display_name("Chennai"), None);
    }

    #[test]
    fn test_ten_languages_with_en_base() {
        assert_eq!(Language::ALL.len(), 10);
        assert!(Language::En.is_base());
        assert!(!Language::Ta.is_base());
    }
}
