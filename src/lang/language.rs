//! Language type: a validated handle on one table column.

use crate::lang::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A column language validated against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    header: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { header: "en" };
    pub const INDONESIAN: Language = Language { header: "id" };
    pub const JAVANESE: Language = Language { header: "jv" };
    pub const SUNDANESE: Language = Language { header: "su" };
    pub const FORMAL_INDONESIAN: Language = Language { header: "formal_id" };

    /// All columns in CSV order.
    pub const ALL: [Language; 5] = [
        Language::ENGLISH,
        Language::INDONESIAN,
        Language::JAVANESE,
        Language::SUNDANESE,
        Language::FORMAL_INDONESIAN,
    ];

    /// Create a Language from a column header (e.g., "jv", "formal_id").
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().get_by_header(code) {
            Some(config) => Ok(Language {
                header: config.header,
            }),
            None => bail!("Unknown language column: '{}'", code),
        }
    }

    /// The translation target column (English).
    pub fn canonical() -> Language {
        Language {
            header: LanguageRegistry::get().canonical().header,
        }
    }

    pub fn code(&self) -> &'static str {
        self.header
    }

    /// # Panics
    /// Panics if the header is not in the registry, which cannot happen for
    /// values built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_header(self.header)
            .expect("Language header should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Code understood by the translation API.
    pub fn iso_code(&self) -> &'static str {
        self.config().iso_code
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Position of the column in CSV order.
    pub fn index(&self) -> usize {
        LanguageRegistry::get()
            .position(self.header)
            .expect("Language header should always be valid")
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_registry() {
        for (index, language) in Language::ALL.iter().enumerate() {
            assert_eq!(language.index(), index);
            assert!(Language::from_code(language.code()).is_ok());
        }
    }

    #[test]
    fn test_from_code_javanese() {
        let language = Language::from_code("jv").expect("Should succeed");
        assert_eq!(language, Language::JAVANESE);
        assert_eq!(language.name(), "Javanese");
        assert_eq!(language.native_name(), "Basa Jawa");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_canonical_is_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
        assert!(Language::ENGLISH.is_canonical());
        assert!(!Language::SUNDANESE.is_canonical());
    }

    #[test]
    fn test_formal_indonesian_translates_as_indonesian() {
        assert_eq!(Language::FORMAL_INDONESIAN.iso_code(), "id");
        assert_eq!(Language::INDONESIAN.iso_code(), "id");
    }

    #[test]
    fn test_display_uses_header() {
        assert_eq!(Language::FORMAL_INDONESIAN.to_string(), "formal_id");
    }
}
