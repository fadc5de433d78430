//! Translation quality checks.
//!
//! The free translation endpoint sometimes answers with a sentence, an echo
//! of the input, or nothing. Those answers are rejected so the record keeps
//! an empty English value.

/// Translations longer than this are treated as errors.
pub const MAX_TRANSLATION_LEN: usize = 50;

/// Sources longer than this are skipped in conservative mode.
pub const MAX_CONSERVATIVE_SOURCE_LEN: usize = 30;

/// Substrings that make a source look like English already.
const ENGLISH_MARKERS: &[&str] = &["the", "and", "for", "with", "you", "are"];

/// Validation report containing errors and warnings about a translation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Reasons the translation must be rejected
    pub errors: Vec<String>,

    /// Things worth logging that do not reject the translation
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Validator for dictionary and API translations.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Lowercase and trim a raw translation.
    pub fn normalize(translation: &str) -> String {
        translation.trim().to_lowercase()
    }

    /// Check a normalized translation against its source text.
    pub fn validate(source: &str, translation: &str) -> ValidationReport {
        let mut report = ValidationReport::new();
        let translation = Self::normalize(translation);

        if translation.is_empty() {
            report.errors.push("Translation is empty".to_string());
            return report;
        }

        let length = translation.chars().count();
        if length > MAX_TRANSLATION_LEN {
            report.errors.push(format!(
                "Translation is {} characters long (max {})",
                length, MAX_TRANSLATION_LEN
            ));
        }

        if translation == source.trim().to_lowercase() {
            report
                .errors
                .push("Translation is identical to the source".to_string());
        }

        let source_words = source.split_whitespace().count();
        let translation_words = translation.split_whitespace().count();
        if translation_words > source_words + 2 {
            report.warnings.push(format!(
                "Translation has {} words for a {}-word source",
                translation_words, source_words
            ));
        }

        report
    }

    /// Reason to skip a source in conservative mode, if any.
    pub fn conservative_skip_reason(source: &str) -> Option<String> {
        let length = source.chars().count();
        if length > MAX_CONSERVATIVE_SOURCE_LEN {
            return Some(format!("source is {} characters long", length));
        }

        let lower = source.to_lowercase();
        ENGLISH_MARKERS
            .iter()
            .find(|marker| lower.contains(*marker))
            .map(|marker| format!("source looks like English ('{}')", marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Validation Tests ====================

    #[test]
    fn test_valid_translation_is_clean() {
        let report = TranslationValidator::validate("saya", "I");
        assert!(report.is_clean());
    }

    #[test]
    fn test_empty_translation_rejected() {
        let report = TranslationValidator::validate("saya", "   ");
        assert!(report.has_errors());
        assert!(report.errors[0].contains("empty"));
    }

    #[test]
    fn test_long_translation_rejected() {
        let long = "word ".repeat(11);
        let report = TranslationValidator::validate("kata", &long);
        assert!(report.errors.iter().any(|e| e.contains("characters long")));
    }

    #[test]
    fn test_exactly_max_length_accepted() {
        let translation = "a".repeat(MAX_TRANSLATION_LEN);
        let report = TranslationValidator::validate("kata", &translation);
        assert!(!report.has_errors());
    }

    #[test]
    fn test_echo_rejected_case_insensitively() {
        let report = TranslationValidator::validate("Wkwk", "wkwk");
        assert!(report.errors.iter().any(|e| e.contains("identical")));
    }

    #[test]
    fn test_wordy_translation_warns() {
        let report = TranslationValidator::validate("gabut", "having nothing at all to do");
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(TranslationValidator::normalize("  Thank You "), "thank you");
    }

    // ==================== Conservative Mode Tests ====================

    #[test]
    fn test_conservative_skips_long_source() {
        let source = "a".repeat(MAX_CONSERVATIVE_SOURCE_LEN + 1);
        assert!(TranslationValidator::conservative_skip_reason(&source).is_some());
    }

    #[test]
    fn test_conservative_skips_english_looking_source() {
        let reason = TranslationValidator::conservative_skip_reason("for your information");
        assert!(reason.is_some());
        // substring match, like "tandanya" containing "and"
        assert!(TranslationValidator::conservative_skip_reason("tandanya").is_some());
    }

    #[test]
    fn test_conservative_keeps_plain_indonesian() {
        assert_eq!(TranslationValidator::conservative_skip_reason("sudah"), None);
        assert_eq!(TranslationValidator::conservative_skip_reason("bagaimana"), None);
    }
}
