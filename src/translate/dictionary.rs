//! Dictionary lookups for Indonesian to English.

use crate::vocab::INDONESIAN_TO_ENGLISH;

/// Keys this short never match as a substring.
const MIN_PARTIAL_KEY_LEN: usize = 3;

/// Translate `text` from the built-in dictionary.
///
/// Tries an exact match on the lowercased text first, then the first
/// dictionary key (in dictionary order) of at least three characters that
/// occurs inside the text. `Some("")` means a particle with no English
/// counterpart.
pub fn lookup(text: &str) -> Option<&'static str> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if let Some((_, english)) = INDONESIAN_TO_ENGLISH.iter().find(|(key, _)| *key == text) {
        return Some(*english);
    }

    INDONESIAN_TO_ENGLISH
        .iter()
        .find(|(key, _)| key.chars().count() >= MIN_PARTIAL_KEY_LEN && text.contains(key))
        .map(|(_, english)| *english)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(lookup("saya"), Some("i"));
        assert_eq!(lookup("  Dengan "), Some("with"));
        assert_eq!(lookup("terima kasih"), Some("thank you"));
    }

    #[test]
    fn test_particle_is_a_hit_with_empty_translation() {
        assert_eq!(lookup("dong"), Some(""));
        assert_eq!(lookup("sih"), Some(""));
    }

    #[test]
    fn test_partial_match_uses_dictionary_order() {
        // "dengannya" contains "dengan" and "ia"; "ia" is too short
        assert_eq!(lookup("dengannya"), Some("with"));
        // "saya" comes before "yang" in the dictionary
        assert_eq!(lookup("sayangnya"), Some("i"));
    }

    #[test]
    fn test_short_keys_do_not_match_partially() {
        // "di" and "ke" are only exact matches
        assert_eq!(lookup("kedi"), None);
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(lookup("xyzzy"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("   "), None);
    }
}
