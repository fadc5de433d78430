use crate::lang::Language;
use serde::{Deserialize, Serialize};

/// One row of the multilingual stopword table.
///
/// Values are trimmed on construction; an empty value is stored as `None`.
/// Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopwordRecord {
    pub en: Option<String>,
    pub id: Option<String>,
    pub jv: Option<String>,
    pub su: Option<String>,
    pub formal_id: Option<String>,
}

fn clean(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl StopwordRecord {
    pub fn new(en: &str, id: &str, jv: &str, su: &str, formal_id: &str) -> Self {
        Self {
            en: clean(en),
            id: clean(id),
            jv: clean(jv),
            su: clean(su),
            formal_id: clean(formal_id),
        }
    }

    /// Colloquial Indonesian word with its formal form and nothing else.
    pub fn indonesian(id: &str, formal_id: &str) -> Self {
        Self::new("", id, "", "", formal_id)
    }

    /// Re-apply trimming to values that came from a CSV file.
    pub fn normalized(self) -> Self {
        let norm = |value: Option<String>| value.and_then(|v| clean(&v));
        Self {
            en: norm(self.en),
            id: norm(self.id),
            jv: norm(self.jv),
            su: norm(self.su),
            formal_id: norm(self.formal_id),
        }
    }

    fn slot(&self, language: Language) -> &Option<String> {
        match language.index() {
            0 => &self.en,
            1 => &self.id,
            2 => &self.jv,
            3 => &self.su,
            _ => &self.formal_id,
        }
    }

    fn slot_mut(&mut self, language: Language) -> &mut Option<String> {
        match language.index() {
            0 => &mut self.en,
            1 => &mut self.id,
            2 => &mut self.jv,
            3 => &mut self.su,
            _ => &mut self.formal_id,
        }
    }

    pub fn get(&self, language: Language) -> Option<&str> {
        self.slot(language).as_deref()
    }

    pub fn has(&self, language: Language) -> bool {
        self.get(language).is_some()
    }

    /// Set a column; an empty value clears it.
    pub fn set(&mut self, language: Language, value: &str) {
        *self.slot_mut(language) = clean(value);
    }

    /// Non-empty values in column order.
    ///
    /// This is the deduplication key: two records with the same values in the
    /// same order are duplicates even if the values sit in different columns.
    pub fn non_empty_values(&self) -> Vec<&str> {
        Language::ALL
            .iter()
            .filter_map(|&language| self.get(language))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        Language::ALL.iter().all(|&language| !self.has(language))
    }

    /// Text to translate into English: formal Indonesian first, then colloquial.
    pub fn indonesian_source(&self) -> Option<&str> {
        self.get(Language::FORMAL_INDONESIAN)
            .or_else(|| self.get(Language::INDONESIAN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_drops_blank_values() {
        let record = StopwordRecord::new(" and ", "dan", "  ", "", "dan ");

        assert_eq!(record.en.as_deref(), Some("and"));
        assert_eq!(record.id.as_deref(), Some("dan"));
        assert_eq!(record.jv, None);
        assert_eq!(record.su, None);
        assert_eq!(record.formal_id.as_deref(), Some("dan"));
    }

    #[test]
    fn test_get_and_set_by_language() {
        let mut record = StopwordRecord::indonesian("gw", "saya");
        assert_eq!(record.get(Language::INDONESIAN), Some("gw"));
        assert_eq!(record.get(Language::ENGLISH), None);

        record.set(Language::ENGLISH, "i");
        assert_eq!(record.get(Language::ENGLISH), Some("i"));

        record.set(Language::ENGLISH, "   ");
        assert!(!record.has(Language::ENGLISH));
    }

    #[test]
    fn test_non_empty_values_in_column_order() {
        let record = StopwordRecord::new("and", "", "lan", "jeung", "dan");
        assert_eq!(record.non_empty_values(), vec!["and", "lan", "jeung", "dan"]);
    }

    #[test]
    fn test_key_ignores_column_names() {
        let a = StopwordRecord::new("", "apa", "", "", "apa");
        let b = StopwordRecord::new("", "", "apa", "", "apa");
        assert_eq!(a.non_empty_values(), b.non_empty_values());
    }

    #[test]
    fn test_is_empty() {
        assert!(StopwordRecord::default().is_empty());
        assert!(StopwordRecord::new(" ", "", "", "", "").is_empty());
        assert!(!StopwordRecord::new("", "", "", "naon", "").is_empty());
    }

    #[test]
    fn test_normalized_trims_loaded_values() {
        let record = StopwordRecord {
            en: Some("  ".to_string()),
            id: Some(" yg ".to_string()),
            ..Default::default()
        }
        .normalized();

        assert_eq!(record.en, None);
        assert_eq!(record.id.as_deref(), Some("yg"));
    }

    #[test]
    fn test_indonesian_source_prefers_formal() {
        assert_eq!(
            StopwordRecord::indonesian("gw", "saya").indonesian_source(),
            Some("saya")
        );
        assert_eq!(
            StopwordRecord::new("", "wkwk", "", "", "").indonesian_source(),
            Some("wkwk")
        );
        assert_eq!(
            StopwordRecord::new("the", "", "", "", "").indonesian_source(),
            None
        );
    }
}
