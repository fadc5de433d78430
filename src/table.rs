use crate::lang::Language;
use crate::record::StopwordRecord;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// The running multilingual stopword table, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordTable {
    records: Vec<StopwordRecord>,
}

/// Outcome of appending new Indonesian words to a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub added: usize,
    pub skipped: usize,
}

/// A record that still needs an English translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationCandidate {
    pub index: usize,
    pub text: String,
}

/// Non-empty value count for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnCount {
    pub column: &'static str,
    pub count: usize,
}

impl StopwordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, dropping records without any value.
    pub fn from_records(records: impl IntoIterator<Item = StopwordRecord>) -> Self {
        let mut table = Self::new();
        for record in records {
            table.push(record);
        }
        table
    }

    /// Load a headed CSV file. Unknown columns are ignored and missing
    /// columns are treated as empty.
    pub fn load_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open CSV file {:?}", path))?;

        let mut table = Self::new();
        for (line, row) in reader.deserialize::<StopwordRecord>().enumerate() {
            let record = row.with_context(|| format!("Failed to read row {} of {:?}", line + 2, path))?;
            table.push(record.normalized());
        }

        info!("Loaded {} entries from {:?}", table.len(), path);
        Ok(table)
    }

    pub fn save_csv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create CSV file {:?}", path))?;
        if self.records.is_empty() {
            // serde only writes the header alongside the first row
            writer.write_record(crate::lang::LanguageRegistry::get().headers())?;
        }
        for record in &self.records {
            writer
                .serialize(record)
                .with_context(|| format!("Failed to write record to {:?}", path))?;
        }
        writer
            .flush()
            .with_context(|| format!("Failed to flush CSV file {:?}", path))?;

        info!("Saved {} entries to {:?}", self.len(), path);
        Ok(())
    }

    /// Append a record; records without any value are dropped.
    pub fn push(&mut self, record: StopwordRecord) -> bool {
        if record.is_empty() {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn extend(&mut self, other: StopwordTable) {
        self.records.extend(other.records);
    }

    pub fn records(&self) -> &[StopwordRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [StopwordRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keep the first record of every key, dropping later duplicates and
    /// records with an empty key. Returns the number of removed records.
    pub fn deduplicate(&mut self) -> usize {
        let before = self.records.len();
        let mut seen: HashSet<Vec<String>> = HashSet::with_capacity(before);

        self.records.retain(|record| {
            let key: Vec<String> = record
                .non_empty_values()
                .into_iter()
                .map(str::to_string)
                .collect();
            !key.is_empty() && seen.insert(key)
        });

        let removed = before - self.records.len();
        info!(
            "Removed {} duplicates. Final count: {} entries",
            removed,
            self.records.len()
        );
        removed
    }

    /// Lowercased values of the colloquial and formal Indonesian columns.
    pub fn indonesian_vocabulary(&self) -> HashSet<String> {
        self.records
            .iter()
            .flat_map(|record| {
                [Language::INDONESIAN, Language::FORMAL_INDONESIAN]
                    .into_iter()
                    .filter_map(move |language| record.get(language))
            })
            .map(str::to_lowercase)
            .collect()
    }

    /// Append `(id, formal_id)` pairs whose colloquial word is not yet in the
    /// Indonesian columns. Words are lowercased and trimmed first.
    pub fn merge_new_words<I, S, T>(&mut self, pairs: I) -> MergeOutcome
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut known = self.indonesian_vocabulary();
        let mut outcome = MergeOutcome::default();

        for (word, formal) in pairs {
            let word = word.as_ref().trim().to_lowercase();
            let formal = formal.as_ref().trim().to_lowercase();
            if word.is_empty() || formal.is_empty() {
                continue;
            }

            if known.contains(&word) {
                debug!("Skipping existing word '{}'", word);
                outcome.skipped += 1;
                continue;
            }

            known.insert(word.clone());
            self.records.push(StopwordRecord::indonesian(&word, &formal));
            outcome.added += 1;
        }

        outcome
    }

    pub fn column_count(&self, language: Language) -> usize {
        self.records
            .iter()
            .filter(|record| record.has(language))
            .count()
    }

    pub fn column_counts(&self) -> Vec<ColumnCount> {
        Language::ALL
            .iter()
            .map(|&language| ColumnCount {
                column: language.code(),
                count: self.column_count(language),
            })
            .collect()
    }

    /// Records with no English value but some Indonesian text to translate.
    pub fn translation_candidates(&self) -> Vec<TranslationCandidate> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| !record.has(Language::ENGLISH))
            .filter_map(|(index, record)| {
                record.indonesian_source().map(|text| TranslationCandidate {
                    index,
                    text: text.to_string(),
                })
            })
            .collect()
    }

    /// Share of records with an English value, as a percentage.
    pub fn english_coverage(&self) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        self.column_count(Language::ENGLISH) as f64 / self.records.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn sample_table() -> StopwordTable {
        StopwordTable::from_records(vec![
            StopwordRecord::new("and", "dan", "lan", "jeung", "dan"),
            StopwordRecord::indonesian("gw", "saya"),
            StopwordRecord::new("", "", "", "naon", "apa"),
        ])
    }

    #[test]
    fn test_from_records_drops_empty() {
        let table = StopwordTable::from_records(vec![
            StopwordRecord::default(),
            StopwordRecord::indonesian("yg", "yang"),
        ]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_csv_round_trip_preserves_blanks() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/table.csv");

        let table = sample_table();
        table.save_csv(&path).expect("save");

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("en,id,jv,su,formal_id\n"));
        assert!(content.contains(",gw,,,saya"));

        let loaded = StopwordTable::load_csv(&path).expect("load");
        assert_eq!(loaded, table);
    }

    #[test]
    fn test_save_empty_table_writes_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        StopwordTable::new().save_csv(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), "en,id,jv,su,formal_id");
    }

    #[test]
    fn test_load_csv_ignores_extra_and_missing_columns() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("partial.csv");
        std::fs::write(&path, "id,formal_id,priority\n gue ,saya,pronouns\n,,\nlu,kamu,x\n").unwrap();

        let table = StopwordTable::load_csv(&path).expect("load");
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0], StopwordRecord::indonesian("gue", "saya"));
        assert_eq!(table.records()[1].get(Language::ENGLISH), None);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let result = StopwordTable::load_csv(Path::new("/nonexistent/table.csv"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to open CSV"));
    }

    #[test]
    fn test_deduplicate_keeps_first_occurrence() {
        let mut table = StopwordTable::from_records(vec![
            StopwordRecord::new("i", "saya", "aku", "abdi", "saya"),
            StopwordRecord::indonesian("gw", "saya"),
            StopwordRecord::new("i", "saya", "aku", "abdi", "saya"),
            StopwordRecord::indonesian("gw", "saya"),
        ]);

        let removed = table.deduplicate();

        assert_eq!(removed, 2);
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1], StopwordRecord::indonesian("gw", "saya"));
    }

    #[test]
    fn test_merging_overlapping_lists_yields_no_duplicates() {
        let mut table = StopwordTable::from_records(vec![
            StopwordRecord::indonesian("dan", "dan"),
            StopwordRecord::indonesian("atau", "atau"),
        ]);
        table.extend(StopwordTable::from_records(vec![
            StopwordRecord::indonesian("atau", "atau"),
            StopwordRecord::indonesian("namun", "namun"),
        ]));

        table.deduplicate();

        let keys: Vec<_> = table.records().iter().map(|r| r.non_empty_values()).collect();
        assert_eq!(keys, vec![vec!["dan", "dan"], vec!["atau", "atau"], vec!["namun", "namun"]]);
    }

    #[test]
    fn test_merge_new_words_skips_existing_id_and_formal() {
        let mut table = sample_table();

        let outcome = table.merge_new_words(vec![
            ("DAN", "dan"),
            ("saya", "saya"),
            ("beliau", "beliau"),
            ("beliau", "beliau"),
            ("", "kosong"),
        ]);

        assert_eq!(outcome, MergeOutcome { added: 1, skipped: 3 });
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.records()[3],
            StopwordRecord::indonesian("beliau", "beliau")
        );
    }

    #[test]
    fn test_column_counts() {
        let counts = sample_table().column_counts();
        let as_pairs: Vec<_> = counts.iter().map(|c| (c.column, c.count)).collect();
        assert_eq!(
            as_pairs,
            vec![("en", 1), ("id", 2), ("jv", 1), ("su", 2), ("formal_id", 3)]
        );
    }

    #[test]
    fn test_translation_candidates_prefer_formal() {
        let candidates = sample_table().translation_candidates();
        assert_eq!(
            candidates,
            vec![
                TranslationCandidate {
                    index: 1,
                    text: "saya".to_string()
                },
                TranslationCandidate {
                    index: 2,
                    text: "apa".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_english_coverage() {
        assert_eq!(StopwordTable::new().english_coverage(), 0.0);
        let coverage = sample_table().english_coverage();
        assert!((coverage - 100.0 / 3.0).abs() < 1e-9);
    }

    fn word() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            "[a-c]{1,2}".prop_map(|s| s),
        ]
    }

    fn record() -> impl Strategy<Value = StopwordRecord> {
        (word(), word(), word(), word(), word())
            .prop_map(|(en, id, jv, su, formal)| StopwordRecord::new(&en, &id, &jv, &su, &formal))
    }

    proptest! {
        #[test]
        fn prop_deduplicate_leaves_unique_non_empty_keys(records in prop::collection::vec(record(), 0..40)) {
            let mut table = StopwordTable::from_records(records);
            table.deduplicate();

            let mut seen = HashSet::new();
            for record in table.records() {
                let key = record.non_empty_values();
                prop_assert!(!key.is_empty());
                prop_assert!(seen.insert(key));
            }
        }

        #[test]
        fn prop_deduplicate_is_idempotent(records in prop::collection::vec(record(), 0..40)) {
            let mut table = StopwordTable::from_records(records);
            table.deduplicate();
            let once = table.clone();
            prop_assert_eq!(table.deduplicate(), 0);
            prop_assert_eq!(table, once);
        }

        #[test]
        fn prop_merge_never_repeats_indonesian_words(words in prop::collection::vec("[a-d]{1,3}", 0..30)) {
            let mut table = sample_table();
            let before = table.indonesian_vocabulary();
            let outcome = table.merge_new_words(words.iter().map(|w| (w.as_str(), w.as_str())));

            let added: Vec<_> = table.records()[3..]
                .iter()
                .filter_map(|r| r.get(Language::INDONESIAN))
                .collect();
            prop_assert_eq!(added.len(), outcome.added);
            let unique: HashSet<_> = added.iter().collect();
            prop_assert_eq!(unique.len(), added.len());
            prop_assert!(added.iter().all(|w| !before.contains(*w)));
        }
    }
}
