//! Rule-based stopword quality check.
//!
//! Every value in the table is classified as a likely stopword or a likely
//! non-stopword using exact list membership, particle suffixes and simple
//! character heuristics. Rows holding a non-stopword can then be split out.

pub mod patterns;
mod report;

pub use report::render_report;

use crate::table::StopwordTable;
use patterns::{
    english_stopwords, known_stopwords, pattern_words, CATEGORY_PATTERNS, INDONESIAN_COMMON,
    INTERNET_ABBREVIATIONS, LAUGHTER_VARIANTS, PARTICLE_SUFFIXES,
};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

const MAX_PATTERN_EXAMPLES: usize = 10;
const MAX_LISTED_WORDS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordReason {
    KnownWord,
    ParticleSuffix(&'static str),
    InternetAbbreviation,
    Laughter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonStopwordReason {
    ContainsDigit,
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Stopword(StopwordReason),
    NonStopword(NonStopwordReason),
}

impl Classification {
    pub fn is_stopword(&self) -> bool {
        matches!(self, Classification::Stopword(_))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Stopword(StopwordReason::KnownWord) => write!(f, "stopword (known word)"),
            Classification::Stopword(StopwordReason::ParticleSuffix(suffix)) => {
                write!(f, "stopword (ends with -{})", suffix)
            }
            Classification::Stopword(StopwordReason::InternetAbbreviation) => {
                write!(f, "stopword (internet abbreviation)")
            }
            Classification::Stopword(StopwordReason::Laughter) => write!(f, "stopword (laughter)"),
            Classification::NonStopword(NonStopwordReason::ContainsDigit) => {
                write!(f, "non-stopword (contains a digit)")
            }
            Classification::NonStopword(NonStopwordReason::Unrecognized) => {
                write!(f, "non-stopword (unrecognized)")
            }
        }
    }
}

fn particle_suffix(word: &str) -> Option<&'static str> {
    PARTICLE_SUFFIXES
        .iter()
        .find(|suffix| word.ends_with(*suffix))
        .copied()
}

/// Classify a single word. The word is trimmed and lowercased first.
pub fn classify(word: &str) -> Classification {
    let word = word.trim().to_lowercase();
    let word = word.as_str();

    if known_stopwords().contains(word) {
        Classification::Stopword(StopwordReason::KnownWord)
    } else if let Some(suffix) = particle_suffix(word) {
        Classification::Stopword(StopwordReason::ParticleSuffix(suffix))
    } else if INTERNET_ABBREVIATIONS.contains(&word) {
        Classification::Stopword(StopwordReason::InternetAbbreviation)
    } else if LAUGHTER_VARIANTS.contains(&word) {
        Classification::Stopword(StopwordReason::Laughter)
    } else if word.chars().any(|c| c.is_ascii_digit()) {
        Classification::NonStopword(NonStopwordReason::ContainsDigit)
    } else {
        Classification::NonStopword(NonStopwordReason::Unrecognized)
    }
}

/// Loose check used by the analysis: very short words, common Indonesian
/// function words and words with a particle suffix.
pub fn is_likely_stopword(word: &str) -> bool {
    word.chars().count() <= 2 || INDONESIAN_COMMON.contains(&word) || particle_suffix(word).is_some()
}

/// Every value in the table, trimmed and lowercased, unique and sorted.
pub fn collect_words(table: &StopwordTable) -> Vec<String> {
    table
        .records()
        .iter()
        .flat_map(|record| record.non_empty_values())
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty() && value.as_str() != "nan")
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted unique words that `classify` marks as non-stopwords.
pub fn identify_non_stopwords(words: &[String]) -> Vec<String> {
    words
        .iter()
        .filter(|word| !classify(word).is_stopword())
        .map(|word| word.trim().to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Split a table into rows without and rows with a non-stopword value.
///
/// Returns `(cleaned, non_stopword_rows)`; both keep the input order.
pub fn separate(table: &StopwordTable, non_stopwords: &[String]) -> (StopwordTable, StopwordTable) {
    let flagged: HashSet<String> = non_stopwords.iter().map(|w| w.to_lowercase()).collect();
    let (removed, kept): (Vec<_>, Vec<_>) = table.records().iter().cloned().partition(|record| {
        record
            .non_empty_values()
            .iter()
            .any(|value| flagged.contains(&value.trim().to_lowercase()))
    });
    (
        StopwordTable::from_records(kept),
        StopwordTable::from_records(removed),
    )
}

/// `<dir>/<stem>_cleaned.csv` for an input CSV path.
pub fn cleaned_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stopwords".to_string());
    input.with_file_name(format!("{}_cleaned.csv", stem))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Grade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Grade::Excellent
        } else if percentage >= 80.0 {
            Grade::Good
        } else if percentage >= 70.0 {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Grade::Excellent => "EXCELLENT - almost every word is a stopword",
            Grade::Good => "GOOD - most words are stopwords",
            Grade::Fair => "FAIR - many stopwords, some words need review",
            Grade::Poor => "POOR - many words may not be stopwords",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LengthStats {
    pub min: usize,
    pub max: usize,
    pub avg: f64,
    /// Word length to number of words
    pub distribution: BTreeMap<usize, usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternMatch {
    pub category: &'static str,
    pub count: usize,
    /// First few matching words
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub total_words: usize,
    pub length_stats: LengthStats,
    pub pattern_matches: Vec<PatternMatch>,
    pub nltk_matches: usize,
    pub non_stopword_candidates: Vec<String>,
    pub suspicious_words: Vec<String>,
    /// Share of unique words found in a category list or the NLTK list.
    /// A word listed in several categories counts once, so this never
    /// exceeds 100 (summing `pattern_matches` and `nltk_matches` would).
    pub stopword_percentage: f64,
    pub grade: Grade,
}

fn length_stats(words: &[String]) -> LengthStats {
    let lengths: Vec<usize> = words.iter().map(|w| w.chars().count()).collect();
    if lengths.is_empty() {
        return LengthStats::default();
    }

    let mut distribution = BTreeMap::new();
    for &length in &lengths {
        *distribution.entry(length).or_insert(0) += 1;
    }

    LengthStats {
        min: lengths.iter().copied().min().unwrap_or(0),
        max: lengths.iter().copied().max().unwrap_or(0),
        avg: lengths.iter().sum::<usize>() as f64 / lengths.len() as f64,
        distribution,
    }
}

fn is_all_uppercase(word: &str) -> bool {
    let mut cased = word.chars().filter(|c| c.is_uppercase() || c.is_lowercase()).peekable();
    cased.peek().is_some() && cased.all(char::is_uppercase)
}

fn is_suspicious(word: &str) -> bool {
    word.chars().count() > 6
        || word.chars().all(|c| c.is_ascii_digit())
        || word.chars().any(|c| c.is_ascii_punctuation())
        || is_all_uppercase(word)
}

/// Summarize a word list against the stopword patterns.
pub fn analyze(words: &[String]) -> AnalysisReport {
    let english = english_stopwords();
    let patterns = pattern_words();

    let pattern_matches = CATEGORY_PATTERNS
        .iter()
        .map(|(category, members)| {
            let matches: Vec<&String> = words
                .iter()
                .filter(|word| members.contains(&word.as_str()))
                .collect();
            PatternMatch {
                category: *category,
                count: matches.len(),
                examples: matches
                    .into_iter()
                    .take(MAX_PATTERN_EXAMPLES)
                    .cloned()
                    .collect(),
            }
        })
        .collect();

    let nltk_matches = words
        .iter()
        .filter(|word| english.contains(word.as_str()))
        .count();

    let non_stopword_candidates = words
        .iter()
        .filter(|word| {
            !english.contains(word.as_str())
                && !patterns.contains(word.as_str())
                && word.chars().count() > 3
                && !is_likely_stopword(word)
        })
        .take(MAX_LISTED_WORDS)
        .cloned()
        .collect();

    let suspicious_words = words
        .iter()
        .filter(|word| is_suspicious(word))
        .take(MAX_LISTED_WORDS)
        .cloned()
        .collect();

    let matched = words
        .iter()
        .filter(|word| english.contains(word.as_str()) || patterns.contains(word.as_str()))
        .count();
    let stopword_percentage = if words.is_empty() {
        0.0
    } else {
        matched as f64 / words.len() as f64 * 100.0
    };

    AnalysisReport {
        total_words: words.len(),
        length_stats: length_stats(words),
        pattern_matches,
        nltk_matches,
        non_stopword_candidates,
        suspicious_words,
        stopword_percentage,
        grade: Grade::from_percentage(stopword_percentage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::StopwordRecord;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    // ==================== Classification Tests ====================

    #[test]
    fn test_particle_suffix_is_stopword() {
        assert_eq!(
            classify("rumahnya"),
            Classification::Stopword(StopwordReason::ParticleSuffix("nya"))
        );
        assert_eq!(
            classify("bukankah"),
            Classification::Stopword(StopwordReason::ParticleSuffix("kah"))
        );
    }

    #[test]
    fn test_known_word_wins_over_suffix() {
        // "lah" is itself a known particle
        assert_eq!(classify("lah"), Classification::Stopword(StopwordReason::KnownWord));
        assert_eq!(classify("  The "), Classification::Stopword(StopwordReason::KnownWord));
    }

    #[test]
    fn test_abbreviations_and_laughter() {
        assert_eq!(
            classify("cmiiw"),
            Classification::Stopword(StopwordReason::InternetAbbreviation)
        );
        assert_eq!(
            classify("wkwkwk"),
            Classification::Stopword(StopwordReason::Laughter)
        );
    }

    #[test]
    fn test_digits_are_non_stopwords() {
        assert_eq!(
            classify("b2"),
            Classification::NonStopword(NonStopwordReason::ContainsDigit)
        );
        assert_eq!(
            classify("2024"),
            Classification::NonStopword(NonStopwordReason::ContainsDigit)
        );
    }

    #[test]
    fn test_content_word_is_non_stopword() {
        assert_eq!(
            classify("komputer"),
            Classification::NonStopword(NonStopwordReason::Unrecognized)
        );
        assert!(!classify("rumah").is_stopword());
    }

    #[test]
    fn test_classification_display() {
        assert_eq!(
            classify("rumahnya").to_string(),
            "stopword (ends with -nya)"
        );
    }

    #[test]
    fn test_is_likely_stopword() {
        assert!(is_likely_stopword("ok"));
        assert!(is_likely_stopword("pernah"));
        assert!(is_likely_stopword("apapun"));
        assert!(!is_likely_stopword("komputer"));
    }

    // ==================== Analysis Tests ====================

    #[test]
    fn test_collect_words_unique_lowercase_sorted() {
        let table = StopwordTable::from_records(vec![
            StopwordRecord::new("And", "dan", "lan", "", "dan"),
            StopwordRecord::new("", "Dan", "", "jeung", "nan"),
        ]);
        assert_eq!(collect_words(&table), words(&["and", "dan", "jeung", "lan"]));
    }

    #[test]
    fn test_identify_non_stopwords_sorted_unique() {
        let result = identify_non_stopwords(&words(&["rumah", "dan", "komputer", "rumah", "x1"]));
        assert_eq!(result, words(&["komputer", "rumah", "x1"]));
    }

    #[test]
    fn test_analyze_counts_patterns_and_grade() {
        let report = analyze(&words(&["the", "and", "saya", "tidak", "komputer"]));

        assert_eq!(report.total_words, 5);
        assert_eq!(report.length_stats.min, 3);
        assert_eq!(report.length_stats.max, 8);
        assert_eq!(report.nltk_matches, 2);
        // 4 of 5 words are in a pattern list or NLTK
        assert!((report.stopword_percentage - 80.0).abs() < 0.01);
        assert_eq!(report.grade, Grade::Good);
        assert_eq!(report.non_stopword_candidates, words(&["komputer"]));
        assert_eq!(report.suspicious_words, words(&["komputer"]));

        let pronouns = report
            .pattern_matches
            .iter()
            .find(|m| m.category == "pronouns")
            .unwrap();
        assert_eq!(pronouns.count, 1);
        assert_eq!(pronouns.examples, words(&["saya"]));
    }

    #[test]
    fn test_stopword_percentage_counts_each_word_once() {
        let report = analyze(&words(&["so", "komputer"]));

        let listed: usize = report.pattern_matches.iter().map(|m| m.count).sum();
        assert!(listed + report.nltk_matches > 1);
        assert!((report.stopword_percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analyze_empty_input() {
        let report = analyze(&[]);
        assert_eq!(report.total_words, 0);
        assert_eq!(report.stopword_percentage, 0.0);
        assert_eq!(report.grade, Grade::Poor);
    }

    #[test]
    fn test_suspicious_words() {
        assert!(is_suspicious("you're"));
        assert!(is_suspicious("123"));
        assert!(is_suspicious("LOL"));
        assert!(is_suspicious("panjangnya"));
        assert!(!is_suspicious("dan"));
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_percentage(95.0), Grade::Excellent);
        assert_eq!(Grade::from_percentage(90.0), Grade::Excellent);
        assert_eq!(Grade::from_percentage(85.0), Grade::Good);
        assert_eq!(Grade::from_percentage(70.0), Grade::Fair);
        assert_eq!(Grade::from_percentage(69.9), Grade::Poor);
    }

    // ==================== Separation Tests ====================

    #[test]
    fn test_separate_moves_rows_with_any_flagged_value() {
        let table = StopwordTable::from_records(vec![
            StopwordRecord::new("and", "dan", "lan", "jeung", "dan"),
            StopwordRecord::new("", "Rumah", "", "", "rumah"),
            StopwordRecord::new("house", "", "", "", ""),
        ]);

        let (cleaned, removed) = separate(&table, &words(&["rumah"]));

        assert_eq!(cleaned.len(), 2);
        assert_eq!(removed.len(), 1);
        assert_eq!(removed.records()[0].formal_id.as_deref(), Some("rumah"));
    }

    #[test]
    fn test_cleaned_path() {
        assert_eq!(
            cleaned_path(Path::new("data/multilingual_stopwords_translated.csv")),
            PathBuf::from("data/multilingual_stopwords_translated_cleaned.csv")
        );
    }
}
