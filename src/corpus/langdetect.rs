//! Rough Indonesian / Javanese / Sundanese detection from marker words.

use super::nusax::CorpusLanguage;
use regex::Regex;
use std::sync::OnceLock;

struct LanguageMarkers {
    language: CorpusLanguage,
    /// Counted by substring, so short markers also hit inside longer words
    words: &'static [&'static str],
    /// Counted by whole-word match
    patterns: &'static [&'static str],
}

const MARKERS: &[LanguageMarkers] = &[
    LanguageMarkers {
        language: CorpusLanguage::Indonesian,
        words: &[
            "yang", "dan", "ini", "itu", "dengan", "untuk", "dari", "pada", "dalam", "tidak",
            "adalah", "akan", "sudah", "bisa", "juga",
        ],
        patterns: &["yang", "dan", "tidak", "adalah"],
    },
    LanguageMarkers {
        language: CorpusLanguage::Javanese,
        words: &[
            "lan", "karo", "iki", "kuwi", "saka", "kanggo", "ing", "ora", "iku", "wis", "iso",
            "uga",
        ],
        patterns: &["lan", "karo", "ora", "iku"],
    },
    LanguageMarkers {
        language: CorpusLanguage::Sundanese,
        words: &[
            "jeung", "sareng", "ieu", "eta", "ti", "pikeun", "di", "henteu", "teu", "geus",
            "tiasa", "oge",
        ],
        patterns: &["jeung", "sareng", "henteu", "teu"],
    },
];

static PATTERN_REGEXES: OnceLock<Vec<Vec<Regex>>> = OnceLock::new();

fn pattern_regexes() -> &'static [Vec<Regex>] {
    PATTERN_REGEXES.get_or_init(|| {
        MARKERS
            .iter()
            .map(|markers| {
                markers
                    .patterns
                    .iter()
                    .map(|word| Regex::new(&format!(r"\b{}\b", word)).unwrap())
                    .collect()
            })
            .collect()
    })
}

/// Score for one language: marker hits divided by whitespace token count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanguageScore {
    pub language: CorpusLanguage,
    pub score: f64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LanguageDetector;

impl LanguageDetector {
    pub fn new() -> Self {
        Self
    }

    /// Scores for Indonesian, Javanese and Sundanese, in that order.
    pub fn scores(&self, text: &str) -> Vec<LanguageScore> {
        let lower = text.to_lowercase();
        let total_words = lower.split_whitespace().count();

        MARKERS
            .iter()
            .zip(pattern_regexes())
            .map(|(markers, regexes)| {
                let score = if total_words == 0 {
                    0.0
                } else {
                    let word_hits = markers.words.iter().filter(|w| lower.contains(*w)).count();
                    let pattern_hits = regexes.iter().filter(|r| r.is_match(&lower)).count();
                    (word_hits + pattern_hits) as f64 / total_words as f64
                };
                LanguageScore {
                    language: markers.language,
                    score,
                }
            })
            .collect()
    }

    /// Highest scoring language; earlier languages win ties.
    pub fn dominant(&self, text: &str) -> CorpusLanguage {
        let mut best = LanguageScore {
            language: CorpusLanguage::Indonesian,
            score: f64::NEG_INFINITY,
        };
        for score in self.scores(text) {
            if score.score > best.score {
                best = score;
            }
        }
        best.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_are_normalized_by_token_count() {
        let scores = LanguageDetector::new().scores("aku ora iso");

        assert_eq!(scores.len(), 3);
        assert_eq!(scores[1].language, CorpusLanguage::Javanese);
        // "ora" and "iso" as words plus the "ora" pattern
        assert!((scores[1].score - 1.0).abs() < f64::EPSILON);
        assert_eq!(scores[2].score, 0.0);
    }

    #[test]
    fn test_dominant_language() {
        let detector = LanguageDetector::new();
        assert_eq!(
            detector.dominant("Instagram bagus banget, tapi yang ini tidak jelas"),
            CorpusLanguage::Indonesian
        );
        assert_eq!(
            detector.dominant("Aplikasi iki apik tenan, ora iso dibukak"),
            CorpusLanguage::Javanese
        );
        assert_eq!(
            detector.dominant("aplikasi ieu henteu tiasa dibuka"),
            CorpusLanguage::Sundanese
        );
    }

    #[test]
    fn test_empty_text_defaults_to_indonesian() {
        let detector = LanguageDetector::new();
        assert!(detector.scores("   ").iter().all(|s| s.score == 0.0));
        assert_eq!(detector.dominant(""), CorpusLanguage::Indonesian);
    }
}
