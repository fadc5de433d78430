//! NusaX sentiment corpus: frequent words per language.

use crate::lexicon::download_text_with;
use crate::record::StopwordRecord;
use crate::retry::RetryConfig;
use crate::vocab::{lookup, reverse_lookup, INDONESIAN_TO_JAVANESE, INDONESIAN_TO_SUNDANESE};
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::{info, warn};

/// Dataset splits published for every language.
pub const SPLITS: &[&str] = &["train", "valid", "test"];

/// Words considered per language, before filtering.
pub const TOP_WORDS: usize = 100;
/// A word must appear more often than this to be kept.
pub const MIN_COUNT: usize = 3;

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorpusLanguage {
    English,
    Indonesian,
    Javanese,
    Sundanese,
}

impl CorpusLanguage {
    pub const ALL: [CorpusLanguage; 4] = [
        CorpusLanguage::English,
        CorpusLanguage::Indonesian,
        CorpusLanguage::Javanese,
        CorpusLanguage::Sundanese,
    ];

    /// Directory name in the corpus repository.
    pub fn dir_name(&self) -> &'static str {
        match self {
            CorpusLanguage::English => "english",
            CorpusLanguage::Indonesian => "indonesian",
            CorpusLanguage::Javanese => "javanese",
            CorpusLanguage::Sundanese => "sundanese",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            CorpusLanguage::English => "eng",
            CorpusLanguage::Indonesian => "ind",
            CorpusLanguage::Javanese => "jav",
            CorpusLanguage::Sundanese => "sun",
        }
    }

    /// Map a frequent corpus word to a stopword record.
    ///
    /// Javanese and Sundanese words recover their Indonesian form from the
    /// curated mappings when one exists.
    pub fn to_record(&self, word: &str) -> StopwordRecord {
        match self {
            CorpusLanguage::English => StopwordRecord::new(word, "", "", "", ""),
            CorpusLanguage::Indonesian => StopwordRecord::new(
                "",
                word,
                lookup(INDONESIAN_TO_JAVANESE, word).unwrap_or(""),
                lookup(INDONESIAN_TO_SUNDANESE, word).unwrap_or(""),
                word,
            ),
            CorpusLanguage::Javanese => {
                let id = reverse_lookup(INDONESIAN_TO_JAVANESE, word).unwrap_or("");
                StopwordRecord::new("", id, word, "", id)
            }
            CorpusLanguage::Sundanese => {
                let id = reverse_lookup(INDONESIAN_TO_SUNDANESE, word).unwrap_or("");
                StopwordRecord::new("", id, "", word, id)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct CorpusRow {
    #[serde(default)]
    text: Option<String>,
}

/// The `text` column of a split CSV.
pub fn parse_texts(csv_text: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut texts = Vec::new();
    for (line, row) in reader.deserialize::<CorpusRow>().enumerate() {
        let row = row.with_context(|| format!("Failed to parse corpus row {}", line + 2))?;
        if let Some(text) = row.text.filter(|t| !t.trim().is_empty()) {
            texts.push(text);
        }
    }
    Ok(texts)
}

/// Lowercase alphabetic tokens, accented Latin letters included.
pub fn tokenize(text: &str) -> Vec<String> {
    let regex = TOKEN_REGEX.get_or_init(|| Regex::new(r"\b[a-zA-ZÀ-ÿ]+\b").unwrap());
    let lower = text.to_lowercase();
    regex
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Token counts for one language.
#[derive(Debug, Clone, Default)]
pub struct WordFrequency {
    counts: HashMap<String, usize>,
}

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_text(&mut self, text: &str) {
        for token in tokenize(text) {
            *self.counts.entry(token).or_default() += 1;
        }
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent words. Ties are broken alphabetically.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }

    /// Frequent words worth turning into records: the top `TOP_WORDS`,
    /// longer than one character and seen more than `MIN_COUNT` times.
    pub fn common_words(&self) -> Vec<String> {
        self.most_common(TOP_WORDS)
            .into_iter()
            .filter(|(word, count)| word.chars().count() > 1 && *count > MIN_COUNT)
            .map(|(word, _)| word.to_string())
            .collect()
    }
}

/// Client for the published NusaX split CSVs.
pub struct NusaxCorpus {
    client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl NusaxCorpus {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            retry: RetryConfig::download(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn split_url(&self, language: CorpusLanguage, split: &str) -> String {
        format!("{}/{}/{}.csv", self.base_url, language.dir_name(), split)
    }

    /// Count words over every split of one language. A split that fails to
    /// download or parse is skipped.
    pub async fn word_frequency(&self, language: CorpusLanguage) -> WordFrequency {
        let mut frequency = WordFrequency::new();

        for split in SPLITS {
            let name = format!("NusaX {} {}", language.dir_name(), split);
            let url = self.split_url(language, split);

            let texts = match download_text_with(&self.client, &url, &name, &self.retry).await {
                Ok(body) => parse_texts(&body),
                Err(e) => Err(e),
            };

            match texts {
                Ok(texts) => {
                    for text in &texts {
                        frequency.add_text(text);
                    }
                }
                Err(e) => warn!("Skipping {}: {:#}", name, e),
            }
        }

        frequency
    }

    /// Records for the frequent words of every language.
    pub async fn extract_records(&self) -> Vec<StopwordRecord> {
        info!("Extracting frequent words from the NusaX corpus");
        let mut records = Vec::new();

        for language in CorpusLanguage::ALL {
            let frequency = self.word_frequency(language).await;
            let words = frequency.common_words();
            info!("Found {} common words in {}", words.len(), language.code());
            records.extend(words.iter().map(|word| language.to_record(word)));
        }

        records
    }
}
