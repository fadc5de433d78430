//! Social-media text cleanup for Indonesian and regional-language text.

use regex::Regex;
use std::sync::OnceLock;

const ABBREVIATIONS: &[(&str, &str)] = &[
    ("gk", "tidak"),
    ("ga", "tidak"),
    ("gak", "tidak"),
    ("udh", "sudah"),
    ("udah", "sudah"),
    ("blm", "belum"),
    ("blom", "belum"),
    ("krn", "karena"),
    ("krna", "karena"),
    ("dgn", "dengan"),
    ("sm", "sama"),
    ("tp", "tapi"),
    ("trs", "terus"),
    ("yg", "yang"),
    ("utk", "untuk"),
    ("dr", "dari"),
    ("org", "orang"),
    ("bgt", "banget"),
    ("bener", "benar"),
    ("emg", "memang"),
    ("emang", "memang"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
}

const EMOTICONS: &[(&str, Sentiment)] = &[
    (":)", Sentiment::Positive),
    (":-)", Sentiment::Positive),
    (":D", Sentiment::Positive),
    (":-D", Sentiment::Positive),
    (":P", Sentiment::Positive),
    (":(", Sentiment::Negative),
    (":-(", Sentiment::Negative),
    (":/", Sentiment::Negative),
    (":-/", Sentiment::Negative),
    (":'(", Sentiment::Negative),
];

static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static MENTION_REGEX: OnceLock<Regex> = OnceLock::new();
static HASHTAG_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();
static SYMBOL_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Default, Clone, Copy)]
pub struct TextPreprocessor;

impl TextPreprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Replace whole-word abbreviations with their full form.
    /// Whitespace is normalized to single spaces.
    pub fn expand_abbreviations(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| {
                let lower = word.to_lowercase();
                ABBREVIATIONS
                    .iter()
                    .find(|(short, _)| *short == lower)
                    .map(|(_, full)| *full)
                    .unwrap_or(word)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Known emoticons present in `text`, in table order.
    pub fn extract_emoticons(&self, text: &str) -> Vec<(&'static str, Sentiment)> {
        EMOTICONS
            .iter()
            .filter(|(emoticon, _)| text.contains(emoticon))
            .copied()
            .collect()
    }

    /// Lowercase, expand abbreviations, drop URLs, mentions, hashtags and
    /// symbols other than `.,!?-`, and collapse whitespace.
    pub fn clean_text(&self, text: &str) -> String {
        let url = URL_REGEX.get_or_init(|| Regex::new(r"https?://\S+").unwrap());
        let mention = MENTION_REGEX.get_or_init(|| Regex::new(r"@\w+").unwrap());
        let hashtag = HASHTAG_REGEX.get_or_init(|| Regex::new(r"#\w+").unwrap());
        let whitespace = WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").unwrap());
        let symbols = SYMBOL_REGEX.get_or_init(|| Regex::new(r"[^\w\s.,!?-]").unwrap());

        let text = self.expand_abbreviations(&text.to_lowercase());
        let text = url.replace_all(&text, "");
        let text = mention.replace_all(&text, "");
        let text = hashtag.replace_all(&text, "");
        let text = whitespace.replace_all(&text, " ");
        let text = symbols.replace_all(&text, "");

        text.trim().to_string()
    }
}
