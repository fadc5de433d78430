//! The NusaX sentiment corpus and text utilities for its languages.

pub mod langdetect;
pub mod nusax;
pub mod preprocess;

pub use langdetect::{LanguageDetector, LanguageScore};
pub use nusax::{CorpusLanguage, NusaxCorpus, WordFrequency};
pub use preprocess::{Sentiment, TextPreprocessor};
