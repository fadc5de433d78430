//! English backfill for the stopword table.
//!
//! Records without an English value are translated from their formal (or
//! colloquial) Indonesian text. The built-in dictionary is tried first; the
//! web translation API is the fallback.

pub mod client;
pub mod dictionary;
pub mod fill;
pub mod metrics;
pub mod validator;

pub use client::{TranslateError, Translator};
pub use fill::{clean_translations, fill_english, render_summary, FillOptions, FillOutcome, FillScope};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use validator::{TranslationValidator, ValidationReport};
