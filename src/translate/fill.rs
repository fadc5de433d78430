//! Backfill empty English values from the dictionary and the translation API.

use crate::lang::Language;
use crate::table::{StopwordTable, TranslationCandidate};
use crate::translate::client::Translator;
use crate::translate::dictionary;
use crate::translate::metrics::{MetricsReport, TranslationMetrics};
use crate::translate::validator::{TranslationValidator, MAX_TRANSLATION_LEN};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Which translation candidates a run works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillScope {
    All,
    /// The first `n` candidates
    Limit(usize),
    /// Candidates `offset..offset + size`
    Batch { offset: usize, size: usize },
}

impl FillScope {
    fn select<'a>(&self, candidates: &'a [TranslationCandidate]) -> &'a [TranslationCandidate] {
        let (start, end) = match *self {
            FillScope::All => (0, candidates.len()),
            FillScope::Limit(n) => (0, n),
            FillScope::Batch { offset, size } => (offset, offset.saturating_add(size)),
        };
        let end = end.min(candidates.len());
        let start = start.min(end);
        &candidates[start..end]
    }
}

#[derive(Debug, Clone)]
pub struct FillOptions {
    pub scope: FillScope,
    /// Fall back to the API when the dictionary has no entry
    pub use_api: bool,
    /// Skip long or English-looking sources instead of sending them
    pub conservative: bool,
    /// Pause after every API call
    pub call_delay: Duration,
    /// Longer pause after every `pace_every` API calls
    pub batch_delay: Duration,
    pub pace_every: usize,
}

impl Default for FillOptions {
    fn default() -> Self {
        Self {
            scope: FillScope::All,
            use_api: true,
            conservative: false,
            call_delay: Duration::from_millis(300),
            batch_delay: Duration::from_millis(3000),
            pace_every: 20,
        }
    }
}

/// Outcome of one fill run.
#[derive(Debug, Clone)]
pub struct FillOutcome {
    /// Candidates in the whole table before the run
    pub total_candidates: usize,
    /// Candidates this run looked at
    pub processed: usize,
    /// Offset to pass to continue a batched run, if anything is left
    pub next_offset: Option<usize>,
    pub metrics: MetricsReport,
    /// `(source, translation)` pairs written this run, in table order
    pub translated: Vec<(String, String)>,
}

/// Fill empty `en` values for the candidates selected by `options.scope`.
///
/// Dictionary hits are written directly (an empty hit leaves `en` empty).
/// Misses go to `translator` when the API is enabled; failed or rejected
/// translations leave the record unchanged.
pub async fn fill_english(
    table: &mut StopwordTable,
    translator: Option<&Translator>,
    options: &FillOptions,
) -> FillOutcome {
    let candidates = table.translation_candidates();
    let selected = options.scope.select(&candidates);
    let metrics = TranslationMetrics::new();
    let mut translated = Vec::new();

    info!(
        "Processing {} of {} translation candidates",
        selected.len(),
        candidates.len()
    );

    let mut api_calls_since_pause = 0;
    for (position, candidate) in selected.iter().enumerate() {
        let source = candidate.text.as_str();

        if options.conservative {
            if let Some(reason) = TranslationValidator::conservative_skip_reason(source) {
                debug!("Skipping '{}': {}", source, reason);
                metrics.record_skipped();
                continue;
            }
        }

        if let Some(english) = dictionary::lookup(source) {
            metrics.record_dictionary_hit();
            if !english.is_empty() {
                table.records_mut()[candidate.index].set(Language::ENGLISH, english);
                translated.push((source.to_string(), english.to_string()));
            }
            debug!("{}/{}: '{}' -> '{}' (dict)", position + 1, selected.len(), source, english);
            continue;
        }

        let translator = match translator {
            Some(translator) if options.use_api => translator,
            _ => {
                metrics.record_skipped();
                continue;
            }
        };

        if api_calls_since_pause >= options.pace_every.max(1) {
            info!("Waiting {:?} before next batch...", options.batch_delay);
            sleep(options.batch_delay).await;
            api_calls_since_pause = 0;
        }

        metrics.record_api_call();
        api_calls_since_pause += 1;
        match translator.translate(source).await {
            Ok(raw) => {
                let english = TranslationValidator::normalize(&raw);
                let report = TranslationValidator::validate(source, &english);
                if report.has_warnings() {
                    debug!("Translation warnings for '{}': {:?}", source, report.warnings);
                }
                if report.has_errors() {
                    warn!("Rejected translation '{}' -> '{}': {:?}", source, english, report.errors);
                    metrics.record_rejected();
                } else {
                    debug!("{}/{}: '{}' -> '{}' (api)", position + 1, selected.len(), source, english);
                    table.records_mut()[candidate.index].set(Language::ENGLISH, &english);
                    translated.push((source.to_string(), english));
                }
            }
            Err(e) => {
                warn!("Failed to translate '{}': {}", source, e);
                metrics.record_api_failure();
            }
        }

        if !options.call_delay.is_zero() {
            sleep(options.call_delay).await;
        }
    }

    let next_offset = match options.scope {
        FillScope::Batch { offset, size } if offset.saturating_add(size) < candidates.len() => {
            Some(offset + size)
        }
        _ => None,
    };

    FillOutcome {
        total_candidates: candidates.len(),
        processed: selected.len(),
        next_offset,
        metrics: metrics.report(),
        translated,
    }
}

/// Blank suspicious English values and normalize the rest.
///
/// Drops translations longer than the maximum and translations equal to the
/// colloquial Indonesian value. Returns the number of blanked values.
pub fn clean_translations(table: &mut StopwordTable) -> usize {
    let mut blanked = 0;

    for record in table.records_mut() {
        let Some(english) = record.get(Language::ENGLISH) else {
            continue;
        };
        let english = TranslationValidator::normalize(english);

        let too_long = english.chars().count() > MAX_TRANSLATION_LEN;
        let echoed = record
            .get(Language::INDONESIAN)
            .is_some_and(|id| id.trim().to_lowercase() == english);

        if too_long || echoed {
            record.set(Language::ENGLISH, "");
            blanked += 1;
        } else {
            record.set(Language::ENGLISH, &english);
        }
    }

    if blanked > 0 {
        info!("Removed {} invalid translations", blanked);
    }
    blanked
}

/// Human-readable summary of a translation run.
pub fn render_summary(
    before: &StopwordTable,
    after: &StopwordTable,
    outcome: &FillOutcome,
) -> String {
    let original_en = before.column_count(Language::ENGLISH);
    let final_en = after.column_count(Language::ENGLISH);
    let percent = |count: usize| {
        if after.is_empty() {
            0.0
        } else {
            count as f64 / after.len() as f64 * 100.0
        }
    };

    let mut summary = format!(
        "TRANSLATION SUMMARY\n\
         ===================\n\n\
         Results:\n\
         - Original English entries: {}\n\
         - Final English entries: {}\n\
         - New translations added: {}\n\
         - Total dataset entries: {}\n\
         - English coverage: {:.1}%\n\
         - Indonesian coverage: {:.1}%\n\
         - Formal Indonesian coverage: {:.1}%\n\n\
         Sources:\n\
         - Candidates processed: {} of {}\n\
         - Dictionary hits: {}\n\
         - API translations: {} ({} calls, {} failed, {} rejected)\n\
         - Skipped: {}\n\n\
         Sample new translations:\n",
        original_en,
        final_en,
        final_en.saturating_sub(original_en),
        after.len(),
        percent(final_en),
        percent(after.column_count(Language::INDONESIAN)),
        percent(after.column_count(Language::FORMAL_INDONESIAN)),
        outcome.processed,
        outcome.total_candidates,
        outcome.metrics.dictionary_hits,
        outcome.metrics.api_translations,
        outcome.metrics.api_calls,
        outcome.metrics.api_failures,
        outcome.metrics.rejected,
        outcome.metrics.skipped,
    );

    for (i, (source, english)) in outcome.translated.iter().take(20).enumerate() {
        summary.push_str(&format!("  {:2}. {} -> {}\n", i + 1, source, english));
    }

    summary
}
