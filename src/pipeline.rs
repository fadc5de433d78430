//! The ETL steps, each reading and writing CSV files in the data directory.

use crate::config::Config;
use crate::corpus::NusaxCorpus;
use crate::detector::{self, AnalysisReport};
use crate::generate::{self, COMPREHENSIVE_FILE};
use crate::lexicon::colloquial::{self, ANALYSIS_SUMMARY_FILE, CANDIDATES_FILE, INTEGRATION_SUMMARY_FILE};
use crate::lexicon::kbbi::{self, KbbiLexicon, COMMON_WORDS_FILE, FORMAL_VOCABULARY_FILE, PARTICLES_AFFIXES_FILE};
use crate::lexicon::{download_text, write_word_list};
use crate::table::StopwordTable;
use crate::translate::{self, FillOptions, FillOutcome, FillScope, Translator};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

pub const ENHANCED_FILE: &str = "multilingual_stopwords_enhanced.csv";
pub const FINAL_FILE: &str = "multilingual_stopwords_final.csv";
pub const TRANSLATED_FILE: &str = "multilingual_stopwords_translated.csv";
pub const TRANSLATION_SUMMARY_FILE: &str = "translation_summary.txt";
pub const NON_STOPWORDS_FILE: &str = "non_stopwords.csv";
pub const REPORT_FILE: &str = "stopword_analysis_report.txt";

/// Write a plain-text summary with a generation timestamp footer.
fn write_report(path: &Path, contents: &str) -> Result<()> {
    let stamped = format!(
        "{}\nGenerated: {}\n",
        contents.trim_end(),
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    std::fs::write(path, stamped).with_context(|| format!("Failed to write {:?}", path))
}

fn load_input(config: &Config, file_name: &str, step: &str) -> Result<StopwordTable> {
    let path = config.data_path(file_name);
    let table = StopwordTable::load_csv(&path)
        .with_context(|| format!("{} needs {:?}; run the previous step first", step, path))?;
    info!("Loaded {} entries from {:?}", table.len(), path);
    Ok(table)
}

fn log_column_counts(table: &StopwordTable) {
    for column in table.column_counts() {
        info!("  {}: {} entries", column.column, column.count);
    }
}

/// Build the comprehensive table from the curated lists and, when
/// configured, the NusaX corpus.
pub async fn run_generate(config: &Config) -> Result<StopwordTable> {
    config.ensure_data_dir()?;

    let corpus_records = if config.nusax_base_url.is_empty() {
        info!("NusaX corpus disabled, skipping extraction");
        Vec::new()
    } else {
        NusaxCorpus::new(config.http_client()?, &config.nusax_base_url)
            .extract_records()
            .await
    };

    let table = generate::generate(corpus_records, config.target_entries);
    let path = config.data_path(COMPREHENSIVE_FILE);
    table.save_csv(&path)?;

    info!("Saved {} entries to {:?}", table.len(), path);
    log_column_counts(&table);
    Ok(table)
}

/// Extract KBBI word lists and add the curated KBBI-pattern stopwords.
pub async fn run_kbbi(config: &Config) -> Result<StopwordTable> {
    config.ensure_data_dir()?;
    let mut table = load_input(config, COMPREHENSIVE_FILE, "KBBI enhancement")?;

    let client = config.http_client()?;
    let text = download_text(&client, &config.kbbi_url, "KBBI dataset").await?;
    let lexicon = KbbiLexicon::from_csv(&text)?;

    let common = lexicon.extract_common_words();
    let particles = lexicon.extract_particles_and_affixes();
    let formal = lexicon.extract_formal_vocabulary();
    write_word_list(&config.data_path(COMMON_WORDS_FILE), &common)?;
    write_word_list(&config.data_path(PARTICLES_AFFIXES_FILE), &particles)?;
    write_word_list(&config.data_path(FORMAL_VOCABULARY_FILE), &formal)?;
    info!(
        "KBBI word lists: {} common, {} particles/affixes, {} formal",
        common.len(),
        particles.len(),
        formal.len()
    );

    let before = table.len();
    kbbi::enhance(&mut table);
    let path = config.data_path(ENHANCED_FILE);
    table.save_csv(&path)?;

    info!("Saved {} entries ({} new) to {:?}", table.len(), table.len() - before, path);
    log_column_counts(&table);
    Ok(table)
}

/// Extract, categorize and integrate colloquial stopword candidates.
pub async fn run_colloquial(config: &Config) -> Result<StopwordTable> {
    config.ensure_data_dir()?;
    let mut table = load_input(config, ENHANCED_FILE, "Colloquial integration")?;

    let client = config.http_client()?;
    let text = download_text(&client, &config.colloquial_url, "colloquial lexicon").await?;
    let rows = colloquial::parse_lexicon(&text)?;

    let candidates = colloquial::extract_stopword_candidates(&rows);
    let categories = colloquial::categorize_all(&candidates);
    colloquial::write_candidates(&config.data_path(CANDIDATES_FILE), &candidates)?;
    colloquial::write_categories(&config.data_dir, &categories)?;
    write_report(
        &config.data_path(ANALYSIS_SUMMARY_FILE),
        &colloquial::render_analysis_summary(&candidates, &categories),
    )?;

    let selected = colloquial::select_high_value(&categories);
    if selected.is_empty() {
        warn!("No high-value colloquial candidates found");
    }

    let before = table.len();
    let outcome = colloquial::integrate(&mut table, &selected);
    let path = config.data_path(FINAL_FILE);
    table.save_csv(&path)?;
    write_report(
        &config.data_path(INTEGRATION_SUMMARY_FILE),
        &colloquial::render_integration_summary(&table, before, &outcome, &selected),
    )?;

    info!("Saved {} entries to {:?}", table.len(), path);
    log_column_counts(&table);
    Ok(table)
}

/// Options for one translation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslateRequest {
    pub scope: FillScope,
    pub dictionary_only: bool,
    pub conservative: bool,
}

impl Default for TranslateRequest {
    fn default() -> Self {
        Self {
            scope: FillScope::All,
            dictionary_only: false,
            conservative: false,
        }
    }
}

impl TranslateRequest {
    pub fn fill_options(&self, config: &Config) -> FillOptions {
        FillOptions {
            scope: self.scope,
            use_api: config.translate_fallback && !self.dictionary_only,
            conservative: self.conservative,
            call_delay: Duration::from_millis(config.translate_delay_ms),
            batch_delay: Duration::from_millis(config.translate_batch_delay_ms),
            pace_every: config.translate_batch_size,
        }
    }

    /// Batch runs write a range-suffixed file.
    pub fn output_file(&self) -> String {
        match self.scope {
            FillScope::Batch { offset, size } => format!(
                "multilingual_stopwords_batch_{}_{}.csv",
                offset,
                offset.saturating_add(size)
            ),
            FillScope::All | FillScope::Limit(_) => TRANSLATED_FILE.to_string(),
        }
    }
}

/// Fill empty English values in the final table.
pub async fn run_translate(config: &Config, request: &TranslateRequest) -> Result<FillOutcome> {
    config.ensure_data_dir()?;
    let before = load_input(config, FINAL_FILE, "Translation")?;
    let mut table = before.clone();

    let options = request.fill_options(config);
    let translator = if options.use_api {
        Some(Translator::new(config.http_client()?, &config.translate_api_url))
    } else {
        info!("Translation API disabled, using the dictionary only");
        None
    };

    let outcome = translate::fill_english(&mut table, translator.as_ref(), &options).await;
    translate::clean_translations(&mut table);

    let path = config.data_path(&request.output_file());
    table.save_csv(&path)?;
    write_report(
        &config.data_path(TRANSLATION_SUMMARY_FILE),
        &translate::render_summary(&before, &table, &outcome),
    )?;

    info!(
        "Saved {:?}: English coverage {:.1}% -> {:.1}%",
        path,
        before.english_coverage(),
        table.english_coverage()
    );
    Ok(outcome)
}

/// Result of a detection run.
#[derive(Debug, Clone)]
pub struct DetectOutcome {
    pub analysis: AnalysisReport,
    pub non_stopwords: Vec<String>,
    pub moved_rows: usize,
    /// `None` when nothing was flagged and no files were written
    pub cleaned_path: Option<PathBuf>,
}

/// Classify every value of `input` (the translated table by default) and
/// split the table into clean and flagged rows.
///
/// The split files are only written when at least one row is flagged; the
/// report is always written.
pub fn run_detect(config: &Config, input: Option<&Path>) -> Result<DetectOutcome> {
    config.ensure_data_dir()?;
    let input = input
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.data_path(TRANSLATED_FILE));

    let table = StopwordTable::load_csv(&input)
        .with_context(|| format!("Stopword detection needs {:?}", input))?;
    info!("Loaded {} entries from {:?}", table.len(), input);

    let words = detector::collect_words(&table);
    let analysis = detector::analyze(&words);
    let non_stopwords = detector::identify_non_stopwords(&words);
    let (cleaned, removed) = detector::separate(&table, &non_stopwords);

    let cleaned_path = if removed.is_empty() {
        info!("No rows hold a non-stopword, leaving {:?} as is", input);
        None
    } else {
        let path = detector::cleaned_path(&input);
        removed.save_csv(&config.data_path(NON_STOPWORDS_FILE))?;
        cleaned.save_csv(&path)?;
        Some(path)
    };

    let cleaned_file = cleaned_path.as_ref().map(|path| path.display().to_string());
    let report = detector::render_report(
        &analysis,
        &non_stopwords,
        removed.len(),
        cleaned_file.as_deref(),
    );
    write_report(&config.data_path(REPORT_FILE), &report)?;

    info!(
        "{} unique words, {} non-stopwords, {} rows moved, grade {}",
        analysis.total_words,
        non_stopwords.len(),
        removed.len(),
        analysis.grade.description()
    );

    Ok(DetectOutcome {
        analysis,
        non_stopwords,
        moved_rows: removed.len(),
        cleaned_path,
    })
}

/// Run every step in order.
pub async fn run_all(config: &Config) -> Result<()> {
    info!("Step 1/5: generating comprehensive stopwords");
    run_generate(config).await?;

    info!("Step 2/5: enhancing with KBBI");
    run_kbbi(config).await?;

    info!("Step 3/5: integrating colloquial lexicon");
    run_colloquial(config).await?;

    info!("Step 4/5: translating English values");
    run_translate(config, &TranslateRequest::default()).await?;

    info!("Step 5/5: detecting non-stopwords");
    run_detect(config, None)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_for_scope() {
        let batch = TranslateRequest {
            scope: FillScope::Batch { offset: 100, size: 50 },
            ..Default::default()
        };
        assert_eq!(batch.output_file(), "multilingual_stopwords_batch_100_150.csv");
        assert_eq!(TranslateRequest::default().output_file(), TRANSLATED_FILE);

        let limited = TranslateRequest {
            scope: FillScope::Limit(10),
            ..Default::default()
        };
        assert_eq!(limited.output_file(), TRANSLATED_FILE);
    }
}
