//! Colloquial Indonesian lexicon: slang to formal pairs.
//!
//! Short slang terms whose formal form is a function word are extracted as
//! stopword candidates, bucketed by grammatical role, filtered down to the
//! high-value buckets and appended to the table.

use crate::record::StopwordRecord;
use crate::table::{MergeOutcome, StopwordTable};
use crate::vocab::FUNCTION_WORD_INDICATORS;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Write as _};
use std::path::Path;
use tracing::info;

pub const CANDIDATES_FILE: &str = "colloquial_stopword_candidates.csv";
pub const ANALYSIS_SUMMARY_FILE: &str = "colloquial_analysis_summary.txt";
pub const INTEGRATION_SUMMARY_FILE: &str = "colloquial_integration_summary.txt";

const MAX_SLANG_LEN: usize = 6;
const MAX_FORMAL_LEN: usize = 10;
const SHORT_SLANG_LEN: usize = 3;

const PRONOUNS: &[&str] = &["saya", "aku", "kamu", "dia", "mereka", "kita", "kami"];
const DEMONSTRATIVES: &[&str] = &["ini", "itu", "begitu", "demikian"];
const CONJUNCTIONS: &[&str] = &["dan", "atau", "tetapi", "karena", "jika", "ketika"];
const INTENSITY_ADVERBS: &[&str] = &["sangat", "banget", "sekali", "agak", "cukup", "terlalu"];
const QUESTION_WORDS: &[&str] = &[
    "dimana", "kemana", "bagaimana", "kenapa", "kapan", "siapa", "apa", "mana", "berapa",
];
const PARTICLE_FORMALS: &[&str] = &["juga", "hanya", "saja", "pula"];
const HIGH_VALUE_PARTICLE_FORMALS: &[&str] = &[
    "yang", "saja", "juga", "hanya", "dengan", "untuk", "dari", "pada",
];

const MAX_SAMPLE_ADDITIONS: usize = 20;

/// One row of the lexicon CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LexiconRow {
    #[serde(default)]
    pub slang: Option<String>,
    #[serde(default)]
    pub formal: Option<String>,
    #[serde(default)]
    pub category1: Option<String>,
}

impl LexiconRow {
    pub fn new(slang: &str, formal: &str) -> Self {
        Self {
            slang: Some(slang.to_string()),
            formal: Some(formal.to_string()),
            category1: None,
        }
    }
}

/// A slang term that may be a stopword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColloquialCandidate {
    pub slang: String,
    pub formal: String,
    /// The lexicon's own `category1` label
    pub category: String,
    /// Character count of `slang`
    pub length: usize,
}

/// Grammatical bucket of a candidate, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CandidateCategory {
    Particles,
    Pronouns,
    Conjunctions,
    Adverbs,
    QuestionWords,
    Demonstratives,
    Others,
}

impl CandidateCategory {
    pub const ALL: [CandidateCategory; 7] = [
        CandidateCategory::Particles,
        CandidateCategory::Pronouns,
        CandidateCategory::Conjunctions,
        CandidateCategory::Adverbs,
        CandidateCategory::QuestionWords,
        CandidateCategory::Demonstratives,
        CandidateCategory::Others,
    ];

    /// Snake-case name used in file names.
    pub fn name(&self) -> &'static str {
        match self {
            CandidateCategory::Particles => "particles",
            CandidateCategory::Pronouns => "pronouns",
            CandidateCategory::Conjunctions => "conjunctions",
            CandidateCategory::Adverbs => "adverbs",
            CandidateCategory::QuestionWords => "question_words",
            CandidateCategory::Demonstratives => "demonstratives",
            CandidateCategory::Others => "others",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CandidateCategory::Particles => "Particles",
            CandidateCategory::Pronouns => "Pronouns",
            CandidateCategory::Conjunctions => "Conjunctions",
            CandidateCategory::Adverbs => "Adverbs",
            CandidateCategory::QuestionWords => "Question words",
            CandidateCategory::Demonstratives => "Demonstratives",
            CandidateCategory::Others => "Others",
        }
    }

    pub fn file_name(&self) -> String {
        format!("colloquial_{}.csv", self.name())
    }
}

impl fmt::Display for CandidateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Candidates grouped by category. Every category has an entry.
pub type CategorizedCandidates = BTreeMap<CandidateCategory, Vec<ColloquialCandidate>>;

/// Parse the lexicon CSV. `slang` and `formal` columns are required.
pub fn parse_lexicon(text: &str) -> Result<Vec<LexiconRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .context("Failed to read colloquial lexicon header")?
        .clone();
    for required in ["slang", "formal"] {
        if !headers.iter().any(|h| h.trim() == required) {
            bail!("Colloquial lexicon is missing the '{}' column", required);
        }
    }

    let mut rows = Vec::new();
    for (line, row) in reader.deserialize::<LexiconRow>().enumerate() {
        let row = row.with_context(|| format!("Failed to parse lexicon row {}", line + 2))?;
        rows.push(row);
    }

    info!("Parsed {} colloquial lexicon rows", rows.len());
    Ok(rows)
}

fn clean_field(value: Option<&str>) -> Option<String> {
    let value = value?.trim().to_lowercase();
    if value.is_empty() || value == "nan" {
        None
    } else {
        Some(value)
    }
}

fn is_function_word(formal: &str) -> bool {
    FUNCTION_WORD_INDICATORS
        .iter()
        .any(|indicator| formal.contains(indicator) || indicator.contains(formal))
}

/// Short slang terms whose formal form looks like a function word, plus very
/// short slang terms. Unique by `(slang, formal)`, first occurrence wins.
pub fn extract_stopword_candidates(rows: &[LexiconRow]) -> Vec<ColloquialCandidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for row in rows {
        let (Some(slang), Some(formal)) = (
            clean_field(row.slang.as_deref()),
            clean_field(row.formal.as_deref()),
        ) else {
            continue;
        };

        let length = slang.chars().count();
        if length > MAX_SLANG_LEN || formal.chars().count() > MAX_FORMAL_LEN {
            continue;
        }
        if !is_function_word(&formal) && length > SHORT_SLANG_LEN {
            continue;
        }
        if !seen.insert((slang.clone(), formal.clone())) {
            continue;
        }

        candidates.push(ColloquialCandidate {
            slang,
            formal,
            category: row.category1.clone().unwrap_or_default(),
            length,
        });
    }

    info!("Extracted {} stopword candidates", candidates.len());
    candidates
}

/// Bucket a candidate by its formal word. The first matching rule wins.
pub fn categorize(candidate: &ColloquialCandidate) -> CandidateCategory {
    let formal = candidate.formal.as_str();
    if PRONOUNS.contains(&formal) {
        CandidateCategory::Pronouns
    } else if DEMONSTRATIVES.contains(&formal) {
        CandidateCategory::Demonstratives
    } else if CONJUNCTIONS.contains(&formal) {
        CandidateCategory::Conjunctions
    } else if INTENSITY_ADVERBS.contains(&formal) {
        CandidateCategory::Adverbs
    } else if QUESTION_WORDS.contains(&formal) {
        CandidateCategory::QuestionWords
    } else if candidate.length <= SHORT_SLANG_LEN || PARTICLE_FORMALS.contains(&formal) {
        CandidateCategory::Particles
    } else {
        CandidateCategory::Others
    }
}

pub fn categorize_all(candidates: &[ColloquialCandidate]) -> CategorizedCandidates {
    let mut categories: CategorizedCandidates = CandidateCategory::ALL
        .iter()
        .map(|&category| (category, Vec::new()))
        .collect();

    for candidate in candidates {
        categories
            .entry(categorize(candidate))
            .or_default()
            .push(candidate.clone());
    }

    categories
}

/// Keep the candidates worth adding to the table, in category order.
pub fn select_high_value(
    categories: &CategorizedCandidates,
) -> Vec<(CandidateCategory, ColloquialCandidate)> {
    let mut selected = Vec::new();

    for (&category, candidates) in categories {
        let before = selected.len();
        for candidate in candidates {
            let keep = match category {
                CandidateCategory::Particles => {
                    candidate.length <= SHORT_SLANG_LEN
                        || HIGH_VALUE_PARTICLE_FORMALS.contains(&candidate.formal.as_str())
                }
                CandidateCategory::Adverbs => {
                    INTENSITY_ADVERBS.contains(&candidate.formal.as_str())
                }
                CandidateCategory::Pronouns
                | CandidateCategory::Conjunctions
                | CandidateCategory::QuestionWords
                | CandidateCategory::Demonstratives => true,
                CandidateCategory::Others => false,
            };
            if keep {
                selected.push((category, candidate.clone()));
            }
        }
        if category != CandidateCategory::Others {
            info!("Selected {} candidates from {}", selected.len() - before, category);
        }
    }

    info!("Total high-value candidates: {}", selected.len());
    selected
}

/// Append selected slang terms as `id = slang, formal_id = formal` rows.
pub fn integrate(
    table: &mut StopwordTable,
    selected: &[(CandidateCategory, ColloquialCandidate)],
) -> MergeOutcome {
    let outcome = table.merge_new_words(
        selected
            .iter()
            .map(|(_, candidate)| (candidate.slang.as_str(), candidate.formal.as_str())),
    );
    info!(
        "Colloquial integration: {} words added, {} already present",
        outcome.added, outcome.skipped
    );
    outcome
}

pub fn write_candidates(path: &Path, candidates: &[ColloquialCandidate]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file {:?}", path))?;
    for candidate in candidates {
        writer
            .serialize(candidate)
            .with_context(|| format!("Failed to write candidate to {:?}", path))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {:?}", path))?;
    Ok(())
}

/// Write one CSV per non-empty category into `dir`. Returns the paths written.
pub fn write_categories(
    dir: &Path,
    categories: &CategorizedCandidates,
) -> Result<Vec<std::path::PathBuf>> {
    let mut written = Vec::new();
    for (category, candidates) in categories {
        if candidates.is_empty() {
            continue;
        }
        let path = dir.join(category.file_name());
        write_candidates(&path, candidates)?;
        written.push(path);
    }
    Ok(written)
}

pub fn render_analysis_summary(
    candidates: &[ColloquialCandidate],
    categories: &CategorizedCandidates,
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_analysis_summary(&mut out, candidates, categories);
    out
}

fn write_analysis_summary(
    out: &mut String,
    candidates: &[ColloquialCandidate],
    categories: &CategorizedCandidates,
) -> fmt::Result {
    writeln!(out, "COLLOQUIAL INDONESIAN LEXICON ANALYSIS")?;
    writeln!(out, "{}\n", "=".repeat(50))?;
    writeln!(out, "Total stopword candidates: {}\n", candidates.len())?;

    writeln!(out, "By category:")?;
    for (category, items) in categories {
        writeln!(out, "- {}: {} items", category.label(), items.len())?;
    }

    writeln!(out, "\nSample candidates by category:")?;
    for (category, items) in categories.iter().filter(|(_, items)| !items.is_empty()) {
        writeln!(out, "\n{}:", category.label())?;
        for item in items.iter().take(10) {
            writeln!(out, "  {} -> {}", item.slang, item.formal)?;
        }
    }

    Ok(())
}

pub fn render_integration_summary(
    table: &StopwordTable,
    previous_len: usize,
    outcome: &MergeOutcome,
    selected: &[(CandidateCategory, ColloquialCandidate)],
) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = write_integration_summary(&mut out, table, previous_len, outcome, selected);
    out
}

fn write_integration_summary(
    out: &mut String,
    table: &StopwordTable,
    previous_len: usize,
    outcome: &MergeOutcome,
    selected: &[(CandidateCategory, ColloquialCandidate)],
) -> fmt::Result {
    writeln!(out, "COLLOQUIAL INDONESIAN INTEGRATION SUMMARY")?;
    writeln!(out, "{}\n", "=".repeat(41))?;

    writeln!(out, "Dataset:")?;
    writeln!(out, "- Before integration: {} entries", previous_len)?;
    writeln!(out, "- After integration: {} entries", table.len())?;
    writeln!(out, "- New colloquial additions: {}", outcome.added)?;
    writeln!(out, "- Skipped (already exist): {}", outcome.skipped)?;

    writeln!(out, "\nLanguage statistics:")?;
    for column in table.column_counts() {
        writeln!(out, "- {}: {}", column.column, column.count)?;
    }

    writeln!(out, "\nCategories integrated:")?;
    let mut counts: BTreeMap<CandidateCategory, usize> = BTreeMap::new();
    for (category, _) in selected {
        *counts.entry(*category).or_default() += 1;
    }
    for (category, count) in &counts {
        writeln!(out, "- {}: {} terms", category.label(), count)?;
    }

    if outcome.added > 0 {
        writeln!(out, "\nSample new colloquial additions:")?;
        for (i, record) in newest_additions(table, outcome.added).iter().enumerate() {
            writeln!(
                out,
                "  {:2}. {} -> {}",
                i + 1,
                record.id.as_deref().unwrap_or(""),
                record.formal_id.as_deref().unwrap_or("")
            )?;
        }
    }

    Ok(())
}

/// The last `added` rows, capped at `MAX_SAMPLE_ADDITIONS`.
///
/// `merge_new_words` only appends, so these are the rows the merge added.
fn newest_additions(table: &StopwordTable, added: usize) -> &[StopwordRecord] {
    let records = table.records();
    let start = records.len().saturating_sub(added.min(MAX_SAMPLE_ADDITIONS));
    &records[start..]
}
