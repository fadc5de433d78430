//! Build the comprehensive stopword table from the curated lists.

use crate::record::StopwordRecord;
use crate::table::StopwordTable;
use crate::vocab::{
    lookup, ADDITIONAL_ENTRIES, ENGLISH_STOPWORDS, ENGLISH_TO_INDONESIAN, INDONESIAN_FORMAL,
    INDONESIAN_SLANG, INDONESIAN_TO_JAVANESE, INDONESIAN_TO_SUNDANESE, PADDING_ENTRIES,
    SOCIAL_MEDIA_PARTICLES,
};
use std::collections::HashSet;
use tracing::{info, warn};

pub const COMPREHENSIVE_FILE: &str = "multilingual_stopwords_comprehensive.csv";

fn javanese(formal: &str) -> &'static str {
    lookup(INDONESIAN_TO_JAVANESE, formal).unwrap_or("")
}

fn sundanese(formal: &str) -> &'static str {
    lookup(INDONESIAN_TO_SUNDANESE, formal).unwrap_or("")
}

fn from_row(row: &[&str; 5]) -> StopwordRecord {
    StopwordRecord::new(row[0], row[1], row[2], row[3], row[4])
}

/// One row per NLTK English stopword, with its Indonesian equivalent used
/// for both Indonesian columns.
pub fn english_records() -> Vec<StopwordRecord> {
    ENGLISH_STOPWORDS
        .iter()
        .map(|&en| {
            let formal = lookup(ENGLISH_TO_INDONESIAN, en).unwrap_or("");
            StopwordRecord::new(en, formal, javanese(formal), sundanese(formal), formal)
        })
        .collect()
}

/// One row per slang term. Terms without a formal form keep only `id`.
pub fn slang_records() -> Vec<StopwordRecord> {
    INDONESIAN_SLANG
        .iter()
        .map(|&(slang, formal)| {
            StopwordRecord::new("", slang, javanese(formal), sundanese(formal), formal)
        })
        .collect()
}

pub fn formal_records() -> Vec<StopwordRecord> {
    INDONESIAN_FORMAL
        .iter()
        .map(|&word| StopwordRecord::new("", word, javanese(word), sundanese(word), word))
        .collect()
}

pub fn particle_records() -> Vec<StopwordRecord> {
    SOCIAL_MEDIA_PARTICLES
        .iter()
        .map(|&particle| StopwordRecord::indonesian(particle, particle))
        .collect()
}

pub fn additional_records() -> Vec<StopwordRecord> {
    ADDITIONAL_ENTRIES.iter().map(from_row).collect()
}

/// Assemble, deduplicate and pad the table to `target` rows.
///
/// `corpus_records` come first so frequent corpus words keep their position.
pub fn generate(corpus_records: Vec<StopwordRecord>, target: usize) -> StopwordTable {
    info!("Generating comprehensive multilingual stopwords");

    let mut table = StopwordTable::new();
    let sources = [
        ("NusaX corpus", corpus_records),
        ("English stopwords", english_records()),
        ("Indonesian slang", slang_records()),
        ("formal Indonesian", formal_records()),
        ("social media particles", particle_records()),
        ("additional entries", additional_records()),
    ];
    for (name, records) in sources {
        if records.is_empty() {
            continue;
        }
        info!("Adding {} rows from {}", records.len(), name);
        table.extend(StopwordTable::from_records(records));
    }

    let removed = table.deduplicate();
    info!("Removed {} duplicates, {} entries remain", removed, table.len());

    if table.len() < target {
        warn!(
            "Only {} entries generated, padding towards {}",
            table.len(),
            target
        );
        let added = pad_to_target(&mut table, target);
        info!("Added {} padding entries", added);
        table.deduplicate();

        if table.len() < target {
            warn!(
                "Padding exhausted at {} entries, short of the {} target",
                table.len(),
                target
            );
        }
    }

    info!("Generation complete: {} entries", table.len());
    table
}

/// Append padding rows with new keys until the table has `target` rows.
fn pad_to_target(table: &mut StopwordTable, target: usize) -> usize {
    let mut seen: HashSet<Vec<String>> = table
        .records()
        .iter()
        .map(|record| record.non_empty_values().into_iter().map(String::from).collect())
        .collect();

    let mut added = 0;
    for row in PADDING_ENTRIES {
        if table.len() >= target {
            break;
        }
        let record = from_row(row);
        let key: Vec<String> = record.non_empty_values().into_iter().map(String::from).collect();
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        if table.push(record) {
            added += 1;
        }
    }
    added
}
