//! KBBI (Kamus Besar Bahasa Indonesia) dictionary extraction.

use crate::table::{MergeOutcome, StopwordTable};
use crate::vocab::KBBI_ADDITIONAL_STOPWORDS;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::info;

pub const COMMON_WORDS_FILE: &str = "kbbi_common_words.txt";
pub const PARTICLES_AFFIXES_FILE: &str = "kbbi_particles_affixes.txt";
pub const FORMAL_VOCABULARY_FILE: &str = "kbbi_formal_vocabulary.txt";

/// Formal vocabulary is capped to this many words.
pub const FORMAL_VOCABULARY_LIMIT: usize = 200;

const FORMAL_CLASSES: &[&str] = &["Nomina", "Verba", "Adjektiva", "Adverbia"];
const PARTICLE_CLASS: &str = "Partikel";

static FUNCTION_WORD_REGEX: OnceLock<Regex> = OnceLock::new();

fn function_word_regex() -> &'static Regex {
    FUNCTION_WORD_REGEX.get_or_init(|| {
        Regex::new(concat!(
            r"^(?:",
            r"dan|atau|tetapi|namun|karena|sebab|jika|kalau|ketika|saat|waktu",
            r"|di|ke|dari|untuk|dengan|pada|dalam|oleh|atas|bawah|antara",
            r"|ini|itu|yang|adalah|akan|sudah|sedang|masih|belum|tidak|bukan",
            r"|saya|aku|kamu|dia|mereka|kita|kami",
            r"|ada|semua|setiap|beberapa|banyak|sedikit|sangat|agak|cukup",
            r"|lah|kah|pun|nya|mu|ku",
            r"|juga|hanya|saja|pula|bahkan|malah|justru",
            r")$"
        ))
        .unwrap()
    })
}

/// One dictionary entry: the headword and its word class, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbbiEntry {
    pub word: String,
    pub class: Option<String>,
}

/// A parsed KBBI CSV export.
#[derive(Debug, Clone, Default)]
pub struct KbbiLexicon {
    entries: Vec<KbbiEntry>,
}

impl KbbiLexicon {
    /// Parse the CSV text. The headword column is `nama`, falling back to
    /// `kata_dasar`; `kelas` is optional.
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader.headers().context("Failed to read KBBI CSV header")?.clone();
        let word_index = match word_column(&headers) {
            Some(index) => index,
            None => bail!("KBBI CSV has neither a 'nama' nor a 'kata_dasar' column"),
        };
        let class_index = headers.iter().position(|h| h.trim() == "kelas");

        let mut entries = Vec::new();
        for (line, row) in reader.records().enumerate() {
            let row = row.with_context(|| format!("Failed to parse KBBI row {}", line + 2))?;
            let word = row.get(word_index).unwrap_or("").trim();
            if word.is_empty() {
                continue;
            }
            let class = class_index
                .and_then(|i| row.get(i))
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string);
            entries.push(KbbiEntry {
                word: word.to_string(),
                class,
            });
        }

        info!("Parsed {} KBBI entries", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Headwords that are closed-class function words, lowercased.
    pub fn extract_common_words(&self) -> Vec<String> {
        let regex = function_word_regex();
        let words: BTreeSet<String> = self
            .entries
            .iter()
            .map(|entry| entry.word.to_lowercase())
            .filter(|word| regex.is_match(word))
            .collect();

        info!("Extracted {} common words", words.len());
        words.into_iter().collect()
    }

    /// Affix entries (leading `-`) and entries classed as particles.
    pub fn extract_particles_and_affixes(&self) -> Vec<String> {
        let items: BTreeSet<String> = self
            .entries
            .iter()
            .filter(|entry| entry.word.starts_with('-') || entry.has_class(PARTICLE_CLASS))
            .map(|entry| entry.word.clone())
            .collect();

        info!("Extracted {} particles and affixes", items.len());
        items.into_iter().collect()
    }

    /// Short content words, alphabetically, capped at `FORMAL_VOCABULARY_LIMIT`.
    pub fn extract_formal_vocabulary(&self) -> Vec<String> {
        let words: BTreeSet<String> = self
            .entries
            .iter()
            .filter(|entry| FORMAL_CLASSES.iter().any(|class| entry.has_class(class)))
            .filter(|entry| (2..=8).contains(&entry.word.chars().count()))
            .map(|entry| entry.word.to_lowercase())
            .collect();

        info!("Extracted {} formal vocabulary words", words.len());
        words.into_iter().take(FORMAL_VOCABULARY_LIMIT).collect()
    }
}

impl KbbiEntry {
    fn has_class(&self, class: &str) -> bool {
        self.class.as_deref().is_some_and(|c| c.contains(class))
    }
}

fn word_column(headers: &csv::StringRecord) -> Option<usize> {
    ["nama", "kata_dasar"]
        .iter()
        .find_map(|name| headers.iter().position(|h| h.trim() == *name))
}

/// Add the curated KBBI-pattern stopwords as `id = formal_id = word` rows.
pub fn enhance(table: &mut StopwordTable) -> MergeOutcome {
    let outcome = table.merge_new_words(KBBI_ADDITIONAL_STOPWORDS.iter().map(|w| (*w, *w)));
    info!(
        "KBBI enhancement: {} words added, {} already present",
        outcome.added, outcome.skipped
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Language;
    use crate::record::StopwordRecord;

    const SAMPLE: &str = "\
nama,kelas,arti
dan,Konjungsi,penghubung
Yang,Partikel,penanda
-lah,Partikel,penegas
-nya,,sufiks
rumah,Nomina,bangunan
makan,Verba,memasukkan makanan
a,Nomina,huruf
berkepanjangan,Adjektiva,panjang sekali
cepat,\"Adjektiva, Adverbia\",laju
,Nomina,kosong
";

    fn sample() -> KbbiLexicon {
        KbbiLexicon::from_csv(SAMPLE).unwrap()
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_from_csv_skips_empty_words() {
        let lexicon = sample();
        assert_eq!(lexicon.len(), 9);
        assert_eq!(lexicon.entries[3].class, None);
    }

    #[test]
    fn test_from_csv_falls_back_to_kata_dasar() {
        let lexicon = KbbiLexicon::from_csv("kata_dasar\nitu\nmeja\n").unwrap();
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.extract_common_words(), vec!["itu"]);
        assert!(lexicon.extract_formal_vocabulary().is_empty());
    }

    #[test]
    fn test_from_csv_without_word_column_fails() {
        let err = KbbiLexicon::from_csv("lema,kelas\ndan,Konjungsi\n").unwrap_err();
        assert!(err.to_string().contains("kata_dasar"));
    }

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_common_words() {
        assert_eq!(sample().extract_common_words(), vec!["dan", "yang"]);
    }

    #[test]
    fn test_common_words_require_full_match() {
        let lexicon = KbbiLexicon::from_csv("nama\ndaniel\nkedua\nke\n").unwrap();
        assert_eq!(lexicon.extract_common_words(), vec!["ke"]);
    }

    #[test]
    fn test_extract_particles_and_affixes() {
        assert_eq!(
            sample().extract_particles_and_affixes(),
            vec!["-lah", "-nya", "Yang"]
        );
    }

    #[test]
    fn test_extract_formal_vocabulary() {
        assert_eq!(
            sample().extract_formal_vocabulary(),
            vec!["cepat", "makan", "rumah"]
        );
    }

    #[test]
    fn test_formal_vocabulary_is_capped() {
        let mut csv = String::from("nama,kelas\n");
        for i in 0..300 {
            csv.push_str(&format!("kt{:03},Nomina\n", i));
        }
        let words = KbbiLexicon::from_csv(&csv).unwrap().extract_formal_vocabulary();
        assert_eq!(words.len(), FORMAL_VOCABULARY_LIMIT);
        assert_eq!(words[0], "kt000");
    }

    // ==================== Enhancement Tests ====================

    #[test]
    fn test_enhance_skips_existing_words() {
        let mut table = StopwordTable::from_records(vec![
            StopwordRecord::new("and", "dan", "lan", "jeung", "dan"),
            StopwordRecord::indonesian("gw", "beliau"),
        ]);

        let outcome = enhance(&mut table);

        assert!(outcome.added > 0);
        assert!(outcome.skipped >= 2);
        let added = &table.records()[2];
        assert_eq!(added.get(Language::INDONESIAN), added.get(Language::FORMAL_INDONESIAN));
        assert!(!added.has(Language::ENGLISH));
        assert_eq!(
            table
                .records()
                .iter()
                .filter(|r| r.get(Language::INDONESIAN) == Some("beliau"))
                .count(),
            0
        );
    }

    #[test]
    fn test_enhance_is_idempotent() {
        let mut table = StopwordTable::new();
        enhance(&mut table);
        let len = table.len();

        let outcome = enhance(&mut table);

        assert_eq!(outcome.added, 0);
        assert_eq!(table.len(), len);
    }
}
