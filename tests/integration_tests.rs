//! Integration tests for the stopword pipeline
//!
//! Every step runs against a temporary data directory, with the lexicon,
//! corpus and translation endpoints served by a mock server.

use std::path::Path;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, path_regex, query_param},
    Mock, MockServer, ResponseTemplate,
};

use nusa_stopwords::{
    config::Config,
    generate::COMPREHENSIVE_FILE,
    lang::Language,
    pipeline::{self, TranslateRequest, ENHANCED_FILE, FINAL_FILE, TRANSLATED_FILE},
    record::StopwordRecord,
    table::StopwordTable,
    translate::FillScope,
};

// ==================== Test Helpers ====================

const KBBI_CSV: &str = "\
nama,kelas,arti
dan,Konjungsi,penghubung
-lah,Partikel,penegas
rumah,Nomina,bangunan
";

const COLLOQUIAL_CSV: &str = "\
slang,formal,In-dictionary,fact,category1
gw,saya,0,,
bgt,banget,0,,
zzq,apa,0,,
ngab,abang,0,,
";

const NUSAX_CSV: &str = "id,text,label\n1,ora ora ora ora yang yang yang yang,neutral\n";

/// Create a test config pointing every endpoint at the mock server
fn create_test_config(server_url: &str, temp_dir: &TempDir) -> Config {
    Config {
        data_dir: temp_dir.path().join("data"),
        kbbi_url: format!("{}/kbbi.csv", server_url),
        colloquial_url: format!("{}/colloquial.csv", server_url),
        nusax_base_url: format!("{}/nusax", server_url),
        translate_api_url: format!("{}/translate_a/single", server_url),
        translate_fallback: false,
        translate_batch_size: 20,
        translate_delay_ms: 0,
        translate_batch_delay_ms: 0,
        target_entries: 0,
        http_timeout_secs: 5,
    }
}

async fn mount_sources(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/kbbi.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(KBBI_CSV))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/colloquial.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(COLLOQUIAL_CSV))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/nusax/[a-z]+/(train|valid|test)\.csv$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(NUSAX_CSV))
        .mount(server)
        .await;
}

fn write_table(path: &Path, records: Vec<StopwordRecord>) {
    StopwordTable::from_records(records)
        .save_csv(path)
        .expect("Failed to write table");
}

fn find_by<'a>(table: &'a StopwordTable, language: Language, value: &str) -> Option<&'a StopwordRecord> {
    table.records().iter().find(|r| r.get(language) == Some(value))
}

// ==================== Full Pipeline Tests ====================

#[tokio::test]
async fn test_full_pipeline_with_dictionary_translation() {
    let server = MockServer::start().await;
    mount_sources(&server).await;
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config(&server.uri(), &temp_dir);

    pipeline::run_all(&config).await.unwrap();

    for file in [
        COMPREHENSIVE_FILE,
        ENHANCED_FILE,
        FINAL_FILE,
        TRANSLATED_FILE,
        "kbbi_common_words.txt",
        "kbbi_particles_affixes.txt",
        "kbbi_formal_vocabulary.txt",
        "colloquial_stopword_candidates.csv",
        "colloquial_pronouns.csv",
        "colloquial_analysis_summary.txt",
        "colloquial_integration_summary.txt",
        "translation_summary.txt",
        "non_stopwords.csv",
        "stopword_analysis_report.txt",
        "multilingual_stopwords_translated_cleaned.csv",
    ] {
        assert!(config.data_path(file).exists(), "missing {}", file);
    }

    let common = std::fs::read_to_string(config.data_path("kbbi_common_words.txt")).unwrap();
    assert_eq!(common, "dan\n");

    let comprehensive = StopwordTable::load_csv(&config.data_path(COMPREHENSIVE_FILE)).unwrap();
    // English corpus words land in the English column
    assert!(find_by(&comprehensive, Language::ENGLISH, "ora").is_some());

    let enhanced = StopwordTable::load_csv(&config.data_path(ENHANCED_FILE)).unwrap();
    assert!(enhanced.len() > comprehensive.len());
    assert!(find_by(&enhanced, Language::INDONESIAN, "beliau").is_some());

    let final_table = StopwordTable::load_csv(&config.data_path(FINAL_FILE)).unwrap();
    let zzq = find_by(&final_table, Language::INDONESIAN, "zzq").unwrap();
    assert_eq!(zzq.get(Language::FORMAL_INDONESIAN), Some("apa"));
    assert!(find_by(&final_table, Language::INDONESIAN, "ngab").is_none());

    let translated = StopwordTable::load_csv(&config.data_path(TRANSLATED_FILE)).unwrap();
    assert_eq!(translated.len(), final_table.len());
    assert!(translated.english_coverage() > final_table.english_coverage());
    // "apa" is in the dictionary
    let zzq = find_by(&translated, Language::INDONESIAN, "zzq").unwrap();
    assert_eq!(zzq.get(Language::ENGLISH), Some("what"));

    let report = std::fs::read_to_string(config.data_path("stopword_analysis_report.txt")).unwrap();
    assert!(report.contains("STOPWORD ANALYSIS REPORT"));
    assert!(report.contains("Generated: "));
}

#[tokio::test]
async fn test_generate_without_corpus_pads_to_target() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config("http://127.0.0.1:9", &temp_dir);
    config.nusax_base_url = String::new();

    let base = pipeline::run_generate(&config).await.unwrap().len();
    config.target_entries = base + 3;
    let padded = pipeline::run_generate(&config).await.unwrap();

    assert_eq!(padded.len(), base + 3);
    let saved = StopwordTable::load_csv(&config.data_path(COMPREHENSIVE_FILE)).unwrap();
    assert_eq!(saved.len(), base + 3);
}

// ==================== Translation Tests ====================

#[tokio::test]
async fn test_translate_batch_uses_api_for_dictionary_misses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("sl", "id"))
        .and(query_param("tl", "en"))
        .and(query_param("q", "qwxv"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([[["hello", "qwxv", null, null, 1]], null, "id"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&server.uri(), &temp_dir);
    config.translate_fallback = true;
    config.ensure_data_dir().unwrap();
    write_table(
        &config.data_path(FINAL_FILE),
        vec![
            StopwordRecord::new("and", "dan", "lan", "jeung", "dan"),
            StopwordRecord::indonesian("qwxv", "qwxv"),
            StopwordRecord::indonesian("gw", "saya"),
        ],
    );

    let request = TranslateRequest {
        scope: FillScope::Batch { offset: 0, size: 1 },
        ..Default::default()
    };
    let outcome = pipeline::run_translate(&config, &request).await.unwrap();

    assert_eq!(outcome.total_candidates, 2);
    assert_eq!(outcome.processed, 1);
    assert_eq!(outcome.next_offset, Some(1));
    assert_eq!(outcome.metrics.api_calls, 1);

    let output = config.data_path("multilingual_stopwords_batch_0_1.csv");
    let table = StopwordTable::load_csv(&output).unwrap();
    assert_eq!(table.records()[1].get(Language::ENGLISH), Some("hello"));
    // Outside the batch
    assert!(!table.records()[2].has(Language::ENGLISH));

    let summary = std::fs::read_to_string(config.data_path("translation_summary.txt")).unwrap();
    assert!(summary.contains("TRANSLATION SUMMARY"));
    assert!(summary.contains("qwxv -> hello"));
}

#[tokio::test]
async fn test_translate_dictionary_only_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let mut config = create_test_config(&server.uri(), &temp_dir);
    config.translate_fallback = true;
    config.ensure_data_dir().unwrap();
    write_table(
        &config.data_path(FINAL_FILE),
        vec![
            StopwordRecord::indonesian("qwxv", "qwxv"),
            StopwordRecord::indonesian("gw", "saya"),
        ],
    );

    let request = TranslateRequest {
        dictionary_only: true,
        ..Default::default()
    };
    let outcome = pipeline::run_translate(&config, &request).await.unwrap();

    assert_eq!(outcome.metrics.dictionary_hits, 1);
    assert_eq!(outcome.metrics.skipped, 1);
    let table = StopwordTable::load_csv(&config.data_path(TRANSLATED_FILE)).unwrap();
    assert_eq!(table.records()[1].get(Language::ENGLISH), Some("i"));
}

// ==================== Detection Tests ====================

#[test]
fn test_detect_separates_custom_input() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config("http://127.0.0.1:9", &temp_dir);
    let input = temp_dir.path().join("mine.csv");
    write_table(
        &input,
        vec![
            StopwordRecord::new("the", "yang", "", "", "yang"),
            StopwordRecord::new("computer", "komputer", "", "", "komputer"),
        ],
    );

    let outcome = pipeline::run_detect(&config, Some(&input)).unwrap();

    assert_eq!(outcome.moved_rows, 1);
    assert!(outcome.non_stopwords.contains(&"komputer".to_string()));
    let cleaned_path = outcome.cleaned_path.unwrap();
    assert_eq!(cleaned_path, temp_dir.path().join("mine_cleaned.csv"));

    let cleaned = StopwordTable::load_csv(&cleaned_path).unwrap();
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned.records()[0].get(Language::ENGLISH), Some("the"));

    let removed = StopwordTable::load_csv(&config.data_path("non_stopwords.csv")).unwrap();
    assert_eq!(removed.records()[0].get(Language::INDONESIAN), Some("komputer"));
}

#[test]
fn test_detect_without_findings_writes_only_report() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config("http://127.0.0.1:9", &temp_dir);
    let input = temp_dir.path().join("clean.csv");
    write_table(
        &input,
        vec![
            StopwordRecord::new("the", "yang", "", "", "yang"),
            StopwordRecord::indonesian("gw", "saya"),
        ],
    );

    let outcome = pipeline::run_detect(&config, Some(&input)).unwrap();

    assert_eq!(outcome.moved_rows, 0);
    assert!(outcome.non_stopwords.is_empty());
    assert_eq!(outcome.cleaned_path, None);
    assert!(!config.data_path("non_stopwords.csv").exists());
    assert!(!temp_dir.path().join("clean_cleaned.csv").exists());

    let report = std::fs::read_to_string(config.data_path("stopword_analysis_report.txt")).unwrap();
    assert!(report.contains("No rows flagged"));
}

// ==================== Error Handling Tests ====================

#[tokio::test]
async fn test_step_without_input_fails_with_context() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config("http://127.0.0.1:9", &temp_dir);

    let err = pipeline::run_kbbi(&config).await.unwrap_err();

    assert!(format!("{:#}", err).contains("run the previous step first"));
}

#[test]
fn test_detect_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = create_test_config("http://127.0.0.1:9", &temp_dir);

    let result = pipeline::run_detect(&config, Some(&temp_dir.path().join("absent.csv")));

    assert!(result.is_err());
}
