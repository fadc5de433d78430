use anyhow::{Context, Result};
use std::path::PathBuf;

pub const DEFAULT_KBBI_URL: &str =
    "https://raw.githubusercontent.com/aryakdaniswara/kbbi-dataset-kbbi-v/refs/heads/main/csv/kbbi_v.csv";
pub const DEFAULT_COLLOQUIAL_URL: &str = "https://raw.githubusercontent.com/onpilot/sentimen-bahasa/refs/heads/master/kamus/nasalsabila_kamus-alay/colloquial-indonesian-lexicon.csv";
pub const DEFAULT_NUSAX_BASE_URL: &str =
    "https://raw.githubusercontent.com/IndoNLP/nusax/main/datasets/sentiment";
pub const DEFAULT_TRANSLATE_API_URL: &str = "https://translate.googleapis.com/translate_a/single";
pub const DEFAULT_TARGET_ENTRIES: usize = 1500;

#[derive(Debug, Clone)]
pub struct Config {
    // Storage
    pub data_dir: PathBuf,

    // Sources
    pub kbbi_url: String,
    pub colloquial_url: String,
    /// Empty disables the NusaX corpus step
    pub nusax_base_url: String,

    // Translation
    pub translate_api_url: String,
    pub translate_fallback: bool,
    pub translate_batch_size: usize,
    pub translate_delay_ms: u64,
    pub translate_batch_delay_ms: u64,

    // Generation
    pub target_entries: usize,

    // Network
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),

            kbbi_url: std::env::var("KBBI_URL").unwrap_or_else(|_| DEFAULT_KBBI_URL.to_string()),
            colloquial_url: std::env::var("COLLOQUIAL_URL")
                .unwrap_or_else(|_| DEFAULT_COLLOQUIAL_URL.to_string()),
            nusax_base_url: std::env::var("NUSAX_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_NUSAX_BASE_URL.to_string()),

            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),
            translate_fallback: match std::env::var("TRANSLATE_FALLBACK") {
                Ok(v) => parse_bool(&v).context("TRANSLATE_FALLBACK must be true or false")?,
                Err(_) => true,
            },
            translate_batch_size: std::env::var("TRANSLATE_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| n > 0)
                .unwrap_or(20),
            translate_delay_ms: std::env::var("TRANSLATE_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            translate_batch_delay_ms: std::env::var("TRANSLATE_BATCH_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),

            target_entries: std::env::var("TARGET_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TARGET_ENTRIES),

            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }

    /// Build the shared HTTP client used by downloads and the translator
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(self.http_timeout_secs))
            .user_agent(concat!("nusa-stopwords/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")
    }

    pub fn data_path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    pub fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create data directory {:?}", self.data_dir))
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean value: '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "DATA_DIR",
        "KBBI_URL",
        "COLLOQUIAL_URL",
        "NUSAX_BASE_URL",
        "TRANSLATE_API_URL",
        "TRANSLATE_FALLBACK",
        "TRANSLATE_BATCH_SIZE",
        "TRANSLATE_DELAY_MS",
        "TRANSLATE_BATCH_DELAY_MS",
        "TARGET_ENTRIES",
        "HTTP_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults should load");

        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.kbbi_url, DEFAULT_KBBI_URL);
        assert_eq!(config.colloquial_url, DEFAULT_COLLOQUIAL_URL);
        assert_eq!(config.nusax_base_url, DEFAULT_NUSAX_BASE_URL);
        assert_eq!(config.translate_api_url, DEFAULT_TRANSLATE_API_URL);
        assert!(config.translate_fallback);
        assert_eq!(config.translate_batch_size, 20);
        assert_eq!(config.translate_delay_ms, 300);
        assert_eq!(config.translate_batch_delay_ms, 3000);
        assert_eq!(config.target_entries, DEFAULT_TARGET_ENTRIES);
        assert_eq!(config.http_timeout_secs, 30);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("DATA_DIR", "/tmp/stopwords");
        std::env::set_var("TRANSLATE_FALLBACK", "false");
        std::env::set_var("TRANSLATE_BATCH_SIZE", "50");
        std::env::set_var("TARGET_ENTRIES", "200");
        std::env::set_var("NUSAX_BASE_URL", "");

        let config = Config::from_env().expect("overrides should load");
        clear_env();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/stopwords"));
        assert!(!config.translate_fallback);
        assert_eq!(config.translate_batch_size, 50);
        assert_eq!(config.target_entries, 200);
        assert!(config.nusax_base_url.is_empty());
    }

    #[test]
    #[serial]
    fn test_zero_batch_size_falls_back_to_default() {
        clear_env();
        std::env::set_var("TRANSLATE_BATCH_SIZE", "0");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.translate_batch_size, 20);
    }

    #[test]
    #[serial]
    fn test_invalid_fallback_flag_is_an_error() {
        clear_env();
        std::env::set_var("TRANSLATE_FALLBACK", "maybe");
        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
    }

    #[test]
    fn test_parse_bool_variants() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" yes ").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("").is_err());
    }

    #[test]
    fn test_data_path_joins_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("out"),
            kbbi_url: String::new(),
            colloquial_url: String::new(),
            nusax_base_url: String::new(),
            translate_api_url: String::new(),
            translate_fallback: false,
            translate_batch_size: 1,
            translate_delay_ms: 0,
            translate_batch_delay_ms: 0,
            target_entries: 0,
            http_timeout_secs: 1,
        };
        assert_eq!(
            config.data_path("final.csv"),
            PathBuf::from("out").join("final.csv")
        );
    }
}
