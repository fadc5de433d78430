//! Classify stopword table values and split out likely non-stopwords.
//!
//! Usage:
//!   cargo run --bin detect                 # DATA_DIR/multilingual_stopwords_translated.csv
//!   cargo run --bin detect -- path/to.csv
//!
//! Writes stopword_analysis_report.txt to DATA_DIR. When rows are flagged,
//! also writes non_stopwords.csv to DATA_DIR and <input>_cleaned.csv next to
//! the input.

use anyhow::Result;
use clap::Parser;
use nusa_stopwords::{config::Config, pipeline};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "detect")]
#[command(about = "Detect non-stopwords in a multilingual stopword CSV")]
struct Args {
    /// Input CSV (defaults to the translated table)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nusa_stopwords=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let outcome = pipeline::run_detect(&config, args.input.as_deref())?;

    info!(
        "Stopword percentage {:.1}% ({})",
        outcome.analysis.stopword_percentage,
        outcome.analysis.grade.description()
    );
    match &outcome.cleaned_path {
        Some(path) => info!("Moved {} rows, clean table saved to {:?}", outcome.moved_rows, path),
        None => info!("No rows flagged"),
    }
    Ok(())
}
