//! Fill empty English values in the final stopword table.
//!
//! Usage:
//!   cargo run --bin translate                      # every candidate
//!   cargo run --bin translate -- 50 100            # candidates 100..150
//!   cargo run --bin translate -- --limit 20        # first 20 candidates
//!   cargo run --bin translate -- --dictionary-only # no API calls
//!
//! Optional:
//! - TRANSLATE_API_URL
//! - TRANSLATE_FALLBACK (defaults to true)
//! - TRANSLATE_DELAY_MS (defaults to 300)
//! - TRANSLATE_BATCH_DELAY_MS (defaults to 3000)

use anyhow::Result;
use clap::Parser;
use nusa_stopwords::config::Config;
use nusa_stopwords::pipeline::{self, TranslateRequest};
use nusa_stopwords::translate::FillScope;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "translate")]
#[command(about = "Translate missing English values from Indonesian")]
struct Args {
    /// Number of candidates to process in this batch
    batch_size: Option<usize>,

    /// Candidate offset to start from
    #[arg(requires = "batch_size")]
    offset: Option<usize>,

    /// Only use the built-in dictionary
    #[arg(long)]
    dictionary_only: bool,

    /// Skip long or English-looking sources
    #[arg(long)]
    conservative: bool,

    /// Process only the first N candidates
    #[arg(long, value_name = "N", conflicts_with = "batch_size")]
    limit: Option<usize>,
}

impl Args {
    fn scope(&self) -> FillScope {
        match (self.batch_size, self.limit) {
            (Some(size), _) => FillScope::Batch {
                offset: self.offset.unwrap_or(0),
                size,
            },
            (None, Some(limit)) => FillScope::Limit(limit),
            (None, None) => FillScope::All,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nusa_stopwords=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let request = TranslateRequest {
        scope: args.scope(),
        dictionary_only: args.dictionary_only,
        conservative: args.conservative,
    };
    info!("Translation scope: {:?}", request.scope);

    let outcome = pipeline::run_translate(&config, &request).await?;
    info!("Metrics: {}", serde_json::to_string(&outcome.metrics)?);

    match (outcome.next_offset, request.scope) {
        (Some(next), FillScope::Batch { size, .. }) => {
            info!("Next batch: cargo run --bin translate -- {} {}", size, next);
        }
        _ => info!("All selected candidates processed"),
    }

    Ok(())
}
