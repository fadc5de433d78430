//! Integrate colloquial Indonesian stopwords into the enhanced table.
//!
//! Usage:
//!   cargo run --bin colloquial
//!
//! Reads multilingual_stopwords_enhanced.csv from DATA_DIR and writes
//! multilingual_stopwords_final.csv, the candidate CSVs and two summaries.
//!
//! Optional:
//! - COLLOQUIAL_URL

use anyhow::Result;
use nusa_stopwords::{config::Config, pipeline};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nusa_stopwords=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let table = pipeline::run_colloquial(&config).await?;

    info!("Final table has {} entries", table.len());
    Ok(())
}
