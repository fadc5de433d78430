//! Extract KBBI word lists and enhance the comprehensive table.
//!
//! Usage:
//!   cargo run --bin kbbi
//!
//! Reads multilingual_stopwords_comprehensive.csv from DATA_DIR and writes
//! multilingual_stopwords_enhanced.csv plus three kbbi_*.txt word lists.
//!
//! Optional:
//! - KBBI_URL

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
    let table = pipeline::run_kbbi(&config).await?;

    info!("Enhanced table has {} entries", table.len());
    Ok(())
}
