//! Generate the comprehensive multilingual stopword table.
//!
//! Usage:
//!   cargo run --bin generate
//!
//! Optional:
//! - DATA_DIR (defaults to data)
//! - NUSAX_BASE_URL (empty disables the corpus step)
//! - TARGET_ENTRIES (defaults to 1500)

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
    let table = pipeline::run_generate(&config).await?;

    info!("Generated {} entries", table.len());
    Ok(())
}
