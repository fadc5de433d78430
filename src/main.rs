use anyhow::Result;
use nusa_stopwords::{config, pipeline};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables are already set)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nusa_stopwords=info".parse()?),
        )
        .init();

    info!("Starting multilingual stopword pipeline");

    let config = config::Config::from_env()?;
    pipeline::run_all(&config).await?;

    info!("Pipeline finished, outputs are in {:?}", config.data_dir);
    Ok(())
}
