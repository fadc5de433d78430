//! External lexicons: the KBBI dictionary and the colloquial Indonesian lexicon.

pub mod colloquial;
pub mod kbbi;

use crate::retry::{with_retry, RetryConfig};
use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::info;

/// Download a text resource with the default download retry policy.
pub async fn download_text(client: &reqwest::Client, url: &str, name: &str) -> Result<String> {
    download_text_with(client, url, name, &RetryConfig::download()).await
}

pub async fn download_text_with(
    client: &reqwest::Client,
    url: &str,
    name: &str,
    retry: &RetryConfig,
) -> Result<String> {
    info!("Downloading {} from {}", name, url);

    let body = with_retry(retry, &format!("Download {}", name), || async {
        let response = client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to request {}", name))?;

        let status = response.status();
        if !status.is_success() {
            bail!("{} download failed with status {}", name, status);
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read {} response body", name))
    })
    .await?;

    info!("Downloaded {} ({} bytes)", name, body.len());
    Ok(body)
}

/// Write one word per line.
pub fn write_word_list(path: &Path, words: &[String]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let mut contents = words.join("\n");
    if !contents.is_empty() {
        contents.push('\n');
    }
    std::fs::write(path, contents).with_context(|| format!("Failed to write {:?}", path))
}
