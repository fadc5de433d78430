//! Client for the Google Translate web endpoint.

use crate::lang::Language;
use crate::retry::{with_retry_if, RetryConfig};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("translation request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("unexpected translation response: {0}")]
    BadResponse(String),
}

impl TranslateError {
    /// 429, 5xx and network errors are worth retrying; other 4xx and
    /// malformed responses are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            TranslateError::Status { status, .. } => *status == 429 || *status >= 500,
            TranslateError::Network(_) => true,
            TranslateError::BadResponse(_) => false,
        }
    }
}

/// Translates single words and short phrases between two table columns.
#[derive(Debug, Clone)]
pub struct Translator {
    client: reqwest::Client,
    api_url: String,
    source: Language,
    target: Language,
    retry: RetryConfig,
}

impl Translator {
    /// Indonesian to English translator.
    pub fn new(client: reqwest::Client, api_url: impl Into<String>) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            source: Language::FORMAL_INDONESIAN,
            target: Language::canonical(),
            retry: RetryConfig::translation(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Translate `text`, retrying transient failures.
    ///
    /// Returns the raw translation; callers normalize and validate it.
    pub async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let text = text.trim();
        with_retry_if(
            &self.retry,
            &format!("Translate '{}'", text),
            || self.request(text),
            TranslateError::is_retryable,
        )
        .await
    }

    async fn request(&self, text: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source.iso_code()),
                ("tl", self.target.iso_code()),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| TranslateError::BadResponse(e.to_string()))?;

        parse_response(&body)
    }
}

/// Join the translated segments of a `[[["out", "in", ...], ...], ...]` response.
fn parse_response(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::BadResponse("missing segment list".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(TranslateError::BadResponse(
            "no translated text in response".to_string(),
        ));
    }

    Ok(translated)
}
