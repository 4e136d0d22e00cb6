//! Google Translate web endpoint provider
//!
//! Wraps the public `translate_a/single` GET endpoint (`client=gtx`). The
//! endpoint takes the text inline in the query string, so requests are
//! bounded by URL length: anything over a conservative budget is rejected
//! locally with [`TranslateError::RequestTooLarge`] and never sent, which
//! routes it into the size-chunked path instead.
//!
//! No API key is required; the endpoint is rate-limited server-side, which
//! is why chunk calls are paced with a fixed delay.
//!
//! # Example
//!
//! ```ignore
//! use brahmi_translate::mt::{TranslationProvider, GoogleTranslateProvider};
//!
//! let provider = GoogleTranslateProvider::new()?;
//! let result = provider.translate_chunked("Hello, world!", "en", "hi").await?;
//! println!("{}", result);
//! ```

use crate::mt::error::{TranslateError, TranslateResult};
use crate::mt::translator::{TranslationProvider, normalize_tag, validate_tag};
use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate GET provider
///
/// Holds configuration only; safe to share across concurrent requests.
#[derive(Debug, Clone)]
pub struct GoogleTranslateProvider {
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL, injectable for tests
    base_url: String,
}

impl GoogleTranslateProvider {
    /// Conservative ceiling on the full percent-encoded request URL
    const MAX_URL_CHARS: usize = 1800;

    /// Scalar budget per chunk once the single-shot call is rejected
    const CHUNK_SIZE: usize = 200;

    /// Pause between sequential chunk calls
    const CHUNK_DELAY: Duration = Duration::from_millis(500);

    /// Create a provider pointed at the public endpoint.
    pub fn new() -> TranslateResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Create a provider pointed at a different endpoint (tests use this).
    pub fn with_base_url(base_url: String) -> TranslateResult<Self> {
        if base_url.trim().is_empty() {
            return Err(TranslateError::Config("base URL cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TranslateError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Build the request URL, enforcing the URL-length budget locally so
    /// an oversized request is never sent.
    fn build_url(&self, text: &str, from: &str, to: &str) -> TranslateResult<Url> {
        let url = Url::parse_with_params(
            &self.base_url,
            &[
                ("client", "gtx"),
                ("sl", from),
                ("tl", to),
                ("dt", "t"),
                ("q", text),
            ],
        )
        .map_err(|e| TranslateError::Config(format!("invalid base URL: {}", e)))?;

        // The encoded URL is pure ASCII, so len() counts characters.
        let encoded_len = url.as_str().len();
        if encoded_len > Self::MAX_URL_CHARS {
            return Err(TranslateError::RequestTooLarge(encoded_len));
        }

        Ok(url)
    }

    /// Extract the translated text from the endpoint's nested-array body:
    /// the translation is the concatenation of `segment[0]` over every
    /// sub-array in `body[0]`.
    fn extract_translation(body: &serde_json::Value) -> TranslateResult<String> {
        let segments = body
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                TranslateError::MalformedResponse(
                    "missing translation segment array".to_string(),
                )
            })?;

        let mut result = String::new();
        for segment in segments {
            let part = segment.get(0).and_then(|v| v.as_str()).ok_or_else(|| {
                TranslateError::MalformedResponse(
                    "segment without translated text".to_string(),
                )
            })?;
            result.push_str(part);
        }
        Ok(result)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate(&self, text: &str, from: &str, to: &str) -> TranslateResult<String> {
        validate_tag(from)?;
        validate_tag(to)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        let url = self.build_url(text, &normalize_tag(from), &normalize_tag(to))?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(if status.is_client_error() {
                TranslateError::Client {
                    status: status.as_u16(),
                    message,
                }
            } else {
                TranslateError::Server {
                    status: status.as_u16(),
                    message,
                }
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::MalformedResponse(format!("failed to parse response: {}", e))
        })?;

        Self::extract_translation(&body)
    }

    fn name(&self) -> &str {
        "Google Translate"
    }

    fn chunk_size(&self) -> usize {
        Self::CHUNK_SIZE
    }

    fn chunk_delay(&self) -> Duration {
        Self::CHUNK_DELAY
    }
}
