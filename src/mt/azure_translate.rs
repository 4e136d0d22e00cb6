//! Microsoft Azure Translator provider
//!
//! Wraps the Azure Translator v3 REST API. Unlike the GET-shaped Google
//! endpoint the text travels in a JSON POST body, so much longer requests
//! fit in a single call; the local size budget here exists only to keep
//! one request comfortably under the service's document limits.
//!
//! # Authentication
//!
//! The provider loads its configuration from environment variables:
//!
//! - `AZURE_TRANSLATE_KEY` — subscription key (required)
//! - `AZURE_TRANSLATE_ENDPOINT` — service endpoint (optional)
//! - `AZURE_TRANSLATE_REGION` — resource region (optional)
//!
//! # Example
//!
//! ```ignore
//! use brahmi_translate::mt::{TranslationProvider, AzureTranslateProvider};
//!
//! let provider = AzureTranslateProvider::from_env()?;
//! let result = provider.translate_chunked("Hello, world!", "en", "hi").await?;
//! println!("{}", result);
//! ```

use crate::mt::error::{TranslateError, TranslateResult};
use crate::mt::translator::{TranslationProvider, normalize_tag, validate_tag};
use async_trait::async_trait;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";
const DEFAULT_REGION: &str = "global";
const API_VERSION: &str = "3.0";

/// One element of the request body: `[{"text": "..."}]`.
#[derive(Serialize)]
struct RequestItem<'a> {
    text: &'a str,
}

/// One element of the response body:
/// `[{"translations": [{"text": "...", "to": "..."}]}]`.
#[derive(Deserialize)]
struct ResponseItem {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
    to: String,
}

/// Azure Translator v3 provider
///
/// Holds configuration only; safe to share across concurrent requests.
#[derive(Clone)]
pub struct AzureTranslateProvider {
    /// Subscription key for authentication
    subscription_key: String,
    /// Service endpoint
    endpoint: String,
    /// Resource region, sent in the subscription-region header
    region: String,
    /// HTTP client for async requests
    client: reqwest::Client,
}

impl AzureTranslateProvider {
    /// Conservative scalar budget for a single request
    const MAX_CHARS_PER_REQUEST: usize = 5_000;

    /// Scalar budget per chunk once the single-shot call is rejected
    const CHUNK_SIZE: usize = 1500;

    /// Pause between sequential chunk calls
    const CHUNK_DELAY: Duration = Duration::from_millis(100);

    /// Create a provider with explicit configuration.
    pub fn new(subscription_key: String, endpoint: String, region: String) -> TranslateResult<Self> {
        if subscription_key.trim().is_empty() {
            return Err(TranslateError::Config(
                "subscription key cannot be empty".to_string(),
            ));
        }
        if endpoint.trim().is_empty() {
            return Err(TranslateError::Config("endpoint cannot be empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| TranslateError::Network(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            subscription_key,
            endpoint,
            client,
            region,
        })
    }

    /// Create a provider from the `AZURE_TRANSLATE_*` environment
    /// variables. Only the key is required; endpoint and region default to
    /// the public service.
    pub fn from_env() -> TranslateResult<Self> {
        let subscription_key = std::env::var("AZURE_TRANSLATE_KEY").map_err(|_| {
            TranslateError::Config("AZURE_TRANSLATE_KEY environment variable not set".to_string())
        })?;
        let endpoint = std::env::var("AZURE_TRANSLATE_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let region =
            std::env::var("AZURE_TRANSLATE_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

        Self::new(subscription_key, endpoint, region)
    }

    fn build_url(&self, from: &str, to: &str) -> TranslateResult<Url> {
        Url::parse_with_params(
            &format!("{}/translate", self.endpoint.trim_end_matches('/')),
            &[("api-version", API_VERSION), ("from", from), ("to", to)],
        )
        .map_err(|e| TranslateError::Config(format!("invalid endpoint: {}", e)))
    }
}

impl std::fmt::Debug for AzureTranslateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureTranslateProvider")
            .field("subscription_key", &"***")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .finish()
    }
}

#[async_trait]
impl TranslationProvider for AzureTranslateProvider {
    async fn translate(&self, text: &str, from: &str, to: &str) -> TranslateResult<String> {
        validate_tag(from)?;
        validate_tag(to)?;

        if text.is_empty() {
            return Ok(String::new());
        }

        let char_count = text.chars().count();
        if char_count > Self::MAX_CHARS_PER_REQUEST {
            return Err(TranslateError::RequestTooLarge(char_count));
        }

        let url = self.build_url(&normalize_tag(from), &normalize_tag(to))?;
        let response = self
            .client
            .post(url)
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .header("Ocp-Apim-Subscription-Region", &self.region)
            .header("X-ClientTraceId", Uuid::new_v4().to_string())
            .json(&[RequestItem { text }])
            .send()
            .await?;

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

        let body: Vec<ResponseItem> = response.json().await.map_err(|e| {
            TranslateError::MalformedResponse(format!("failed to parse response: {}", e))
        })?;

        let translation = body
            .into_iter()
            .next()
            .and_then(|item| item.translations.into_iter().next())
            .ok_or_else(|| {
                TranslateError::MalformedResponse("response contains no translation".to_string())
            })?;

        debug!("Azure translated {} characters into {}", char_count, translation.to);
        Ok(translation.text)
    }

    fn name(&self) -> &str {
        "Azure Translate"
    }

    fn chunk_size(&self) -> usize {
        Self::CHUNK_SIZE
    }

    fn chunk_delay(&self) -> Duration {
        Self::CHUNK_DELAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_provider() -> AzureTranslateProvider {
        AzureTranslateProvider::new(
            "test-key".to_string(),
            DEFAULT_ENDPOINT.to_string(),
            "centralindia".to_string(),
        )
        .unwrap()
    }

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_valid_config() {
        let provider = test_provider();
        assert_eq!(provider.name(), "Azure Translate");
    }

    #[test]
    fn test_new_with_empty_key() {
        let result = AzureTranslateProvider::new(
            "  ".to_string(),
            DEFAULT_ENDPOINT.to_string(),
            DEFAULT_REGION.to_string(),
        );
        match result {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("empty")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_env_without_key() {
        unsafe {
            std::env::remove_var("AZURE_TRANSLATE_KEY");
        }
        match AzureTranslateProvider::from_env() {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("not set")),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    // ========== Request Shape Tests ==========

    #[test]
    fn test_build_url_shape() {
        let provider = test_provider();
        let url = provider.build_url("en", "hi").unwrap();
        let s = url.as_str();
        assert!(s.starts_with("https://api.cognitive.microsofttranslator.com/translate"));
        assert!(s.contains("api-version=3.0"));
        assert!(s.contains("from=en"));
        assert!(s.contains("to=hi"));
    }

    #[test]
    fn test_build_url_trims_trailing_slash() {
        let provider = AzureTranslateProvider::new(
            "test-key".to_string(),
            "https://example.com/".to_string(),
            DEFAULT_REGION.to_string(),
        )
        .unwrap();
        let url = provider.build_url("en", "hi").unwrap();
        assert!(url.as_str().starts_with("https://example.com/translate?"));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&[RequestItem { text: "hello" }]).unwrap();
        assert_eq!(body, r#"[{"text":"hello"}]"#);
    }

    #[test]
    fn test_response_body_shape() {
        let raw = r#"[{"translations":[{"text":"नमस्ते","to":"hi"}]}]"#;
        let body: Vec<ResponseItem> = serde_json::from_str(raw).unwrap();
        assert_eq!(body[0].translations[0].text, "नमस्ते");
        assert_eq!(body[0].translations[0].to, "hi");
    }

    // ========== Validation Tests ==========

    #[tokio::test]
    async fn test_translate_empty_text() {
        let provider = test_provider();
        let result = provider.translate("", "en", "hi").await.unwrap();
        assert_eq!(result, "");
    }

    #[tokio::test]
    async fn test_translate_oversized_text_rejected_locally() {
        let provider = test_provider();
        let text = "x".repeat(AzureTranslateProvider::MAX_CHARS_PER_REQUEST + 1);
        match provider.translate(&text, "en", "hi").await {
            Err(TranslateError::RequestTooLarge(len)) => {
                assert_eq!(len, AzureTranslateProvider::MAX_CHARS_PER_REQUEST + 1)
            }
            other => panic!("expected RequestTooLarge, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_translate_invalid_tag() {
        let provider = test_provider();
        let result = provider.translate("hello", "en", "hi!").await;
        assert!(matches!(
            result,
            Err(TranslateError::InvalidLanguageTag(_))
        ));
    }

    // ========== Debug Implementation Test ==========

    #[test]
    fn test_debug_masks_subscription_key() {
        let provider = test_provider();
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("test-key"));
    }

    // ========== Integration Tests (require real credentials) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test -- --ignored
    async fn test_real_api_single_translation() {
        if std::env::var("AZURE_TRANSLATE_KEY").is_err() {
            eprintln!("Skipping: AZURE_TRANSLATE_KEY not set");
            return;
        }

        let provider = AzureTranslateProvider::from_env().unwrap();
        let result = provider.translate("Hello", "en", "hi").await.unwrap();
        println!("Translation: Hello → {}", result);
        assert!(!result.is_empty());
    }
}
