//! Translation orchestration
//!
//! [`TranslationService`] holds an ordered (primary, fallback) provider
//! pair and implements the two policies that make the synthetic `brahmi`
//! endpoint work:
//!
//! - **Pivot routing**: no MT provider understands Brahmi, so every
//!   request touching it goes through Hindi. Text already written in a
//!   Devanagari-based language converts directly with no network call.
//! - **Fallback**: a 4xx rejection from the primary provider retries on
//!   the fallback provider; transient failures (network, 5xx) propagate
//!   without fallback.
//!
//! The service is constructor-injected and holds no mutable state, so one
//! instance serves any number of concurrent requests.

use crate::chunk::segment_by_language;
use crate::detect::{UNKNOWN_TAG, language_name};
use crate::mt::error::{TranslateError, TranslateResult};
use crate::mt::translator::{TranslationProvider, normalize_tag, validate_tag};
use crate::script::{to_brahmi, to_devanagari};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Synthetic tag denoting the Brahmi script rather than a natural
/// language.
pub const BRAHMI_TAG: &str = "brahmi";

/// Languages written in Devanagari: these convert to and from Brahmi
/// without a provider call.
const DEVANAGARI_LANGS: [&str; 4] = ["hi", "sa", "mr", "ne"];

/// Pivot language for Brahmi requests that need a provider.
const PIVOT_LANG: &str = "hi";

fn is_devanagari_based(tag: &str) -> bool {
    DEVANAGARI_LANGS.contains(&tag)
}

/// Orchestrator over an ordered provider pair.
pub struct TranslationService {
    primary: Arc<dyn TranslationProvider>,
    fallback: Option<Arc<dyn TranslationProvider>>,
}

impl TranslationService {
    /// Create a service with a single provider and no fallback.
    pub fn new(primary: Arc<dyn TranslationProvider>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    /// Create a service with a primary and a fallback provider.
    pub fn with_fallback(
        primary: Arc<dyn TranslationProvider>,
        fallback: Arc<dyn TranslationProvider>,
    ) -> Self {
        Self {
            primary,
            fallback: Some(fallback),
        }
    }

    /// Describe the configured providers, for logs and CLI output.
    pub fn provider_info(&self) -> String {
        match &self.fallback {
            Some(fallback) => format!(
                "Primary: {}, Fallback: {}",
                self.primary.name(),
                fallback.name()
            ),
            None => format!("Primary: {}", self.primary.name()),
        }
    }

    /// Translate `text` from `from` to `to`.
    ///
    /// Tags are lowercase two/three-letter codes or the literal
    /// [`BRAHMI_TAG`]. Empty or whitespace-only input returns an empty
    /// string without a network call.
    ///
    /// Routing:
    ///
    /// | source | target | action |
    /// |---|---|---|
    /// | brahmi | brahmi | identity, no provider call |
    /// | brahmi | hi/sa/mr/ne | convert to Devanagari, no provider call |
    /// | brahmi | other | convert to Devanagari, then provider hi → target |
    /// | hi/sa/mr/ne | brahmi | convert to Brahmi, no provider call |
    /// | other | brahmi | provider source → hi, then convert to Brahmi |
    /// | neither | — | provider source → target |
    ///
    /// # Example
    ///
    /// ```ignore
    /// let service = TranslationService::new(Arc::new(GoogleTranslateProvider::new()?));
    /// let brahmi = service.translate("नमस्कार", "hi", "brahmi").await?;
    /// assert_eq!(brahmi, "𑀦𑀫𑀲𑁆𑀓𑀸𑀭");
    /// ```
    pub async fn translate(&self, text: &str, from: &str, to: &str) -> TranslateResult<String> {
        validate_tag(from)?;
        validate_tag(to)?;

        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let from = normalize_tag(from);
        let to = normalize_tag(to);

        if from == BRAHMI_TAG {
            if to == BRAHMI_TAG {
                return Ok(text.to_string());
            }
            let devanagari = to_devanagari(text);
            if is_devanagari_based(&to) {
                return Ok(devanagari);
            }
            return self.dispatch(&devanagari, PIVOT_LANG, &to).await;
        }

        if to == BRAHMI_TAG {
            if is_devanagari_based(&from) {
                return Ok(to_brahmi(text));
            }
            let hindi = self.dispatch(text, &from, PIVOT_LANG).await?;
            return Ok(to_brahmi(&hindi));
        }

        self.dispatch(text, &from, &to).await
    }

    /// Translate mixed-script text run by run.
    ///
    /// The text is segmented into language-homogeneous runs; runs already
    /// in the target tag pass through untouched, as do runs with no
    /// detectable script. The translated runs are concatenated in order
    /// with no separator, since each run keeps its own whitespace.
    pub async fn translate_mixed(&self, text: &str, target: &str) -> TranslateResult<String> {
        validate_tag(target)?;

        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let target = normalize_tag(target);
        let mut translated = Vec::new();
        for chunk in segment_by_language(text) {
            if chunk.language == target || chunk.language == UNKNOWN_TAG {
                translated.push(chunk.text);
            } else {
                translated.push(self.translate(&chunk.text, chunk.language, &target).await?);
            }
        }
        Ok(translated.concat())
    }

    /// Primary provider call with 4xx-only fallback.
    async fn dispatch(&self, text: &str, from: &str, to: &str) -> TranslateResult<String> {
        debug!("translating {} → {} with {}", from, to, self.primary.name());
        let primary_err = match self.primary.translate_chunked(text, from, to).await {
            Ok(result) => return Ok(result),
            Err(err) if err.is_fallback_trigger() => err,
            Err(err) => return Err(err),
        };

        let Some(fallback) = &self.fallback else {
            return Err(primary_err);
        };

        warn!(
            "{} rejected the request ({}), retrying with {}",
            self.primary.name(),
            primary_err,
            fallback.name()
        );
        fallback
            .translate_chunked(text, from, to)
            .await
            .map_err(|fallback_err| TranslateError::AllProvidersFailed {
                primary: self.primary.name().to_string(),
                fallback: fallback.name().to_string(),
                message: format!("{}; {}", primary_err, fallback_err),
            })
    }
}

impl std::fmt::Debug for TranslationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationService")
            .field("primary", &self.primary.name())
            .field("fallback", &self.fallback.as_ref().map(|p| p.name()))
            .finish()
    }
}

/// Per-language significant character totals over the language
/// segmentation of `text`, keyed by display name. Detector diagnostics;
/// counts exclude each run's surrounding whitespace.
pub fn language_stats(text: &str) -> HashMap<&'static str, usize> {
    let mut stats = HashMap::new();
    for chunk in segment_by_language(text) {
        let count = chunk.text.trim().chars().count();
        if count > 0 {
            *stats.entry(language_name(chunk.language)).or_insert(0) += count;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mt::mock::{MockMode, MockTranslator};
    use std::collections::HashMap;

    fn service_with(mock: &MockTranslator) -> TranslationService {
        TranslationService::new(Arc::new(mock.clone()))
    }

    // ========== Conversion-Only Routing Tests ==========

    #[tokio::test]
    async fn test_brahmi_to_brahmi_is_identity_with_zero_calls() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = service_with(&mock);
        let text = "𑀦𑀫𑀲𑁆𑀓𑀸𑀭 and some latin";
        let result = service.translate(text, "brahmi", "brahmi").await.unwrap();
        assert_eq!(result, text);
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_hindi_to_brahmi_converts_without_provider() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = service_with(&mock);
        let result = service.translate("नमस्कार", "hi", "brahmi").await.unwrap();
        assert_eq!(result, "𑀦𑀫𑀲𑁆𑀓𑀸𑀭");
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_brahmi_to_hindi_converts_without_provider() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = service_with(&mock);
        let result = service.translate("𑀦𑀫𑀲𑁆𑀓𑀸𑀭", "brahmi", "hi").await.unwrap();
        assert_eq!(result, "नमस्कार");
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_all_devanagari_based_targets_convert_directly() {
        for lang in ["hi", "sa", "mr", "ne"] {
            let mock = MockTranslator::new(MockMode::Suffix);
            let service = service_with(&mock);
            let result = service.translate("नमन", lang, "brahmi").await.unwrap();
            assert_eq!(result, "𑀦𑀫𑀦");
            let back = service.translate("𑀦𑀫𑀦", "brahmi", lang).await.unwrap();
            assert_eq!(back, "नमन");
            assert_eq!(mock.calls(), 0);
        }
    }

    // ========== Pivot Routing Tests ==========

    #[tokio::test]
    async fn test_english_to_brahmi_pivots_through_hindi() {
        let mut map = HashMap::new();
        map.insert(
            ("hello".to_string(), "hi".to_string()),
            "नमस्कार".to_string(),
        );
        let mock = MockTranslator::new(MockMode::Mappings(map));
        let service = service_with(&mock);

        let result = service.translate("hello", "en", "brahmi").await.unwrap();
        assert_eq!(result, "𑀦𑀫𑀲𑁆𑀓𑀸𑀭");
        // Exactly one provider call (en → hi), never a direct en → brahmi.
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_brahmi_to_english_pivots_through_hindi() {
        let mut map = HashMap::new();
        map.insert(
            ("नमस्कार".to_string(), "en".to_string()),
            "greetings".to_string(),
        );
        let mock = MockTranslator::new(MockMode::Mappings(map));
        let service = service_with(&mock);

        let result = service.translate("𑀦𑀫𑀲𑁆𑀓𑀸𑀭", "brahmi", "en").await.unwrap();
        assert_eq!(result, "greetings");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_plain_pair_goes_straight_to_provider() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = service_with(&mock);
        let result = service.translate("hello", "en", "ta").await.unwrap();
        assert_eq!(result, "hello_ta");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_input_short_circuits() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = service_with(&mock);
        assert_eq!(service.translate("", "en", "hi").await.unwrap(), "");
        assert_eq!(service.translate("   \n", "en", "hi").await.unwrap(), "");
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_tags_are_normalized() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = service_with(&mock);
        let result = service.translate("नमन", "HI-IN", "brahmi").await.unwrap();
        assert_eq!(result, "𑀦𑀫𑀦");
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_tag_rejected_before_any_call() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = service_with(&mock);
        let result = service.translate("hello", "en@US", "hi").await;
        assert!(matches!(result, Err(TranslateError::InvalidLanguageTag(_))));
        assert_eq!(mock.calls(), 0);
    }

    // ========== Fallback Policy Tests ==========

    #[tokio::test]
    async fn test_client_error_triggers_fallback_exactly_once() {
        let primary = MockTranslator::new(MockMode::Fail(TranslateError::Client {
            status: 400,
            message: "unsupported pair".to_string(),
        }));
        let fallback = MockTranslator::new(MockMode::Suffix);
        let service = TranslationService::with_fallback(
            Arc::new(primary.clone()),
            Arc::new(fallback.clone()),
        );

        let result = service.translate("hello", "en", "ta").await.unwrap();
        assert_eq!(result, "hello_ta");
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 1);
    }

    #[tokio::test]
    async fn test_server_error_propagates_without_fallback() {
        let primary = MockTranslator::new(MockMode::Fail(TranslateError::Server {
            status: 503,
            message: "overloaded".to_string(),
        }));
        let fallback = MockTranslator::new(MockMode::Suffix);
        let service = TranslationService::with_fallback(
            Arc::new(primary.clone()),
            Arc::new(fallback.clone()),
        );

        let result = service.translate("hello", "en", "ta").await;
        assert!(matches!(result, Err(TranslateError::Server { status: 503, .. })));
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn test_network_error_propagates_without_fallback() {
        let primary = MockTranslator::new(MockMode::Fail(TranslateError::Network(
            "connection refused".to_string(),
        )));
        let fallback = MockTranslator::new(MockMode::Suffix);
        let service = TranslationService::with_fallback(
            Arc::new(primary.clone()),
            Arc::new(fallback.clone()),
        );

        assert!(service.translate("hello", "en", "ta").await.is_err());
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn test_double_failure_names_both_providers() {
        let primary = MockTranslator::new(MockMode::Fail(TranslateError::Client {
            status: 400,
            message: "bad request".to_string(),
        }));
        let fallback = MockTranslator::new(MockMode::Fail(TranslateError::Server {
            status: 500,
            message: "down".to_string(),
        }));
        let service = TranslationService::with_fallback(
            Arc::new(primary.clone()),
            Arc::new(fallback.clone()),
        );

        match service.translate("hello", "en", "ta").await {
            Err(TranslateError::AllProvidersFailed {
                primary, fallback, ..
            }) => {
                assert_eq!(primary, "Mock Translator");
                assert_eq!(fallback, "Mock Translator");
            }
            other => panic!("expected AllProvidersFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_client_error_without_fallback_propagates() {
        let mock = MockTranslator::new(MockMode::Fail(TranslateError::Client {
            status: 404,
            message: "no such pair".to_string(),
        }));
        let service = service_with(&mock);
        let result = service.translate("hello", "en", "ta").await;
        assert!(matches!(result, Err(TranslateError::Client { status: 404, .. })));
    }

    // ========== Mixed-Text Tests ==========

    #[tokio::test]
    async fn test_mixed_text_translates_only_foreign_runs() {
        let mock = MockTranslator::new(MockMode::Echo);
        let service = service_with(&mock);
        // The Hindi run is already in the target language; only the
        // English run goes to the provider. Echo keeps the text intact so
        // concatenation is observable.
        let result = service.translate_mixed("hello नमस्ते", "hi").await.unwrap();
        assert_eq!(result, "hello नमस्ते");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn test_mixed_text_to_brahmi_without_provider() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = service_with(&mock);
        // Devanagari converts directly, the Brahmi run passes through.
        let result = service.translate_mixed("नमस्ते 𑀦𑀫", "brahmi").await.unwrap();
        assert_eq!(result, format!("{}𑀦𑀫", to_brahmi("नमस्ते ")));
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn test_mixed_text_empty_input() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let service = service_with(&mock);
        assert_eq!(service.translate_mixed("", "hi").await.unwrap(), "");
        assert_eq!(service.translate_mixed("  ", "hi").await.unwrap(), "");
    }

    // ========== Diagnostics Tests ==========

    #[test]
    fn test_language_stats_counts_significant_characters() {
        let stats = language_stats("hello नमस्ते");
        assert_eq!(stats.get("English"), Some(&5));
        assert_eq!(stats.get("Hindi"), Some(&6));
    }

    #[test]
    fn test_language_stats_empty_input() {
        assert!(language_stats("").is_empty());
    }

    #[test]
    fn test_provider_info_names_both() {
        let service = TranslationService::with_fallback(
            Arc::new(MockTranslator::new(MockMode::Suffix)),
            Arc::new(MockTranslator::new(MockMode::Echo)),
        );
        assert_eq!(
            service.provider_info(),
            "Primary: Mock Translator, Fallback: Mock Translator"
        );
    }
}
