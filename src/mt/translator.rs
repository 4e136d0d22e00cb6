//! Translation provider trait and language-tag utilities
//!
//! The [`TranslationProvider`] trait abstracts over external MT backends
//! (Google Translate, Azure Translate, mock) so the orchestrator never
//! couples to one transport shape. Providers implement the single-shot
//! [`translate`](TranslationProvider::translate) call; the chunked entry
//! point [`translate_chunked`](TranslationProvider::translate_chunked) is
//! a shared driver provided by the trait.
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

use crate::chunk::segment_by_size;
use crate::mt::error::{TranslateError, TranslateResult};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// Generic trait for machine translation providers
///
/// All methods are async to support I/O-bound network requests. Instances
/// hold configuration only and are safe to share across concurrent
/// requests.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` in a single request.
    ///
    /// Failures must be classified into the [`TranslateError`] taxonomy at
    /// the HTTP boundary: the orchestrator's fallback decision depends on
    /// seeing a 4xx as [`TranslateError::Client`] rather than a generic
    /// failure.
    async fn translate(&self, text: &str, from: &str, to: &str) -> TranslateResult<String>;

    /// Provider name for logging and combined error messages.
    fn name(&self) -> &str;

    /// Scalar-value budget for one chunk when the single-shot call fails.
    fn chunk_size(&self) -> usize {
        1500
    }

    /// Pause between sequential chunk calls, to stay under upstream rate
    /// limits.
    fn chunk_delay(&self) -> Duration {
        Duration::from_millis(500)
    }

    /// Externally-called entry point: single shot first, size-chunked on
    /// failure.
    ///
    /// A [`TranslateError::Client`] rejection propagates immediately in
    /// both phases: chunking cannot fix an unsupported language pair, and
    /// the orchestrator needs the classification to drive its fallback.
    /// Any other single-shot failure routes into [`segment_by_size`]; the
    /// chunks are translated strictly sequentially with
    /// [`chunk_delay`](TranslationProvider::chunk_delay) between calls,
    /// and a failed chunk degrades to its original text instead of
    /// aborting the whole request. Results are rejoined with a single
    /// space, in source order.
    async fn translate_chunked(&self, text: &str, from: &str, to: &str) -> TranslateResult<String> {
        let initial = match self.translate(text, from, to).await {
            Ok(translated) => return Ok(translated),
            Err(err) if err.is_fallback_trigger() => return Err(err),
            Err(err) => err,
        };

        let chunks = segment_by_size(text, self.chunk_size());
        debug!(
            "{}: single-shot call failed ({}), retrying as {} chunks",
            self.name(),
            initial,
            chunks.len()
        );

        let mut translated = Vec::with_capacity(chunks.len());
        let last = chunks.len().saturating_sub(1);
        for (i, chunk) in chunks.iter().enumerate() {
            match self.translate(chunk, from, to).await {
                Ok(result) => translated.push(result),
                Err(err) if err.is_fallback_trigger() => return Err(err),
                Err(err) => {
                    warn!(
                        "{}: chunk {} of {} failed ({}), keeping original text",
                        self.name(),
                        i + 1,
                        chunks.len(),
                        err
                    );
                    translated.push(chunk.clone());
                }
            }
            if i < last {
                tokio::time::sleep(self.chunk_delay()).await;
            }
        }

        Ok(translated.join(" "))
    }
}

/// Normalize a language tag to its base language code
///
/// Strips region and script subtags and lowercases:
/// - `en-US` → `en`
/// - `zh-Hans` → `zh`
/// - `brahmi` → `brahmi` (unchanged)
pub fn normalize_tag(tag: &str) -> String {
    tag.split('-').next().unwrap_or(tag).to_lowercase()
}

/// Validate that a language tag is in acceptable format
///
/// Accepts the lowercase two/three-letter ISO-like codes the providers
/// understand plus the synthetic `brahmi` tag: non-empty, ASCII
/// alphanumeric with `-`/`_` subtag separators.
pub fn validate_tag(tag: &str) -> TranslateResult<()> {
    if tag.is_empty() {
        return Err(TranslateError::InvalidLanguageTag(
            "language tag is empty".to_string(),
        ));
    }

    if !tag
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(TranslateError::InvalidLanguageTag(format!(
            "invalid characters in language tag: {}",
            tag
        )));
    }

    Ok(())
}
