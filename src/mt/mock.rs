//! Mock translation provider for testing
//!
//! A deterministic, API-free provider for exercising the pipeline without
//! network access. Every call is counted, so tests can assert how many
//! provider calls a routing path issues (including zero).
//!
//! # Example
//!
//! ```ignore
//! use brahmi_translate::mt::{TranslationProvider, MockTranslator, MockMode};
//!
//! let mock = MockTranslator::new(MockMode::Suffix);
//! let result = mock.translate("hello", "en", "hi").await.unwrap();
//! assert_eq!(result, "hello_hi");
//! assert_eq!(mock.calls(), 1);
//! ```

use crate::mt::error::{TranslateError, TranslateResult};
use crate::mt::translator::TranslationProvider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Mock translation modes for different test scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target tag: "hello" → "hello_hi"
    Suffix,

    /// Predefined (text, target) → translation mappings, falling back to
    /// suffix behavior on a miss
    Mappings(HashMap<(String, String), String>),

    /// Return the input unchanged
    Echo,

    /// Fail every call with a clone of the given error
    Fail(TranslateError),

    /// Reject any text over the given scalar count with
    /// [`TranslateError::RequestTooLarge`], forcing the chunked path;
    /// texts within the limit translate in suffix mode
    SizeLimited(usize),

    /// Fail calls whose text contains the needle with a server error;
    /// everything else translates in suffix mode. Exercises per-chunk
    /// degradation.
    FailContaining(String),
}

/// Mock translator with deterministic behavior and a call counter
///
/// Clones share the counter, so a test can keep a handle while the
/// orchestrator owns the provider.
#[derive(Debug, Clone)]
pub struct MockTranslator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    calls: Arc<AtomicUsize>,
}

impl MockTranslator {
    /// Create a new MockTranslator with the given mode.
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            delay_ms: 0,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a MockTranslator with simulated network delay.
    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `translate` calls issued so far, across all clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn apply_translation(&self, text: &str, _from: &str, to: &str) -> TranslateResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}_{}", text, to)),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), to.to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}_{}", text, to)))
            }
            MockMode::Echo => Ok(text.to_string()),
            MockMode::Fail(err) => Err(err.clone()),
            MockMode::SizeLimited(max) => {
                let count = text.chars().count();
                if count > *max {
                    Err(TranslateError::RequestTooLarge(count))
                } else {
                    Ok(format!("{}_{}", text, to))
                }
            }
            MockMode::FailContaining(needle) => {
                if text.contains(needle.as_str()) {
                    Err(TranslateError::Server {
                        status: 500,
                        message: format!("mock failure on {:?}", needle),
                    })
                } else {
                    Ok(format!("{}_{}", text, to))
                }
            }
        }
    }
}

#[async_trait]
impl TranslationProvider for MockTranslator {
    async fn translate(&self, text: &str, from: &str, to: &str) -> TranslateResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.apply_delay().await;
        self.apply_translation(text, from, to)
    }

    fn name(&self) -> &str {
        "Mock Translator"
    }

    fn chunk_size(&self) -> usize {
        match self.mode {
            MockMode::SizeLimited(max) => max,
            _ => 1500,
        }
    }

    fn chunk_delay(&self) -> Duration {
        // Tests need no rate-limit pacing.
        Duration::ZERO
    }
}
