//! Machine translation provider stack
//!
//! This module holds everything that talks to (or stands in for) an
//! external MT service, plus the orchestrator that composes providers
//! with the script converter:
//!
//! 1. **Error taxonomy** — provider failures classified at the HTTP
//!    boundary (network / 4xx / 5xx / malformed), driving the fallback
//!    decision
//! 2. **Provider trait** — single-shot `translate` plus a shared
//!    size-chunked degradation driver
//! 3. **Providers** — the GET-shaped Google endpoint, the POST-shaped
//!    Azure endpoint, and a deterministic mock with call counting
//! 4. **TranslationService** — pivot routing for the synthetic `brahmi`
//!    endpoint and the 4xx-only fallback policy
//!
//! # Example
//!
//! ```ignore
//! use brahmi_translate::mt::{GoogleTranslateProvider, TranslationService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(GoogleTranslateProvider::new()?);
//!     let service = TranslationService::new(provider);
//!
//!     let brahmi = service.translate("Hello, world!", "en", "brahmi").await?;
//!     println!("{}", brahmi);
//!     Ok(())
//! }
//! ```

pub mod azure_translate;
pub mod error;
pub mod google_translate;
pub mod mock;
pub mod service;
pub mod translator;


pub use azure_translate::AzureTranslateProvider;
pub use error::{TranslateError, TranslateResult};
pub use google_translate::GoogleTranslateProvider;
pub use mock::{MockMode, MockTranslator};
pub use service::{BRAHMI_TAG, TranslationService, language_stats};
pub use translator::{TranslationProvider, normalize_tag, validate_tag};
