//! Translate text between natural languages and the Brahmi script.
//!
//! No machine translation provider understands Brahmi, so this crate
//! treats it as a synthetic endpoint reached through Hindi: a
//! deterministic codepoint converter maps Devanagari to and from the
//! Brahmi Unicode block, and the orchestrator routes every
//! Brahmi-involving request through that pivot with zero, one, or two
//! external MT calls depending on the language pair.
//!
//! The pieces, leaves first:
//!
//! - [`script`] — pure Devanagari ↔ Brahmi codepoint conversion
//! - [`detect`] — Unicode-block language detection for mixed-script input
//! - [`chunk`] — language-homogeneous and size-bounded text segmentation
//! - [`mt`] — provider trait, Google/Azure/mock providers, error
//!   taxonomy, and the [`mt::TranslationService`] orchestrator
//!
//! # Example
//!
//! ```ignore
//! use brahmi_translate::mt::{GoogleTranslateProvider, TranslationService};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = TranslationService::new(Arc::new(GoogleTranslateProvider::new()?));
//!     println!("{}", service.translate("Hello!", "en", "brahmi").await?);
//!     Ok(())
//! }
//! ```

pub mod chunk;
pub mod detect;
pub mod mt;
pub mod script;

pub use chunk::{LanguageChunk, segment_by_language, segment_by_size};
pub use detect::{detect_language, language_name};
pub use mt::{
    AzureTranslateProvider, GoogleTranslateProvider, MockMode, MockTranslator, TranslateError,
    TranslateResult, TranslationProvider, TranslationService,
};
pub use script::{to_brahmi, to_devanagari};
