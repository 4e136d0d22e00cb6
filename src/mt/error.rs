//! Error types for the translation pipeline
//!
//! Provider failures are classified at the HTTP boundary and consumed by
//! the orchestrator's fallback decision: only a [`TranslateError::Client`]
//! rejection (4xx) is worth retrying on a different provider, everything
//! else is transient or terminal and propagates as-is.

/// Classified failure of a translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Connection, DNS, or timeout failure before any HTTP status arrived
    Network(String),
    /// Provider rejected the request (4xx); the only fallback trigger
    Client { status: u16, message: String },
    /// Provider-side outage (5xx); propagated without fallback
    Server { status: u16, message: String },
    /// Response body did not have the expected shape
    MalformedResponse(String),
    /// Request rejected locally before sending; routes into size-chunking
    RequestTooLarge(usize),
    /// Language tag failed validation
    InvalidLanguageTag(String),
    /// Missing or empty provider configuration
    Config(String),
    /// Primary and fallback provider both failed
    AllProvidersFailed {
        primary: String,
        fallback: String,
        message: String,
    },
}

impl TranslateError {
    /// Whether the orchestrator should retry this failure on the fallback
    /// provider. Only a 4xx rejection qualifies: a different provider may
    /// support the language pair, while retrying an outage or a dead
    /// connection elsewhere just doubles the cost.
    pub fn is_fallback_trigger(&self) -> bool {
        matches!(self, TranslateError::Client { .. })
    }
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::Network(msg) => write!(f, "Network error: {}", msg),
            TranslateError::Client { status, message } => {
                write!(f, "Client error ({}): {}", status, message)
            }
            TranslateError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            TranslateError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            TranslateError::RequestTooLarge(size) => {
                write!(f, "Request too large ({} characters)", size)
            }
            TranslateError::InvalidLanguageTag(msg) => write!(f, "Invalid language tag: {}", msg),
            TranslateError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TranslateError::AllProvidersFailed {
                primary,
                fallback,
                message,
            } => write!(
                f,
                "All providers failed (primary: {}, fallback: {}): {}",
                primary, fallback, message
            ),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            TranslateError::MalformedResponse(err.to_string())
        } else {
            TranslateError::Network(err.to_string())
        }
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
