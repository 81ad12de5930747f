/// LLM client — the single point of entry for all upstream generative-language
/// API calls in the teammate checker.
///
/// ARCHITECTURAL RULE: no other module may call an upstream provider directly.
/// Handlers depend on the `ChatBackend` trait; the concrete provider is picked
/// once at startup from `UPSTREAM_PROVIDER`.
use async_trait::async_trait;
use thiserror::Error;

pub mod deepseek;
pub mod gemini;

pub use deepseek::DeepSeekClient;
pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key is not configured on the server")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream API error: {status_text}")]
    Api { status: u16, status_text: String },

    #[error("no valid response content from the AI")]
    EmptyContent,
}

/// A generative-language completion backend.
///
/// One prompt in, one text completion out. Implementations make a single
/// request with no retry and surface the upstream status text on failure.
/// The credential check happens before any I/O, so a missing key never
/// produces an outbound call.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;
}
