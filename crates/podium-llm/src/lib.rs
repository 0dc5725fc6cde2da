//! Podium LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `podium-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic, call-recording mock for testing
//! - `OpenAiProvider`: Chat-completions HTTP API integration
//!
//! # Failure kinds
//!
//! Every provider reports failures as a [`GatewayError`]. Providers never
//! retry; retry policy belongs to the caller.
//!
//! # Examples
//!
//! ```
//! use podium_llm::MockProvider;
//! use podium_domain::traits::LlmProvider;
//! use podium_domain::ProviderPrompt;
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let provider = MockProvider::new("Hello from LLM!");
//! let prompt = ProviderPrompt::new("system", "user");
//! let result = provider.complete(&prompt).await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod openai;

use async_trait::async_trait;
use podium_domain::traits::LlmProvider;
use podium_domain::ProviderPrompt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use config::ProviderConfig;
pub use openai::OpenAiProvider;

/// Errors that can occur during a provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// No credential configured; raised before any request is sent
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The provider rejected the credential (HTTP 401)
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The provider throttled the request (HTTP 429)
    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    /// The response lacked the generated text
    #[error("Invalid response format: {0}")]
    ResponseFormat(String),

    /// Any other network or protocol failure
    #[error("Transport error: {0}")]
    Transport(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(GatewayError),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses are selected by the first registered needle that occurs in the
/// prompt's user content or system instruction; otherwise the default
/// response is returned. Every call is recorded.
///
/// # Examples
///
/// ```
/// use podium_llm::{GatewayError, MockProvider};
/// use podium_domain::traits::LlmProvider;
/// use podium_domain::ProviderPrompt;
///
/// # let rt = tokio::runtime::Runtime::new().unwrap();
/// # rt.block_on(async {
/// let mut provider = MockProvider::default();
/// provider.add_response("resume", "Hello! I am a speaker.");
/// provider.add_error("book", GatewayError::RateLimit("slow down".into()));
///
/// let ok = provider.complete(&ProviderPrompt::new("sys", "my resume")).await;
/// assert_eq!(ok.unwrap(), "Hello! I am a speaker.");
///
/// let err = provider.complete(&ProviderPrompt::new("sys", "my book")).await;
/// assert!(matches!(err, Err(GatewayError::RateLimit(_))));
/// assert_eq!(provider.call_count(), 2);
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    replies: Arc<Mutex<Vec<(String, MockReply)>>>,
    calls: Arc<Mutex<Vec<ProviderPrompt>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            replies: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Respond with `response` when the prompt contains `needle`
    pub fn add_response(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        lock(&self.replies).push((needle.into(), MockReply::Text(response.into())));
    }

    /// Fail with `error` when the prompt contains `needle`
    pub fn add_error(&mut self, needle: impl Into<String>, error: GatewayError) {
        lock(&self.replies).push((needle.into(), MockReply::Error(error)));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// Prompts received so far, in call order
    pub fn calls(&self) -> Vec<ProviderPrompt> {
        lock(&self.calls).clone()
    }

    /// Forget recorded calls
    pub fn reset_call_count(&self) {
        lock(&self.calls).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    type Error = GatewayError;

    async fn complete(&self, prompt: &ProviderPrompt) -> Result<String, Self::Error> {
        lock(&self.calls).push(prompt.clone());

        let replies = lock(&self.replies);
        let matched = replies
            .iter()
            .find(|(needle, _)| prompt.user.contains(needle) || prompt.system.contains(needle));

        match matched {
            Some((_, MockReply::Text(text))) => Ok(text.clone()),
            Some((_, MockReply::Error(error))) => Err(error.clone()),
            None => Ok(self.default_response.clone()),
        }
    }
}
