//! Chat-completions Provider Implementation
//!
//! Sends a system/user message pair to an OpenAI-compatible
//! `chat/completions` endpoint and returns `choices[0].message.content`.
//!
//! # Status mapping
//!
//! | Condition | Error |
//! |-----------|-------|
//! | No API key configured | `GatewayError::Configuration` (no request sent) |
//! | HTTP 401 | `GatewayError::Authentication` |
//! | HTTP 429 | `GatewayError::RateLimit` |
//! | Body without generated text | `GatewayError::ResponseFormat` |
//! | Other non-2xx, network failure | `GatewayError::Transport` |
//!
//! # Examples
//!
//! ```no_run
//! use podium_llm::{OpenAiProvider, ProviderConfig};
//!
//! let config = ProviderConfig::with_api_key("sk-...");
//! let provider = OpenAiProvider::new(&config).unwrap();
//! ```

use crate::config::ProviderConfig;
use crate::GatewayError;
use async_trait::async_trait;
use podium_domain::traits::LlmProvider;
use podium_domain::ProviderPrompt;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Chat-completions API provider
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    temperature: f32,
    api_key: Option<String>,
    client: reqwest::Client,
}

/// Request body for the chat-completions API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response from the chat-completions API
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Error envelope returned with non-2xx responses
#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAiProvider {
    /// Create a provider from configuration
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GatewayError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key: config.credential().map(str::to_string),
            client,
        })
    }

    /// Model name sent with every request
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, prompt: &ProviderPrompt) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            GatewayError::Configuration("API key is not configured".to_string())
        })?;

        let request_body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: self.temperature,
        };

        debug!(
            "Sending chat completion to {} (model {}, {} chars)",
            self.endpoint,
            self.model,
            prompt.system.len() + prompt.user.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("Failed to read response: {}", e)))?;

        match status {
            StatusCode::UNAUTHORIZED => Err(GatewayError::Authentication(
                "Please check your API key".to_string(),
            )),
            StatusCode::TOO_MANY_REQUESTS => Err(GatewayError::RateLimit(
                "Too many requests to the provider".to_string(),
            )),
            s if !s.is_success() => Err(GatewayError::Transport(format!(
                "HTTP {}: {}",
                s,
                provider_error_message(&body)
            ))),
            _ => parse_content(&body),
        }
    }
}

/// Extract `choices[0].message.content` from a successful response body
fn parse_content(body: &str) -> Result<String, GatewayError> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::ResponseFormat(format!("Failed to parse response: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| {
            GatewayError::ResponseFormat(
                "Response is missing choices[0].message.content".to_string(),
            )
        })
}

/// The provider's own error message, or the raw body
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    type Error = GatewayError;

    async fn complete(&self, prompt: &ProviderPrompt) -> Result<String, Self::Error> {
        let result = self.send(prompt).await;
        if let Err(e) = &result {
            warn!("Chat completion failed: {}", e);
        }
        result
    }
}
