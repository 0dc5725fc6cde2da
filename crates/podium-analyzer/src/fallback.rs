//! Fallback paths used when no source produced text
//!
//! First the raw inputs are sent to a secondary analysis endpoint as a
//! multipart form; if that is not configured or fails, a fixed outcome is
//! returned.

use crate::error::FallbackError;
use async_trait::async_trait;
use podium_domain::traits::FallbackChannel;
use podium_domain::{AnalysisInput, AnalysisOutcome, InputSet};
use podium_extractor::{DEFAULT_PERSONALITY, DEFAULT_TOPICS};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Summary of the fixed fallback outcome
pub const FALLBACK_SUMMARY: &str = "We couldn't analyze your content in detail. \
Please try providing different content sources or check your API keys.";

/// Error message attached when the run failed unexpectedly
pub const UNEXPECTED_FAILURE: &str = "There was an error analyzing your content. Please try again.";

/// Summary used when the secondary endpoint returns none
pub const NO_SUMMARY: &str = "No summary available";

/// Default timeout for the secondary endpoint (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The fixed outcome returned when every other path failed
///
/// `error` is set only for unexpected failures, not for sources that
/// simply produced nothing.
pub fn deterministic_fallback(error: Option<&str>) -> AnalysisOutcome {
    AnalysisOutcome {
        topics: DEFAULT_TOPICS.iter().map(|s| s.to_string()).collect(),
        personality_traits: DEFAULT_PERSONALITY.iter().map(|s| s.to_string()).collect(),
        summary_paragraphs: vec![FALLBACK_SUMMARY.to_string()],
        error: error.map(str::to_string),
    }
}

/// Secondary endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Full URL of the analysis endpoint; `None` disables the channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FallbackConfig {
    /// Settings pointing at `endpoint`
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

#[derive(Deserialize)]
struct FallbackResponse {
    #[serde(default)]
    summary: Option<Vec<String>>,
    #[serde(default)]
    topics: Option<Vec<String>>,
    #[serde(default)]
    personality: Option<Vec<String>>,
}

fn non_empty_or(values: Option<Vec<String>>, default: &[&str]) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.iter().map(|s| s.to_string()).collect())
}

impl FallbackResponse {
    fn into_outcome(self) -> AnalysisOutcome {
        let summary_paragraphs = non_empty_or(self.summary, &[NO_SUMMARY]);
        let topics = non_empty_or(self.topics, DEFAULT_TOPICS);
        let personality_traits = non_empty_or(self.personality, DEFAULT_PERSONALITY);

        AnalysisOutcome {
            topics,
            personality_traits,
            summary_paragraphs,
            error: None,
        }
    }
}

fn build_form(inputs: &InputSet) -> Form {
    let mut form = Form::new();
    for input in inputs.iter() {
        form = match input {
            AnalysisInput::Document(document) => form.part(
                "pdf",
                Part::bytes(document.bytes.clone()).file_name(document.file_name.clone()),
            ),
            AnalysisInput::GenericUrl { url, source } => {
                form.text(source.form_field(), url.trim().to_string())
            }
            AnalysisInput::VideoChannel { url } => form.text("youtubeUrl", url.trim().to_string()),
            AnalysisInput::StructuredProfile(_) => form,
        };
    }
    form
}

/// Multipart client for the secondary analysis endpoint
pub struct HttpFallbackChannel {
    endpoint: Option<String>,
    client: reqwest::Client,
}

impl HttpFallbackChannel {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `FallbackError::Http` if the HTTP client cannot be built.
    pub fn new(config: &FallbackConfig) -> Result<Self, FallbackError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FallbackError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config
                .endpoint
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(str::to_string),
            client,
        })
    }
}

#[async_trait]
impl FallbackChannel for HttpFallbackChannel {
    type Error = FallbackError;

    async fn submit(&self, inputs: &InputSet) -> Result<AnalysisOutcome, Self::Error> {
        let endpoint = self.endpoint.as_deref().ok_or(FallbackError::NotConfigured)?;
        debug!("Submitting {} input(s) to {}", inputs.len(), endpoint);

        let response = self
            .client
            .post(endpoint)
            .multipart(build_form(inputs))
            .send()
            .await
            .map_err(|e| FallbackError::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FallbackError::Http(format!("HTTP {}", status)));
        }

        let body: FallbackResponse = response
            .json()
            .await
            .map_err(|e| FallbackError::InvalidResponse(e.to_string()))?;

        Ok(body.into_outcome())
    }
}

/// Fallback channel that is never configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

#[async_trait]
impl FallbackChannel for NoFallback {
    type Error = FallbackError;

    async fn submit(&self, _inputs: &InputSet) -> Result<AnalysisOutcome, Self::Error> {
        Err(FallbackError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_fallback() {
        let outcome = deterministic_fallback(None);
        assert_eq!(outcome.topics, DEFAULT_TOPICS);
        assert_eq!(outcome.personality_traits, DEFAULT_PERSONALITY);
        assert_eq!(outcome.summary_paragraphs, vec![FALLBACK_SUMMARY]);
        assert!(outcome.error.is_none());

        let outcome = deterministic_fallback(Some(UNEXPECTED_FAILURE));
        assert_eq!(outcome.error.as_deref(), Some(UNEXPECTED_FAILURE));
    }

    #[test]
    fn test_response_defaults() {
        let body: FallbackResponse = serde_json::from_str("{}").unwrap();
        let outcome = body.into_outcome();
        assert_eq!(outcome.summary_paragraphs, vec![NO_SUMMARY]);
        assert_eq!(outcome.topics, DEFAULT_TOPICS);
        assert_eq!(outcome.personality_traits, DEFAULT_PERSONALITY);
    }

    #[test]
    fn test_response_values_are_kept() {
        let body: FallbackResponse = serde_json::from_str(
            r#"{"summary": ["Hello!", "Bye!"], "topics": ["Sales"], "personality": ["Bold"]}"#,
        )
        .unwrap();
        let outcome = body.into_outcome();
        assert_eq!(outcome.summary_paragraphs, vec!["Hello!", "Bye!"]);
        assert_eq!(outcome.topics, vec!["Sales"]);
        assert_eq!(outcome.personality_traits, vec!["Bold"]);
    }

    #[test]
    fn test_null_lists_use_defaults() {
        let body: FallbackResponse = serde_json::from_str(
            r#"{"summary": ["Hello!"], "topics": null, "personality": null}"#,
        )
        .unwrap();
        let outcome = body.into_outcome();
        assert_eq!(outcome.summary_paragraphs, vec!["Hello!"]);
        assert_eq!(outcome.topics, DEFAULT_TOPICS);
        assert_eq!(outcome.personality_traits, DEFAULT_PERSONALITY);

        let body: FallbackResponse =
            serde_json::from_str(r#"{"summary": null, "topics": [], "personality": ["Bold"]}"#)
                .unwrap();
        let outcome = body.into_outcome();
        assert_eq!(outcome.summary_paragraphs, vec![NO_SUMMARY]);
        assert_eq!(outcome.topics, DEFAULT_TOPICS);
        assert_eq!(outcome.personality_traits, vec!["Bold"]);
    }

    #[test]
    fn test_blank_endpoint_is_not_configured() {
        let channel = HttpFallbackChannel::new(&FallbackConfig::with_endpoint("  ")).unwrap();
        assert!(channel.endpoint.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config = FallbackConfig::from_toml(r#"endpoint = "http://localhost:3000/analyze""#)
            .unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.validate().is_ok());
    }
}
