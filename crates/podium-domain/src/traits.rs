//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the analysis pipeline and
//! infrastructure. Implementations live in other crates.

use crate::{AnalysisOutcome, ChannelMetadata, InputSet, ProviderPrompt};
use async_trait::async_trait;

/// Trait for language-model completion
///
/// Implemented by the infrastructure layer (podium-llm)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Error type for completion calls
    type Error;

    /// Send a system/user prompt pair and return the generated text
    async fn complete(&self, prompt: &ProviderPrompt) -> Result<String, Self::Error>;
}

/// Trait for resolving a video channel and its top videos
///
/// Implemented by the infrastructure layer (podium-sources)
#[async_trait]
pub trait ChannelMetadataSource: Send + Sync {
    /// Error type for metadata lookups
    type Error;

    /// Fetch channel statistics and top videos for an identifier
    async fn fetch_channel(&self, identifier: &str) -> Result<ChannelMetadata, Self::Error>;
}

/// Trait for the secondary analysis endpoint used when every source failed
///
/// Implemented by the application layer (podium-analyzer)
#[async_trait]
pub trait FallbackChannel: Send + Sync {
    /// Error type for submissions
    type Error;

    /// Submit the raw inputs and return a ready-made outcome
    async fn submit(&self, inputs: &InputSet) -> Result<AnalysisOutcome, Self::Error>;
}

/// Trait for session-scoped key-value storage
///
/// Holds the professional-network token, its expiry and the imported profile.
pub trait SessionStore {
    /// Error type for store operations
    type Error;

    /// Read a value
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a value; removing a missing key is not an error
    fn delete(&mut self, key: &str) -> Result<(), Self::Error>;
}
