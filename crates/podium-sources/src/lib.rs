//! Podium Source Adapters
//!
//! Turns each kind of analysis input into first-person profile text:
//!
//! - **Document**: text extraction (PDF or plain text), then a summary prompt
//! - **Structured profile**: flattened to labeled text, then a summary prompt
//! - **Generic URL**: a prompt built from the URL and its source label
//! - **Video channel**: identifier extraction, metadata lookup, then a
//!   summary prompt over channel statistics and top videos
//!
//! Also provides the data API client for channel metadata and the session
//! cache for an imported profile.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use podium_domain::AnalysisInput;
//! use podium_llm::MockProvider;
//! use podium_sources::{MockChannelSource, SourceAdapters};
//!
//! # let rt = tokio::runtime::Runtime::new().unwrap();
//! # rt.block_on(async {
//! let adapters = SourceAdapters::new(
//!     Arc::new(MockProvider::new("Hello! I speak about rowing.")),
//!     Arc::new(MockChannelSource::new()),
//! );
//!
//! let input = AnalysisInput::video_channel("https://example.com/nothing-here");
//! let result = adapters.analyze(&input).await;
//! assert!(!result.is_ok());
//! # });
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod channel_id;
pub mod document;
pub mod error;
pub mod profile_text;
pub mod prompt;
pub mod session;
pub mod youtube;

use async_trait::async_trait;
use podium_domain::traits::ChannelMetadataSource;
use podium_domain::ChannelMetadata;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub use adapter::{is_profile_url, SourceAdapters};
pub use channel_id::{extract_channel_identifier, ChannelIdentifier};
pub use document::extract_document_text;
pub use error::{MetadataError, SourceError};
pub use profile_text::render_profile;
pub use session::{MemorySessionStore, ProfileSession, SessionError};
pub use youtube::{YouTubeClient, YouTubeConfig};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Mock channel metadata source for deterministic testing
///
/// Returns registered channels by identifier and records every lookup.
/// Unknown identifiers fail with `MetadataError::NotFound`.
#[derive(Debug, Clone, Default)]
pub struct MockChannelSource {
    channels: Arc<Mutex<HashMap<String, ChannelMetadata>>>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockChannelSource {
    /// Create a source with no channels
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a channel under an identifier
    pub fn add_channel(&mut self, identifier: impl Into<String>, channel: ChannelMetadata) {
        lock(&self.channels).insert(identifier.into(), channel);
    }

    /// Identifiers looked up so far, in call order
    pub fn lookups(&self) -> Vec<String> {
        lock(&self.lookups).clone()
    }
}

#[async_trait]
impl ChannelMetadataSource for MockChannelSource {
    type Error = MetadataError;

    async fn fetch_channel(&self, identifier: &str) -> Result<ChannelMetadata, Self::Error> {
        lock(&self.lookups).push(identifier.to_string());
        lock(&self.channels)
            .get(identifier)
            .cloned()
            .ok_or_else(|| MetadataError::NotFound(identifier.to_string()))
    }
}
