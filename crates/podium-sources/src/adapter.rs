//! Source adapters: one input in, profile text or a failure reason out

use crate::channel_id::extract_channel_identifier;
use crate::document::extract_document_text;
use crate::error::SourceError;
use crate::profile_text::render_profile;
use crate::prompt;
use podium_domain::traits::{ChannelMetadataSource, LlmProvider};
use podium_domain::{
    AnalysisInput, DocumentInput, ProviderPrompt, SourceResult, StructuredProfile, UrlSource,
};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

const PROFILE_PATH_KINDS: [&str; 3] = ["in", "pub", "profile"];

/// Whether a URL points at a professional-network member page
///
/// Accepts `linkedin.com` and its subdomains with a `/in/`, `/pub/` or
/// `/profile/` path (any case) followed by a slug that starts with a letter,
/// digit or dash. A missing scheme is tolerated.
///
/// # Examples
///
/// ```
/// use podium_sources::is_profile_url;
///
/// assert!(is_profile_url("https://www.linkedin.com/in/ada-lovelace"));
/// assert!(is_profile_url("linkedin.com/pub/ada"));
/// assert!(!is_profile_url("https://linkedin.com/company/acme"));
/// ```
pub fn is_profile_url(raw: &str) -> bool {
    let raw = raw.trim();
    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };
    let Ok(url) = Url::parse(&candidate) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }

    let host = url.host_str().unwrap_or_default().to_lowercase();
    if host != "linkedin.com" && !host.ends_with(".linkedin.com") {
        return false;
    }

    let mut segments = url.path_segments().into_iter().flatten();
    let kind = segments.next().unwrap_or_default();
    let slug = segments.next().unwrap_or_default();

    PROFILE_PATH_KINDS
        .iter()
        .any(|k| k.eq_ignore_ascii_case(kind))
        && slug
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Turns each kind of [`AnalysisInput`] into first-person profile text
pub struct SourceAdapters<L, M> {
    llm: Arc<L>,
    metadata: Arc<M>,
}

impl<L, M> SourceAdapters<L, M>
where
    L: LlmProvider,
    L::Error: Display,
    M: ChannelMetadataSource,
    M::Error: Display,
{
    /// Create adapters sharing one provider and one metadata source
    pub fn new(llm: Arc<L>, metadata: Arc<M>) -> Self {
        Self { llm, metadata }
    }

    /// The language-model provider
    pub fn llm(&self) -> &Arc<L> {
        &self.llm
    }

    /// Analyze any input, folding failures into [`SourceResult::Failed`]
    pub async fn analyze(&self, input: &AnalysisInput) -> SourceResult {
        let result = match input {
            AnalysisInput::Document(document) => self.analyze_document(document).await,
            AnalysisInput::StructuredProfile(profile) => self.analyze_profile(profile).await,
            AnalysisInput::GenericUrl { url, source } => self.analyze_url(*source, url).await,
            AnalysisInput::VideoChannel { url } => self.analyze_channel(url).await,
        };

        match result {
            Ok(text) => {
                info!("Analyzed {} ({} chars)", input.kind(), text.len());
                SourceResult::Ok(text)
            }
            Err(e) => SourceResult::Failed(e.to_string()),
        }
    }

    /// Extract document text and ask for a profile
    pub async fn analyze_document(&self, document: &DocumentInput) -> Result<String, SourceError> {
        let owned = document.clone();
        let text = tokio::task::spawn_blocking(move || extract_document_text(&owned))
            .await
            .map_err(|e| SourceError::Document(format!("Task join error: {}", e)))??;

        self.complete(prompt::document_prompt(&text)).await
    }

    /// Flatten a structured profile and send it through the document prompt
    pub async fn analyze_profile(&self, profile: &StructuredProfile) -> Result<String, SourceError> {
        let text = render_profile(profile);
        self.complete(prompt::document_prompt(&text)).await
    }

    /// Ask for a profile from a URL alone
    ///
    /// Professional-network URLs are validated before any provider call.
    pub async fn analyze_url(&self, source: UrlSource, url: &str) -> Result<String, SourceError> {
        if source == UrlSource::ProfessionalNetwork && !is_profile_url(url) {
            return Err(SourceError::InvalidInput(format!(
                "Invalid LinkedIn URL format: {}",
                url.trim()
            )));
        }

        self.complete(prompt::url_prompt(source, url)).await
    }

    /// Fetch channel metadata and ask for a profile
    pub async fn analyze_channel(&self, url: &str) -> Result<String, SourceError> {
        let identifier = extract_channel_identifier(url)?;
        debug!("Channel identifier: {:?}", identifier);

        let channel = self
            .metadata
            .fetch_channel(identifier.value())
            .await
            .map_err(|e| SourceError::Metadata(e.to_string()))?;

        self.complete(prompt::channel_prompt(&channel)).await
    }

    async fn complete(&self, prompt: ProviderPrompt) -> Result<String, SourceError> {
        self.llm
            .complete(&prompt)
            .await
            .map_err(|e| SourceError::Provider(e.to_string()))
    }
}
