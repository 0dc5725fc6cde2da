//! Error types for source analysis

use thiserror::Error;

/// Errors that can occur while turning one source into profile text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The language-model call failed; carries the provider's message
    #[error("{0}")]
    Provider(String),

    /// Channel metadata could not be fetched
    #[error("Could not fetch channel details: {0}")]
    Metadata(String),

    /// The input was rejected before any external call
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No text could be read from the uploaded document
    #[error("Failed to extract text from document: {0}")]
    Document(String),
}

/// Errors from the video-platform data API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    /// No channel matched the identifier
    #[error("Channel not found: {0}")]
    NotFound(String),

    /// Missing API key or unusable settings
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network failure or non-2xx status
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
