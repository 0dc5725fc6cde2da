//! Error types for the analyzer

use thiserror::Error;

/// Errors returned by [`crate::Analyzer::analyze`]
///
/// Source, provider and synthesis failures never surface here; they end in
/// a fallback outcome instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// No source was provided
    #[error("Please provide at least one source to analyze")]
    NoInput,
}

/// Errors from the secondary analysis endpoint
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FallbackError {
    /// No endpoint is configured
    #[error("Secondary analysis endpoint is not configured")]
    NotConfigured,

    /// Network failure or non-2xx status
    #[error("HTTP error: {0}")]
    Http(String),

    /// The response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
