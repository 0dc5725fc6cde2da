//! Error types for the Extractor

use thiserror::Error;

/// Errors raised while building a rule chain
///
/// These never leave the crate's public extraction functions; a failing
/// chain yields its default values instead.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// A header or keyword pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A chain was built without a terminal default
    #[error("Rule chain '{0}' has no default values")]
    MissingDefault(&'static str),
}
