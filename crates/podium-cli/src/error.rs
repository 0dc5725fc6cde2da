//! Error types for the CLI application.

use podium_analyzer::AnalyzerError;
use podium_sources::SessionError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A collaborator could not be built from configuration
    #[error("Setup error: {0}")]
    Setup(String),

    /// Analysis rejected the inputs
    #[error("{0}")]
    Analysis(#[from] AnalyzerError),

    /// Session cache error
    #[error("{0}")]
    Session(#[from] SessionError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
