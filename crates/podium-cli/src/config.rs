//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use podium_analyzer::FallbackConfig;
use podium_llm::ProviderConfig;
use podium_sources::YouTubeConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "session.json";

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Language-model provider
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Video-platform data API
    #[serde(default)]
    pub youtube: YouTubeConfig,

    /// Secondary analysis endpoint
    #[serde(default)]
    pub fallback: FallbackConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".podium").join("config.toml"))
    }

    /// Session cache file kept next to the configuration file.
    pub fn session_path(config_path: &Path) -> PathBuf {
        config_path.with_file_name(SESSION_FILE)
    }

    /// Load configuration from file or create default.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Replace API keys with values given on the command line or in the
    /// environment.
    pub fn apply_overrides(&mut self, openai_api_key: Option<String>, youtube_api_key: Option<String>) {
        if let Some(key) = openai_api_key.filter(|k| !k.trim().is_empty()) {
            self.provider.api_key = Some(key);
        }
        if let Some(key) = youtube_api_key.filter(|k| !k.trim().is_empty()) {
            self.youtube.api_key = Some(key);
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.provider
            .validate()
            .map_err(|e| CliError::Config(format!("[provider] {}", e)))?;
        self.youtube
            .validate()
            .map_err(|e| CliError::Config(format!("[youtube] {}", e)))?;
        self.fallback
            .validate()
            .map_err(|e| CliError::Config(format!("[fallback] {}", e)))?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
