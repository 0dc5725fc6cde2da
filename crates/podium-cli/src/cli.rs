//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sixty days, the lifetime of a professional-network access token
pub const DEFAULT_TOKEN_LIFETIME_SECS: u64 = 60 * 24 * 60 * 60;

/// Podium CLI - Build a speaker profile from your content.
#[derive(Debug, Parser)]
#[command(name = "podium")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path (default: ~/.podium/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Language-model API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true, global = true)]
    pub openai_api_key: Option<String>,

    /// Video-platform data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true, global = true)]
    pub youtube_api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (topics only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze your sources and print a speaker profile
    Analyze(AnalyzeArgs),

    /// Manage the cached professional-network profile
    Session(SessionArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Default, Parser)]
pub struct AnalyzeArgs {
    /// Resume or introduction (PDF or text file)
    #[arg(short, long)]
    pub document: Option<PathBuf>,

    /// Structured profile record (JSON file); defaults to the cached session
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Video channel URL
    #[arg(long)]
    pub youtube: Option<String>,

    /// Personal or company website URL
    #[arg(long)]
    pub website: Option<String>,

    /// Professional-network profile URL
    #[arg(long)]
    pub linkedin: Option<String>,

    /// Published book URL
    #[arg(long)]
    pub book: Option<String>,
}

/// Arguments for session management.
#[derive(Debug, Parser)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub action: SessionAction,
}

/// Session management actions.
#[derive(Debug, Subcommand)]
pub enum SessionAction {
    /// Cache a profile record with its access token
    Import {
        /// Profile record (JSON file)
        file: PathBuf,
        /// Access token
        #[arg(short, long)]
        token: String,
        /// Token lifetime in seconds
        #[arg(short, long, default_value_t = DEFAULT_TOKEN_LIFETIME_SECS)]
        expires_in: u64,
    },

    /// Show the cached profile
    Show,

    /// Remove the cached profile and token
    Clear,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from([
            "podium",
            "analyze",
            "--document",
            "resume.pdf",
            "--youtube",
            "https://youtube.com/@me",
            "-f",
            "json",
        ]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.document, Some(PathBuf::from("resume.pdf")));
                assert_eq!(args.youtube.as_deref(), Some("https://youtube.com/@me"));
                assert!(args.website.is_none());
            }
            _ => panic!("Expected Analyze command"),
        }
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }

    #[test]
    fn test_session_import_default_lifetime() {
        let cli = Cli::parse_from(["podium", "session", "import", "me.json", "--token", "t"]);
        match cli.command {
            Command::Session(SessionArgs {
                action: SessionAction::Import { expires_in, .. },
            }) => assert_eq!(expires_in, DEFAULT_TOKEN_LIFETIME_SECS),
            _ => panic!("Expected Session Import command"),
        }
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::parse_from(["podium", "-vv", "session", "show"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["podium"]).is_err());
    }
}
