//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use podium_analyzer::{Notice, NoticeLevel, Notifier};
use podium_domain::{AnalysisOutcome, StructuredProfile};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Modify, Style, Width},
};

const VALUE_COLUMN_WIDTH: usize = 70;

/// Output formatter.
#[derive(Debug, Clone)]
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis outcome.
    pub fn format_outcome(&self, outcome: &AnalysisOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(outcome)?),
            OutputFormat::Table => Ok(self.format_outcome_table(outcome)),
            OutputFormat::Quiet => Ok(outcome.topics.join("\n")),
        }
    }

    /// Format the outcome as a field table followed by the summary.
    fn format_outcome_table(&self, outcome: &AnalysisOutcome) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Values"]);
        builder.push_record(["Topics", &outcome.topics.join(", ")]);
        builder.push_record(["Personality", &outcome.personality_traits.join(", ")]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::last()).with(Width::wrap(VALUE_COLUMN_WIDTH)));

        let mut out = table.to_string();
        out.push_str("\n\n");
        out.push_str(&outcome.summary_paragraphs.join("\n\n"));

        if let Some(error) = &outcome.error {
            out.push_str("\n\n");
            out.push_str(&self.error(error));
        }

        out
    }

    /// Format a cached profile record.
    pub fn format_profile(&self, profile: &StructuredProfile) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(profile)?),
            OutputFormat::Quiet => Ok(profile.display_name()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                builder.push_record(["Name".to_string(), profile.display_name()]);
                builder.push_record([
                    "Headline".to_string(),
                    profile.headline.clone().unwrap_or_default(),
                ]);
                builder.push_record([
                    "Industry".to_string(),
                    profile.industry.clone().unwrap_or_default(),
                ]);
                builder.push_record(["Positions".to_string(), profile.positions.len().to_string()]);
                builder.push_record(["Skills".to_string(), profile.skills.join(", ")]);
                builder.push_record(["Education".to_string(), profile.education.len().to_string()]);

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Columns::last()).with(Width::wrap(VALUE_COLUMN_WIDTH)));
                Ok(table.to_string())
            }
        }
    }

    /// Format a notice from the analyzer.
    pub fn notice(&self, notice: &Notice) -> String {
        let message = format!("{}: {}", notice.title, notice.description);
        match notice.level {
            NoticeLevel::Info => self.info(&message),
            NoticeLevel::Warning => self.warning(&message),
            NoticeLevel::Error => self.error(&message),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Prints analyzer notices to stderr as they occur.
pub struct ConsoleNotifier {
    formatter: Formatter,
}

impl ConsoleNotifier {
    /// Create a notifier printing with `formatter`.
    pub fn new(formatter: Formatter) -> Self {
        Self { formatter }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        eprintln!("{}", self.formatter.notice(&notice));
    }
}
