//! Podium Analyzer
//!
//! Orchestrates one analysis run: every available source is analyzed in
//! priority order, successful texts are synthesized when there is more than
//! one, and the final text is handed to the field extractor.
//!
//! # Flow
//!
//! ```text
//! InputSet ──► SourceAdapters (sequential) ──► texts
//!   0 texts  ──► secondary endpoint ──► fixed fallback outcome
//!   1 text   ──► extract
//!   2+ texts ──► synthesis call ──► extract
//! ```
//!
//! Per-source failures become warnings sent to a [`Notifier`]; only an
//! empty input set is an error.

#![warn(missing_docs)]

pub mod analyzer;
pub mod error;
pub mod fallback;
pub mod notify;
pub mod synthesis;

pub use analyzer::Analyzer;
pub use error::{AnalyzerError, FallbackError};
pub use fallback::{
    deterministic_fallback, FallbackConfig, HttpFallbackChannel, NoFallback, FALLBACK_SUMMARY,
    UNEXPECTED_FAILURE,
};
pub use notify::{CollectingNotifier, Notice, NoticeLevel, Notifier, TracingNotifier};
pub use synthesis::{synthesis_prompt, SOURCE_SEPARATOR};
