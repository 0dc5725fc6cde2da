//! Podium Domain Layer
//!
//! Core data model for speaker-profile analysis and the trait boundaries to
//! every external collaborator (language model, video-platform metadata,
//! secondary analysis endpoint, session storage).
//!
//! ## Key Concepts
//!
//! - **AnalysisInput**: one content source about a person (document, profile
//!   record, web URL, video channel)
//! - **InputSet**: at most one input per source kind, iterated in priority order
//! - **ProviderPrompt**: a system/user instruction pair for the language model
//! - **SourceResult**: per-source success text or failure reason
//! - **AnalysisOutcome**: topics, personality traits and summary paragraphs
//!
//! ## Architecture
//!
//! This crate holds no I/O. HTTP clients, parsers and the orchestrator live in
//! other crates and depend on the traits defined in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod channel;
pub mod input;
pub mod outcome;
pub mod profile;
pub mod prompt;
pub mod traits;

// Re-exports for convenience
pub use channel::{ChannelMetadata, VideoSummary};
pub use input::{AnalysisInput, DocumentInput, InputSet, SourceKind, UrlSource};
pub use outcome::{AnalysisOutcome, SourceResult};
pub use profile::{Education, Position, StructuredProfile};
pub use prompt::ProviderPrompt;
