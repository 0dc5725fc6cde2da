//! Podium Extractor
//!
//! Converts one block of generated profile text into structured fields.
//!
//! # Overview
//!
//! The language model answers in free text. This crate pulls three fields
//! out of it with layered heuristics:
//!
//! - **Topics**: a labeled line ("Topics:", "Areas of expertise:", ...),
//!   else sentence fragments with expertise keywords, else a default list
//! - **Personality**: a labeled line ("Personality:", "Traits:", ...),
//!   else fragments with trait keywords, else a default list
//! - **Summary**: the paragraphs of the text, else a default sentence
//!
//! # Architecture
//!
//! ```text
//! Text → RuleChain [Header → Keyword → Default] → Vec<String>
//! ```
//!
//! Each chain is an explicit ordered list of [`Rule`]s with a mandatory
//! default. Extraction never fails: a chain that cannot be built returns
//! its defaults.
//!
//! # Example Usage
//!
//! ```
//! use podium_extractor::{extract_outcome, DEFAULT_PERSONALITY};
//!
//! let outcome = extract_outcome("Hello!\n\nTopics: Resilience and Change");
//!
//! assert_eq!(outcome.topics, vec!["Resilience", "Change"]);
//! assert_eq!(outcome.personality_traits, DEFAULT_PERSONALITY);
//! assert_eq!(outcome.summary_paragraphs.len(), 2);
//! ```

#![warn(missing_docs)]

mod error;
mod fields;
mod rules;

pub use error::ExtractorError;
pub use fields::{
    extract_outcome, extract_personality, extract_summary, extract_topics, DEFAULT_PERSONALITY,
    DEFAULT_SUMMARY, DEFAULT_TOPICS, PERSONALITY_HEADERS, PERSONALITY_KEYWORDS, TOPIC_HEADERS,
    TOPIC_KEYWORDS,
};
pub use rules::{Rule, RuleChain};
