//! Topic, personality and summary extraction from generated profile text

use crate::error::ExtractorError;
use crate::rules::{Rule, RuleChain};
use podium_domain::AnalysisOutcome;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Labels introducing a topic line
pub const TOPIC_HEADERS: &[&str] = &[
    "topics:",
    "areas of expertise:",
    "specializes in:",
    "field of activity:",
    "specialization:",
];

/// Patterns marking a fragment as a topic
///
/// "focus on" also accepts its inflections ("focused on", "focusing on").
pub const TOPIC_KEYWORDS: &[&str] = &[
    "expert",
    "specialist",
    "focus(?:ed|es|ing)? on",
    "specialized in",
];

/// Topics returned when nothing in the text matches
pub const DEFAULT_TOPICS: &[&str] = &["Leadership", "Communication", "Industry Expertise"];

/// Labels introducing a personality line
pub const PERSONALITY_HEADERS: &[&str] = &["personality:", "characterized by:", "traits:"];

/// Patterns marking a fragment as a personality trait
pub const PERSONALITY_KEYWORDS: &[&str] = &["passionate", "driven", "enthusiastic", "dynamic"];

/// Traits returned when nothing in the text matches
pub const DEFAULT_PERSONALITY: &[&str] = &["Passionate", "Insightful", "Engaging", "Authoritative"];

/// Summary returned when the text has no paragraphs
pub const DEFAULT_SUMMARY: &str = "An experienced professional with expertise in their field.";

static TOPIC_CHAIN: LazyLock<Result<RuleChain, ExtractorError>> = LazyLock::new(|| {
    RuleChain::compile(
        "topics",
        &[Rule::Header(TOPIC_HEADERS), Rule::Keyword(TOPIC_KEYWORDS)],
        DEFAULT_TOPICS,
    )
});

static PERSONALITY_CHAIN: LazyLock<Result<RuleChain, ExtractorError>> = LazyLock::new(|| {
    RuleChain::compile(
        "personality",
        &[
            Rule::Header(PERSONALITY_HEADERS),
            Rule::Keyword(PERSONALITY_KEYWORDS),
        ],
        DEFAULT_PERSONALITY,
    )
});

static PARAGRAPH_BREAKS: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){2,}"));

fn defaults(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Extract speaking topics
///
/// Header line first, then keyword fragments, then [`DEFAULT_TOPICS`].
///
/// # Examples
///
/// ```
/// use podium_extractor::extract_topics;
///
/// let topics = extract_topics("Topics: AI, Ethics and Policy");
/// assert_eq!(topics, vec!["AI", "Ethics", "Policy"]);
/// ```
pub fn extract_topics(text: &str) -> Vec<String> {
    match &*TOPIC_CHAIN {
        Ok(chain) => chain.apply(text),
        Err(e) => {
            warn!("Topic extraction failed, using defaults: {}", e);
            defaults(DEFAULT_TOPICS)
        }
    }
}

/// Extract personality traits
///
/// Header line first, then keyword fragments, then [`DEFAULT_PERSONALITY`].
pub fn extract_personality(text: &str) -> Vec<String> {
    match &*PERSONALITY_CHAIN {
        Ok(chain) => chain.apply(text),
        Err(e) => {
            warn!("Personality extraction failed, using defaults: {}", e);
            defaults(DEFAULT_PERSONALITY)
        }
    }
}

/// Split text into paragraphs on runs of two or more line breaks
///
/// Paragraphs are trimmed and blank ones dropped; text without any
/// paragraph yields [`DEFAULT_SUMMARY`].
pub fn extract_summary(text: &str) -> Vec<String> {
    let breaks = match &*PARAGRAPH_BREAKS {
        Ok(re) => re,
        Err(e) => {
            warn!("Summary extraction failed, using default: {}", e);
            return vec![DEFAULT_SUMMARY.to_string()];
        }
    };

    let paragraphs: Vec<String> = breaks
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if paragraphs.is_empty() {
        vec![DEFAULT_SUMMARY.to_string()]
    } else {
        paragraphs
    }
}

/// Run all three extractors over one block of text
pub fn extract_outcome(text: &str) -> AnalysisOutcome {
    AnalysisOutcome {
        topics: extract_topics(text),
        personality_traits: extract_personality(text),
        summary_paragraphs: extract_summary(text),
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_rules_are_reused() {
        assert!(TOPIC_CHAIN.is_ok());
        assert!(PERSONALITY_CHAIN.is_ok());
        assert!(PARAGRAPH_BREAKS.is_ok());

        let text = "Topics: Rowing\n\nTraits: Calm";
        assert_eq!(extract_outcome(text), extract_outcome(text));
    }

    #[test]
    fn test_topics_from_keyword_sentence() {
        let topics = extract_topics("I am a keynote speaker focused on leadership.");
        assert_eq!(topics, vec!["I am a keynote speaker focused on leadership"]);
    }

    #[test]
    fn test_topics_from_every_header() {
        for header in ["Topics:", "Areas of expertise:", "Specializes in:", "Field of activity:", "Specialization:"] {
            let text = format!("Hello!\n{} Negotiation and Sales\nThanks!", header);
            assert_eq!(extract_topics(&text), vec!["Negotiation", "Sales"], "header {}", header);
        }
    }

    #[test]
    fn test_topics_header_beats_keywords() {
        let text = "I am an expert in rowing.\nTopics: Teamwork";
        assert_eq!(extract_topics(text), vec!["Teamwork"]);
    }

    #[test]
    fn test_topics_default() {
        let topics = extract_topics("Hello! Nice to meet you.");
        assert_eq!(topics, vec!["Leadership", "Communication", "Industry Expertise"]);
    }

    #[test]
    fn test_personality_from_header() {
        let text = "Personality: Curious, Warm and Analytical\nMore text";
        assert_eq!(extract_personality(text), vec!["Curious", "Warm", "Analytical"]);
    }

    #[test]
    fn test_personality_characterized_by() {
        let text = "I am characterized by: empathy, grit";
        assert_eq!(extract_personality(text), vec!["empathy", "grit"]);
    }

    #[test]
    fn test_personality_from_keywords() {
        let text = "Hello! I am a passionate educator.\nA driven mentor, always learning.";
        assert_eq!(
            extract_personality(text),
            vec!["Hello! I am a passionate educator", "A driven mentor"]
        );
    }

    #[test]
    fn test_personality_default() {
        assert_eq!(
            extract_personality("Plain text."),
            vec!["Passionate", "Insightful", "Engaging", "Authoritative"]
        );
    }

    #[test]
    fn test_summary_paragraphs() {
        let text = "Hello!\n\nI speak about growth.\n\n\n\nThank you!";
        assert_eq!(
            extract_summary(text),
            vec!["Hello!", "I speak about growth.", "Thank you!"]
        );
    }

    #[test]
    fn test_summary_single_line_break_keeps_paragraph() {
        let text = "Line one\nline two";
        assert_eq!(extract_summary(text), vec!["Line one\nline two"]);
    }

    #[test]
    fn test_summary_crlf() {
        assert_eq!(extract_summary("A\r\n\r\nB"), vec!["A", "B"]);
    }

    #[test]
    fn test_summary_default() {
        assert_eq!(extract_summary(""), vec![DEFAULT_SUMMARY]);
        assert_eq!(extract_summary(" \n\n \n"), vec![DEFAULT_SUMMARY]);
    }

    #[test]
    fn test_extract_outcome() {
        let outcome = extract_outcome("Hello!\n\nTopics: Data\nTraits: Calm");
        assert_eq!(outcome.topics, vec!["Data"]);
        assert_eq!(outcome.personality_traits, vec!["Calm"]);
        assert_eq!(outcome.summary_paragraphs, vec!["Hello!", "Topics: Data\nTraits: Calm"]);
        assert!(outcome.error.is_none());
    }
}
