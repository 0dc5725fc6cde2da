//! Per-source results and the final analysis outcome

use serde::{Deserialize, Serialize};

/// Result of analyzing one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceResult {
    /// Text ready for field extraction or synthesis
    Ok(String),
    /// Human-readable failure reason
    Failed(String),
}

impl SourceResult {
    /// Whether the source produced text
    pub fn is_ok(&self) -> bool {
        matches!(self, SourceResult::Ok(_))
    }

    /// The produced text, if any
    pub fn text(&self) -> Option<&str> {
        match self {
            SourceResult::Ok(text) => Some(text),
            SourceResult::Failed(_) => None,
        }
    }

    /// The failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            SourceResult::Ok(_) => None,
            SourceResult::Failed(reason) => Some(reason),
        }
    }
}

/// Structured speaker profile produced by one analysis run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    /// Speaking topics
    pub topics: Vec<String>,
    /// Personality traits
    pub personality_traits: Vec<String>,
    /// Profile text, one entry per paragraph
    pub summary_paragraphs: Vec<String>,
    /// Explanation shown when the run failed unexpectedly
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_result_accessors() {
        let ok = SourceResult::Ok("profile".to_string());
        assert!(ok.is_ok());
        assert_eq!(ok.text(), Some("profile"));
        assert_eq!(ok.reason(), None);

        let failed = SourceResult::Failed("Rate limit exceeded".to_string());
        assert!(!failed.is_ok());
        assert_eq!(failed.text(), None);
        assert_eq!(failed.reason(), Some("Rate limit exceeded"));
    }

    #[test]
    fn test_outcome_json_omits_empty_error() {
        let outcome = AnalysisOutcome {
            topics: vec!["Leadership".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("personality_traits"));
        assert!(!json.contains("error"));
    }
}
