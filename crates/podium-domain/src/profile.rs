//! Structured profile record imported from the professional network

use serde::{Deserialize, Serialize};

/// A person's professional-network profile
///
/// Field names follow the camelCase JSON the session cache stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredProfile {
    /// Network member identifier
    #[serde(default)]
    pub id: String,

    /// Given name
    #[serde(default)]
    pub first_name: String,

    /// Family name
    #[serde(default)]
    pub last_name: String,

    /// Profile headline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    /// Industry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    /// Free-text "about" section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Work history, most recent first
    #[serde(default)]
    pub positions: Vec<Position>,

    /// Listed skills
    #[serde(default)]
    pub skills: Vec<String>,

    /// Education history
    #[serde(default)]
    pub education: Vec<Education>,
}

impl StructuredProfile {
    /// First and last name joined by a space
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// One entry of the work history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Job title
    pub title: String,

    /// Employer
    pub company_name: String,

    /// Role description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Start date as provided by the network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// End date as provided by the network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Whether this is the current position
    #[serde(default)]
    pub is_current: bool,
}

/// One entry of the education history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    /// School or university
    pub school_name: String,

    /// Degree obtained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,

    /// Field of study
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,

    /// Start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// End date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
