//! Flattening a structured profile record into prompt text

use podium_domain::{Education, Position, StructuredProfile};

fn placeholder(field: &str) -> String {
    format!("No {} data available", field)
}

fn optional(value: Option<&String>, field: &str) -> String {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map_or_else(|| placeholder(field), str::to_string)
}

fn position_line(position: &Position) -> String {
    let mut line = format!("- {} at {}", position.title, position.company_name);
    if position.is_current {
        line.push_str(" (Current)");
    }
    line
}

fn education_line(education: &Education) -> String {
    let degree = education.degree.as_deref().filter(|d| !d.trim().is_empty());
    let field = education
        .field_of_study
        .as_deref()
        .filter(|f| !f.trim().is_empty());

    match (degree, field) {
        (Some(degree), Some(field)) => {
            format!("- {} in {} at {}", degree, field, education.school_name)
        }
        (Some(degree), None) => format!("- {} at {}", degree, education.school_name),
        (None, Some(field)) => format!("- {} at {}", field, education.school_name),
        (None, None) => format!("- {}", education.school_name),
    }
}

/// Render a profile as labeled plain text
///
/// Every section is always present; absent data renders as
/// `No <field> data available`.
pub fn render_profile(profile: &StructuredProfile) -> String {
    let name = profile.display_name();
    let name = if name.is_empty() {
        placeholder("name")
    } else {
        name
    };

    let mut text = String::new();
    text.push_str(&format!("Name: {}\n", name));
    text.push_str(&format!(
        "Headline: {}\n",
        optional(profile.headline.as_ref(), "headline")
    ));
    text.push_str(&format!(
        "Industry: {}\n",
        optional(profile.industry.as_ref(), "industry")
    ));
    text.push_str(&format!(
        "Summary: {}\n\n",
        optional(profile.summary.as_ref(), "summary")
    ));

    text.push_str("Experience:\n");
    if profile.positions.is_empty() {
        text.push_str(&placeholder("experience"));
        text.push('\n');
    } else {
        for position in &profile.positions {
            text.push_str(&position_line(position));
            text.push('\n');
        }
    }

    text.push_str("\nSkills:\n");
    if profile.skills.is_empty() {
        text.push_str(&placeholder("skills"));
    } else {
        text.push_str(&profile.skills.join(", "));
    }
    text.push('\n');

    text.push_str("\nEducation:\n");
    if profile.education.is_empty() {
        text.push_str(&placeholder("education"));
        text.push('\n');
    } else {
        for education in &profile.education {
            text.push_str(&education_line(education));
            text.push('\n');
        }
    }

    text
}
