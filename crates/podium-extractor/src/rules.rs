//! Ordered extraction rules with a terminal default
//!
//! A [`RuleChain`] evaluates its rules in sequence. The first rule that
//! yields at least one item wins; when none does, the chain's default list
//! is returned. A chain cannot be built without a default.

use crate::error::ExtractorError;
use regex::Regex;
use tracing::debug;

/// One step of a rule chain
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Find the first line introduced by one of these labels
    /// (case-insensitive), drop the label, and split the rest of the line on
    /// commas or the word "and".
    Header(&'static [&'static str]),

    /// Split the whole text on periods, commas and newlines, and keep the
    /// fragments matching one of these patterns (case-insensitive regex).
    Keyword(&'static [&'static str]),
}

#[derive(Debug)]
enum CompiledRule {
    Header { line: Regex },
    Keyword { pattern: Regex },
}

/// A compiled, ordered list of rules ending in a default
#[derive(Debug)]
pub struct RuleChain {
    name: &'static str,
    rules: Vec<CompiledRule>,
    item_separator: Regex,
    fragment_separator: Regex,
    default: Vec<String>,
}

impl RuleChain {
    /// Compile a chain
    ///
    /// # Errors
    ///
    /// Fails if a pattern does not compile or `default` is empty.
    pub fn compile(
        name: &'static str,
        rules: &[Rule],
        default: &[&str],
    ) -> Result<Self, ExtractorError> {
        if default.is_empty() {
            return Err(ExtractorError::MissingDefault(name));
        }

        let rules = rules
            .iter()
            .map(|rule| rule.compile())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name,
            rules,
            item_separator: Regex::new(r",|\sand\s")?,
            fragment_separator: Regex::new(r"[.,\n]")?,
            default: default.iter().map(|s| s.to_string()).collect(),
        })
    }

    /// The values returned when no rule matches
    pub fn default_values(&self) -> &[String] {
        &self.default
    }

    /// Run the rules against `text`; never returns an empty list
    pub fn apply(&self, text: &str) -> Vec<String> {
        for (idx, rule) in self.rules.iter().enumerate() {
            let items = match rule {
                CompiledRule::Header { line } => self.apply_header(line, text),
                CompiledRule::Keyword { pattern } => self.apply_keyword(pattern, text),
            };
            if !items.is_empty() {
                debug!("{}: rule {} matched {} item(s)", self.name, idx, items.len());
                return items;
            }
        }

        debug!("{}: no rule matched, using defaults", self.name);
        self.default.clone()
    }

    fn apply_header(&self, line: &Regex, text: &str) -> Vec<String> {
        let Some(captures) = line.captures(text) else {
            return Vec::new();
        };
        let remainder = captures.get(1).map_or("", |m| m.as_str()).trim();

        self.item_separator
            .split(remainder)
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn apply_keyword(&self, pattern: &Regex, text: &str) -> Vec<String> {
        self.fragment_separator
            .split(text)
            .filter(|fragment| pattern.is_match(fragment))
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Rule {
    fn compile(&self) -> Result<CompiledRule, ExtractorError> {
        match self {
            Rule::Header(labels) => {
                let alternation = labels
                    .iter()
                    .map(|label| regex::escape(label))
                    .collect::<Vec<_>>()
                    .join("|");
                let line = Regex::new(&format!("(?i)(?:{})([^\n]*)", alternation))?;
                Ok(CompiledRule::Header { line })
            }
            Rule::Keyword(patterns) => {
                let pattern = Regex::new(&format!("(?i){}", patterns.join("|")))?;
                Ok(CompiledRule::Keyword { pattern })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: &[&str] = &["topics:", "areas of expertise:"];
    const KEYWORDS: &[&str] = &["expert"];

    fn chain() -> RuleChain {
        RuleChain::compile(
            "test",
            &[Rule::Header(LABELS), Rule::Keyword(KEYWORDS)],
            &["Fallback"],
        )
        .unwrap()
    }

    #[test]
    fn test_header_rule_splits_items() {
        let items = chain().apply("Intro\nTopics: AI, Ethics and Policy\nOutro");
        assert_eq!(items, vec!["AI", "Ethics", "Policy"]);
    }

    #[test]
    fn test_header_rule_takes_leftmost_label() {
        let text = "Areas of expertise: Sales\nTopics: Marketing";
        assert_eq!(chain().apply(text), vec!["Sales"]);
    }

    #[test]
    fn test_header_rule_is_case_insensitive() {
        assert_eq!(chain().apply("TOPICS: Growth"), vec!["Growth"]);
    }

    #[test]
    fn test_and_inside_words_is_not_a_separator() {
        let items = chain().apply("Topics: Brand strategy, Candid feedback");
        assert_eq!(items, vec!["Brand strategy", "Candid feedback"]);
    }

    #[test]
    fn test_empty_header_falls_through() {
        let items = chain().apply("Topics:\nAn expert in logistics.");
        assert_eq!(items, vec!["An expert in logistics"]);
    }

    #[test]
    fn test_keyword_rule() {
        let items = chain().apply("Hello. I am an Expert in finance, and I teach.");
        assert_eq!(items, vec!["I am an Expert in finance"]);
    }

    #[test]
    fn test_default_when_nothing_matches() {
        assert_eq!(chain().apply("Nothing to see here"), vec!["Fallback"]);
        assert_eq!(chain().apply(""), vec!["Fallback"]);
    }

    #[test]
    fn test_missing_default_is_rejected() {
        let result = RuleChain::compile("empty", &[Rule::Keyword(KEYWORDS)], &[]);
        assert!(matches!(result, Err(ExtractorError::MissingDefault("empty"))));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result = RuleChain::compile("broken", &[Rule::Keyword(&["(unclosed"])], &["x"]);
        assert!(matches!(result, Err(ExtractorError::Pattern(_))));
    }
}
