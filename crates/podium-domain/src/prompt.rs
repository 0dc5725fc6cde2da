//! Prompt pair handed to the language model

/// A system instruction and the user content it applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderPrompt {
    /// System role instruction
    pub system: String,
    /// User role content
    pub user: String,
}

impl ProviderPrompt {
    /// Create a prompt pair
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}
