//! Merging several source texts into one narrative

use podium_domain::ProviderPrompt;

/// Visible separator placed between source texts
pub const SOURCE_SEPARATOR: &str = "\n\n---\n\n";

const SYNTHESIS_SYSTEM: &str = "You are a professional writer. The texts below were each \
written from a different source about the same person. Synthesize multiple sources into one \
coherent first-person narrative. Keep labeled lines \"Topics:\" and \"Personality:\" for \
comma-separated lists, and separate paragraphs with a blank line.";

/// Prompt asking for one narrative from texts given in priority order
pub fn synthesis_prompt(texts: &[String]) -> ProviderPrompt {
    ProviderPrompt::new(SYNTHESIS_SYSTEM, texts.join(SOURCE_SEPARATOR))
}
