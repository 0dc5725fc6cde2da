//! Analysis orchestration

use crate::error::AnalyzerError;
use crate::fallback::{deterministic_fallback, NoFallback, UNEXPECTED_FAILURE};
use crate::notify::{Notice, Notifier, TracingNotifier};
use crate::synthesis::synthesis_prompt;
use podium_domain::traits::{ChannelMetadataSource, FallbackChannel, LlmProvider};
use podium_domain::{AnalysisOutcome, InputSet, SourceKind, SourceResult, UrlSource};
use podium_extractor::extract_outcome;
use podium_sources::SourceAdapters;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, warn};

fn warning_title(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Document => "Document Processing Warning",
        SourceKind::StructuredProfile => "LinkedIn Profile Warning",
        SourceKind::VideoChannel => "YouTube Analysis Warning",
        SourceKind::Url(UrlSource::Website) => "Website Analysis Warning",
        SourceKind::Url(UrlSource::ProfessionalNetwork) => "LinkedIn Analysis Warning",
        SourceKind::Url(UrlSource::PublishedBook) => "Book Analysis Warning",
    }
}

/// Drives every source, then synthesis and field extraction
///
/// Sources run one at a time in priority order. A failing source produces
/// a warning and is left out; the run always ends in an outcome unless no
/// source was given at all.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use podium_analyzer::Analyzer;
/// use podium_domain::{AnalysisInput, InputSet, UrlSource};
/// use podium_llm::MockProvider;
/// use podium_sources::MockChannelSource;
///
/// # let rt = tokio::runtime::Runtime::new().unwrap();
/// # rt.block_on(async {
/// let analyzer = Analyzer::new(
///     Arc::new(MockProvider::new("Hello!\n\nTopics: Rowing and Teamwork")),
///     Arc::new(MockChannelSource::new()),
/// );
///
/// let inputs = InputSet::new().with(AnalysisInput::url(UrlSource::Website, "https://me.example"));
/// let outcome = analyzer.analyze(&inputs).await.unwrap();
/// assert_eq!(outcome.topics, vec!["Rowing", "Teamwork"]);
/// # });
/// ```
pub struct Analyzer<L, M, F = NoFallback> {
    sources: SourceAdapters<L, M>,
    llm: Arc<L>,
    fallback: F,
    notifier: Arc<dyn Notifier>,
}

impl<L, M> Analyzer<L, M, NoFallback>
where
    L: LlmProvider,
    L::Error: Display,
    M: ChannelMetadataSource,
    M::Error: Display,
{
    /// Create an analyzer without a secondary endpoint
    pub fn new(llm: Arc<L>, metadata: Arc<M>) -> Self {
        Self {
            sources: SourceAdapters::new(Arc::clone(&llm), metadata),
            llm,
            fallback: NoFallback,
            notifier: Arc::new(TracingNotifier),
        }
    }
}

impl<L, M, F> Analyzer<L, M, F> {
    /// Use a secondary endpoint when every source fails
    pub fn with_fallback<G>(self, fallback: G) -> Analyzer<L, M, G> {
        Analyzer {
            sources: self.sources,
            llm: self.llm,
            fallback,
            notifier: self.notifier,
        }
    }

    /// Send notices to `notifier` instead of the log
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }
}

impl<L, M, F> Analyzer<L, M, F>
where
    L: LlmProvider,
    L::Error: Display,
    M: ChannelMetadataSource,
    M::Error: Display,
    F: FallbackChannel,
    F::Error: Display,
{
    /// Produce one outcome from the given inputs
    ///
    /// # Errors
    ///
    /// `AnalyzerError::NoInput` when `inputs` is empty; nothing is called.
    pub async fn analyze(&self, inputs: &InputSet) -> Result<AnalysisOutcome, AnalyzerError> {
        if inputs.is_empty() {
            return Err(AnalyzerError::NoInput);
        }

        let texts = self.collect_texts(inputs).await;
        info!("{} of {} source(s) produced text", texts.len(), inputs.len());

        let outcome = match texts.as_slice() {
            [] => self.fall_back(inputs).await,
            [only] => {
                self.notify(Notice::info(
                    "Analysis Complete",
                    "Your profile has been generated.",
                ));
                extract_outcome(only)
            }
            _ => self.synthesize(&texts).await,
        };

        Ok(outcome)
    }

    /// Run each source in priority order and keep the successful texts
    async fn collect_texts(&self, inputs: &InputSet) -> Vec<String> {
        let has_profile = inputs.contains(SourceKind::StructuredProfile);
        let mut texts = Vec::new();

        for input in inputs.iter() {
            let kind = input.kind();
            if has_profile && kind == SourceKind::Url(UrlSource::ProfessionalNetwork) {
                debug!("Skipping {}: structured profile is present", kind);
                continue;
            }

            debug!("Analyzing {}", kind);
            match self.sources.analyze(input).await {
                SourceResult::Ok(text) => texts.push(text),
                SourceResult::Failed(reason) => {
                    debug!("{} failed: {}", kind, reason);
                    self.notify(Notice::warning(
                        warning_title(kind),
                        format!("Could not analyze your {}: {}", kind, reason),
                    ));
                }
            }
        }

        texts
    }

    async fn synthesize(&self, texts: &[String]) -> AnalysisOutcome {
        info!("Synthesizing {} source texts", texts.len());

        match self.llm.complete(&synthesis_prompt(texts)).await {
            Ok(narrative) => {
                self.notify(Notice::info(
                    "Analysis Complete",
                    format!("Your profile combines {} sources.", texts.len()),
                ));
                extract_outcome(&narrative)
            }
            Err(e) => {
                warn!("Synthesis failed: {}", e);
                self.notify(Notice::error("Analysis Error", UNEXPECTED_FAILURE));
                deterministic_fallback(Some(UNEXPECTED_FAILURE))
            }
        }
    }

    async fn fall_back(&self, inputs: &InputSet) -> AnalysisOutcome {
        match self.fallback.submit(inputs).await {
            Ok(outcome) => {
                info!("Secondary endpoint produced the outcome");
                self.notify(Notice::info(
                    "Analysis Complete",
                    "Your profile was generated by the secondary analysis service.",
                ));
                outcome
            }
            Err(e) => {
                debug!("Secondary endpoint unavailable: {}", e);
                self.notify(Notice::warning(
                    "Analysis Limited",
                    "None of your sources could be analyzed in detail. A generic profile was generated.",
                ));
                deterministic_fallback(None)
            }
        }
    }

    fn notify(&self, notice: Notice) {
        self.notifier.notify(notice);
    }
}
