//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{ConsoleNotifier, Formatter};
use crate::session_store::FileSessionStore;
use podium_analyzer::{Analyzer, HttpFallbackChannel};
use podium_domain::{AnalysisInput, DocumentInput, InputSet, StructuredProfile, UrlSource};
use podium_llm::OpenAiProvider;
use podium_sources::{ProfileSession, YouTubeClient};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Execute the analyze command.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    session_path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    let inputs = build_inputs(&args, session_path)?;

    let llm = OpenAiProvider::new(&config.provider).map_err(|e| CliError::Setup(e.to_string()))?;
    let metadata =
        YouTubeClient::new(&config.youtube).map_err(|e| CliError::Setup(e.to_string()))?;
    let fallback =
        HttpFallbackChannel::new(&config.fallback).map_err(|e| CliError::Setup(e.to_string()))?;

    let analyzer = Analyzer::new(Arc::new(llm), Arc::new(metadata))
        .with_fallback(fallback)
        .with_notifier(Arc::new(ConsoleNotifier::new(formatter.clone())));

    let outcome = analyzer.analyze(&inputs).await?;
    println!("{}", formatter.format_outcome(&outcome)?);

    Ok(())
}

/// Collect the inputs named on the command line.
///
/// Without `--profile`, an unexpired profile from the session cache is used.
pub fn build_inputs(args: &AnalyzeArgs, session_path: &Path) -> Result<InputSet> {
    let mut inputs = InputSet::new();

    if let Some(path) = &args.document {
        inputs.insert(AnalysisInput::Document(read_document(path)?));
    }

    let profile = match &args.profile {
        Some(path) => Some(read_profile(path)?),
        None => cached_profile(session_path),
    };
    if let Some(profile) = profile {
        inputs.insert(AnalysisInput::StructuredProfile(profile));
    }

    if let Some(url) = &args.youtube {
        inputs.insert(AnalysisInput::video_channel(url.as_str()));
    }
    let urls = [
        (UrlSource::Website, &args.website),
        (UrlSource::ProfessionalNetwork, &args.linkedin),
        (UrlSource::PublishedBook, &args.book),
    ];
    for (source, url) in urls {
        if let Some(url) = url {
            inputs.insert(AnalysisInput::url(source, url.as_str()));
        }
    }

    debug!("Built {} input(s)", inputs.len());
    Ok(inputs)
}

fn read_document(path: &Path) -> Result<DocumentInput> {
    let bytes = fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(DocumentInput::new(file_name, bytes))
}

/// Read a profile record from a JSON file.
pub fn read_profile(path: &Path) -> Result<StructuredProfile> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn cached_profile(session_path: &Path) -> Option<StructuredProfile> {
    let restored = FileSessionStore::open(session_path)
        .map(ProfileSession::new)
        .map_err(|e| e.to_string())
        .and_then(|mut session| session.restore().map_err(|e| e.to_string()));

    match restored {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Ignoring unreadable session cache: {}", e);
            None
        }
    }
}
