//! Analysis inputs and their priority order

use crate::profile::StructuredProfile;
use std::collections::BTreeMap;
use std::fmt;

/// Web sources analyzed from their URL alone
///
/// Declaration order is the order in which URL sources are analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UrlSource {
    /// Personal or company website
    Website,
    /// Professional-network profile page
    ProfessionalNetwork,
    /// Published book page
    PublishedBook,
}

impl UrlSource {
    /// All URL sources in analysis order
    pub const ALL: [UrlSource; 3] = [
        UrlSource::Website,
        UrlSource::ProfessionalNetwork,
        UrlSource::PublishedBook,
    ];

    /// Human-readable label embedded in provider prompts
    pub fn label(&self) -> &'static str {
        match self {
            UrlSource::Website => "website URL",
            UrlSource::ProfessionalNetwork => "LinkedIn URL",
            UrlSource::PublishedBook => "published book URL",
        }
    }

    /// Form field name used by the secondary analysis endpoint
    pub fn form_field(&self) -> &'static str {
        match self {
            UrlSource::Website => "websiteUrl",
            UrlSource::ProfessionalNetwork => "linkedinUrl",
            UrlSource::PublishedBook => "bookUrl",
        }
    }
}

/// Kind of an analysis input
///
/// The derived ordering is the analysis priority: document, structured
/// profile, video channel, then each URL source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
    /// Uploaded document
    Document,
    /// Profile record imported from the professional network
    StructuredProfile,
    /// Video channel URL
    VideoChannel,
    /// Any other URL
    Url(UrlSource),
}

impl SourceKind {
    /// Short name used in logs and notifications
    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::Document => "document",
            SourceKind::StructuredProfile => "LinkedIn profile",
            SourceKind::VideoChannel => "YouTube channel",
            SourceKind::Url(source) => source.label(),
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw uploaded document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInput {
    /// Original file name (used to pick a text extraction method)
    pub file_name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

impl DocumentInput {
    /// Create a document input from a file name and its contents
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Whether the document is a PDF, judged by magic bytes or extension
    pub fn is_pdf(&self) -> bool {
        self.bytes.starts_with(b"%PDF") || self.file_name.to_lowercase().ends_with(".pdf")
    }
}

/// One content source about the person being profiled
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisInput {
    /// Uploaded document
    Document(DocumentInput),
    /// Structured profile record
    StructuredProfile(StructuredProfile),
    /// Arbitrary URL with its source type
    GenericUrl {
        /// The URL as entered
        url: String,
        /// Which kind of page the URL points at
        source: UrlSource,
    },
    /// Video channel URL
    VideoChannel {
        /// The URL as entered
        url: String,
    },
}

impl AnalysisInput {
    /// Create a generic URL input
    pub fn url(source: UrlSource, url: impl Into<String>) -> Self {
        AnalysisInput::GenericUrl {
            url: url.into(),
            source,
        }
    }

    /// Create a video channel input
    pub fn video_channel(url: impl Into<String>) -> Self {
        AnalysisInput::VideoChannel { url: url.into() }
    }

    /// The kind of this input
    pub fn kind(&self) -> SourceKind {
        match self {
            AnalysisInput::Document(_) => SourceKind::Document,
            AnalysisInput::StructuredProfile(_) => SourceKind::StructuredProfile,
            AnalysisInput::GenericUrl { source, .. } => SourceKind::Url(*source),
            AnalysisInput::VideoChannel { .. } => SourceKind::VideoChannel,
        }
    }

    /// Human-readable label for URL inputs
    pub fn label(&self) -> Option<&'static str> {
        match self {
            AnalysisInput::GenericUrl { source, .. } => Some(source.label()),
            _ => None,
        }
    }

    /// The URL carried by URL-bearing inputs
    pub fn url_value(&self) -> Option<&str> {
        match self {
            AnalysisInput::GenericUrl { url, .. } | AnalysisInput::VideoChannel { url } => {
                Some(url.as_str())
            }
            _ => None,
        }
    }

    /// URL inputs containing only whitespace count as absent
    fn is_blank(&self) -> bool {
        self.url_value().is_some_and(|url| url.trim().is_empty())
    }
}

/// The inputs available to one analysis run
///
/// Holds at most one input per [`SourceKind`]; inserting a second input of
/// the same kind replaces the first. Iteration follows analysis priority.
///
/// # Examples
///
/// ```
/// use podium_domain::{AnalysisInput, InputSet, SourceKind, UrlSource};
///
/// let inputs = InputSet::new()
///     .with(AnalysisInput::url(UrlSource::PublishedBook, "https://books.example/me"))
///     .with(AnalysisInput::video_channel("https://youtube.com/@speaker"))
///     .with(AnalysisInput::url(UrlSource::Website, "   "));
///
/// let kinds: Vec<_> = inputs.iter().map(|i| i.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![SourceKind::VideoChannel, SourceKind::Url(UrlSource::PublishedBook)]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSet {
    inputs: BTreeMap<SourceKind, AnalysisInput>,
}

impl InputSet {
    /// Create an empty input set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an input, returning the input of the same kind it replaced
    ///
    /// Blank URLs are ignored.
    pub fn insert(&mut self, input: AnalysisInput) -> Option<AnalysisInput> {
        if input.is_blank() {
            return None;
        }
        self.inputs.insert(input.kind(), input)
    }

    /// Builder-style [`InputSet::insert`]
    pub fn with(mut self, input: AnalysisInput) -> Self {
        self.insert(input);
        self
    }

    /// Whether no source is available
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Number of available sources
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Whether an input of the given kind is present
    pub fn contains(&self, kind: SourceKind) -> bool {
        self.inputs.contains_key(&kind)
    }

    /// The input of the given kind, if present
    pub fn get(&self, kind: SourceKind) -> Option<&AnalysisInput> {
        self.inputs.get(&kind)
    }

    /// The uploaded document, if present
    pub fn document(&self) -> Option<&DocumentInput> {
        match self.get(SourceKind::Document) {
            Some(AnalysisInput::Document(doc)) => Some(doc),
            _ => None,
        }
    }

    /// Inputs in analysis priority order
    pub fn iter(&self) -> impl Iterator<Item = &AnalysisInput> {
        self.inputs.values()
    }
}

impl FromIterator<AnalysisInput> for InputSet {
    fn from_iter<I: IntoIterator<Item = AnalysisInput>>(iter: I) -> Self {
        let mut set = InputSet::new();
        for input in iter {
            set.insert(input);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let inputs: InputSet = vec![
            AnalysisInput::url(UrlSource::ProfessionalNetwork, "https://linkedin.com/in/jane"),
            AnalysisInput::url(UrlSource::Website, "https://jane.example"),
            AnalysisInput::video_channel("https://youtube.com/@jane"),
            AnalysisInput::StructuredProfile(StructuredProfile::default()),
            AnalysisInput::Document(DocumentInput::new("cv.txt", b"hello".to_vec())),
        ]
        .into_iter()
        .collect();

        let kinds: Vec<_> = inputs.iter().map(|i| i.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SourceKind::Document,
                SourceKind::StructuredProfile,
                SourceKind::VideoChannel,
                SourceKind::Url(UrlSource::Website),
                SourceKind::Url(UrlSource::ProfessionalNetwork),
            ]
        );
    }

    #[test]
    fn test_one_input_per_kind() {
        let mut inputs = InputSet::new();
        assert!(inputs.insert(AnalysisInput::url(UrlSource::Website, "https://a.example")).is_none());

        let replaced = inputs.insert(AnalysisInput::url(UrlSource::Website, "https://b.example"));
        assert_eq!(replaced.and_then(|i| i.url_value().map(String::from)), Some("https://a.example".to_string()));
        assert_eq!(inputs.len(), 1);
    }

    #[test]
    fn test_blank_urls_are_absent() {
        let inputs = InputSet::new()
            .with(AnalysisInput::url(UrlSource::Website, "  \t"))
            .with(AnalysisInput::video_channel(""));
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_document_detection() {
        let pdf = DocumentInput::new("upload.bin", b"%PDF-1.7".to_vec());
        assert!(pdf.is_pdf());

        let by_name = DocumentInput::new("Talk.PDF", Vec::new());
        assert!(by_name.is_pdf());

        let text = DocumentInput::new("bio.txt", b"plain".to_vec());
        assert!(!text.is_pdf());
    }

    #[test]
    fn test_labels() {
        let input = AnalysisInput::url(UrlSource::PublishedBook, "https://books.example");
        assert_eq!(input.label(), Some("published book URL"));
        assert_eq!(AnalysisInput::video_channel("x").label(), None);
        assert_eq!(SourceKind::Url(UrlSource::Website).to_string(), "website URL");
    }
}
