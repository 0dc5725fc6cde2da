//! Channel identifier extraction from video-platform URLs

use crate::error::SourceError;
use url::Url;

/// The identifying part of a channel URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelIdentifier {
    /// `/@handle`
    Handle(String),
    /// `/channel/<id>`
    ChannelId(String),
    /// `/c/<name>`
    CustomName(String),
    /// `/user/<name>`
    Username(String),
    /// `v` parameter of a `/watch` URL
    VideoId(String),
}

impl ChannelIdentifier {
    /// The raw identifier sent to the metadata lookup
    pub fn value(&self) -> &str {
        match self {
            ChannelIdentifier::Handle(v)
            | ChannelIdentifier::ChannelId(v)
            | ChannelIdentifier::CustomName(v)
            | ChannelIdentifier::Username(v)
            | ChannelIdentifier::VideoId(v) => v,
        }
    }
}

fn invalid(url: &str) -> SourceError {
    SourceError::InvalidInput(format!("Invalid YouTube URL format: {}", url))
}

/// Extract the channel identifier from a URL
///
/// Path forms are tried in order (`/@handle`, `/channel/`, `/c/`, `/user/`);
/// a `/watch?v=` URL yields its video id.
///
/// # Errors
///
/// `SourceError::InvalidInput` when the URL does not parse or matches none
/// of the forms.
///
/// # Examples
///
/// ```
/// use podium_sources::{extract_channel_identifier, ChannelIdentifier};
///
/// let id = extract_channel_identifier("https://www.youtube.com/@speaker/videos").unwrap();
/// assert_eq!(id, ChannelIdentifier::Handle("speaker".into()));
/// ```
pub fn extract_channel_identifier(raw: &str) -> Result<ChannelIdentifier, SourceError> {
    let url = Url::parse(raw.trim()).map_err(|_| invalid(raw))?;

    let segments: Vec<&str> = url
        .path_segments()
        .map(|s| s.filter(|seg| !seg.is_empty()).collect())
        .unwrap_or_default();

    let first = segments.first().copied().unwrap_or_default();
    let second = segments.get(1).map(|s| s.to_string());

    if let Some(handle) = first.strip_prefix('@').filter(|h| !h.is_empty()) {
        return Ok(ChannelIdentifier::Handle(handle.to_string()));
    }

    let from_path = match (first, second) {
        ("channel", Some(id)) => Some(ChannelIdentifier::ChannelId(id)),
        ("c", Some(name)) => Some(ChannelIdentifier::CustomName(name)),
        ("user", Some(name)) => Some(ChannelIdentifier::Username(name)),
        _ => None,
    };
    if let Some(identifier) = from_path {
        return Ok(identifier);
    }

    if first == "watch" {
        let video = url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());
        if let Some(video) = video {
            return Ok(ChannelIdentifier::VideoId(video));
        }
    }

    Err(invalid(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_forms() {
        let cases = [
            ("https://youtube.com/@speaker", ChannelIdentifier::Handle("speaker".into())),
            (
                "https://www.youtube.com/channel/UC123/featured",
                ChannelIdentifier::ChannelId("UC123".into()),
            ),
            ("https://youtube.com/c/SpeakerName", ChannelIdentifier::CustomName("SpeakerName".into())),
            ("https://youtube.com/user/oldname", ChannelIdentifier::Username("oldname".into())),
        ];
        for (url, expected) in cases {
            assert_eq!(extract_channel_identifier(url).unwrap(), expected, "{}", url);
        }
    }

    #[test]
    fn test_watch_url_yields_video_id() {
        let id = extract_channel_identifier("https://youtube.com/watch?v=abc123").unwrap();
        assert_eq!(id, ChannelIdentifier::VideoId("abc123".into()));
        assert_eq!(id.value(), "abc123");
    }

    #[test]
    fn test_watch_without_video_is_invalid() {
        let result = extract_channel_identifier("https://youtube.com/watch?list=xyz");
        assert!(matches!(result, Err(SourceError::InvalidInput(_))));
    }

    #[test]
    fn test_unrecognized_urls() {
        for url in [
            "not a url",
            "youtube.com/@speaker",
            "https://youtube.com/",
            "https://youtube.com/channel/",
            "https://youtube.com/@",
            "https://youtube.com/playlist?list=1",
        ] {
            assert!(
                matches!(extract_channel_identifier(url), Err(SourceError::InvalidInput(_))),
                "{}",
                url
            );
        }
    }
}
