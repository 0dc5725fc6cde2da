//! Video channel metadata consumed by the channel source adapter

/// Statistics and top content of a video channel
///
/// Counts are kept as the decimal strings the video platform returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelMetadata {
    /// Canonical channel identifier
    pub channel_id: String,
    /// Channel title
    pub title: String,
    /// Channel description
    pub description: String,
    /// Lifetime view count
    pub view_count: String,
    /// Subscriber count ("0" when hidden)
    pub subscriber_count: String,
    /// Number of published videos
    pub video_count: String,
    /// Most viewed videos, highest first
    pub top_videos: Vec<VideoSummary>,
}

/// One of a channel's top videos
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoSummary {
    /// Video title
    pub title: String,
    /// Video description
    pub description: String,
    /// View count
    pub view_count: String,
}
