//! Video-platform data API client
//!
//! Resolves a channel identifier to channel statistics plus the channel's
//! most viewed videos.
//!
//! # Lookup order
//!
//! The identifier is tried as a legacy username, then as a handle, then as
//! a channel id. The first lookup returning a channel wins.
//!
//! Top videos are best effort: if the search or statistics call fails the
//! channel is returned with an empty video list.

use crate::error::MetadataError;
use async_trait::async_trait;
use podium_domain::traits::ChannelMetadataSource;
use podium_domain::{ChannelMetadata, VideoSummary};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default base URL of the data API
pub const DEFAULT_ENDPOINT: &str = "https://youtube.googleapis.com/youtube/v3";

/// Default number of top videos requested
pub const DEFAULT_MAX_TOP_VIDEOS: u32 = 5;

/// Default request timeout (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const LOOKUP_PARAMS: [&str; 3] = ["forUsername", "forHandle", "id"];

/// Data API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YouTubeConfig {
    /// API key sent as the `key` query parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the data API
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Number of most viewed videos to fetch
    #[serde(default = "default_max_top_videos")]
    pub max_top_videos: u32,

    /// Request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_max_top_videos() -> u32 {
    DEFAULT_MAX_TOP_VIDEOS
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for YouTubeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            max_top_videos: DEFAULT_MAX_TOP_VIDEOS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl YouTubeConfig {
    /// The API key, ignoring blank values
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("endpoint must not be empty".to_string());
        }
        if self.max_top_videos == 0 || self.max_top_videos > 50 {
            return Err("max_top_videos must be between 1 and 50".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }
}

#[derive(Deserialize)]
struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

#[derive(Deserialize)]
struct ChannelItem {
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    statistics: ChannelStatistics,
}

#[derive(Deserialize, Default)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ChannelStatistics {
    view_count: Option<String>,
    subscriber_count: Option<String>,
    video_count: Option<String>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchId {
    video_id: Option<String>,
}

#[derive(Deserialize)]
struct VideoItem {
    id: String,
    #[serde(default)]
    statistics: VideoStatistics,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    view_count: Option<String>,
}

fn count(value: Option<String>) -> String {
    value.unwrap_or_else(|| "0".to_string())
}

/// Data API client
pub struct YouTubeClient {
    endpoint: String,
    api_key: Option<String>,
    max_top_videos: u32,
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `MetadataError::Configuration` if the HTTP client cannot be
    /// built.
    pub fn new(config: &YouTubeConfig) -> Result<Self, MetadataError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                MetadataError::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.credential().map(str::to_string),
            max_top_videos: config.max_top_videos,
            client,
        })
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        resource: &str,
        query: &[(&str, &str)],
        api_key: &str,
    ) -> Result<ListResponse<T>, MetadataError> {
        let url = format!("{}/{}", self.endpoint, resource);
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .query(&[("key", api_key)])
            .send()
            .await
            .map_err(|e| MetadataError::Http(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Http(format!("{} returned HTTP {}", resource, status)));
        }

        response
            .json::<ListResponse<T>>()
            .await
            .map_err(|e| MetadataError::InvalidResponse(format!("{}: {}", resource, e)))
    }

    async fn find_channel(
        &self,
        identifier: &str,
        api_key: &str,
    ) -> Result<ChannelItem, MetadataError> {
        for param in LOOKUP_PARAMS {
            let response: ListResponse<ChannelItem> = self
                .get(
                    "channels",
                    &[("part", "snippet,statistics"), (param, identifier)],
                    api_key,
                )
                .await?;

            if let Some(channel) = response.items.into_iter().next() {
                debug!("Resolved '{}' via {} to {}", identifier, param, channel.id);
                return Ok(channel);
            }
        }

        Err(MetadataError::NotFound(identifier.to_string()))
    }

    async fn top_videos(
        &self,
        channel_id: &str,
        api_key: &str,
    ) -> Result<Vec<VideoSummary>, MetadataError> {
        let max_results = self.max_top_videos.to_string();
        let search: ListResponse<SearchItem> = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("channelId", channel_id),
                    ("order", "viewCount"),
                    ("type", "video"),
                    ("maxResults", &max_results),
                ],
                api_key,
            )
            .await?;

        let found: Vec<(String, Snippet)> = search
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id.map(|id| (id, item.snippet)))
            .collect();
        if found.is_empty() {
            return Ok(Vec::new());
        }

        let ids = found
            .iter()
            .map(|(id, _)| id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let stats: ListResponse<VideoItem> = self
            .get("videos", &[("part", "statistics"), ("id", &ids)], api_key)
            .await?;

        Ok(found
            .into_iter()
            .map(|(id, snippet)| {
                let view_count = stats
                    .items
                    .iter()
                    .find(|video| video.id == id)
                    .and_then(|video| video.statistics.view_count.clone());
                VideoSummary {
                    title: snippet.title,
                    description: snippet.description,
                    view_count: count(view_count),
                }
            })
            .collect())
    }
}

#[async_trait]
impl ChannelMetadataSource for YouTubeClient {
    type Error = MetadataError;

    async fn fetch_channel(&self, identifier: &str) -> Result<ChannelMetadata, Self::Error> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            MetadataError::Configuration("YouTube API key is not configured".to_string())
        })?;

        let channel = self.find_channel(identifier, api_key).await?;

        let top_videos = match self.top_videos(&channel.id, api_key).await {
            Ok(videos) => videos,
            Err(e) => {
                warn!("Could not fetch top videos for {}: {}", channel.id, e);
                Vec::new()
            }
        };

        Ok(ChannelMetadata {
            channel_id: channel.id,
            title: channel.snippet.title,
            description: channel.snippet.description,
            view_count: count(channel.statistics.view_count),
            subscriber_count: count(channel.statistics.subscriber_count),
            video_count: count(channel.statistics.video_count),
            top_videos,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = YouTubeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_top_videos, 5);
        assert!(config.credential().is_none());
    }

    #[test]
    fn test_invalid_config() {
        let config = YouTubeConfig {
            max_top_videos: 0,
            ..YouTubeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml() {
        let config = YouTubeConfig::from_toml(r#"api_key = "yt-key""#).unwrap();
        assert_eq!(config.credential(), Some("yt-key"));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_hidden_subscriber_count_defaults_to_zero() {
        let body = r#"{"items":[{"id":"UC1","snippet":{"title":"T"},"statistics":{"viewCount":"9","hiddenSubscriberCount":true}}]}"#;
        let parsed: ListResponse<ChannelItem> = serde_json::from_str(body).unwrap();
        let stats = &parsed.items[0].statistics;
        assert_eq!(count(stats.subscriber_count.clone()), "0");
        assert_eq!(count(stats.view_count.clone()), "9");
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let config = YouTubeConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            ..YouTubeConfig::default()
        };
        let client = YouTubeClient::new(&config).unwrap();
        let result = client.fetch_channel("speaker").await;
        assert!(matches!(result, Err(MetadataError::Configuration(_))));
    }
}
