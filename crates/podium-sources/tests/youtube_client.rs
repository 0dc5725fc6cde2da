//! Integration tests for YouTubeClient using wiremock

use podium_domain::traits::ChannelMetadataSource;
use podium_sources::{MetadataError, YouTubeClient, YouTubeConfig};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server_uri: &str) -> YouTubeClient {
    let config = YouTubeConfig {
        api_key: Some("yt-key".to_string()),
        endpoint: server_uri.to_string(),
        ..YouTubeConfig::default()
    };
    YouTubeClient::new(&config).unwrap()
}

fn channel_body() -> serde_json::Value {
    json!({
        "items": [{
            "id": "UC42",
            "snippet": {"title": "Speaker Channel", "description": "Talks on leadership"},
            "statistics": {"viewCount": "12000", "subscriberCount": "800", "videoCount": "31"}
        }]
    })
}

async fn mount_empty_lookup(server: &MockServer, param: &str) {
    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param(param, "speaker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(server)
        .await;
}

/// Username lookup misses, handle lookup hits, top videos are attached
#[tokio::test]
async fn test_handle_lookup_with_top_videos() {
    let server = MockServer::start().await;

    mount_empty_lookup(&server, "forUsername").await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("forHandle", "speaker"))
        .and(query_param("key", "yt-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(channel_body()))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("channelId", "UC42"))
        .and(query_param("order", "viewCount"))
        .and(query_param("maxResults", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": {"videoId": "v1"}, "snippet": {"title": "Lead well", "description": "Keynote"}},
                {"id": {"videoId": "v2"}, "snippet": {"title": "Teams", "description": ""}}
            ]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "v1,v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {"id": "v2", "statistics": {"viewCount": "300"}},
                {"id": "v1", "statistics": {"viewCount": "9000"}}
            ]
        })))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let channel = client.fetch_channel("speaker").await.unwrap();

    assert_eq!(channel.channel_id, "UC42");
    assert_eq!(channel.title, "Speaker Channel");
    assert_eq!(channel.subscriber_count, "800");
    assert_eq!(channel.top_videos.len(), 2);
    assert_eq!(channel.top_videos[0].title, "Lead well");
    assert_eq!(channel.top_videos[0].view_count, "9000");
    assert_eq!(channel.top_videos[1].view_count, "300");
}

/// No lookup matches: not found
#[tokio::test]
async fn test_channel_not_found() {
    let server = MockServer::start().await;

    for param in ["forUsername", "forHandle", "id"] {
        mount_empty_lookup(&server, param).await;
    }

    let client = create_client(&server.uri());
    let result = client.fetch_channel("speaker").await;

    assert_eq!(result, Err(MetadataError::NotFound("speaker".to_string())));
}

/// A failing video search degrades to an empty list
#[tokio::test]
async fn test_top_videos_failure_is_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .and(query_param("forUsername", "speaker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "UC42", "snippet": {"title": "Quiet"}, "statistics": {}}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let channel = client.fetch_channel("speaker").await.unwrap();

    assert_eq!(channel.title, "Quiet");
    assert_eq!(channel.subscriber_count, "0");
    assert!(channel.top_videos.is_empty());
}

/// A failing channel lookup is an HTTP error
#[tokio::test]
async fn test_channel_lookup_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/channels"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad key"))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let result = client.fetch_channel("speaker").await;

    assert!(matches!(result, Err(MetadataError::Http(_))));
}
