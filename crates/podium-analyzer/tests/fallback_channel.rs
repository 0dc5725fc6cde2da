//! Integration tests for HttpFallbackChannel using wiremock

use podium_analyzer::{Analyzer, FallbackConfig, FallbackError, HttpFallbackChannel, FALLBACK_SUMMARY};
use podium_domain::traits::FallbackChannel;
use podium_domain::{AnalysisInput, DocumentInput, InputSet, UrlSource};
use podium_llm::{GatewayError, MockProvider};
use podium_sources::MockChannelSource;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn channel(server_uri: &str) -> HttpFallbackChannel {
    HttpFallbackChannel::new(&FallbackConfig::with_endpoint(format!("{}/analyze", server_uri)))
        .unwrap()
}

fn inputs() -> InputSet {
    InputSet::new()
        .with(AnalysisInput::Document(DocumentInput::new("resume.pdf", b"%PDF-1.4".to_vec())))
        .with(AnalysisInput::video_channel("https://youtube.com/@speaker"))
        .with(AnalysisInput::url(UrlSource::PublishedBook, "https://books.example/me"))
}

/// Present inputs are sent as multipart fields
#[tokio::test]
async fn test_submit_sends_present_inputs() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_string_contains("name=\"pdf\"; filename=\"resume.pdf\""))
        .and(body_string_contains("name=\"youtubeUrl\""))
        .and(body_string_contains("https://books.example/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": ["Hello!", "Thanks!"],
            "topics": ["Writing"],
            "personality": ["Curious"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = channel(&server.uri()).submit(&inputs()).await.unwrap();

    assert_eq!(outcome.summary_paragraphs, vec!["Hello!", "Thanks!"]);
    assert_eq!(outcome.topics, vec!["Writing"]);
    assert_eq!(outcome.personality_traits, vec!["Curious"]);
}

/// Missing summary uses the placeholder
#[tokio::test]
async fn test_submit_defaults_missing_summary() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"topics": ["Writing"]})))
        .mount(&server)
        .await;

    let outcome = channel(&server.uri()).submit(&inputs()).await.unwrap();
    assert_eq!(outcome.summary_paragraphs, vec!["No summary available"]);
}

#[tokio::test]
async fn test_submit_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = channel(&server.uri()).submit(&inputs()).await;
    assert!(matches!(result, Err(FallbackError::Http(_))));
}

#[tokio::test]
async fn test_unconfigured_channel() {
    let channel = HttpFallbackChannel::new(&FallbackConfig::default()).unwrap();
    let result = channel.submit(&inputs()).await;
    assert_eq!(result, Err(FallbackError::NotConfigured));
}

/// Every source fails, the endpoint answers
#[tokio::test]
async fn test_analyzer_uses_endpoint_outcome() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": ["From the service"],
            "topics": ["Writing"],
            "personality": ["Curious"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut llm = MockProvider::default();
    llm.add_error("published book URL", GatewayError::Authentication("bad key".into()));
    let analyzer = Analyzer::new(Arc::new(llm), Arc::new(MockChannelSource::new()))
        .with_fallback(channel(&server.uri()));

    let inputs = InputSet::new()
        .with(AnalysisInput::url(UrlSource::PublishedBook, "https://books.example/me"));
    let outcome = analyzer.analyze(&inputs).await.unwrap();

    assert_eq!(outcome.summary_paragraphs, vec!["From the service"]);
}

/// Every source fails, the endpoint fails too
#[tokio::test]
async fn test_analyzer_falls_through_endpoint_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let mut llm = MockProvider::default();
    llm.add_error("website URL", GatewayError::RateLimit("slow down".into()));
    let analyzer = Analyzer::new(Arc::new(llm), Arc::new(MockChannelSource::new()))
        .with_fallback(channel(&server.uri()));

    let inputs = InputSet::new().with(AnalysisInput::url(UrlSource::Website, "https://me.example"));
    let outcome = analyzer.analyze(&inputs).await.unwrap();

    assert_eq!(outcome.summary_paragraphs, vec![FALLBACK_SUMMARY]);
    assert!(outcome.error.is_none());
}
