//! Exercises `GeminiClient` against a local axum server standing in for the Gemini API.

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    Json, Router,
};
use echoroom_core::{
    ApiKey, CoreConfig, GeminiClient, MoodClassifier, MoodError, TextGenerator, DEFAULT_MOOD,
};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct Seen {
    requests: Arc<Mutex<Vec<(String, HashMap<String, String>, Value)>>>,
}

#[derive(Clone)]
struct FakeGemini {
    status: StatusCode,
    body: &'static str,
    seen: Seen,
}

async fn generate_content(
    State(fake): State<FakeGemini>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<Value>,
) -> (StatusCode, [(&'static str, &'static str); 1], &'static str) {
    fake.seen
        .requests
        .lock()
        .unwrap()
        .push((uri.path().to_string(), query, body));
    (fake.status, [("content-type", "application/json")], fake.body)
}

async fn spawn_fake(status: StatusCode, body: &'static str) -> (SocketAddr, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .fallback(generate_content)
        .with_state(FakeGemini {
            status,
            body,
            seen: seen.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, seen)
}

fn config(base: String) -> CoreConfig {
    CoreConfig::new(
        ApiKey::new("test-key-123").unwrap(),
        base,
        "gemini-pro".into(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn test_generate_posts_prompt_with_key_query() {
    let (addr, seen) = spawn_fake(
        StatusCode::OK,
        r#"{"candidates":[{"content":{"parts":[{"text":"Hopeful"}]}}]}"#,
    )
    .await;
    let client = GeminiClient::new(&config(format!("http://{addr}/v1beta/models"))).unwrap();

    let response = client.generate("the prompt").await.unwrap();
    assert_eq!(response.first_text(), Some("Hopeful"));

    let requests = seen.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (path, query, body) = &requests[0];
    assert_eq!(path, "/v1beta/models/gemini-pro:generateContent");
    assert_eq!(query.get("key").map(String::as_str), Some("test-key-123"));
    assert_eq!(body["contents"][0]["parts"][0]["text"], "the prompt");
}

#[tokio::test]
async fn test_classifier_end_to_end() {
    let (addr, _seen) = spawn_fake(
        StatusCode::OK,
        r#"{"candidates":[{"content":{"parts":[{"text":" Depressed "}]}}]}"#,
    )
    .await;
    let classifier = MoodClassifier::from_config(&config(format!("http://{addr}"))).unwrap();

    let mood = classifier
        .classify("I feel like giving up today")
        .await
        .unwrap();
    assert_eq!(mood, "Depressed");
}

#[tokio::test]
async fn test_classifier_empty_candidates_is_neutral() {
    let (addr, _seen) = spawn_fake(StatusCode::OK, r#"{"candidates":[]}"#).await;
    let classifier = MoodClassifier::from_config(&config(format!("http://{addr}"))).unwrap();

    assert_eq!(classifier.classify("great day!").await.unwrap(), DEFAULT_MOOD);
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let (addr, _seen) = spawn_fake(
        StatusCode::BAD_REQUEST,
        r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#,
    )
    .await;
    let client = GeminiClient::new(&config(format!("http://{addr}"))).unwrap();

    match client.generate("prompt").await {
        Err(MoodError::UpstreamStatus { status, message }) => {
            assert_eq!(status, 400);
            assert!(message.starts_with("API key not valid"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_json_is_error() {
    let (addr, _seen) = spawn_fake(StatusCode::OK, "<html>gateway</html>").await;
    let client = GeminiClient::new(&config(format!("http://{addr}"))).unwrap();

    let result = client.generate("prompt").await;
    assert!(matches!(result, Err(MoodError::Deserialization(_))));
}

#[tokio::test]
async fn test_connection_refused_hides_key() {
    // Bind then drop to obtain a port nothing is listening on.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = GeminiClient::new(&config(format!("http://{addr}"))).unwrap();

    let err = client.generate("prompt").await.unwrap_err();
    assert!(matches!(err, MoodError::UpstreamRequest(_)));
    let message = err.to_string();
    assert!(!message.is_empty());
    assert!(!message.contains("test-key-123"));
}
