//! Integration tests for GeminiClient
//!
//! Runs the client against a local axum server that stands in for the
//! Generative Language API.

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use llm::{GeminiClient, LlmError, RemoteLlmConfig, TextModel};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

/// Echo the prompt back inside a Gemini-shaped response, or fail on demand
/// depending on the API key.
async fn generate_content(
    Path(model): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if params.contains_key("key") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": {"message": "API key must not be sent in the query string"}})),
        );
    }

    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    match key {
        "bad-key" => {
            return (
                StatusCode::FORBIDDEN,
                Json(json!({"error": {"message": "API key not valid"}})),
            )
        }
        "quota-key" => {
            return (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"error": {"message": "Quota exceeded"}})),
            )
        }
        "broken-key" => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": {"message": "backend exploded"}})),
            )
        }
        _ => {}
    }

    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    (
        StatusCode::OK,
        Json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": format!("  [{}] {}\n", model, prompt)}]
                },
                "finishReason": "STOP"
            }]
        })),
    )
}

async fn spawn_fake_gemini() -> SocketAddr {
    let app = Router::new().route("/v1beta/models/:model", post(generate_content));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client_for(addr: SocketAddr, key: &str) -> GeminiClient {
    let config = RemoteLlmConfig::new(key, format!("http://{}/v1beta", addr), "gemini-test");
    GeminiClient::new(config).unwrap()
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let addr = spawn_fake_gemini().await;
    let client = client_for(addr, "good-key");

    let text = client.generate("a todo app").await.unwrap();

    // The path segment includes the ":generateContent" suffix
    assert_eq!(text, "  [gemini-test:generateContent] a todo app\n");
}

#[tokio::test]
async fn test_forbidden_maps_to_auth_error() {
    let addr = spawn_fake_gemini().await;
    let client = client_for(addr, "bad-key");

    let err = client.generate("anything").await.unwrap_err();
    assert!(matches!(err, LlmError::AuthenticationError(_)));
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn test_too_many_requests_maps_to_rate_limit() {
    let addr = spawn_fake_gemini().await;
    let client = client_for(addr, "quota-key");

    let err = client.generate("anything").await.unwrap_err();
    assert!(matches!(err, LlmError::RateLimitExceeded(_)));
}

#[tokio::test]
async fn test_server_error_maps_to_provider_error() {
    let addr = spawn_fake_gemini().await;
    let client = client_for(addr, "broken-key");

    let err = client.generate("anything").await.unwrap_err();
    match err {
        LlmError::ProviderError(msg) => {
            assert!(msg.starts_with("Gemini API error 500"));
            assert!(msg.contains("backend exploded"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
    // Bind and immediately drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(addr, "SUPER-SECRET-KEY");
    let err = client.generate("anything").await.unwrap_err();
    assert!(matches!(err, LlmError::HttpError(_)));
    assert!(!err.to_string().contains("SUPER-SECRET-KEY"));
    assert!(!format!("{:?}", err).contains("SUPER-SECRET-KEY"));
}

#[tokio::test]
async fn test_timeout_is_http_error() {
    // Accept connections but never answer
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = RemoteLlmConfig::new("SUPER-SECRET-KEY", format!("http://{}/v1beta", addr), "gemini-test")
        .with_timeout(Duration::from_millis(200));
    let client = GeminiClient::new(config).unwrap();

    let err = client.generate("anything").await.unwrap_err();
    match err {
        LlmError::HttpError(ref e) => assert!(e.is_timeout()),
        ref other => panic!("unexpected error: {:?}", other),
    }
    assert!(!err.to_string().contains("SUPER-SECRET-KEY"));
}
