// ABOUTME: Contract tests for the Gemini provider against a mock HTTP server
// ABOUTME: Covers request shape, JSON mode, status mapping, and end-to-end wiring from config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::time::Duration;

use pierre_mind_server::config::{LlmConfig, ServerConfig};
use pierre_mind_server::constants::messages::DEGRADED_RESPONSE;
use pierre_mind_server::errors::ErrorCode;
use pierre_mind_server::llm::{CompletionRequest, GeminiProvider, LlmProvider};
use pierre_mind_server::models::MoodKind;
use pierre_mind_server::resources::TriageResources;
use pierre_mind_server::services::GenerationFailure;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn provider(server: &MockServer) -> GeminiProvider {
    GeminiProvider::new("test-key").with_base_url(server.uri())
}

fn gemini_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 8, "totalTokenCount": 20}
    })
}

// ── Completion ────────────────────────────────────────────────────

#[tokio::test]
async fn test_complete_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(query_param_is_missing("key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("Take a slow breath.")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CompletionRequest::new("I feel tense");
    let response = provider(&server).complete(&request).await.unwrap();

    assert_eq!(response.text, "Take a slow breath.");
    assert_eq!(response.model, "gemini-2.5-flash");
    assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(response.total_tokens, Some(20));
}

#[tokio::test]
async fn test_complete_joins_multi_part_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "Hello "}, {"text": "there."}]}}]
        })))
        .mount(&server)
        .await;

    let request = CompletionRequest::new("hi");
    let response = provider(&server).complete(&request).await.unwrap();

    assert_eq!(response.text, "Hello there.");
}

#[tokio::test]
async fn test_json_output_sets_response_mime_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "generation_config": {"response_mime_type": "application/json"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CompletionRequest::new("extract")
        .with_temperature(0.2)
        .with_json_output();
    provider(&server).complete(&request).await.unwrap();
}

#[tokio::test]
async fn test_model_override_changes_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-custom:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider(&server).with_default_model("gemini-custom");
    let request = CompletionRequest::new("hi");
    let response = provider.complete(&request).await.unwrap();

    assert_eq!(response.model, "gemini-custom");
}

// ── Error Mapping ─────────────────────────────────────────────────

async fn complete_with_status(status: u16) -> ErrorCode {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_json(json!({"error": {"message": "scripted upstream error"}})),
        )
        .mount(&server)
        .await;

    let request = CompletionRequest::new("hi");
    let error = provider(&server).complete(&request).await.unwrap_err();
    assert!(error.message.contains("scripted upstream error"));
    error.code
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limited() {
    assert_eq!(complete_with_status(429).await, ErrorCode::ExternalRateLimited);
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_failed() {
    assert_eq!(complete_with_status(401).await, ErrorCode::ExternalAuthFailed);
}

#[tokio::test]
async fn test_server_error_maps_to_unavailable() {
    assert_eq!(complete_with_status(503).await, ErrorCode::ExternalServiceUnavailable);
}

#[tokio::test]
async fn test_bad_request_maps_to_service_error() {
    assert_eq!(complete_with_status(400).await, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_empty_candidates_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let request = CompletionRequest::new("hi");
    let error = provider(&server).complete(&request).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_transport_error_does_not_leak_api_key() {
    let provider = GeminiProvider::new("SUPER-SECRET-KEY").with_base_url("http://127.0.0.1:1");
    let error = provider
        .complete(&CompletionRequest::new("hi"))
        .await
        .unwrap_err();
    let failure = GenerationFailure::Upstream(error);

    assert!(!failure.to_string().contains("SUPER-SECRET-KEY"));
    assert!(!format!("{failure:?}").contains("SUPER-SECRET-KEY"));

    let health_error = provider.health_check().await.unwrap_err();
    assert!(!health_error.to_string().contains("SUPER-SECRET-KEY"));
}

#[tokio::test]
async fn test_unreachable_server_maps_to_unavailable() {
    // Nothing listens on port 1
    let provider = GeminiProvider::new("test-key").with_base_url("http://127.0.0.1:1");
    let request = CompletionRequest::new("hi");
    let error = provider.complete(&request).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}

// ── Health Check ──────────────────────────────────────────────────

#[tokio::test]
async fn test_health_check_lists_models() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .and(header("x-goog-api-key", "test-key"))
        .and(query_param_is_missing("key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"models": []})))
        .mount(&server)
        .await;

    assert!(provider(&server).health_check().await.unwrap());
}

#[tokio::test]
async fn test_health_check_rejected_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/models"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    assert!(!provider(&server).health_check().await.unwrap());
}

// ── End-to-End Wiring ─────────────────────────────────────────────

fn config_for(server: &MockServer, timeout: Duration) -> ServerConfig {
    ServerConfig {
        llm: LlmConfig {
            api_key: Some("test-key".to_owned()),
            base_url: server.uri(),
            timeout,
            ..LlmConfig::default()
        },
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn test_resources_from_config_drive_chat_through_gemini() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_reply("That sounds like a lot to carry.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resources = TriageResources::from_config(&config_for(&server, Duration::from_secs(5))).unwrap();
    assert_eq!(resources.bridge.provider_name(), "gemini");

    let reply = resources
        .chat
        .reply("Work has me overwhelmed this week")
        .await
        .unwrap();

    assert_eq!(reply.response, "That sounds like a lot to carry.");
    assert!(!reply.is_crisis);
}

#[tokio::test]
async fn test_resources_from_config_extract_mood_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "generation_config": {"response_mime_type": "application/json"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(
            r#"{"mood":"grateful","intensity":7,"activities":["call with mom"]}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let resources = TriageResources::from_config(&config_for(&server, Duration::from_secs(5))).unwrap();
    let analysis = resources
        .mood_analysis
        .analyze("Had a long call with mom, feeling thankful")
        .await
        .unwrap();

    assert_eq!(analysis.mood, MoodKind::Grateful);
    assert_eq!(analysis.activities, vec!["call with mom"]);
}

#[tokio::test]
async fn test_slow_upstream_degrades_chat() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_reply("too late"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let resources =
        TriageResources::from_config(&config_for(&server, Duration::from_millis(100))).unwrap();
    let reply = resources.chat.reply("Just a normal day").await.unwrap();

    assert_eq!(reply.response, DEGRADED_RESPONSE);
}
