// ABOUTME: Integration tests for mood analysis and insights extraction over a scripted model
// ABOUTME: Verifies JSON-mode requests, tolerant parsing, schema checks, and guaranteed fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use helpers::scripted_provider::ScriptedLlmProvider;
use pierre_mind_server::errors::ErrorCode;
use pierre_mind_server::llm::LlmProvider;
use pierre_mind_server::models::{Insights, MoodAnalysis, MoodKind, MoodRecord};
use pierre_mind_server::services::{
    ExtractionFailure, GenerationContext, GenerationFailure, GenerationRequest, GenerativeBridge,
    InsightsService, MoodAnalysisService, StructuredExtractor,
};
use pierre_mind_triage::{HistoryBudget, InputRejection, InputValidator, ParseFailure};

fn extractor(provider: &Arc<ScriptedLlmProvider>) -> StructuredExtractor {
    let provider: Arc<dyn LlmProvider> = provider.clone();
    let bridge = GenerativeBridge::new(Some(provider), Duration::from_secs(5));
    StructuredExtractor::new(Arc::new(bridge))
}

fn mood_service(provider: &Arc<ScriptedLlmProvider>) -> MoodAnalysisService {
    MoodAnalysisService::new(InputValidator::default(), extractor(provider))
}

fn insights_service(provider: &Arc<ScriptedLlmProvider>, max_count: usize) -> InsightsService {
    InsightsService::new(
        HistoryBudget {
            max_count,
            note_max_chars: 40,
        },
        extractor(provider),
    )
}

fn record(day: u32, mood: &str, intensity: u8, notes: Option<&str>) -> MoodRecord {
    MoodRecord {
        id: None,
        created_at: Utc.with_ymd_and_hms(2025, 10, day, 20, 30, 0).unwrap(),
        mood: mood.to_owned(),
        intensity,
        notes: notes.map(str::to_owned),
        activities: Vec::new(),
    }
}

// ============================================================================
// Mood Analysis
// ============================================================================

#[tokio::test]
async fn test_mood_analysis_parses_valid_json() {
    let provider = ScriptedLlmProvider::replying(
        r#"{"mood":"tired","intensity":7,"activities":["work","gym"]}"#,
    );

    let analysis = mood_service(&provider)
        .analyze("Long shift at work then the gym, I'm exhausted")
        .await
        .unwrap();

    assert_eq!(analysis.mood, MoodKind::Tired);
    assert_eq!(analysis.intensity, 7);
    assert_eq!(analysis.activities, vec!["work", "gym"]);
}

#[tokio::test]
async fn test_mood_analysis_requests_json_output_with_verbatim_text() {
    let provider = ScriptedLlmProvider::replying(r#"{"mood":"calm","intensity":4,"activities":[]}"#);

    mood_service(&provider)
        .analyze("Read a book by the window")
        .await
        .unwrap();

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].json_output);
    assert!(provider.last_prompt().ends_with("User: Read a book by the window"));
}

#[tokio::test]
async fn test_mood_analysis_strips_code_fences() {
    let provider = ScriptedLlmProvider::replying(
        "```json\n{\"mood\":\"happy\",\"intensity\":8,\"activities\":[\"dinner with friends\"]}\n```",
    );

    let analysis = mood_service(&provider)
        .analyze("Dinner with friends was lovely")
        .await
        .unwrap();

    assert_eq!(analysis.mood, MoodKind::Happy);
    assert_eq!(analysis.activities, vec!["dinner with friends"]);
}

#[tokio::test]
async fn test_mood_analysis_truncated_json_falls_back() {
    let provider = ScriptedLlmProvider::replying(r#"{"mood":"sad","intensity":"#);

    let analysis = mood_service(&provider)
        .analyze("Rough day overall")
        .await
        .unwrap();

    assert_eq!(analysis, MoodAnalysis::fallback());
    assert_eq!(analysis.mood, MoodKind::Calm);
    assert_eq!(analysis.intensity, 5);
    assert!(analysis.activities.is_empty());
}

#[tokio::test]
async fn test_mood_analysis_prose_falls_back() {
    let provider = ScriptedLlmProvider::replying("You seem a little tired today.");

    let analysis = mood_service(&provider)
        .analyze("Didn't sleep much")
        .await
        .unwrap();

    assert_eq!(analysis, MoodAnalysis::fallback());
}

#[tokio::test]
async fn test_mood_analysis_unknown_mood_falls_back() {
    let provider =
        ScriptedLlmProvider::replying(r#"{"mood":"melancholic","intensity":6,"activities":[]}"#);

    let analysis = mood_service(&provider).analyze("Grey skies").await.unwrap();

    assert_eq!(analysis, MoodAnalysis::fallback());
}

#[tokio::test]
async fn test_mood_analysis_out_of_range_intensity_falls_back() {
    let provider =
        ScriptedLlmProvider::replying(r#"{"mood":"angry","intensity":14,"activities":[]}"#);

    let analysis = mood_service(&provider)
        .analyze("Traffic was awful")
        .await
        .unwrap();

    assert_eq!(analysis, MoodAnalysis::fallback());
}

#[tokio::test]
async fn test_mood_analysis_provider_failure_falls_back() {
    let provider = ScriptedLlmProvider::failing(ErrorCode::ExternalTimeout);

    let analysis = mood_service(&provider).analyze("Went running").await.unwrap();

    assert_eq!(analysis, MoodAnalysis::fallback());
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_mood_analysis_rejects_empty_text_without_model_call() {
    let provider = ScriptedLlmProvider::replying("unused");

    let rejection = mood_service(&provider).analyze("  ").await.unwrap_err();

    assert_eq!(rejection, InputRejection::EmptyInput);
    assert_eq!(provider.calls(), 0);
}

// ============================================================================
// Extractor Failure Kinds
// ============================================================================

#[tokio::test]
async fn test_try_extract_reports_parse_failure() {
    let provider = ScriptedLlmProvider::replying("no json here");
    let request = GenerationRequest::text("SYSTEM", GenerationContext::None, "hello");

    let failure = extractor(&provider)
        .try_extract::<MoodAnalysis>(&request)
        .await
        .unwrap_err();

    assert!(matches!(
        failure,
        ExtractionFailure::Parse(ParseFailure::NoJsonObject)
    ));
    // Structured extraction always asks for JSON, even from a text request
    assert!(provider.requests()[0].json_output);
}

#[tokio::test]
async fn test_try_extract_reports_generation_failure() {
    let extractor = StructuredExtractor::new(Arc::new(GenerativeBridge::unconfigured()));
    let request = GenerationRequest::json("SYSTEM", GenerationContext::None, "hello");

    let failure = extractor
        .try_extract::<Insights>(&request)
        .await
        .unwrap_err();

    assert!(matches!(
        failure,
        ExtractionFailure::Generation(GenerationFailure::NotConfigured)
    ));
    assert_eq!(failure.kind(), "not_configured");
}

// ============================================================================
// Insights
// ============================================================================

#[tokio::test]
async fn test_insights_parses_valid_json() {
    let provider = ScriptedLlmProvider::replying(
        r#"Here you go: {"advice":"Keep up the evening walks.","prediction":"Your mood should stay steady this week."}"#,
    );
    let records = vec![
        record(12, "happy", 8, Some("walked by the river")),
        record(11, "calm", 6, None),
    ];

    let insights = insights_service(&provider, 30).generate(&records).await;

    assert_eq!(insights.advice, "Keep up the evening walks.");
    assert_eq!(insights.prediction, "Your mood should stay steady this week.");
}

#[tokio::test]
async fn test_insights_prompt_lists_history_oldest_first() {
    let provider =
        ScriptedLlmProvider::replying(r#"{"advice":"Rest more.","prediction":"Improving."}"#);
    let records = vec![
        record(12, "happy", 8, Some("walked by the river")),
        record(11, "calm", 6, None),
    ];

    insights_service(&provider, 30).generate(&records).await;

    let prompt = provider.last_prompt();
    let older = prompt.find("- Oct 11: calm (6/10)").unwrap();
    let newer = prompt
        .find("- Oct 12: happy (8/10), notes: \"walked by the river\"")
        .unwrap();
    assert!(older < newer);
    assert!(!prompt.contains("User:"));
}

#[tokio::test]
async fn test_insights_window_limits_records_and_truncates_notes() {
    let provider =
        ScriptedLlmProvider::replying(r#"{"advice":"Rest more.","prediction":"Improving."}"#);
    let long_note = "x".repeat(100);
    let records = vec![
        record(20, "tired", 3, Some(&long_note)),
        record(19, "sad", 4, None),
        record(18, "angry", 9, None),
    ];

    insights_service(&provider, 2).generate(&records).await;

    let prompt = provider.last_prompt();
    assert!(prompt.contains("Oct 20"));
    assert!(prompt.contains("Oct 19"));
    assert!(!prompt.contains("Oct 18"));
    assert!(prompt.contains(&format!("{}…", "x".repeat(40))));
    assert!(!prompt.contains(&long_note));
}

#[tokio::test]
async fn test_insights_empty_history_skips_model() {
    let provider = ScriptedLlmProvider::replying("unused");

    let insights = insights_service(&provider, 30).generate(&[]).await;

    assert_eq!(insights, Insights::fallback());
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_insights_blank_advice_falls_back() {
    let provider = ScriptedLlmProvider::replying(r#"{"advice":"   ","prediction":"Fine."}"#);

    let insights = insights_service(&provider, 30)
        .generate(&[record(1, "calm", 5, None)])
        .await;

    assert_eq!(insights, Insights::fallback());
}

#[tokio::test]
async fn test_insights_missing_field_falls_back() {
    let provider = ScriptedLlmProvider::replying(r#"{"advice":"Sleep earlier."}"#);

    let insights = insights_service(&provider, 30)
        .generate(&[record(1, "calm", 5, None)])
        .await;

    assert_eq!(insights, Insights::fallback());
}
