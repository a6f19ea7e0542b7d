// ABOUTME: Triage route handlers for chat, mood analysis, insights, and input validation
// ABOUTME: Thin JSON handlers delegating to the pipelines held in TriageResources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Triage routes
//!
//! Input rejection answers 400 with the validation report in `details`; a body
//! that is not the expected JSON answers with `INVALID_FORMAT` (or
//! `PAYLOAD_TOO_LARGE`). Model failures never surface as errors: chat answers
//! with the degraded reply and the structured endpoints answer with their
//! fallback values.

use std::sync::Arc;

use axum::{
    extract::{FromRequest, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use pierre_mind_core::constants::routes;
use pierre_mind_core::models::MoodRecord;
use pierre_mind_triage::ValidationReport;
use serde::Deserialize;

use crate::errors::AppError;
use crate::resources::TriageResources;

// ============================================================================
// Request Types
// ============================================================================

/// JSON body whose rejections answer with the standard error envelope
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// Body of a chat request
#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    /// The user's message
    pub message: String,
}

/// Body of a mood analysis or validation request
#[derive(Debug, Deserialize)]
pub struct TextRequest {
    /// Free text to analyze
    pub text: String,
}

/// Body of an insights request
#[derive(Debug, Deserialize)]
pub struct InsightsRequest {
    /// Mood history, most recent first
    #[serde(default)]
    pub records: Vec<MoodRecord>,
}

// ============================================================================
// Routes
// ============================================================================

/// Triage routes implementation
pub struct TriageRoutes;

impl TriageRoutes {
    /// Create all triage routes
    pub fn routes(resources: Arc<TriageResources>) -> Router {
        Router::new()
            .route(routes::CHAT, post(Self::handle_chat))
            .route(routes::MOOD_ANALYZE, post(Self::handle_mood_analyze))
            .route(routes::INSIGHTS, post(Self::handle_insights))
            .route(routes::VALIDATE, post(Self::handle_validate))
            .with_state(resources)
    }

    /// Run the conversational pipeline
    async fn handle_chat(
        State(resources): State<Arc<TriageResources>>,
        JsonBody(request): JsonBody<ChatMessageRequest>,
    ) -> Result<Response, AppError> {
        let reply = resources.chat.reply(&request.message).await?;
        Ok((StatusCode::OK, Json(reply)).into_response())
    }

    /// Extract a mood analysis from free text
    async fn handle_mood_analyze(
        State(resources): State<Arc<TriageResources>>,
        JsonBody(request): JsonBody<TextRequest>,
    ) -> Result<Response, AppError> {
        let analysis = resources.mood_analysis.analyze(&request.text).await?;
        Ok((StatusCode::OK, Json(analysis)).into_response())
    }

    /// Generate advice and a prediction from mood history
    async fn handle_insights(
        State(resources): State<Arc<TriageResources>>,
        JsonBody(request): JsonBody<InsightsRequest>,
    ) -> Result<Response, AppError> {
        let insights = resources.insights.generate(&request.records).await;
        Ok((StatusCode::OK, Json(insights)).into_response())
    }

    /// Report whether text would pass validation; always 200
    async fn handle_validate(
        State(resources): State<Arc<TriageResources>>,
        JsonBody(request): JsonBody<TextRequest>,
    ) -> Json<ValidationReport> {
        Json(resources.validator.report(&request.text))
    }
}
