// ABOUTME: Google Gemini backend for companion replies and JSON mood extraction
// ABOUTME: Posts a single user turn to generateContent, optionally forcing a JSON response
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gemini Provider
//!
//! `GEMINI_API_KEY` holds the credential (Google AI Studio). `GEMINI_BASE_URL`
//! points the provider at a proxy or a mock server.
//!
//! ```rust,no_run
//! use pierre_mind_server::llm::{CompletionRequest, GeminiProvider, LlmProvider};
//! use pierre_mind_server::errors::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let provider = GeminiProvider::from_env()?;
//!     let completion = provider
//!         .complete(&CompletionRequest::new("I slept badly and feel on edge"))
//!         .await?;
//!     println!("{}", completion.text);
//!     Ok(())
//! }
//! ```

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use pierre_mind_core::constants::env_config::GEMINI_API_KEY;
use pierre_mind_core::constants::llm::{DEFAULT_GEMINI_BASE_URL, DEFAULT_MODEL};
use pierre_mind_core::constants::service_names::GEMINI;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{Completion, CompletionRequest, GenerationCapabilities, LlmProvider};
use crate::errors::{AppError, ErrorCode};

const JSON_MIME_TYPE: &str = "application/json";
const USER_ROLE: &str = "user";
/// Header carrying the credential, keeping it out of URLs and error text
const API_KEY_HEADER: &str = "x-goog-api-key";

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentBody<'a> {
    contents: [Turn<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<SamplingConfig>,
}

#[derive(Debug, Serialize)]
struct Turn<'a> {
    role: &'static str,
    parts: [OutgoingPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct OutgoingPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct SamplingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<&'static str>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentReply {
    #[serde(default)]
    candidates: Vec<ReplyCandidate>,
    usage_metadata: Option<ReplyUsage>,
    error: Option<ReplyError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyCandidate {
    content: Option<ReplyContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReplyUsage {
    total_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ReplyError {
    message: String,
}

impl GenerateContentReply {
    /// Text of the first candidate with all parts concatenated
    fn joined_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.iter().map(|part| part.text.as_str()).collect())
            .unwrap_or_default()
    }
}

// ============================================================================
// Provider
// ============================================================================

/// Google Gemini backend
pub struct GeminiProvider {
    api_key: String,
    client: Client,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    /// Provider for the default model and endpoint
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client: Client::new(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_owned(),
        }
    }

    /// Build a provider from `GEMINI_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` when the variable is unset or blank.
    pub fn from_env() -> Result<Self, AppError> {
        env::var(GEMINI_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::ConfigMissing,
                    format!("{GEMINI_API_KEY} is not set"),
                )
            })
    }

    /// Model used when a request names none
    #[must_use]
    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Trailing slashes are dropped
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Use a client carrying timeouts or proxy settings
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{model}:generateContent",
            self.base_url
        )
    }

    fn body(request: &CompletionRequest) -> GenerateContentBody<'_> {
        let wants_config = request.temperature.is_some()
            || request.max_output_tokens.is_some()
            || request.json_output;

        GenerateContentBody {
            contents: [Turn {
                role: USER_ROLE,
                parts: [OutgoingPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: wants_config.then(|| SamplingConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
                response_mime_type: request.json_output.then_some(JSON_MIME_TYPE),
            }),
        }
    }

    fn transport_error(error: reqwest::Error) -> AppError {
        let code = if error.is_timeout() {
            ErrorCode::ExternalTimeout
        } else if error.is_connect() {
            ErrorCode::ExternalServiceUnavailable
        } else {
            ErrorCode::ExternalServiceError
        };
        let error = error.without_url();
        AppError::new(code, format!("Gemini request failed: {error}")).with_source(error)
    }

    fn status_error(status: StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<GenerateContentReply>(body)
            .ok()
            .and_then(|reply| reply.error)
            .map_or_else(|| body.to_owned(), |error| error.message);

        let code = match status {
            StatusCode::TOO_MANY_REQUESTS => ErrorCode::ExternalRateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorCode::ExternalAuthFailed,
            s if s.is_server_error() => ErrorCode::ExternalServiceUnavailable,
            _ => ErrorCode::ExternalServiceError,
        };

        AppError::new(code, format!("Gemini returned {status}: {detail}"))
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        GEMINI
    }

    fn capabilities(&self) -> GenerationCapabilities {
        GenerationCapabilities::JSON_OUTPUT | GenerationCapabilities::USAGE_REPORTING
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all, fields(model = %request.model.as_deref().unwrap_or(&self.model)))]
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AppError> {
        let model = request.model.as_deref().unwrap_or(&self.model);

        debug!(json_output = request.json_output, "Calling generateContent");

        let response = self
            .client
            .post(self.generate_url(model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::body(request))
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(Self::transport_error)?;

        if !status.is_success() {
            warn!(%status, "Gemini rejected the request");
            return Err(Self::status_error(status, &body));
        }

        let reply: GenerateContentReply = serde_json::from_str(&body).map_err(|e| {
            AppError::external_service(GEMINI, format!("Unreadable Gemini reply: {e}"))
        })?;

        if let Some(error) = reply.error {
            return Err(AppError::external_service(GEMINI, error.message));
        }

        let text = reply.joined_text();
        if text.trim().is_empty() {
            return Err(AppError::external_service(GEMINI, "Gemini reply had no text"));
        }

        Ok(Completion {
            text,
            model: model.to_owned(),
            finish_reason: reply
                .candidates
                .first()
                .and_then(|candidate| candidate.finish_reason.clone()),
            total_tokens: reply.usage_metadata.and_then(|usage| usage.total_token_count),
        })
    }

    /// Lists models, which checks the key without spending tokens
    #[instrument(skip_all)]
    async fn health_check(&self) -> Result<bool, AppError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(Self::transport_error)?;

        Ok(response.status().is_success())
    }
}

impl Debug for GeminiProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiProvider")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
