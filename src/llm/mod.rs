// ABOUTME: Generative provider abstraction used by the companion and extraction prompts
// ABOUTME: One rendered prompt in, one completion out; JSON output is a capability flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LLM Provider Service Provider Interface
//!
//! The triage pipelines treat the generative model as an opaque text-in/text-out
//! dependency. Every call carries exactly one fully rendered prompt; there is no
//! conversation history and no separate system turn.
//!
//! ## Key Concepts
//!
//! - **`GenerationCapabilities`**: Bitflags describing what a backend can do
//! - **`CompletionRequest`**: Prompt plus sampling knobs and the JSON output switch
//! - **`Completion`**: Generated text with the model that produced it
//! - **`LlmProvider`**: Async trait implemented by Gemini and by test doubles
//!
//! ## Example
//!
//! ```rust,no_run
//! use pierre_mind_server::llm::{CompletionRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = CompletionRequest::new("I had a rough day").with_temperature(0.7);
//!     let completion = provider.complete(&request).await;
//! }
//! ```

mod gemini;
pub mod prompts;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

bitflags::bitflags! {
    /// What a generative backend supports beyond plain text completion
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GenerationCapabilities: u8 {
        /// Backend can be told to answer with JSON only
        const JSON_OUTPUT = 0b0000_0001;
        /// Backend reports token usage
        const USAGE_REPORTING = 0b0000_0010;
    }
}

impl GenerationCapabilities {
    /// Whether the structured extractor may request JSON-only output
    #[must_use]
    pub const fn supports_json_output(&self) -> bool {
        self.contains(Self::JSON_OUTPUT)
    }
}

/// One model call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Fully rendered prompt, sent as a single user turn
    pub prompt: String,
    /// Overrides the provider's configured model
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Output length cap
    pub max_output_tokens: Option<u32>,
    /// Ask for a JSON-only answer; ignored by backends without `JSON_OUTPUT`
    pub json_output: bool,
}

impl CompletionRequest {
    /// Request with no sampling overrides
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: None,
            max_output_tokens: None,
            json_output: false,
        }
    }

    /// Use a specific model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the output length
    #[must_use]
    pub const fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_output_tokens);
        self
    }

    /// Request JSON-only output
    #[must_use]
    pub const fn with_json_output(mut self) -> Self {
        self.json_output = true;
        self
    }
}

/// Result of a successful model call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Generated text, possibly joined from several parts
    pub text: String,
    /// Model that produced the text
    pub model: String,
    /// Backend's stop reason, when reported
    pub finish_reason: Option<String>,
    /// Total tokens billed for the call, when reported
    pub total_tokens: Option<u32>,
}

/// A generative backend
///
/// Implementations hold no per-call state and may be shared across tasks.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Short identifier used in logs and readiness output (e.g. "gemini")
    fn name(&self) -> &'static str;

    /// Supported features
    fn capabilities(&self) -> GenerationCapabilities;

    /// Model used when the request does not name one
    fn model(&self) -> &str;

    /// Run one completion
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, AppError>;

    /// Whether the backend is reachable with the configured credential
    async fn health_check(&self) -> Result<bool, AppError>;
}
