// ABOUTME: Structured log events for the triage pipelines with consistent field names
// ABOUTME: Never logs user text; records lengths, labels, and failure kinds instead
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_mind_core::models::SentimentLabel;
use tracing::{info, warn};

use crate::llm::Completion;

/// Triage logging utilities
pub struct TriageLogger;

impl TriageLogger {
    /// Log an input rejected before any other stage ran
    pub fn log_input_rejected(pipeline: &str, reason: &str, input_chars: usize) {
        info!(
            pipeline = %pipeline,
            reason = %reason,
            input_chars = %input_chars,
            event_type = "input_rejected",
            "Input rejected by validation"
        );
    }

    /// Log a crisis short-circuit. Only the matched phrase and input length are recorded.
    pub fn log_crisis_intercept(pipeline: &str, matched_phrase: &str, input_chars: usize) {
        warn!(
            pipeline = %pipeline,
            matched_phrase = %matched_phrase,
            input_chars = %input_chars,
            event_type = "crisis_intercept",
            "Crisis language detected, returning fixed safety payload"
        );
    }

    /// Log a successful generation
    pub fn log_generation(
        provider: &str,
        completion: &Completion,
        sentiment: Option<SentimentLabel>,
        duration_ms: u64,
    ) {
        info!(
            provider = %provider,
            model = %completion.model,
            finish_reason = ?completion.finish_reason,
            total_tokens = ?completion.total_tokens,
            sentiment = ?sentiment,
            duration_ms = %duration_ms,
            event_type = "generation",
            "Generation completed"
        );
    }

    /// Log a generation failure that was converted to the degraded reply
    pub fn log_generation_failure(provider: &str, kind: &str, details: &str) {
        warn!(
            provider = %provider,
            failure_kind = %kind,
            details = %details,
            event_type = "generation_failure",
            "Generation failed, serving degraded response"
        );
    }

    /// Log a structured extraction that fell back to the schema default
    pub fn log_extraction_fallback(schema: &str, kind: &str, details: &str) {
        warn!(
            schema = %schema,
            failure_kind = %kind,
            details = %details,
            event_type = "extraction_fallback",
            "Structured extraction failed, using default"
        );
    }
}
