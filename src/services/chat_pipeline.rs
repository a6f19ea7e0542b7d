// ABOUTME: Conversational triage pipeline: validate, crisis-check, classify, then generate
// ABOUTME: Crisis detection short-circuits before any model call with a fixed safety payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Chat Pipeline
//!
//! Each invocation ends in exactly one of two outcomes: [`ChatOutcome::Crisis`]
//! or [`ChatOutcome::Generated`]. Input rejection pre-empts both and is returned
//! as an error. No state survives between invocations; conversational memory is
//! the caller's concern.

use std::sync::Arc;

use pierre_mind_core::constants::messages::CRISIS_RESPONSE;
use pierre_mind_core::models::{Sentiment, SentimentLabel};
use pierre_mind_triage::{CrisisDetector, InputRejection, InputValidator, SentimentClassifier};
use serde::Serialize;
use tracing::{debug, instrument};
use uuid::Uuid;

use super::generative_bridge::{GenerationContext, GenerationRequest, GenerativeBridge};
use crate::llm::prompts::COMPANION_SYSTEM_PROMPT;
use crate::logging::TriageLogger;

/// Pipeline name used in logs
const PIPELINE: &str = "chat";

/// Terminal outcome of one chat invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Crisis language detected; the fixed safety payload applies
    Crisis,
    /// Normal path: classifier label and bridge text
    Generated {
        /// Model reply or the degraded message
        response: String,
        /// Classifier output
        sentiment: Sentiment,
    },
}

impl ChatOutcome {
    /// Whether this is the crisis branch
    #[must_use]
    pub const fn is_crisis(&self) -> bool {
        matches!(self, Self::Crisis)
    }
}

/// Wire shape returned to chat callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    /// Reply text
    pub response: String,
    /// Label and glyph
    pub sentiment: Sentiment,
    /// Whether the crisis branch was taken
    #[serde(rename = "isCrisis")]
    pub is_crisis: bool,
}

impl From<ChatOutcome> for ChatReply {
    fn from(outcome: ChatOutcome) -> Self {
        match outcome {
            ChatOutcome::Crisis => Self {
                response: CRISIS_RESPONSE.to_owned(),
                sentiment: Sentiment::from(SentimentLabel::Crisis),
                is_crisis: true,
            },
            ChatOutcome::Generated {
                response,
                sentiment,
            } => Self {
                response,
                sentiment,
                is_crisis: false,
            },
        }
    }
}

/// Validate, screen, classify, generate
#[derive(Debug, Clone)]
pub struct ChatPipeline {
    validator: InputValidator,
    crisis: CrisisDetector,
    classifier: SentimentClassifier,
    bridge: Arc<GenerativeBridge>,
}

impl ChatPipeline {
    /// Assemble a pipeline from its stages
    #[must_use]
    pub const fn new(
        validator: InputValidator,
        crisis: CrisisDetector,
        classifier: SentimentClassifier,
        bridge: Arc<GenerativeBridge>,
    ) -> Self {
        Self {
            validator,
            crisis,
            classifier,
            bridge,
        }
    }

    /// Pipeline with default thresholds and keyword lists
    #[must_use]
    pub fn with_defaults(bridge: Arc<GenerativeBridge>) -> Self {
        Self::new(
            InputValidator::default(),
            CrisisDetector::default(),
            SentimentClassifier::default(),
            bridge,
        )
    }

    /// Run the pipeline
    ///
    /// # Errors
    ///
    /// Returns the [`InputRejection`] when `message` fails validation; neither the
    /// crisis check nor the model runs in that case.
    #[instrument(
        skip(self, message),
        fields(request_id = %Uuid::new_v4(), input_chars = message.chars().count())
    )]
    pub async fn run(&self, message: &str) -> Result<ChatOutcome, InputRejection> {
        if let Err(rejection) = self.validator.validate(message) {
            TriageLogger::log_input_rejected(PIPELINE, rejection.code(), message.chars().count());
            return Err(rejection);
        }

        if let Some(phrase) = self.crisis.matched_phrase(message) {
            TriageLogger::log_crisis_intercept(PIPELINE, phrase, message.chars().count());
            return Ok(ChatOutcome::Crisis);
        }

        let sentiment = self.classifier.classify(message);
        debug!(sentiment = %sentiment.label, "Classified message");

        let request = GenerationRequest::text(
            COMPANION_SYSTEM_PROMPT,
            GenerationContext::Sentiment(sentiment.label),
            message,
        );
        let response = self.bridge.generate_or_degraded(&request).await;

        Ok(ChatOutcome::Generated {
            response,
            sentiment,
        })
    }

    /// Run the pipeline and convert the outcome to its wire shape
    ///
    /// # Errors
    ///
    /// Returns the [`InputRejection`] when `message` fails validation.
    pub async fn reply(&self, message: &str) -> Result<ChatReply, InputRejection> {
        self.run(message).await.map(ChatReply::from)
    }
}
