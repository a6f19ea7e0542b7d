// ABOUTME: Structured extraction over the generative bridge with guaranteed fallback
// ABOUTME: Demands JSON, parses defensively, and collapses every failure into the schema default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use pierre_mind_triage::{parse_structured, ParseFailure, StructuredOutput};
use thiserror::Error;

use super::generative_bridge::{GenerationFailure, GenerationRequest, GenerativeBridge, OutputFormat};
use crate::logging::TriageLogger;

/// Why structured extraction produced no value
#[derive(Debug, Error)]
pub enum ExtractionFailure {
    /// The model call itself failed
    #[error(transparent)]
    Generation(#[from] GenerationFailure),
    /// The model answered but the answer was unusable
    #[error(transparent)]
    Parse(#[from] ParseFailure),
}

impl ExtractionFailure {
    /// Short kind label for structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Generation(failure) => failure.kind(),
            Self::Parse(failure) => failure.kind(),
        }
    }
}

/// Bridge-calling half of structured extraction
#[derive(Debug, Clone)]
pub struct StructuredExtractor {
    bridge: Arc<GenerativeBridge>,
}

impl StructuredExtractor {
    /// Create an extractor over a shared bridge
    #[must_use]
    pub const fn new(bridge: Arc<GenerativeBridge>) -> Self {
        Self { bridge }
    }

    /// Call the model and parse its answer as `T`
    ///
    /// The request is always sent in JSON output mode.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractionFailure`] when the call fails or the output does not
    /// satisfy `T`'s schema.
    pub async fn try_extract<T: StructuredOutput>(
        &self,
        request: &GenerationRequest<'_>,
    ) -> Result<T, ExtractionFailure> {
        let request = GenerationRequest {
            output: OutputFormat::Json,
            ..request.clone()
        };
        let raw = self.bridge.generate(&request).await?;
        Ok(parse_structured(&raw)?)
    }

    /// Call the model and parse its answer as `T`, substituting `T::fallback()` on
    /// any failure
    pub async fn extract<T: StructuredOutput>(&self, request: &GenerationRequest<'_>) -> T {
        match self.try_extract(request).await {
            Ok(value) => value,
            Err(failure) => {
                TriageLogger::log_extraction_fallback(
                    T::SCHEMA_NAME,
                    failure.kind(),
                    &failure.to_string(),
                );
                T::fallback()
            }
        }
    }
}
