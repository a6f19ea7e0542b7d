// ABOUTME: Mood extraction use case turning a free-text entry into a MoodAnalysis
// ABOUTME: Validates input, then runs structured extraction with the calm default fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_mind_core::models::MoodAnalysis;
use pierre_mind_triage::{InputRejection, InputValidator};
use tracing::instrument;
use uuid::Uuid;

use super::generative_bridge::{GenerationContext, GenerationRequest};
use super::structured_extractor::StructuredExtractor;
use crate::llm::prompts::MOOD_ANALYSIS_PROMPT;
use crate::logging::TriageLogger;

/// Extracts mood, intensity, and activities from a journal-style entry
#[derive(Debug, Clone)]
pub struct MoodAnalysisService {
    validator: InputValidator,
    extractor: StructuredExtractor,
}

impl MoodAnalysisService {
    /// Create the service
    #[must_use]
    pub const fn new(validator: InputValidator, extractor: StructuredExtractor) -> Self {
        Self {
            validator,
            extractor,
        }
    }

    /// Analyze `text`
    ///
    /// The result is always a well-formed [`MoodAnalysis`]; model and parse
    /// failures yield [`MoodAnalysis::fallback`].
    ///
    /// # Errors
    ///
    /// Returns the [`InputRejection`] when `text` fails validation.
    #[instrument(
        skip(self, text),
        fields(request_id = %Uuid::new_v4(), input_chars = text.chars().count())
    )]
    pub async fn analyze(&self, text: &str) -> Result<MoodAnalysis, InputRejection> {
        if let Err(rejection) = self.validator.validate(text) {
            TriageLogger::log_input_rejected("mood_analysis", rejection.code(), text.chars().count());
            return Err(rejection);
        }

        let request = GenerationRequest::json(MOOD_ANALYSIS_PROMPT, GenerationContext::None, text);
        Ok(self.extractor.extract(&request).await)
    }
}
