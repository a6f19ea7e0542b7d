// ABOUTME: Insights use case over a bounded window of mood history
// ABOUTME: Aggregates records into a compact prompt block and extracts advice and prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_mind_core::models::{Insights, MoodRecord};
use pierre_mind_triage::{render_history, summarize_with, HistoryBudget};
use tracing::{debug, instrument};
use uuid::Uuid;

use super::generative_bridge::{GenerationContext, GenerationRequest};
use super::structured_extractor::StructuredExtractor;
use crate::llm::prompts::INSIGHTS_PROMPT;

/// Produces advice and a short-term outlook from recent mood records
#[derive(Debug, Clone)]
pub struct InsightsService {
    budget: HistoryBudget,
    extractor: StructuredExtractor,
}

impl InsightsService {
    /// Create the service
    #[must_use]
    pub const fn new(budget: HistoryBudget, extractor: StructuredExtractor) -> Self {
        Self { budget, extractor }
    }

    /// History window and note budget in use
    #[must_use]
    pub const fn budget(&self) -> HistoryBudget {
        self.budget
    }

    /// Generate insights for `records`, given most-recent-first
    ///
    /// Never fails: an empty history, a model failure, or unusable output all
    /// yield [`Insights::fallback`].
    #[instrument(
        skip(self, records),
        fields(request_id = %Uuid::new_v4(), records = records.len())
    )]
    pub async fn generate(&self, records: &[MoodRecord]) -> Insights {
        let window = summarize_with(records, self.budget);
        if window.is_empty() {
            debug!("No mood history, returning default insights");
            return Insights::fallback();
        }

        let request = GenerationRequest::json(
            INSIGHTS_PROMPT,
            GenerationContext::History(render_history(&window)),
            "",
        );
        self.extractor.extract(&request).await
    }
}
