// ABOUTME: Shared, immutable server state: triage stages, bridge, and use-case services
// ABOUTME: Built once at startup from ServerConfig and shared behind Arc by every handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use pierre_mind_triage::{CrisisDetector, InputValidator, SentimentClassifier};
use reqwest::Client;
use tracing::info;

use crate::config::{ServerConfig, TriagePolicy};
use crate::errors::AppError;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::services::{
    ChatPipeline, GenerativeBridge, InsightsService, MoodAnalysisService, StructuredExtractor,
};

/// Everything request handlers need. Holds no mutable state.
#[derive(Debug, Clone)]
pub struct TriageResources {
    /// Standalone validator for the validation endpoint
    pub validator: InputValidator,
    /// Shared model gateway
    pub bridge: Arc<GenerativeBridge>,
    /// Conversational pipeline
    pub chat: ChatPipeline,
    /// Mood extraction
    pub mood_analysis: MoodAnalysisService,
    /// Insights over history
    pub insights: InsightsService,
}

impl TriageResources {
    /// Wire all stages around `bridge` using `policy`
    #[must_use]
    pub fn new(bridge: GenerativeBridge, policy: &TriagePolicy) -> Self {
        let bridge = Arc::new(bridge);
        let validator = InputValidator::new(policy.validation);
        let crisis = CrisisDetector::with_additional_phrases(&policy.extra_crisis_phrases);
        let extractor = StructuredExtractor::new(Arc::clone(&bridge));

        Self {
            validator: validator.clone(),
            chat: ChatPipeline::new(
                validator.clone(),
                crisis,
                SentimentClassifier::default(),
                Arc::clone(&bridge),
            ),
            mood_analysis: MoodAnalysisService::new(validator, extractor.clone()),
            insights: InsightsService::new(policy.history, extractor),
            bridge,
        }
    }

    /// Build resources from configuration, creating the Gemini provider when a
    /// credential is present
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: &ServerConfig) -> Result<Self, AppError> {
        let provider: Option<Arc<dyn LlmProvider>> = match &config.llm.api_key {
            Some(api_key) => {
                let client = Client::builder()
                    .timeout(config.llm.timeout)
                    .build()
                    .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
                let provider = GeminiProvider::new(api_key.clone())
                    .with_default_model(config.llm.model.clone())
                    .with_base_url(config.llm.base_url.clone())
                    .with_client(client);
                info!(
                    provider = provider.name(),
                    model = %config.llm.model,
                    "Generative provider configured"
                );
                Some(Arc::new(provider))
            }
            None => None,
        };

        let bridge = GenerativeBridge::new(provider, config.llm.timeout)
            .with_chat_temperature(config.llm.temperature);

        Ok(Self::new(bridge, &config.triage))
    }
}
