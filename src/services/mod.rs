// ABOUTME: Triage services composing the pure triage stages around the generative model
// ABOUTME: Chat pipeline, mood analysis, and insights share one bridge and extractor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Triage Services
//!
//! - **`generative_bridge`**: single model call with explicit failures and a degraded-reply adapter
//! - **`structured_extractor`**: JSON extraction with guaranteed schema default
//! - **`chat_pipeline`**: validate, crisis-check, classify, generate
//! - **`mood_analysis`**: free text to `MoodAnalysis`
//! - **`insights`**: mood history to `Insights`

/// Conversational pipeline
pub mod chat_pipeline;
/// Single-attempt generative model gateway
pub mod generative_bridge;
/// Insights over mood history
pub mod insights;
/// Mood extraction from free text
pub mod mood_analysis;
/// Structured output extraction
pub mod structured_extractor;

pub use chat_pipeline::{ChatOutcome, ChatPipeline, ChatReply};
pub use generative_bridge::{
    GenerationContext, GenerationFailure, GenerationRequest, GenerativeBridge, OutputFormat,
};
pub use insights::InsightsService;
pub use mood_analysis::MoodAnalysisService;
pub use structured_extractor::{ExtractionFailure, StructuredExtractor};
