// ABOUTME: Core data models shared between the triage algorithms and the HTTP service
// ABOUTME: Sentiment labels, keyword sets, mood records, and structured model outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models

/// Named, versioned keyword lists
mod keyword_set;
/// Mood records and the structured outputs extracted from the model
mod mood;
/// Sentiment labels and glyphs
mod sentiment;

pub use keyword_set::KeywordSet;
pub use mood::{CompactRecord, Insights, MoodAnalysis, MoodKind, MoodRecord, UnknownMood};
pub use sentiment::{Sentiment, SentimentLabel};
