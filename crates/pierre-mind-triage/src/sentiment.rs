// ABOUTME: Ordered keyword-bucket sentiment heuristic used to condition chat generation
// ABOUTME: Anxiety terms win over sadness, sadness over positivity, otherwise neutral
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_mind_core::constants::keywords::{
    ANXIETY_TERMS, POSITIVE_TERMS, SADNESS_TERMS, SENTIMENT_VERSION,
};
use pierre_mind_core::models::{KeywordSet, Sentiment, SentimentLabel};

/// Coarse, rule-based tone classifier
///
/// Buckets are checked in insertion order and the first bucket with any match
/// wins. `SentimentLabel::Crisis` is never produced here; it is reserved for the
/// crisis short-circuit.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    buckets: Vec<(SentimentLabel, KeywordSet)>,
}

impl Default for SentimentClassifier {
    fn default() -> Self {
        Self::new(vec![
            (
                SentimentLabel::Anxious,
                KeywordSet::from_static("anxiety", SENTIMENT_VERSION, ANXIETY_TERMS),
            ),
            (
                SentimentLabel::Sad,
                KeywordSet::from_static("sadness", SENTIMENT_VERSION, SADNESS_TERMS),
            ),
            (
                SentimentLabel::Positive,
                KeywordSet::from_static("positive", SENTIMENT_VERSION, POSITIVE_TERMS),
            ),
        ])
    }
}

impl SentimentClassifier {
    /// Build a classifier from buckets in precedence order
    #[must_use]
    pub const fn new(buckets: Vec<(SentimentLabel, KeywordSet)>) -> Self {
        Self { buckets }
    }

    /// Buckets in precedence order
    #[must_use]
    pub fn buckets(&self) -> &[(SentimentLabel, KeywordSet)] {
        &self.buckets
    }

    /// Classify `text`, falling back to neutral
    #[must_use]
    pub fn classify(&self, text: &str) -> Sentiment {
        let normalized = KeywordSet::normalize(text);
        let label = self
            .buckets
            .iter()
            .find(|(_, terms)| terms.matches(&normalized))
            .map_or(SentimentLabel::Neutral, |(label, _)| *label);
        Sentiment::from(label)
    }
}
