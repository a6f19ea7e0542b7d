// ABOUTME: Keyword-based crisis screening that short-circuits every downstream stage
// ABOUTME: Normalized substring scan over an injected, versioned phrase list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Crisis Detection
//!
//! A circuit breaker, not a signal: when [`CrisisDetector::detect`] returns `true`
//! the caller must answer with the fixed hotline payload and skip sentiment
//! classification and generation entirely.

use pierre_mind_core::constants::keywords::{CRISIS_PHRASES, CRISIS_VERSION};
use pierre_mind_core::models::KeywordSet;

/// Name of the default crisis phrase set
pub const CRISIS_SET_NAME: &str = "crisis";

/// Screens text for self-harm and suicide language
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    phrases: KeywordSet,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new(KeywordSet::from_static(
            CRISIS_SET_NAME,
            CRISIS_VERSION,
            CRISIS_PHRASES,
        ))
    }
}

impl CrisisDetector {
    /// Create a detector over a custom phrase set
    #[must_use]
    pub const fn new(phrases: KeywordSet) -> Self {
        Self { phrases }
    }

    /// Default phrases plus `extra` additions
    #[must_use]
    pub fn with_additional_phrases<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut detector = Self::default();
        detector.phrases.extend(extra);
        detector
    }

    /// Phrase set in use
    #[must_use]
    pub const fn phrases(&self) -> &KeywordSet {
        &self.phrases
    }

    /// Whether `text` contains any crisis phrase, ignoring case, apostrophe style and
    /// spacing
    #[must_use]
    pub fn detect(&self, text: &str) -> bool {
        self.matched_phrase(text).is_some()
    }

    /// The first crisis phrase found in `text`, for operator logs
    #[must_use]
    pub fn matched_phrase(&self, text: &str) -> Option<&str> {
        self.phrases.first_match(&KeywordSet::normalize(text))
    }
}
