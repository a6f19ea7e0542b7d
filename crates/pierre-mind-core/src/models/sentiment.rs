// ABOUTME: Closed set of coarse sentiment labels with their display glyphs
// ABOUTME: The crisis label is reserved for the safety override and never produced by keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse emotional label derived from user text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// Worry, stress, panic
    Anxious,
    /// Low mood, loneliness, grief
    Sad,
    /// Contentment, gratitude, excitement
    Positive,
    /// No bucket matched
    Neutral,
    /// Reserved for the crisis override
    Crisis,
}

impl SentimentLabel {
    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anxious => "anxious",
            Self::Sad => "sad",
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Crisis => "crisis",
        }
    }

    /// Display glyph paired with the label
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Anxious => "😟",
            Self::Sad => "😢",
            Self::Positive => "😊",
            Self::Neutral => "😐",
            Self::Crisis => "🆘",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentiment label together with its glyph, as returned to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sentiment {
    /// Label
    pub label: SentimentLabel,
    /// Glyph for UI decoration
    pub glyph: &'static str,
}

impl From<SentimentLabel> for Sentiment {
    fn from(label: SentimentLabel) -> Self {
        Self {
            label,
            glyph: label.glyph(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_serializes_lowercase() {
        let value = serde_json::to_value(Sentiment::from(SentimentLabel::Crisis)).unwrap();
        assert_eq!(value["label"], "crisis");
        assert_eq!(value["glyph"], "🆘");
    }

    #[test]
    fn test_every_label_has_distinct_glyph() {
        let labels = [
            SentimentLabel::Anxious,
            SentimentLabel::Sad,
            SentimentLabel::Positive,
            SentimentLabel::Neutral,
            SentimentLabel::Crisis,
        ];
        let mut glyphs: Vec<_> = labels.iter().map(|l| l.glyph()).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), labels.len());
    }
}
