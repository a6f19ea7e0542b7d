// ABOUTME: Mood history records and the structured results extracted from model output
// ABOUTME: MoodAnalysis and Insights are the fixed schemas the extractor guarantees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::messages::{
    FALLBACK_ADVICE, FALLBACK_INTENSITY, FALLBACK_MOOD, FALLBACK_PREDICTION,
};

/// A mood log entry as supplied by the storage layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    /// Storage identifier, unused by the pipeline
    #[serde(default)]
    pub id: Option<String>,
    /// When the entry was logged
    #[serde(alias = "createdAt")]
    pub created_at: DateTime<Utc>,
    /// Mood label chosen by the user
    pub mood: String,
    /// Self-reported intensity
    pub intensity: u8,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Activities tagged on the entry
    #[serde(default)]
    pub activities: Vec<String>,
}

/// Minimal projection of a `MoodRecord` embedded in prompts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompactRecord {
    /// Short human date, e.g. `Oct 12`
    pub date: String,
    /// Mood label
    pub mood: String,
    /// Intensity
    pub intensity: u8,
    /// Notes, possibly truncated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Mood vocabulary accepted from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MoodKind {
    /// Happy
    Happy,
    /// Calm
    Calm,
    /// Excited
    Excited,
    /// Grateful
    Grateful,
    /// Neutral
    Neutral,
    /// Tired
    Tired,
    /// Sad
    Sad,
    /// Anxious
    Anxious,
    /// Stressed
    Stressed,
    /// Angry
    Angry,
}

impl MoodKind {
    /// Every accepted mood, in the order listed in the extraction prompt
    pub const ALL: [Self; 10] = [
        Self::Happy,
        Self::Calm,
        Self::Excited,
        Self::Grateful,
        Self::Neutral,
        Self::Tired,
        Self::Sad,
        Self::Anxious,
        Self::Stressed,
        Self::Angry,
    ];

    /// Lowercase wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Calm => "calm",
            Self::Excited => "excited",
            Self::Grateful => "grateful",
            Self::Neutral => "neutral",
            Self::Tired => "tired",
            Self::Sad => "sad",
            Self::Anxious => "anxious",
            Self::Stressed => "stressed",
            Self::Angry => "angry",
        }
    }
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mood name outside the accepted vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mood '{0}'")]
pub struct UnknownMood(pub String);

impl FromStr for MoodKind {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str() == normalized)
            .ok_or_else(|| UnknownMood(s.to_owned()))
    }
}

impl TryFrom<String> for MoodKind {
    type Error = UnknownMood;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Structured mood extraction result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodAnalysis {
    /// Dominant mood
    pub mood: MoodKind,
    /// Intensity on a 1-10 scale
    pub intensity: u8,
    /// Activities mentioned in the text
    pub activities: Vec<String>,
}

impl MoodAnalysis {
    /// Default used when extraction fails: calm, intensity 5, no activities
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            mood: FALLBACK_MOOD.parse().unwrap_or(MoodKind::Calm),
            intensity: FALLBACK_INTENSITY,
            activities: Vec::new(),
        }
    }
}

/// Structured insights result over a window of mood history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    /// Actionable advice
    pub advice: String,
    /// Short-term outlook
    pub prediction: String,
}

impl Insights {
    /// Default used when extraction fails: static encouragement
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            advice: FALLBACK_ADVICE.to_owned(),
            prediction: FALLBACK_PREDICTION.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mood_kind_parses_case_insensitively() {
        assert_eq!("Anxious".parse::<MoodKind>(), Ok(MoodKind::Anxious));
        assert_eq!(" calm ".parse::<MoodKind>(), Ok(MoodKind::Calm));
        assert!("melancholic".parse::<MoodKind>().is_err());
    }

    #[test]
    fn test_mood_analysis_fallback_shape() {
        let value = serde_json::to_value(MoodAnalysis::fallback()).unwrap();
        assert_eq!(
            value,
            json!({ "mood": "calm", "intensity": 5, "activities": [] })
        );
    }

    #[test]
    fn test_mood_record_accepts_camel_case_timestamp() {
        let record: MoodRecord = serde_json::from_value(json!({
            "createdAt": "2025-10-12T08:30:00Z",
            "mood": "happy",
            "intensity": 7
        }))
        .unwrap();
        assert_eq!(record.mood, "happy");
        assert!(record.notes.is_none());
        assert!(record.activities.is_empty());
    }
}
