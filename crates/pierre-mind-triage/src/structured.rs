// ABOUTME: Defensive parsing of model output into fixed-schema structured results
// ABOUTME: Strips code fences, locates the JSON object, deserializes and validates it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Structured Output Parsing
//!
//! The parsing half of structured extraction. [`parse_structured`] returns an
//! explicit [`ParseFailure`]; callers that must never fail use
//! [`parse_or_fallback`], which substitutes [`StructuredOutput::fallback`].

use std::sync::LazyLock;

use pierre_mind_core::constants::limits::{MAX_INTENSITY, MIN_INTENSITY};
use pierre_mind_core::models::{Insights, MoodAnalysis};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

static CODE_FENCE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: ```json {...} ``` and bare ``` {...} ```
    Regex::new(r"(?s)```[A-Za-z]*\s*(.*?)\s*```").ok()
});

/// A parsed value that broke the schema's rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    /// Wrong shape: missing key, wrong type, unknown enum value
    #[error("response does not match the {schema} shape: {reason}")]
    Shape {
        /// Schema name
        schema: &'static str,
        /// Deserializer message
        reason: String,
    },
    /// Numeric field outside its allowed range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Field name
        field: &'static str,
        /// Received value
        value: i64,
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },
    /// Required text field was blank
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Why a raw model response could not be turned into a structured value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// No `{` anywhere in the response
    #[error("response contains no JSON object")]
    NoJsonObject,
    /// Something object-like was present but did not parse
    #[error("malformed JSON: {0}")]
    Malformed(String),
    /// Valid JSON that violates the schema
    #[error(transparent)]
    Schema(#[from] SchemaViolation),
}

impl ParseFailure {
    /// Short kind label for structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoJsonObject => "no_json_object",
            Self::Malformed(_) => "malformed",
            Self::Schema(_) => "schema_violation",
        }
    }
}

/// A fixed output schema with a named, shape-identical default
pub trait StructuredOutput: DeserializeOwned + Serialize + Sized {
    /// Schema name for logs and error messages
    const SCHEMA_NAME: &'static str;

    /// Value substituted whenever extraction fails
    fn fallback() -> Self;

    /// Check schema rules beyond what deserialization enforces
    ///
    /// # Errors
    ///
    /// Returns the first rule the value violates.
    fn validated(self) -> Result<Self, SchemaViolation>;
}

impl StructuredOutput for MoodAnalysis {
    const SCHEMA_NAME: &'static str = "mood_analysis";

    fn fallback() -> Self {
        Self::fallback()
    }

    // Activities pass through verbatim
    fn validated(self) -> Result<Self, SchemaViolation> {
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&self.intensity) {
            return Err(SchemaViolation::OutOfRange {
                field: "intensity",
                value: i64::from(self.intensity),
                min: i64::from(MIN_INTENSITY),
                max: i64::from(MAX_INTENSITY),
            });
        }

        Ok(self)
    }
}

impl StructuredOutput for Insights {
    const SCHEMA_NAME: &'static str = "insights";

    fn fallback() -> Self {
        Self::fallback()
    }

    fn validated(self) -> Result<Self, SchemaViolation> {
        let advice = self.advice.trim();
        if advice.is_empty() {
            return Err(SchemaViolation::EmptyField("advice"));
        }
        let prediction = self.prediction.trim();
        if prediction.is_empty() {
            return Err(SchemaViolation::EmptyField("prediction"));
        }

        Ok(Self {
            advice: advice.to_owned(),
            prediction: prediction.to_owned(),
        })
    }
}

/// Remove Markdown code-fence wrapping, including an unterminated opening fence
#[must_use]
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();

    if let Some(captures) = CODE_FENCE.as_ref().and_then(|re| re.captures(trimmed)) {
        if let Some(inner) = captures.get(1) {
            return inner.as_str();
        }
    }

    // Truncated output can open a fence and never close it
    if let Some(rest) = trimmed.strip_prefix("```") {
        return rest
            .split_once('\n')
            .map_or("", |(_, body)| body)
            .trim();
    }

    trimmed
}

/// Find the JSON object in `text`: the whole text if it parses, otherwise the
/// outermost `{...}` slice
fn locate_json_object(text: &str) -> Result<Value, ParseFailure> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let start = text.find('{').ok_or(ParseFailure::NoJsonObject)?;
    let candidate = text
        .rfind('}')
        .filter(|&end| end > start)
        .map_or(&text[start..], |end| &text[start..=end]);

    serde_json::from_str::<Value>(candidate).map_err(|e| ParseFailure::Malformed(e.to_string()))
}

/// Parse a raw model response into `T`
///
/// # Errors
///
/// Returns [`ParseFailure`] when no object is found, the JSON is malformed, or the
/// value violates `T`'s schema.
pub fn parse_structured<T: StructuredOutput>(raw: &str) -> Result<T, ParseFailure> {
    let value = locate_json_object(strip_code_fences(raw))?;

    if !value.is_object() {
        return Err(ParseFailure::NoJsonObject);
    }

    let parsed: T = serde_json::from_value(value).map_err(|e| SchemaViolation::Shape {
        schema: T::SCHEMA_NAME,
        reason: e.to_string(),
    })?;

    Ok(parsed.validated()?)
}

/// Parse a raw model response, substituting `T::fallback()` on any failure
#[must_use]
pub fn parse_or_fallback<T: StructuredOutput>(raw: &str) -> T {
    parse_structured(raw).unwrap_or_else(|failure| {
        debug!(
            schema = T::SCHEMA_NAME,
            kind = failure.kind(),
            "Structured parse failed, using fallback: {failure}"
        );
        T::fallback()
    })
}
