// ABOUTME: Input validation rejecting empty, oversized, and degenerate user text
// ABOUTME: Pure function over a configurable policy; runs before any other triage stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Validation
//!
//! First stage of every pipeline. Checks run in a fixed order so a given input
//! always produces the same rejection:
//!
//! 1. `EmptyInput`: nothing left after trimming whitespace
//! 2. `TooLong`: more characters than the policy ceiling
//! 3. `Degenerate`: a long input built from very few distinct characters
//!
//! The degenerate check is a crude spam filter (`"aaaaaaaaaaaaaaaaaaaaaaaa"`), not
//! a language model.

use std::collections::HashSet;

use pierre_mind_core::constants::limits;
use pierre_mind_core::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Thresholds used by [`InputValidator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Maximum characters accepted
    pub max_chars: usize,
    /// Trimmed inputs longer than this are checked for diversity
    pub degenerate_min_len: usize,
    /// Minimum distinct characters for a long input
    pub degenerate_min_distinct: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_chars: limits::MAX_INPUT_CHARS,
            degenerate_min_len: limits::DEGENERATE_MIN_LEN,
            degenerate_min_distinct: limits::DEGENERATE_MIN_DISTINCT,
        }
    }
}

/// Why an input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputRejection {
    /// Nothing but whitespace
    #[error("Message cannot be empty")]
    EmptyInput,
    /// Over the character ceiling
    #[error("Message is too long ({length} characters, maximum is {max})")]
    TooLong {
        /// Characters in the input
        length: usize,
        /// Policy ceiling
        max: usize,
    },
    /// Too little character diversity for its length
    #[error("Message looks like repeated characters rather than text")]
    Degenerate,
}

impl InputRejection {
    /// Stable reason code reported to callers
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EmptyInput",
            Self::TooLong { .. } => "TooLong",
            Self::Degenerate => "Degenerate",
        }
    }
}

/// Serializable outcome of a validation, `{"valid":false,"reason":"EmptyInput",...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Whether the input passed
    pub valid: bool,
    /// Reason code when rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    /// Human-readable explanation when rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Result<(), InputRejection>> for ValidationReport {
    fn from(result: Result<(), InputRejection>) -> Self {
        match result {
            Ok(()) => Self {
                valid: true,
                reason: None,
                message: None,
            },
            Err(rejection) => Self::from(rejection),
        }
    }
}

impl From<InputRejection> for ValidationReport {
    fn from(rejection: InputRejection) -> Self {
        Self {
            valid: false,
            reason: Some(rejection.code()),
            message: Some(rejection.to_string()),
        }
    }
}

impl From<InputRejection> for AppError {
    fn from(rejection: InputRejection) -> Self {
        let details = serde_json::to_value(ValidationReport::from(rejection))
            .unwrap_or(Value::Null);
        Self::invalid_input(rejection.to_string()).with_details(details)
    }
}

/// Stateless validator for user-supplied text
#[derive(Debug, Clone, Default)]
pub struct InputValidator {
    policy: ValidationPolicy,
}

impl InputValidator {
    /// Create a validator with a custom policy
    #[must_use]
    pub const fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    /// Active policy
    #[must_use]
    pub const fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    /// Validate `text`
    ///
    /// # Errors
    ///
    /// Returns the first rejection that applies, in the order empty, too long,
    /// degenerate.
    pub fn validate(&self, text: &str) -> Result<(), InputRejection> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(InputRejection::EmptyInput);
        }

        let length = text.chars().count();
        if length > self.policy.max_chars {
            return Err(InputRejection::TooLong {
                length,
                max: self.policy.max_chars,
            });
        }

        if self.is_degenerate(trimmed) {
            return Err(InputRejection::Degenerate);
        }

        Ok(())
    }

    /// Validate and wrap the result in a serializable report
    #[must_use]
    pub fn report(&self, text: &str) -> ValidationReport {
        ValidationReport::from(self.validate(text))
    }

    fn is_degenerate(&self, trimmed: &str) -> bool {
        if trimmed.chars().count() <= self.policy.degenerate_min_len {
            return false;
        }

        let mut distinct = HashSet::new();
        for c in trimmed.chars() {
            distinct.insert(c);
            if distinct.len() >= self.policy.degenerate_min_distinct {
                return false;
            }
        }
        true
    }
}
