// ABOUTME: Triage engine for Pierre Mind: validation, crisis screening, sentiment, aggregation
// ABOUTME: Pure synchronous algorithms shared by the chat and structured-extraction pipelines
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Mind Triage
//!
//! The deterministic stages of the triage pipelines. Nothing in this crate performs
//! I/O; the generative model is called from the server crate, which composes these
//! stages around it.
//!
//! ## Modules
//!
//! - **validation**: Rejects empty, oversized, and degenerate input
//! - **crisis**: Keyword circuit breaker for self-harm and suicide language
//! - **sentiment**: Ordered keyword buckets producing a coarse tone label
//! - **aggregation**: Bounded, chronological history window for prompts
//! - **structured**: Parse-or-fallback handling of JSON-shaped model output

/// Input validation policy and validator
pub mod validation;

/// Crisis phrase detection
pub mod crisis;

/// Keyword-bucket sentiment classification
pub mod sentiment;

/// Mood history reduction for prompt embedding
pub mod aggregation;

/// Structured output parsing with guaranteed fallback
pub mod structured;

pub use aggregation::{render_history, summarize, summarize_with, HistoryBudget};
pub use crisis::CrisisDetector;
pub use sentiment::SentimentClassifier;
pub use structured::{
    parse_or_fallback, parse_structured, strip_code_fences, ParseFailure, SchemaViolation,
    StructuredOutput,
};
pub use validation::{InputRejection, InputValidator, ValidationPolicy, ValidationReport};
