// ABOUTME: Main library entry point for the Pierre Mind conversational triage server
// ABOUTME: Wires validation, crisis screening, sentiment, and generative calls behind an HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Mind Server
//!
//! A stateless triage service for a wellness companion. Every user message passes
//! through a fixed sequence of stages before any generative model sees it:
//!
//! 1. **Validation** rejects empty, oversized, and degenerate input
//! 2. **Crisis screening** short-circuits to a fixed safety payload
//! 3. **Sentiment classification** labels the tone for the prompt
//! 4. **Generation** calls the model once, failing soft to a degraded reply
//!
//! Structured extraction (mood analysis, insights over history) reuses the same
//! bridge and always returns a well-formed value.
//!
//! ## Architecture
//!
//! - **`pierre-mind-core`**: errors, constants, keyword lists, models
//! - **`pierre-mind-triage`**: the pure synchronous stages
//! - **services**: async pipelines over the generative bridge
//! - **routes**: thin axum handlers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pierre_mind_server::config::ServerConfig;
//! use pierre_mind_server::resources::TriageResources;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! let resources = Arc::new(TriageResources::from_config(&config)?);
//! let reply = resources.chat.reply("I have an exam tomorrow and I'm scared").await?;
//! println!("{} {}", reply.sentiment.glyph, reply.response);
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// Error re-exports
pub mod errors;

/// Generative model providers and prompt templates
pub mod llm;

/// Structured logging setup and triage log events
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Async triage pipelines
pub mod services;

pub use pierre_mind_core::{constants, models};
