// ABOUTME: Configuration management module for the triage server
// ABOUTME: Re-exports environment-driven server, LLM, and triage policy settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for Pierre Mind
//!
//! - **Environment**: Server, LLM provider, and triage thresholds from environment variables

/// Environment and server configuration
pub mod environment;

pub use environment::{LlmConfig, ServerConfig, TriagePolicy};
