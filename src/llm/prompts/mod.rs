// ABOUTME: Fixed system instructions for the companion chat and structured extraction calls
// ABOUTME: Loaded at compile time from markdown so they are never user-controllable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # System Prompts
//!
//! Prompts are loaded at compile time from markdown files for easy maintenance.
//! Each is a `&'static str`, so no request data can alter the instructions.

/// Companion persona: empathetic tone, two to four sentences, mirror the user's language
pub const COMPANION_SYSTEM_PROMPT: &str = include_str!("companion_system.md");

/// Mood extraction: JSON `{mood, intensity, activities}` only
pub const MOOD_ANALYSIS_PROMPT: &str = include_str!("mood_analysis.md");

/// Insights over history: JSON `{advice, prediction}` only
pub const INSIGHTS_PROMPT: &str = include_str!("insights.md");
