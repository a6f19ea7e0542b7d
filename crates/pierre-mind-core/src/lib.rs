// ABOUTME: Core types and constants for the Pierre Mind conversational triage platform
// ABOUTME: Foundation crate with error handling, keyword defaults, fixed messages, and models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Mind Core
//!
//! Foundation crate shared by the triage algorithms and the HTTP service. It is
//! designed to change infrequently, enabling incremental compilation benefits in the
//! workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Limits, keyword defaults, and hand-authored messages
//! - **models**: Sentiment labels, keyword sets, mood records, structured outputs

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models
pub mod models;
