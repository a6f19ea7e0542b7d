// ABOUTME: Server-side error surface built on the core AppError type
// ABOUTME: Re-exports the unified error envelope used by every HTTP handler
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! Input rejections are the only triage failure that reaches a user as an error;
//! they convert into `AppError` with `ErrorCode::InvalidInput`. Generation and
//! extraction failures are absorbed by their fail-soft adapters.

pub use pierre_mind_core::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
