// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for limits, keyword defaults, fixed messages, and env names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. Keyword lists and user-facing fixed messages
//! live in their own files so they can be reviewed and versioned independently of
//! the matching logic that consumes them.

/// Default crisis and sentiment keyword lists
pub mod keywords;
/// Hand-authored user-facing messages (crisis payload, degraded mode, fallbacks)
pub mod messages;

/// Service identity
pub mod service_names {
    /// Service name used in logs
    pub const PIERRE_MIND_SERVER: &str = "pierre-mind-server";
    /// Provider name reported for the generative service
    pub const GEMINI: &str = "gemini";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// API routes
pub mod routes {
    /// Conversational chat
    pub const CHAT: &str = "/api/chat";
    /// Mood extraction from free text
    pub const MOOD_ANALYZE: &str = "/api/mood/analyze";
    /// Insights over a window of mood records
    pub const INSIGHTS: &str = "/api/insights";
    /// Standalone input validation
    pub const VALIDATE: &str = "/api/validate";
    /// Liveness
    pub const HEALTH: &str = "/health";
    /// Readiness
    pub const READY: &str = "/ready";
}

/// Input and prompt budget limits
pub mod limits {
    /// Maximum accepted input length, in characters
    pub const MAX_INPUT_CHARS: usize = 2000;
    /// Inputs longer than this are checked for low character diversity
    pub const DEGENERATE_MIN_LEN: usize = 20;
    /// Fewer distinct characters than this marks a long input as degenerate
    pub const DEGENERATE_MIN_DISTINCT: usize = 5;
    /// Default number of history records embedded in an insights prompt
    pub const DEFAULT_HISTORY_WINDOW: usize = 30;
    /// Per-note character budget inside a prompt
    pub const DEFAULT_NOTE_MAX_CHARS: usize = 200;
    /// Inclusive mood intensity range
    pub const MIN_INTENSITY: u8 = 1;
    /// Inclusive mood intensity range
    pub const MAX_INTENSITY: u8 = 10;
    /// Default HTTP request body limit in bytes
    pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;
}

/// Generative model defaults
pub mod llm {
    /// Default Gemini model
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    /// Default Gemini API base URL
    pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Default model call timeout in seconds
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Temperature for conversational replies
    pub const CHAT_TEMPERATURE: f32 = 0.7;
    /// Temperature for JSON extraction calls
    pub const STRUCTURED_TEMPERATURE: f32 = 0.2;
    /// Output token cap for conversational replies
    pub const CHAT_MAX_TOKENS: u32 = 512;
    /// Output token cap for JSON extraction calls
    pub const STRUCTURED_MAX_TOKENS: u32 = 256;
}

/// Environment variable names
pub mod env_config {
    /// HTTP port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Gemini credential
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Gemini base URL override
    pub const GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
    /// Model override
    pub const LLM_MODEL: &str = "PIERRE_LLM_MODEL";
    /// Model call timeout
    pub const LLM_TIMEOUT_SECS: &str = "PIERRE_LLM_TIMEOUT_SECS";
    /// Chat temperature
    pub const LLM_TEMPERATURE: &str = "PIERRE_LLM_TEMPERATURE";
    /// Validator ceiling
    pub const MAX_INPUT_CHARS: &str = "PIERRE_MIND_MAX_INPUT_CHARS";
    /// Degenerate length threshold
    pub const DEGENERATE_MIN_LEN: &str = "PIERRE_MIND_DEGENERATE_MIN_LEN";
    /// Degenerate distinct-character threshold
    pub const DEGENERATE_MIN_DISTINCT: &str = "PIERRE_MIND_DEGENERATE_MIN_DISTINCT";
    /// History window size
    pub const HISTORY_WINDOW: &str = "PIERRE_MIND_HISTORY_WINDOW";
    /// Per-note prompt budget
    pub const NOTE_MAX_CHARS: &str = "PIERRE_MIND_NOTE_MAX_CHARS";
    /// Comma-separated crisis phrases added to the defaults
    pub const EXTRA_CRISIS_PHRASES: &str = "PIERRE_MIND_EXTRA_CRISIS_PHRASES";
    /// HTTP body limit
    pub const MAX_BODY_BYTES: &str = "PIERRE_MIND_MAX_BODY_BYTES";
    /// Comma-separated browser origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Tracing filter directives
    pub const RUST_LOG: &str = "RUST_LOG";
    /// `json`, `pretty` or `compact`
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Any value adds source file and line to log lines
    pub const LOG_INCLUDE_LOCATION: &str = "LOG_INCLUDE_LOCATION";
    /// Deployment name; `production` switches on location and span events
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
