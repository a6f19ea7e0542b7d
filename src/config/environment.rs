// ABOUTME: Environment configuration for the triage server, LLM provider, and triage policy
// ABOUTME: Parses environment variables with logged fallbacks to documented defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! All settings come from environment variables. Malformed numeric values fall
//! back to their defaults with a warning; a malformed API base URL is a startup
//! error because no request could succeed against it.

use std::env;
use std::fmt::{self, Debug, Formatter};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use pierre_mind_core::constants::{env_config, limits, llm, ports};
use pierre_mind_triage::{HistoryBudget, ValidationPolicy};
use tracing::warn;
use url::Url;

/// Generative model settings
#[derive(Clone)]
pub struct LlmConfig {
    /// Gemini credential; `None` puts every generation call in degraded mode
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// API base URL
    pub base_url: String,
    /// Upper bound on a single model call
    pub timeout: Duration,
    /// Temperature for conversational replies
    pub temperature: f32,
}

impl LlmConfig {
    /// Whether a credential is present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: llm::DEFAULT_MODEL.to_owned(),
            base_url: llm::DEFAULT_GEMINI_BASE_URL.to_owned(),
            timeout: Duration::from_secs(llm::DEFAULT_TIMEOUT_SECS),
            temperature: llm::CHAT_TEMPERATURE,
        }
    }
}

impl Debug for LlmConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("temperature", &self.temperature)
            .finish()
    }
}

/// Tunable triage thresholds
#[derive(Debug, Clone, Default)]
pub struct TriagePolicy {
    /// Input validation thresholds
    pub validation: ValidationPolicy,
    /// History window and per-note budget for insights prompts
    pub history: HistoryBudget,
    /// Crisis phrases added to the built-in list
    pub extra_crisis_phrases: Vec<String>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Maximum accepted request body, in bytes
    pub max_body_bytes: usize,
    /// Comma-separated CORS origins; empty or `*` allows any
    pub cors_allowed_origins: String,
    /// Generative model settings
    pub llm: LlmConfig,
    /// Triage thresholds
    pub triage: TriagePolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: ports::DEFAULT_HTTP_PORT,
            max_body_bytes: limits::DEFAULT_MAX_BODY_BYTES,
            cors_allowed_origins: "*".to_owned(),
            llm: LlmConfig::default(),
            triage: TriagePolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_BASE_URL` is not a valid http(s) URL or a
    /// threshold is zero where a positive value is required.
    pub fn from_env() -> Result<Self> {
        let base_url = env_var_or(env_config::GEMINI_BASE_URL, llm::DEFAULT_GEMINI_BASE_URL);
        let base_url = parse_base_url(&base_url)?;

        let config = Self {
            http_port: parse_env_or(env_config::HTTP_PORT, ports::DEFAULT_HTTP_PORT),
            max_body_bytes: parse_env_or(
                env_config::MAX_BODY_BYTES,
                limits::DEFAULT_MAX_BODY_BYTES,
            ),
            cors_allowed_origins: env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*"),
            llm: LlmConfig {
                api_key: env::var(env_config::GEMINI_API_KEY)
                    .ok()
                    .map(|key| key.trim().to_owned())
                    .filter(|key| !key.is_empty()),
                model: env_var_or(env_config::LLM_MODEL, llm::DEFAULT_MODEL),
                base_url,
                timeout: Duration::from_secs(parse_env_or(
                    env_config::LLM_TIMEOUT_SECS,
                    llm::DEFAULT_TIMEOUT_SECS,
                )),
                temperature: parse_env_or(env_config::LLM_TEMPERATURE, llm::CHAT_TEMPERATURE),
            },
            triage: TriagePolicy {
                validation: ValidationPolicy {
                    max_chars: parse_env_or(env_config::MAX_INPUT_CHARS, limits::MAX_INPUT_CHARS),
                    degenerate_min_len: parse_env_or(
                        env_config::DEGENERATE_MIN_LEN,
                        limits::DEGENERATE_MIN_LEN,
                    ),
                    degenerate_min_distinct: parse_env_or(
                        env_config::DEGENERATE_MIN_DISTINCT,
                        limits::DEGENERATE_MIN_DISTINCT,
                    ),
                },
                history: HistoryBudget {
                    max_count: parse_env_or(
                        env_config::HISTORY_WINDOW,
                        limits::DEFAULT_HISTORY_WINDOW,
                    ),
                    note_max_chars: parse_env_or(
                        env_config::NOTE_MAX_CHARS,
                        limits::DEFAULT_NOTE_MAX_CHARS,
                    ),
                },
                extra_crisis_phrases: env::var(env_config::EXTRA_CRISIS_PHRASES)
                    .map(|value| parse_phrase_list(&value))
                    .unwrap_or_default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value would make every request fail.
    pub fn validate(&self) -> Result<()> {
        if self.triage.validation.max_chars == 0 {
            bail!("{} must be greater than zero", env_config::MAX_INPUT_CHARS);
        }
        if self.llm.timeout.is_zero() {
            bail!("{} must be greater than zero", env_config::LLM_TIMEOUT_SECS);
        }
        if self.max_body_bytes == 0 {
            bail!("{} must be greater than zero", env_config::MAX_BODY_BYTES);
        }
        if !self.llm.is_configured() {
            warn!(
                "{} is not set; generation will run in degraded mode",
                env_config::GEMINI_API_KEY
            );
        }
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Mind Server Configuration:\n\
             - HTTP Port: {}\n\
             - Max Body Bytes: {}\n\
             - CORS Origins: {}\n\
             - LLM Provider: {}\n\
             - LLM Model: {}\n\
             - LLM Base URL: {}\n\
             - LLM Timeout: {}s\n\
             - Max Input Chars: {}\n\
             - Degenerate Threshold: >{} chars with <{} distinct\n\
             - History Window: {} records, {} chars per note\n\
             - Extra Crisis Phrases: {}",
            self.http_port,
            self.max_body_bytes,
            self.cors_allowed_origins,
            if self.llm.is_configured() {
                "Configured"
            } else {
                "Not configured (degraded mode)"
            },
            self.llm.model,
            self.llm.base_url,
            self.llm.timeout.as_secs(),
            self.triage.validation.max_chars,
            self.triage.validation.degenerate_min_len,
            self.triage.validation.degenerate_min_distinct,
            self.triage.history.max_count,
            self.triage.history.note_max_chars,
            self.triage.extra_crisis_phrases.len(),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, warning and falling back on malformed input
fn parse_env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy + fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value '{raw}' for {key}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

/// Parse comma-separated phrases
fn parse_phrase_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Validate an http(s) base URL and strip any trailing slash
fn parse_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("{} is not a valid URL: {raw}", env_config::GEMINI_BASE_URL))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!(
            "{} must use http or https, got {}",
            env_config::GEMINI_BASE_URL,
            url.scheme()
        );
    }
    Ok(url.as_str().trim_end_matches('/').to_owned())
}
