// ABOUTME: tracing-subscriber setup for the triage server: filter, output format, startup record
// ABOUTME: Third-party HTTP crates are held at warn so triage events stay readable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Structured logging
//!
//! Pipelines log through [`TriageLogger`], which records lengths, labels and
//! failure kinds. User text is never written to the log.

/// Triage-specific structured log events
pub mod triage;

pub use triage::TriageLogger;

use std::env;
use std::io;

use anyhow::Result;
use pierre_mind_core::constants::{env_config, service_names};
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

const DEFAULT_LEVEL: &str = "info";
const PRODUCTION: &str = "production";

/// Directives appended to every filter
const QUIET_TARGETS: [&str; 4] = ["hyper=warn", "h2=warn", "reqwest=warn", "tower_http=info"];

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, for log shippers
    Json,
    /// Multi-field human-readable lines
    Pretty,
    /// Single-line human-readable output
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value; anything unrecognised is `Pretty`
    #[must_use]
    pub fn from_str_or_default(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

/// Subscriber settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives (`RUST_LOG` syntax)
    pub level: String,
    /// Line format
    pub format: LogFormat,
    /// Source file and line on each event
    pub include_location: bool,
    /// Emit span open and close events
    pub include_spans: bool,
    /// Deployment name recorded at startup
    pub environment: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            environment: "development".to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT`, `LOG_INCLUDE_LOCATION` and `ENVIRONMENT`
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var(env_config::ENVIRONMENT).unwrap_or(defaults.environment);
        let production = environment == PRODUCTION;

        Self {
            level: env::var(env_config::RUST_LOG).unwrap_or(defaults.level),
            format: env::var(env_config::LOG_FORMAT)
                .map_or(defaults.format, |value| LogFormat::from_str_or_default(&value)),
            include_location: production || env::var(env_config::LOG_INCLUDE_LOCATION).is_ok(),
            include_spans: production,
            environment,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        QUIET_TARGETS
            .into_iter()
            .fold(EnvFilter::new(&self.level), |filter, directive| {
                filter.add_directive(directive.parse().unwrap_or_else(|_| Level::WARN.into()))
            })
    }

    fn output_layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };
        let layer = fmt::layer()
            .with_writer(io::stdout)
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_span_events(span_events);

        match self.format {
            LogFormat::Json => layer.json().boxed(),
            LogFormat::Pretty => layer.boxed(),
            LogFormat::Compact => layer.compact().with_target(false).boxed(),
        }
    }

    /// Install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.output_layer())
            .with(self.env_filter())
            .try_init()?;

        info!(
            service.name = service_names::PIERRE_MIND_SERVER,
            service.version = env!("CARGO_PKG_VERSION"),
            environment = %self.environment,
            log.filter = %self.level,
            log.format = ?self.format,
            "Logging initialized"
        );

        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
