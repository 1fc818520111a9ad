// ABOUTME: Logging configuration and structured event helpers for the planner
// ABOUTME: Installs a tracing subscriber on stderr and names recurring planner events
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitplan Contributors

//! Structured logging setup
//!
//! Logs go to stderr so JSON written to stdout by the CLI stays parseable.

use std::env;
use std::io;
use std::path::Path;

use anyhow::Result;
use fitplan_core::constants::service_names;
use fitplan_core::models::FitnessLevel;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for log shipping
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Compact,
            include_location: false,
            service_name: service_names::FITPLAN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") => LogFormat::Pretty,
            _ => LogFormat::Compact,
        };

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Self {
            level,
            format,
            include_location: environment == "production"
                || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            service_name: service_names::FITPLAN.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment,
        }
    }

    /// Override the log level
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let env_filter = EnvFilter::new(&self.level).add_directive(
            format!("fitplan={}", self.level)
                .parse()
                .unwrap_or_else(|_| tracing::Level::INFO.into()),
        );

        let registry = tracing_subscriber::registry().with(env_filter);

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .pretty()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stderr);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        debug!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            log.level = %self.level,
            log.format = ?self.format,
            "Fitplan logging initialized"
        );
    }
}

/// Structured events emitted by the model registry and plan pipeline
pub struct PlanLogger;

impl PlanLogger {
    /// A trained artifact loaded successfully
    pub fn log_artifact_loaded(artifact: &str, path: &Path) {
        info!(
            event_type = "artifact_loaded",
            artifact = %artifact,
            path = %path.display(),
            "Model artifact loaded"
        );
    }

    /// An artifact could not be loaded and its stub took over
    pub fn log_stub_substituted(artifact: &str, path: &Path, reason: &str) {
        warn!(
            event_type = "stub_substituted",
            artifact = %artifact,
            path = %path.display(),
            reason = %reason,
            "Model artifact unavailable, using deterministic stub"
        );
    }

    /// A loaded artifact failed on one call and the stub answered instead
    pub fn log_inference_fallback(artifact: &str, error: &dyn std::error::Error) {
        warn!(
            event_type = "inference_fallback",
            artifact = %artifact,
            error = %error,
            "Model inference failed, falling back to stub for this call"
        );
    }

    /// A plan was computed
    pub fn log_plan_generated(
        fitness_level: FitnessLevel,
        fitness_cluster: i64,
        predicted_calories: f64,
        notes_count: usize,
        demo_mode: bool,
    ) {
        info!(
            event_type = "plan_generated",
            fitness_level = %fitness_level,
            fitness_cluster = fitness_cluster,
            predicted_calories = predicted_calories,
            notes_count = notes_count,
            demo_mode = demo_mode,
            "Plan computed"
        );
    }

    /// A profile was rejected before computation
    pub fn log_validation_failure(field: Option<&str>, message: &str) {
        debug!(
            event_type = "validation_failed",
            field = field.unwrap_or("unknown"),
            message = %message,
            "Profile rejected"
        );
    }
}
