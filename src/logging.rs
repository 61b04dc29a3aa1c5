// ABOUTME: Logging configuration and structured logging setup for host applications
// ABOUTME: Configures log levels, formatters, and output destinations via tracing-subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Structured logging setup.
//!
//! The engine itself only emits `tracing` events. Host applications (API
//! servers, report jobs) call [`init_from_env`] once at startup to install a
//! subscriber.

use anyhow::{anyhow, Result};
use serde_json::json;
use std::env;
use std::io;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Default service name reported in startup logs
pub const SERVICE_NAME: &str = "bapsang";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
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
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to `Pretty`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
            service_name: SERVICE_NAME.into(),
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
        let format = env::var("LOG_FORMAT")
            .map_or(LogFormat::Pretty, |v| LogFormat::from_str_lossy(&v));
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            level,
            format,
            include_location: is_production || env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME").unwrap_or_else(|_| SERVICE_NAME.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
            environment,
        }
    }

    /// Build the filter: `RUST_LOG` directives if set, otherwise the configured level
    fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone());
        EnvFilter::try_new(&base)
            .unwrap_or_else(|_| EnvFilter::default().add_directive(LevelFilter::INFO.into()))
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        let installed = match self.format {
            LogFormat::Json => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events)
                        .json(),
                )
                .try_init(),
            LogFormat::Pretty => registry
                .with(
                    fmt::layer()
                        .with_file(self.include_location)
                        .with_line_number(self.include_location)
                        .with_target(true)
                        .with_writer(io::stdout)
                        .with_span_events(span_events),
                )
                .try_init(),
            LogFormat::Compact => registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(false)
                        .with_writer(io::stdout)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init(),
        };
        installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

        self.log_startup_info();
        Ok(())
    }

    /// Log structured startup information
    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "spans": self.include_spans
            }
        });
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "Diet engine logging initialized: {}",
            config_summary
        );
    }
}

/// Initialize logging from environment variables
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
