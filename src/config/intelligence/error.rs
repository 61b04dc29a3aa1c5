// ABOUTME: Configuration error types for intelligence module validation
// ABOUTME: Defines error variants for invalid ranges, missing fields, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Configuration error types for intelligence module validation.

use bapsang_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside acceptable range
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Required configuration field is missing
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Environment variable access error
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let message = error.to_string();
        match error {
            ConfigError::EnvVar(_) => Self::config(message),
            _ => Self::new(ErrorCode::ConfigInvalid, message),
        }
        .with_source(error)
    }
}
