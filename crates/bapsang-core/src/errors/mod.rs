// ABOUTME: Unified error type and error codes shared across the engine workspace
// ABOUTME: Maps engine failures to stable codes and HTTP statuses for API handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! # Unified Error Handling
//!
//! Most engine functions never fail: dirty input degrades to a documented
//! default. The few real failures (catalog gaps, invalid configuration) are
//! surfaced through `AppError` so API handlers can render them uniformly.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input was well-formed but outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource management (4000-4999)
    /// Reference catalog has no data for the requested slice
    #[serde(rename = "CATALOG_GAP")]
    CatalogGap = 4004,

    // Configuration (6000-6999)
    /// Configuration could not be read from the environment
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration values failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Record could not be serialized or deserialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// HTTP status code an API handler should answer with
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::ValueOutOfRange => 400,
            Self::CatalogGap => 422,
            Self::ConfigError | Self::ConfigInvalid | Self::SerializationError => 500,
        }
    }

    /// User-facing description of the error class
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::CatalogGap => "The reference catalog has no data for this request",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details for API responses
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Attach a source error for chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Value outside the accepted range
    #[must_use]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message)
    }

    /// Reference catalog has nothing for the request
    #[must_use]
    pub fn catalog_gap(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CatalogGap, message)
    }

    /// Configuration could not be read
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Error body returned by API handlers
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(skip_serializing_if = "serde_json::Value::is_null", default)]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            code: error.code,
            message: error.message,
            details: error.details,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::ValueOutOfRange.http_status(), 400);
        assert_eq!(ErrorCode::CatalogGap.http_status(), 422);
        assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::catalog_gap("no fruit in season for month 6")
            .with_details(serde_json::json!({ "month": 6 }));
        let response = ErrorResponse::from(error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("CATALOG_GAP"));
        assert!(json.contains("\"month\":6"));
    }

    #[test]
    fn test_error_response_omits_null_details() {
        let response = ErrorResponse::from(AppError::out_of_range("bad"));
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_serde_error_conversion_keeps_source() {
        let err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let app_error = AppError::from(err);
        assert_eq!(app_error.code, ErrorCode::SerializationError);
        assert!(StdError::source(&app_error).is_some());
    }
}
