// ABOUTME: Configuration module root for engine tuning parameters
// ABOUTME: Environment-driven overrides on top of nutrition-guideline defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Configuration for the filtering and aggregation engine.
//!
//! Defaults live in code; deployments override individual values through
//! `BAPSANG_*` environment variables.

/// Intelligence (rule engine) configuration
pub mod intelligence;

pub use intelligence::{ConfigError, FruitSnackConfig, IntelligenceConfig};
