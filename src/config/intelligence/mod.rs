// ABOUTME: Intelligence configuration container with global singleton and env overrides
// ABOUTME: Loads defaults, applies BAPSANG_* environment variables, and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Intelligence configuration.
//!
//! `IntelligenceConfig::global()` is what the convenience entry points use;
//! callers that need explicit control build a config and pass its parts to
//! `recommend_fruit_snack_from`.

/// Configuration error types
pub mod error;
/// Fruit snack recommender settings
pub mod fruit_snack;

pub use error::ConfigError;
pub use fruit_snack::{FruitSnackConfig, MAX_SNACK_SERVINGS};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for the seasonal fruit snack recommender
    pub fruit_snack: FruitSnackConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    ///
    /// Loads from the environment on first use; an invalid environment falls
    /// back to defaults with a warning.
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first validation failure of any subsystem
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fruit_snack.validate()
    }

    /// Read an environment variable; unset is `None`, non-Unicode is an error
    fn read_env_var(env_var_name: &str) -> Result<Option<String>, ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => Ok(Some(val)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(e) => {
                warn!(variable = env_var_name, "Environment variable is not valid Unicode");
                Err(e.into())
            }
        }
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Some(val) = Self::read_env_var(env_var_name)? {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply a comma-separated list override
    fn apply_env_list(env_var_name: &str, target: &mut Vec<String>) -> Result<(), ConfigError> {
        if let Some(val) = Self::read_env_var(env_var_name)? {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|code| !code.is_empty())
                .map(str::to_owned)
                .collect();
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let fruit = &mut self.fruit_snack;
        Self::apply_env_var("BAPSANG_FRUIT_POTASSIUM_CAP_MG", &mut fruit.potassium_cap_mg)?;
        Self::apply_env_var("BAPSANG_FRUIT_SUGAR_CAP_G", &mut fruit.sugar_cap_g)?;
        Self::apply_env_var("BAPSANG_FRUIT_MAX_SERVINGS", &mut fruit.max_servings)?;
        Self::apply_env_var(
            "BAPSANG_FRUIT_MAX_SERVINGS_CHILD",
            &mut fruit.max_servings_child,
        )?;
        Self::apply_env_var(
            "BAPSANG_FRUIT_DEFAULT_TARGET_KCAL",
            &mut fruit.default_target_kcal,
        )?;
        Self::apply_env_list("BAPSANG_RENAL_RISK_CODES", &mut fruit.renal_risk_codes)?;
        Self::apply_env_list("BAPSANG_GLYCEMIC_RISK_CODES", &mut fruit.glycemic_risk_codes)?;
        Ok(self)
    }
}
