// ABOUTME: Seasonal fruit snack configuration for disease-aware nutrient ceilings
// ABOUTME: Configures potassium/sugar caps, risk disease codes, and serving limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Fruit Snack Configuration
//!
//! # Clinical References
//!
//! - Potassium: KDOQI Clinical Practice Guideline for Nutrition in CKD (2020)
//!   recommends low-potassium fruit choices (< 200 mg per serving) for
//!   patients with hyperkalemia risk.
//! - Sugar: Korean Diabetes Association food exchange list, one fruit
//!   exchange ≈ 50 kcal / 12 g carbohydrate.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Maximum servings the recommender may ever return
pub const MAX_SNACK_SERVINGS: u8 = 3;

/// Fruit snack recommender configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FruitSnackConfig {
    /// Potassium ceiling per serving for renal-risk members (mg)
    pub potassium_cap_mg: f64,
    /// Sugar ceiling per serving for glycemic-risk members (g)
    pub sugar_cap_g: f64,
    /// Maximum servings for adults (1-3)
    pub max_servings: u8,
    /// Maximum servings for children (1..=`max_servings`)
    pub max_servings_child: u8,
    /// Target used when the caller passes a non-finite or negative target (kcal)
    pub default_target_kcal: f64,
    /// Disease codes that trigger the potassium ceiling
    pub renal_risk_codes: Vec<String>,
    /// Disease codes that trigger the sugar ceiling
    pub glycemic_risk_codes: Vec<String>,
}

impl Default for FruitSnackConfig {
    fn default() -> Self {
        Self {
            potassium_cap_mg: 200.0,
            sugar_cap_g: 12.0,
            max_servings: MAX_SNACK_SERVINGS,
            max_servings_child: 2,
            // One fruit exchange is ~50 kcal; a typical snack is two
            default_target_kcal: 100.0,
            renal_risk_codes: [
                "ckd",
                "kidney_disease",
                "chronic_kidney_disease",
                "renal_failure",
                "dialysis",
            ]
            .map(str::to_owned)
            .to_vec(),
            glycemic_risk_codes: [
                "diabetes",
                "type1_diabetes",
                "type2_diabetes",
                "gestational_diabetes",
                "prediabetes",
            ]
            .map(str::to_owned)
            .to_vec(),
        }
    }
}

impl FruitSnackConfig {
    /// Whether any of `disease_codes` is a renal-risk code
    #[must_use]
    pub fn has_renal_risk<S: AsRef<str>>(&self, disease_codes: &[S]) -> bool {
        matches_any(&self.renal_risk_codes, disease_codes)
    }

    /// Whether any of `disease_codes` is a glycemic-risk code
    #[must_use]
    pub fn has_glycemic_risk<S: AsRef<str>>(&self, disease_codes: &[S]) -> bool {
        matches_any(&self.glycemic_risk_codes, disease_codes)
    }

    /// Serving ceiling for an adult or a child
    #[must_use]
    pub const fn max_servings_for(&self, is_child: bool) -> u8 {
        if is_child {
            self.max_servings_child
        } else {
            self.max_servings
        }
    }

    /// Validate caps and serving limits
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a cap is not positive, the serving limits fall
    /// outside 1..=3 or the child limit exceeds the adult limit, or no renal
    /// code is configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.potassium_cap_mg.is_finite() && self.potassium_cap_mg > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "potassium_cap_mg must be a positive number",
            ));
        }
        if !(self.sugar_cap_g.is_finite() && self.sugar_cap_g > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "sugar_cap_g must be a positive number",
            ));
        }
        if !(1..=MAX_SNACK_SERVINGS).contains(&self.max_servings) {
            return Err(ConfigError::ValueOutOfRange(
                "max_servings must be between 1 and 3",
            ));
        }
        if self.max_servings_child == 0 || self.max_servings_child > self.max_servings {
            return Err(ConfigError::InvalidRange(
                "max_servings_child must be between 1 and max_servings",
            ));
        }
        if !(self.default_target_kcal.is_finite() && self.default_target_kcal > 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "default_target_kcal must be a positive number",
            ));
        }
        if self.renal_risk_codes.iter().all(|code| code.trim().is_empty()) {
            return Err(ConfigError::MissingField("renal_risk_codes"));
        }
        Ok(())
    }
}

fn matches_any<S: AsRef<str>>(configured: &[String], disease_codes: &[S]) -> bool {
    disease_codes.iter().any(|code| {
        let code = code.as_ref().trim();
        configured
            .iter()
            .any(|known| known.trim().eq_ignore_ascii_case(code))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(FruitSnackConfig::default().validate().is_ok());
    }

    #[test]
    fn test_risk_code_matching_ignores_case_and_padding() {
        let config = FruitSnackConfig::default();
        assert!(config.has_renal_risk(&[" CKD "]));
        assert!(config.has_glycemic_risk(&["hypertension", "Type2_Diabetes"]));
        assert!(!config.has_renal_risk(&["hypertension"]));
        assert!(!config.has_renal_risk::<&str>(&[]));
    }

    #[test]
    fn test_child_limit_above_adult_limit_is_rejected() {
        let config = FruitSnackConfig {
            max_servings: 2,
            max_servings_child: 3,
            ..FruitSnackConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_zero_potassium_cap_is_rejected() {
        let config = FruitSnackConfig {
            potassium_cap_mg: 0.0,
            ..FruitSnackConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
