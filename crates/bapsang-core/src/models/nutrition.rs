// ABOUTME: Nutrition totals record shared by recipes, meals, and scaling
// ABOUTME: Sodium, NutritionTotals definitions with unknown-vs-zero sodium semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

use serde::{Deserialize, Serialize};

/// Sodium content of a dish or meal in milligrams
///
/// `Unknown` means the source never measured sodium; it is not the same as
/// `Known(0.0)`. Serialized as a plain number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Sodium {
    /// Measured sodium in mg
    Known(f64),
    /// Sodium was not recorded
    #[default]
    Unknown,
}

impl Sodium {
    /// Measured value, if any
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Known(mg) => Some(mg),
            Self::Unknown => None,
        }
    }

    /// Apply `f` to a known value, keeping `Unknown` untouched
    #[must_use]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Self::Known(mg) => Self::Known(f(mg)),
            Self::Unknown => Self::Unknown,
        }
    }
}

impl From<Option<f64>> for Sodium {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unknown, Self::Known)
    }
}

impl From<Sodium> for Option<f64> {
    fn from(value: Sodium) -> Self {
        value.value()
    }
}

/// Nutrition totals for a dish, a serving, or a whole meal
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionTotals {
    /// Energy in kcal
    pub calories: f64,
    /// Carbohydrates in grams
    pub carbohydrates: f64,
    /// Protein in grams
    pub protein: f64,
    /// Fat in grams
    pub fat: f64,
    /// Sodium in mg, `null` when unknown
    #[serde(default)]
    pub sodium: Sodium,
}

impl NutritionTotals {
    /// All-zero totals with unknown sodium
    #[must_use]
    pub const fn zero_unknown_sodium() -> Self {
        Self {
            calories: 0.0,
            carbohydrates: 0.0,
            protein: 0.0,
            fat: 0.0,
            sodium: Sodium::Unknown,
        }
    }
}
