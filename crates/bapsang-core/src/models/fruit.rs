// ABOUTME: Seasonal fruit records used by the snack recommender
// ABOUTME: Fruit and FruitNutrition definitions with per-serving nutrient values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

use serde::{Deserialize, Serialize};

/// Per-serving nutrition of a fruit
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitNutrition {
    /// Energy per serving in kcal
    pub calories: f64,
    /// Potassium per serving in mg, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f64>,
    /// Sugars per serving in grams, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    /// Carbohydrates per serving in grams, if measured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
}

/// Fruit catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fruit {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Weight of one serving in grams
    #[serde(default)]
    pub serving_grams: f64,
    /// Nutrition of one serving
    pub nutrition: FruitNutrition,
    /// Calendar months (1-12) in which the fruit is in season
    #[serde(default)]
    pub season_months: Vec<u8>,
}

impl Fruit {
    /// Whether the fruit is in season in `month` (1-12)
    #[must_use]
    pub fn in_season(&self, month: u8) -> bool {
        self.season_months.contains(&month)
    }
}
