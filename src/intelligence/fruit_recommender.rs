// ABOUTME: Seasonal fruit snack recommender with disease-aware nutrient ceilings
// ABOUTME: Picks an in-season fruit and serving count closest to a calorie target
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Seasonal Fruit Recommender
//!
//! # Selection
//!
//! 1. The seasonal pool is every catalog fruit in season for the month with a
//!    positive, finite calorie value. An empty pool is a catalog gap.
//! 2. Nutrient caps apply in priority order: potassium for renal-risk
//!    members, then sugar for glycemic-risk members. A cap that would empty
//!    the pool is relaxed and reported; a fruit whose value is unknown never
//!    qualifies for a cap.
//! 3. Every (fruit, servings) pair with 1..=max servings is scored. Totals at
//!    or under the target beat totals over it, then the smaller distance to
//!    the target wins, then lower potassium (unknown last), then catalog
//!    order.

use crate::config::intelligence::{FruitSnackConfig, IntelligenceConfig, MAX_SNACK_SERVINGS};
use crate::intelligence::fruit_catalog::default_fruit_catalog;
use bapsang_core::errors::AppError;
use bapsang_core::models::Fruit;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, warn};

/// Nutrient ceiling applied to the candidate pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientCap {
    /// Potassium per serving, for renal-risk members
    Potassium,
    /// Sugar per serving, for glycemic-risk members
    Sugar,
}

impl NutrientCap {
    fn limit(self, config: &FruitSnackConfig) -> f64 {
        match self {
            Self::Potassium => config.potassium_cap_mg,
            Self::Sugar => config.sugar_cap_g,
        }
    }

    fn value(self, fruit: &Fruit) -> Option<f64> {
        match self {
            Self::Potassium => fruit.nutrition.potassium,
            Self::Sugar => fruit.nutrition.sugar,
        }
    }

    fn admits(self, fruit: &Fruit, config: &FruitSnackConfig) -> bool {
        self.value(fruit)
            .is_some_and(|value| value.is_finite() && value <= self.limit(config))
    }
}

/// Recommender errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FruitSnackError {
    /// Month outside 1-12
    #[error("Invalid month of year: {month}")]
    InvalidMonth {
        /// Month as received
        month: u32,
    },

    /// The catalog has no usable fruit in season for the month
    #[error("No fruit in season for month {month}")]
    EmptySeasonalPool {
        /// Month with the catalog gap
        month: u8,
    },
}

impl From<FruitSnackError> for AppError {
    fn from(error: FruitSnackError) -> Self {
        let message = error.to_string();
        match error {
            FruitSnackError::InvalidMonth { .. } => Self::out_of_range(message),
            FruitSnackError::EmptySeasonalPool { .. } => Self::catalog_gap(message),
        }
        .with_source(error)
    }
}

/// Parameters for a snack recommendation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitSnackRequest {
    /// Desired snack energy in kcal
    pub target_calories: f64,
    /// Calendar month, 1-12
    pub month_of_year: u32,
    /// Whether the snack is for a child
    #[serde(default)]
    pub is_child: bool,
    /// Disease codes of the member
    #[serde(default)]
    pub disease_codes: Vec<String>,
}

/// Recommended snack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitSnack {
    /// Chosen fruit
    pub fruit: Fruit,
    /// Number of servings, at least 1
    pub servings: u8,
    /// `servings` times the per-serving calories
    pub total_calories: f64,
    /// Caps the chosen fruit satisfies
    pub applied_caps: Vec<NutrientCap>,
    /// Caps that were dropped because no in-season fruit met them
    pub relaxed_caps: Vec<NutrientCap>,
}

/// Candidate pairing scored against the target
#[derive(Debug, Clone, Copy)]
struct Candidate<'c> {
    catalog_index: usize,
    fruit: &'c Fruit,
    servings: u8,
    total_calories: f64,
}

impl Candidate<'_> {
    fn exceeds(&self, target: f64) -> bool {
        self.total_calories > target
    }

    fn distance(&self, target: f64) -> f64 {
        (self.total_calories - target).abs()
    }

    fn compare(&self, other: &Self, target: f64) -> Ordering {
        self.exceeds(target)
            .cmp(&other.exceeds(target))
            .then_with(|| self.distance(target).total_cmp(&other.distance(target)))
            .then_with(|| compare_potassium(self.fruit, other.fruit))
            .then_with(|| self.catalog_index.cmp(&other.catalog_index))
    }
}

/// Lower potassium first, unknown last
fn compare_potassium(a: &Fruit, b: &Fruit) -> Ordering {
    match (a.nutrition.potassium, b.nutrition.potassium) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn validate_month(month: u32) -> Result<u8, FruitSnackError> {
    u8::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or(FruitSnackError::InvalidMonth { month })
}

/// Recommend a snack from `catalog` under explicit configuration
///
/// # Errors
///
/// Returns `FruitSnackError::InvalidMonth` when the month is outside 1-12 and
/// `FruitSnackError::EmptySeasonalPool` when no usable fruit is in season.
pub fn recommend_fruit_snack_from(
    catalog: &[Fruit],
    request: &FruitSnackRequest,
    config: &FruitSnackConfig,
) -> Result<FruitSnack, FruitSnackError> {
    let month = validate_month(request.month_of_year)?;

    let mut pool: Vec<(usize, &Fruit)> = catalog
        .iter()
        .enumerate()
        .filter(|(_, fruit)| {
            fruit.in_season(month)
                && fruit.nutrition.calories.is_finite()
                && fruit.nutrition.calories > 0.0
        })
        .collect();

    if pool.is_empty() {
        warn!(month, catalog_size = catalog.len(), "Seasonal fruit catalog gap");
        return Err(FruitSnackError::EmptySeasonalPool { month });
    }

    let mut requested_caps = Vec::with_capacity(2);
    if config.has_renal_risk(request.disease_codes.as_slice()) {
        requested_caps.push(NutrientCap::Potassium);
    }
    if config.has_glycemic_risk(request.disease_codes.as_slice()) {
        requested_caps.push(NutrientCap::Sugar);
    }

    let mut applied_caps = Vec::new();
    let mut relaxed_caps = Vec::new();
    for cap in requested_caps {
        let narrowed: Vec<(usize, &Fruit)> = pool
            .iter()
            .copied()
            .filter(|(_, fruit)| cap.admits(fruit, config))
            .collect();
        if narrowed.is_empty() {
            debug!(month, ?cap, "No in-season fruit meets the cap; relaxing it");
            relaxed_caps.push(cap);
        } else {
            pool = narrowed;
            applied_caps.push(cap);
        }
    }

    let target = if request.target_calories.is_finite() && request.target_calories >= 0.0 {
        request.target_calories
    } else {
        debug!(
            requested = request.target_calories,
            fallback = config.default_target_kcal,
            "Using default snack target"
        );
        config.default_target_kcal
    };
    let max_servings = config
        .max_servings_for(request.is_child)
        .clamp(1, MAX_SNACK_SERVINGS);

    let best = pool
        .iter()
        .flat_map(|&(catalog_index, fruit)| {
            (1..=max_servings).map(move |servings| Candidate {
                catalog_index,
                fruit,
                servings,
                total_calories: f64::from(servings) * fruit.nutrition.calories,
            })
        })
        .min_by(|a, b| a.compare(b, target))
        .ok_or(FruitSnackError::EmptySeasonalPool { month })?;

    debug!(
        fruit = %best.fruit.id,
        servings = best.servings,
        total_calories = best.total_calories,
        target,
        "Recommended fruit snack"
    );

    Ok(FruitSnack {
        fruit: best.fruit.clone(),
        servings: best.servings,
        total_calories: best.total_calories,
        applied_caps,
        relaxed_caps,
    })
}

/// Recommend a snack from the built-in catalog under the global configuration
///
/// # Errors
///
/// Returns `FruitSnackError::InvalidMonth` when the month is outside 1-12 and
/// `FruitSnackError::EmptySeasonalPool` when no usable fruit is in season.
pub fn recommend_fruit_snack<S: AsRef<str>>(
    target_calories: f64,
    month_of_year: u32,
    is_child: bool,
    disease_codes: &[S],
) -> Result<FruitSnack, FruitSnackError> {
    let request = FruitSnackRequest {
        target_calories,
        month_of_year,
        is_child,
        disease_codes: disease_codes
            .iter()
            .map(|code| code.as_ref().to_owned())
            .collect(),
    };
    recommend_fruit_snack_from(
        default_fruit_catalog(),
        &request,
        &IntelligenceConfig::global().fruit_snack,
    )
}
