// ABOUTME: Integration tests for nutrition scaling and meal aggregation
// ABOUTME: Validates rounding precision, unknown sodium handling, and degenerate multipliers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

mod common;

use bapsang::intelligence::nutrition_normalizer::to_storage_row;
use bapsang::intelligence::nutrition_scaler::{scale_nutrition_totals, sum_nutrition_totals};
use bapsang::models::{NutritionTotals, Sodium};

fn bibimbap() -> NutritionTotals {
    NutritionTotals {
        calories: 640.0,
        carbohydrates: 75.2,
        protein: 32.5,
        fat: 18.1,
        sodium: Sodium::Known(540.0),
    }
}

#[test]
fn test_scale_for_family_of_three() {
    common::init_test_logging();

    let scaled = scale_nutrition_totals(Some(&bibimbap()), 3.0);
    assert_eq!(scaled.calories, 1920.0);
    assert_eq!(scaled.carbohydrates, 225.6);
    assert_eq!(scaled.protein, 97.5);
    assert_eq!(scaled.fat, 54.3);
    assert_eq!(scaled.sodium, Sodium::Known(1620.0));
}

#[test]
fn test_scale_by_zero_keeps_unknown_sodium() {
    let totals = NutritionTotals {
        sodium: Sodium::Unknown,
        ..bibimbap()
    };
    let scaled = scale_nutrition_totals(Some(&totals), 0.0);
    assert_eq!(scaled.calories, 0.0);
    assert_eq!(scaled.carbohydrates, 0.0);
    assert_eq!(scaled.protein, 0.0);
    assert_eq!(scaled.fat, 0.0);
    assert_eq!(scaled.sodium, Sodium::Unknown);
}

#[test]
fn test_fractional_multiplier_rounding() {
    let scaled = scale_nutrition_totals(Some(&bibimbap()), 0.5);
    assert_eq!(scaled.calories, 320.0);
    assert_eq!(scaled.carbohydrates, 37.6);
    assert_eq!(scaled.protein, 16.3);
    assert_eq!(scaled.fat, 9.1);
    assert_eq!(scaled.sodium, Sodium::Known(270.0));
}

#[test]
fn test_missing_totals_yield_zero_record() {
    let scaled = scale_nutrition_totals(None, 2.0);
    assert_eq!(scaled, NutritionTotals::zero_unknown_sodium());
}

#[test]
fn test_meal_sum_then_storage_row() {
    let side = NutritionTotals {
        calories: 35.4,
        carbohydrates: 4.25,
        protein: 1.0,
        fat: 0.0,
        sodium: Sodium::Known(310.4),
    };
    let meal = sum_nutrition_totals([bibimbap(), side].iter());
    assert_eq!(meal.calories, 675.0);
    assert_eq!(meal.sodium, Sodium::Known(850.0));

    let row = to_storage_row(&meal);
    assert_eq!(row.calories, 675);
    assert_eq!(meal.carbohydrates, 79.5);
    assert_eq!(row.carbohydrates, 80);
    assert_eq!(row.sodium, Some(850));
}

#[test]
fn test_scaled_totals_serialize_unknown_sodium_as_null() {
    let totals = NutritionTotals {
        sodium: Sodium::Unknown,
        ..bibimbap()
    };
    let value = serde_json::to_value(scale_nutrition_totals(Some(&totals), 2.0)).unwrap();
    assert!(value["sodium"].is_null());
    assert_eq!(value["calories"], serde_json::json!(1280.0));
}
