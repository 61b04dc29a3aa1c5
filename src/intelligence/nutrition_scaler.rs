// ABOUTME: Scales and rounds nutrition totals for multi-person meals
// ABOUTME: Integer calories and sodium, one-decimal macros, unknown sodium preserved
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

use bapsang_core::models::{NutritionTotals, Sodium};

/// Round to one decimal place, half away from zero
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Replace non-finite results with zero
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn round_totals(totals: NutritionTotals) -> NutritionTotals {
    NutritionTotals {
        calories: finite_or_zero(totals.calories.round()),
        carbohydrates: finite_or_zero(round_one_decimal(totals.carbohydrates)),
        protein: finite_or_zero(round_one_decimal(totals.protein)),
        fat: finite_or_zero(round_one_decimal(totals.fat)),
        sodium: totals.sodium.map(|mg| finite_or_zero(mg.round())),
    }
}

/// Multiply `totals` by `multiplier` and round for display
///
/// Calories and known sodium round to whole numbers; carbohydrates, protein,
/// and fat round to one decimal. Missing totals, or a multiplier that is
/// negative or not finite, yield the zero record with unknown sodium.
/// Unknown sodium stays unknown for every multiplier, including 0.
///
/// ```
/// use bapsang::intelligence::nutrition_scaler::scale_nutrition_totals;
/// use bapsang::models::{NutritionTotals, Sodium};
///
/// let dish = NutritionTotals {
///     calories: 410.0,
///     carbohydrates: 52.34,
///     protein: 18.0,
///     fat: 12.25,
///     sodium: Sodium::Unknown,
/// };
/// let scaled = scale_nutrition_totals(Some(&dish), 2.0);
/// assert_eq!(scaled.calories, 820.0);
/// assert_eq!(scaled.carbohydrates, 104.7);
/// assert_eq!(scaled.sodium, Sodium::Unknown);
/// ```
#[must_use]
pub fn scale_nutrition_totals(totals: Option<&NutritionTotals>, multiplier: f64) -> NutritionTotals {
    let Some(totals) = totals else {
        return NutritionTotals::zero_unknown_sodium();
    };
    if !multiplier.is_finite() || multiplier < 0.0 {
        return NutritionTotals::zero_unknown_sodium();
    }

    round_totals(NutritionTotals {
        calories: totals.calories * multiplier,
        carbohydrates: totals.carbohydrates * multiplier,
        protein: totals.protein * multiplier,
        fat: totals.fat * multiplier,
        sodium: totals.sodium.map(|mg| mg * multiplier),
    })
}

/// Sum the totals of several dishes served in one meal
///
/// Sodium is known only if every dish reports it; an empty meal sums to zero
/// with `Known(0)` sodium.
#[must_use]
pub fn sum_nutrition_totals<'a, I>(items: I) -> NutritionTotals
where
    I: IntoIterator<Item = &'a NutritionTotals>,
{
    let sum = items.into_iter().fold(
        NutritionTotals {
            sodium: Sodium::Known(0.0),
            ..NutritionTotals::default()
        },
        |acc, item| NutritionTotals {
            calories: acc.calories + item.calories,
            carbohydrates: acc.carbohydrates + item.carbohydrates,
            protein: acc.protein + item.protein,
            fat: acc.fat + item.fat,
            sodium: match (acc.sodium, item.sodium) {
                (Sodium::Known(a), Sodium::Known(b)) => Sodium::Known(a + b),
                _ => Sodium::Unknown,
            },
        },
    );
    round_totals(sum)
}
