// ABOUTME: Coerces loosely-typed numeric input into safe integers and nutrition totals
// ABOUTME: Never fails: NaN, infinities, blanks, and non-numeric text degrade to fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Nutrition Normalizer
//!
//! Values arrive from form fields, spreadsheets, and upstream JSON. Anything
//! that reaches an integer storage column goes through [`to_int`] or
//! [`to_int_or_null`] first, so the column never sees a fraction, `NaN`, or
//! an infinity.

use bapsang_core::models::{NutritionTotals, Sodium};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Numeric-like input before normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawNumber<'a> {
    /// A number, possibly non-finite
    Number(f64),
    /// Text that may or may not hold a number
    Text(&'a str),
    /// Null, undefined, or a value of some other shape
    Missing,
}

impl RawNumber<'_> {
    /// Finite value carried by this input, if any
    #[must_use]
    pub fn as_finite(self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Missing => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for RawNumber<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for RawNumber<'_> {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for RawNumber<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for RawNumber<'_> {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<'a> From<&'a str> for RawNumber<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for RawNumber<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl<'a, T: Into<RawNumber<'a>>> From<Option<T>> for RawNumber<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

impl<'a> From<&'a Value> for RawNumber<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => n.as_f64().map_or(Self::Missing, Self::Number),
            Value::String(s) => Self::Text(s),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Self::Missing,
        }
    }
}

/// Round half away from zero, rejecting values an `i64` cannot hold
fn round_to_i64(value: f64) -> Option<i64> {
    let rounded = value.round();
    // i64::MAX as f64 is 2^63, which is already out of range
    (rounded >= i64::MIN as f64 && rounded < i64::MAX as f64).then_some(rounded as i64)
}

/// Nearest integer of `value`, or `None` when it is not a usable number
#[must_use]
pub fn to_int_or_null<'a>(value: impl Into<RawNumber<'a>>) -> Option<i64> {
    value.into().as_finite().and_then(round_to_i64)
}

/// Nearest integer of `value`, or `fallback` when it is not a usable number
#[must_use]
pub fn to_int<'a>(value: impl Into<RawNumber<'a>>, fallback: i64) -> i64 {
    to_int_or_null(value).unwrap_or(fallback)
}

/// Like [`to_int`], with negative results clamped to zero
#[must_use]
pub fn to_non_negative_int<'a>(value: impl Into<RawNumber<'a>>, fallback: i64) -> i64 {
    to_int_or_null(value).map_or(fallback, |v| v.max(0))
}

/// First present field among `keys`
fn field<'a>(raw: &'a Value, keys: &[&str]) -> RawNumber<'a> {
    keys.iter()
        .find_map(|key| raw.get(*key).filter(|v| !v.is_null()))
        .map_or(RawNumber::Missing, RawNumber::from)
}

fn non_negative(value: RawNumber<'_>) -> f64 {
    value.as_finite().map_or(0.0, |v| v.max(0.0))
}

/// Coerce a loosely-typed nutrition object into a totals record
///
/// Missing or invalid numeric fields become 0, negatives clamp to 0, and a
/// missing or invalid sodium becomes `Unknown`.
#[must_use]
pub fn normalize_nutrition_totals(raw: &Value) -> NutritionTotals {
    NutritionTotals {
        calories: non_negative(field(raw, &["calories", "kcal"])),
        carbohydrates: non_negative(field(raw, &["carbohydrates", "carbs", "carbohydrate"])),
        protein: non_negative(field(raw, &["protein"])),
        fat: non_negative(field(raw, &["fat"])),
        sodium: field(raw, &["sodium"])
            .as_finite()
            .map_or(Sodium::Unknown, |mg| Sodium::Known(mg.max(0.0))),
    }
}

/// Nutrition as written to integer-typed storage columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionStorageRow {
    /// kcal
    pub calories: i64,
    /// grams
    pub carbohydrates: i64,
    /// grams
    pub protein: i64,
    /// grams
    pub fat: i64,
    /// mg, `None` when unknown
    pub sodium: Option<i64>,
}

/// Convert totals into integer storage columns
#[must_use]
pub fn to_storage_row(totals: &NutritionTotals) -> NutritionStorageRow {
    NutritionStorageRow {
        calories: to_non_negative_int(totals.calories, 0),
        carbohydrates: to_non_negative_int(totals.carbohydrates, 0),
        protein: to_non_negative_int(totals.protein, 0),
        fat: to_non_negative_int(totals.fat, 0),
        sodium: to_int_or_null(totals.sodium.value()).map(|mg| mg.max(0)),
    }
}
