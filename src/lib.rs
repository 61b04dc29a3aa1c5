// ABOUTME: Main library entry point for the Bapsang family diet engine
// ABOUTME: Rule evaluation for family-aware recipe filtering, nutrition scaling, and snack picks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

#![deny(unsafe_code)]

//! # Bapsang
//!
//! Pure, deterministic rule evaluation behind a family recipe and health
//! application. Records are loaded by the host application; this crate only
//! filters and aggregates them.
//!
//! ## Components
//!
//! - **Nutrition normalizer**: coerce dirty numeric input into storable integers
//! - **Nutrition scaler**: scale and round totals for multi-person meals
//! - **Excluded-food filter**: hide recipes that clash with a member's diseases
//! - **Inclusion resolver**: which members take part in the unified diet view
//! - **Fruit snack recommender**: seasonal fruit under disease nutrient caps
//! - **Legacy archive**: filter/search heritage recipes and replacement guides
//!
//! ## Example Usage
//!
//! ```rust
//! use bapsang::intelligence::nutrition_scaler::scale_nutrition_totals;
//! use bapsang::models::{NutritionTotals, Sodium};
//!
//! let per_person = NutritionTotals {
//!     calories: 640.0,
//!     carbohydrates: 75.2,
//!     protein: 32.5,
//!     fat: 18.1,
//!     sodium: Sodium::Known(540.0),
//! };
//! let family_of_three = scale_nutrition_totals(Some(&per_person), 3.0);
//! assert_eq!(family_of_three.calories, 1920.0);
//! assert_eq!(family_of_three.sodium, Sodium::Known(1620.0));
//! ```

/// Engine configuration with environment overrides
pub mod config;

/// Filtering and aggregation engine
pub mod intelligence;

/// Logging configuration and tracing subscriber setup
pub mod logging;

/// Unified error handling (re-exported from `bapsang-core`)
pub use bapsang_core::errors;

/// Shared value records (re-exported from `bapsang-core`)
pub use bapsang_core::models;

/// Text normalization and Korean collation (re-exported from `bapsang-core`)
pub use bapsang_core::text;
