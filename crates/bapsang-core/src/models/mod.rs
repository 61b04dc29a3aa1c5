// ABOUTME: Value records exchanged between the persistence layer and the engine
// ABOUTME: Re-exports nutrition, recipe, family, fruit, and archive record types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

/// Family roster records and the unified-view inclusion flag
pub mod family;
/// Seasonal fruit catalog records
pub mod fruit;
/// Archive records and replacement guides
pub mod legacy;
/// Nutrition totals and nullable sodium
pub mod nutrition;
/// Recipes and excluded-food rules
pub mod recipe;

pub use family::{FamilyMemberTab, MemberRole, UnifiedInclusion};
pub use fruit::{Fruit, FruitNutrition};
pub use legacy::{
    GuideIngredient, LegacyFilterOptions, LegacyFilterState, LegacyMaster, LegacyVideo,
    ReplacementGuide,
};
pub use nutrition::{NutritionTotals, Sodium};
pub use recipe::{ExcludedFoodRule, ExcludedType, RecipeForDiet, RecipeIngredient, Severity};
