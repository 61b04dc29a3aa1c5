// ABOUTME: Family-aware diet engine: pure filtering, scaling, and recommendation functions
// ABOUTME: Each submodule is independent and shares only the core value records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Diet engine.
//!
//! Every function here is synchronous and deterministic over in-memory
//! records. Persistence, auth, and rendering live in the host application.

/// Recipe exclusion by disease and allergy rules
pub mod excluded_food_filter;
/// Unified-view member resolution
pub mod family_inclusion;
/// Built-in seasonal fruit catalog
pub mod fruit_catalog;
/// Seasonal fruit snack recommender
pub mod fruit_recommender;
/// Archive filtering and ingredient replacement guides
pub mod legacy;
/// Safe integer coercion for storage columns
pub mod nutrition_normalizer;
/// Nutrition scaling and meal aggregation
pub mod nutrition_scaler;

pub use excluded_food_filter::{
    explain_exclusions, filter_recipes_by_excluded_foods, filter_recipes_for_members,
    rules_for_diseases, ExclusionMatch, ExclusionMatcher, MemberExclusionProfile, MemberRecipes,
};
pub use family_inclusion::{
    derive_included_member_ids, resolve_included_members, InclusionRequest, InclusionResolution,
    InclusionSource,
};
pub use fruit_catalog::default_fruit_catalog;
pub use fruit_recommender::{
    recommend_fruit_snack, recommend_fruit_snack_from, FruitSnack, FruitSnackError,
    FruitSnackRequest, NutrientCap,
};
pub use legacy::{
    extract_legacy_filter_options, filter_legacy_videos, find_replacement_guide,
    find_replacement_guides,
};
pub use nutrition_normalizer::{
    normalize_nutrition_totals, to_int, to_int_or_null, to_non_negative_int, to_storage_row,
    NutritionStorageRow, RawNumber,
};
pub use nutrition_scaler::{scale_nutrition_totals, sum_nutrition_totals};
