// ABOUTME: Removes recipes whose ingredients match a member's excluded-food rules
// ABOUTME: Compiles loosely-typed rules into a matcher; batch evaluation across members via rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Excluded Food Filter
//!
//! A recipe is hidden when any rule's food name, trimmed and lowercased, is a
//! substring of any of its ingredient names. Rules combine with OR, so the
//! rules of several diseases can simply be concatenated.
//!
//! Rules arrive straight from the upstream store and may carry no name at
//! all. [`ExclusionMatcher::compile`] drops those up front; they never
//! exclude anything.

use bapsang_core::models::{ExcludedFoodRule, RecipeForDiet, Severity};
use bapsang_core::text::{contains_normalized, non_blank_normalized};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Normalized needle compiled from one rule
#[derive(Debug, Clone, PartialEq, Eq)]
struct CompiledRule<'r> {
    needle: String,
    rule: &'r ExcludedFoodRule,
}

/// Validated set of exclusion needles
#[derive(Debug, Clone, Default)]
pub struct ExclusionMatcher<'r> {
    rules: Vec<CompiledRule<'r>>,
}

impl<'r> ExclusionMatcher<'r> {
    /// Compile rules, skipping those whose name is absent or blank
    #[must_use]
    pub fn compile(rules: &'r [ExcludedFoodRule]) -> Self {
        let compiled: Vec<CompiledRule<'r>> = rules
            .iter()
            .filter_map(|rule| {
                rule.excluded_food_name
                    .as_deref()
                    .and_then(non_blank_normalized)
                    .map(|needle| CompiledRule { needle, rule })
            })
            .collect();

        let inert = rules.len() - compiled.len();
        if inert > 0 {
            debug!(
                inert_rules = inert,
                active_rules = compiled.len(),
                "Skipping excluded-food rules without a food name"
            );
        }

        Self { rules: compiled }
    }

    /// Number of rules that can match
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule can match
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether `recipe` contains an excluded ingredient
    #[must_use]
    pub fn excludes(&self, recipe: &RecipeForDiet) -> bool {
        recipe.ingredients.iter().any(|ingredient| {
            self.rules
                .iter()
                .any(|compiled| contains_normalized(&ingredient.name, &compiled.needle))
        })
    }

    /// Recipes that survive the rules, in input order
    #[must_use]
    pub fn filter(&self, recipes: &[RecipeForDiet]) -> Vec<RecipeForDiet> {
        if self.is_empty() {
            return recipes.to_vec();
        }
        recipes
            .iter()
            .filter(|recipe| !self.excludes(recipe))
            .cloned()
            .collect()
    }

    /// Every (rule, ingredient) pair that matches in `recipe`
    #[must_use]
    pub fn explain(&self, recipe: &RecipeForDiet) -> Vec<ExclusionMatch> {
        recipe
            .ingredients
            .iter()
            .flat_map(|ingredient| {
                self.rules
                    .iter()
                    .filter(|compiled| contains_normalized(&ingredient.name, &compiled.needle))
                    .map(|compiled| ExclusionMatch {
                        disease: compiled.rule.disease.clone(),
                        excluded_food_name: compiled.needle.clone(),
                        ingredient_name: ingredient.name.clone(),
                        severity: compiled.rule.severity.clone(),
                    })
            })
            .collect()
    }
}

/// One reason a recipe was hidden
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionMatch {
    /// Disease code of the matching rule
    pub disease: String,
    /// Normalized food name of the matching rule
    pub excluded_food_name: String,
    /// Ingredient name as written in the recipe
    pub ingredient_name: String,
    /// Severity of the matching rule
    pub severity: Severity,
}

/// Recipes containing no ingredient matched by `rules`
///
/// Returns a new list in input order. Rules without a usable name are
/// ignored, and a recipe with no ingredients is never excluded.
#[must_use]
pub fn filter_recipes_by_excluded_foods(
    recipes: &[RecipeForDiet],
    rules: &[ExcludedFoodRule],
) -> Vec<RecipeForDiet> {
    ExclusionMatcher::compile(rules).filter(recipes)
}

/// Explain why `recipe` would be excluded by `rules`; empty when it is not
#[must_use]
pub fn explain_exclusions(recipe: &RecipeForDiet, rules: &[ExcludedFoodRule]) -> Vec<ExclusionMatch> {
    ExclusionMatcher::compile(rules).explain(recipe)
}

/// Rules belonging to any of `disease_codes` (case-insensitive), in input order
#[must_use]
pub fn rules_for_diseases<S: AsRef<str>>(
    rules: &[ExcludedFoodRule],
    disease_codes: &[S],
) -> Vec<ExcludedFoodRule> {
    rules
        .iter()
        .filter(|rule| {
            let disease = rule.disease.trim();
            disease_codes
                .iter()
                .any(|code| code.as_ref().trim().eq_ignore_ascii_case(disease))
        })
        .cloned()
        .collect()
}

/// Disease profile of one family member
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberExclusionProfile {
    /// Member identifier
    pub member_id: String,
    /// Disease and allergy codes of the member
    #[serde(default)]
    pub disease_codes: Vec<String>,
}

/// Filtered recipe list for one member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRecipes {
    /// Member identifier
    pub member_id: String,
    /// Recipes safe for the member
    pub recipes: Vec<RecipeForDiet>,
}

/// Filter `recipes` for several members at once
///
/// Each member sees the recipes left after the union of the rules of their
/// diseases. Results follow the order of `profiles`.
#[must_use]
pub fn filter_recipes_for_members(
    recipes: &[RecipeForDiet],
    profiles: &[MemberExclusionProfile],
    rules: &[ExcludedFoodRule],
) -> Vec<MemberRecipes> {
    profiles
        .par_iter()
        .map(|profile| {
            let member_rules = rules_for_diseases(rules, profile.disease_codes.as_slice());
            MemberRecipes {
                member_id: profile.member_id.clone(),
                recipes: filter_recipes_by_excluded_foods(recipes, &member_rules),
            }
        })
        .collect()
}
