// ABOUTME: Recipe and excluded-food rule records consumed by the diet filters
// ABOUTME: RecipeForDiet, RecipeIngredient, ExcludedFoodRule, ExcludedType, Severity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

use serde::{Deserialize, Deserializer, Serialize};

use super::nutrition::NutritionTotals;

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Ingredient name as written by the recipe author
    pub name: String,
    /// Free-form amount ("1/2", "200")
    #[serde(default)]
    pub amount: String,
    /// Unit label ("g", "큰술")
    #[serde(default)]
    pub unit: String,
}

impl RecipeIngredient {
    /// Create an ingredient line
    #[must_use]
    pub fn new(name: impl Into<String>, amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            unit: unit.into(),
        }
    }
}

/// Recipe as seen by the diet filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeForDiet {
    /// Recipe identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    /// Per-serving nutrition
    #[serde(default)]
    pub nutrition: NutritionTotals,
}

/// What an excluded-food rule targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExcludedType {
    /// A single ingredient
    #[default]
    Ingredient,
    /// A prepared dish
    Dish,
    /// A food category ("processed meat")
    Category,
    /// Any other label used by the store
    #[serde(untagged)]
    Other(String),
}

/// How strongly a rule should be enforced
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    /// Must not be served
    #[default]
    Avoid,
    /// Allowed in small amounts
    Limit,
    /// Allowed with a warning
    Caution,
    /// Unrecognized label, kept verbatim
    Other(String),
}

impl Severity {
    /// Parse a severity label, keeping unknown labels as `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "avoid" | "high" | "strict" | "금지" => Self::Avoid,
            "limit" | "medium" | "moderate" | "제한" => Self::Limit,
            "caution" | "low" | "주의" => Self::Caution,
            _ => Self::Other(s.to_owned()),
        }
    }

    /// Canonical label
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Avoid => "avoid",
            Self::Limit => "limit",
            Self::Caution => "caution",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_owned()
    }
}

/// Disease-to-food exclusion rule as stored upstream
///
/// `excluded_food_name` may be absent or blank in real data; such a rule is
/// inert and never excludes anything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExcludedFoodRule {
    /// Disease code the rule belongs to
    #[serde(default, deserialize_with = "null_as_default")]
    pub disease: String,
    /// Food or ingredient name to exclude
    #[serde(default)]
    pub excluded_food_name: Option<String>,
    /// What the name refers to
    #[serde(default, deserialize_with = "null_as_default")]
    pub excluded_type: ExcludedType,
    /// Enforcement strength
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: Severity,
}

impl ExcludedFoodRule {
    /// Create an ingredient rule with `Avoid` severity
    #[must_use]
    pub fn ingredient(disease: impl Into<String>, food_name: impl Into<String>) -> Self {
        Self {
            disease: disease.into(),
            excluded_food_name: Some(food_name.into()),
            excluded_type: ExcludedType::Ingredient,
            severity: Severity::Avoid,
        }
    }
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
