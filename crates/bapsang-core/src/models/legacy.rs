// ABOUTME: Archival food-heritage records and ingredient replacement guides
// ABOUTME: LegacyVideo, LegacyMaster, LegacyFilterState, LegacyFilterOptions, ReplacementGuide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

use serde::{Deserialize, Serialize};

/// Keeper of a traditional recipe featured in an archive entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyMaster {
    /// Master's name
    pub name: String,
    /// Home region
    #[serde(default)]
    pub region: String,
    /// Honorific or title ("종부", "명인")
    #[serde(default)]
    pub title: String,
}

/// Archival video or document about a traditional dish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyVideo {
    /// Record identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Long description
    #[serde(default)]
    pub description: String,
    /// Region the dish comes from ("경북 안동")
    #[serde(default)]
    pub region: String,
    /// Historical era ("조선 후기")
    #[serde(default)]
    pub era: String,
    /// Ingredients used in the dish
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Featured master
    #[serde(default)]
    pub master: LegacyMaster,
    /// Playback URL, if the record is a video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Filter panel state for the archive browser
///
/// Every list that is empty imposes no constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyFilterState {
    /// Allowed regions
    pub region: Vec<String>,
    /// Allowed eras
    pub era: Vec<String>,
    /// Ingredients that must all be present
    pub ingredients: Vec<String>,
    /// Free-text search
    pub search_term: String,
}

impl LegacyFilterState {
    /// Number of filter groups currently narrowing the result
    #[must_use]
    pub fn active_constraint_count(&self) -> usize {
        [
            !self.region.is_empty(),
            !self.era.is_empty(),
            !self.ingredients.is_empty(),
            !self.search_term.trim().is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Whether no constraint is active
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active_constraint_count() == 0
    }
}

/// Options offered by the archive filter panel
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LegacyFilterOptions {
    /// Distinct regions, Korean-sorted
    pub regions: Vec<String>,
    /// Distinct eras, Korean-sorted
    pub eras: Vec<String>,
    /// Distinct ingredients, Korean-sorted
    pub ingredients: Vec<String>,
}

/// One side of a replacement guide
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuideIngredient {
    /// Ingredient name
    pub name: String,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Guide for swapping a traditional ingredient for a modern one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementGuide {
    /// Ingredient used in the traditional recipe
    pub traditional: GuideIngredient,
    /// Readily available substitute
    pub modern: GuideIngredient,
    /// Cooking tips for the substitution
    #[serde(default)]
    pub tips: Vec<String>,
}
