// ABOUTME: Multi-criteria filter and search over archival food-heritage records
// ABOUTME: Region/era allow-lists, all-of ingredient match, free-text search, option extraction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

use bapsang_core::models::{LegacyFilterOptions, LegacyFilterState, LegacyVideo};
use bapsang_core::text::{contains_normalized, non_blank_normalized, sorted_korean_unique};
use tracing::debug;

/// Filter state compiled once per call
struct CompiledFilter<'f> {
    regions: &'f [String],
    eras: &'f [String],
    ingredients: &'f [String],
    search: Option<String>,
}

impl<'f> CompiledFilter<'f> {
    fn new(state: &'f LegacyFilterState) -> Self {
        Self {
            regions: &state.region,
            eras: &state.era,
            ingredients: &state.ingredients,
            search: non_blank_normalized(&state.search_term),
        }
    }

    fn matches(&self, video: &LegacyVideo) -> bool {
        (self.regions.is_empty() || self.regions.contains(&video.region))
            && (self.eras.is_empty() || self.eras.contains(&video.era))
            && self
                .ingredients
                .iter()
                .all(|wanted| video.ingredients.contains(wanted))
            && self.search.as_deref().map_or(true, |term| {
                [
                    video.title.as_str(),
                    video.description.as_str(),
                    video.master.name.as_str(),
                    video.region.as_str(),
                ]
                .into_iter()
                .any(|field| contains_normalized(field, term))
            })
    }
}

/// Records matching every active constraint of `filters`, in input order
///
/// Region and era are allow-lists, every listed ingredient must be present,
/// and the search term must appear in the title, description, master name,
/// or region. Empty constraints are ignored.
#[must_use]
pub fn filter_legacy_videos(videos: &[LegacyVideo], filters: &LegacyFilterState) -> Vec<LegacyVideo> {
    if filters.is_empty() {
        return videos.to_vec();
    }

    let compiled = CompiledFilter::new(filters);
    let matched: Vec<LegacyVideo> = videos
        .iter()
        .filter(|video| compiled.matches(video))
        .cloned()
        .collect();

    debug!(
        total = videos.len(),
        matched = matched.len(),
        constraints = filters.active_constraint_count(),
        "Filtered archive records"
    );
    matched
}

/// Distinct regions, eras, and ingredients in Korean collation order
///
/// Blank values are not offered as options.
#[must_use]
pub fn extract_legacy_filter_options(videos: &[LegacyVideo]) -> LegacyFilterOptions {
    let non_blank = |value: &&String| !value.trim().is_empty();

    LegacyFilterOptions {
        regions: sorted_korean_unique(videos.iter().map(|v| &v.region).filter(non_blank)),
        eras: sorted_korean_unique(videos.iter().map(|v| &v.era).filter(non_blank)),
        ingredients: sorted_korean_unique(
            videos
                .iter()
                .flat_map(|v| v.ingredients.iter())
                .filter(non_blank),
        ),
    }
}
