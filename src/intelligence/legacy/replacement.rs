// ABOUTME: Looks up traditional-to-modern ingredient replacement guides by keyword
// ABOUTME: Case-insensitive substring match on either side of the guide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

use bapsang_core::models::ReplacementGuide;
use bapsang_core::text::{contains_normalized, non_blank_normalized};

fn guide_matches(guide: &ReplacementGuide, needle: &str) -> bool {
    contains_normalized(&guide.traditional.name, needle)
        || contains_normalized(&guide.modern.name, needle)
}

/// First guide whose traditional or modern name contains `keyword`
///
/// A blank keyword returns `None` without scanning.
#[must_use]
pub fn find_replacement_guide<'g>(
    guides: &'g [ReplacementGuide],
    keyword: &str,
) -> Option<&'g ReplacementGuide> {
    let needle = non_blank_normalized(keyword)?;
    guides.iter().find(|guide| guide_matches(guide, &needle))
}

/// Every guide matching `keyword`, in catalog order
#[must_use]
pub fn find_replacement_guides<'g>(
    guides: &'g [ReplacementGuide],
    keyword: &str,
) -> Vec<&'g ReplacementGuide> {
    non_blank_normalized(keyword).map_or_else(Vec::new, |needle| {
        guides
            .iter()
            .filter(|guide| guide_matches(guide, &needle))
            .collect()
    })
}
