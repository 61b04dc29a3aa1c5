// ABOUTME: Integration tests for archive record filtering and replacement guide lookup
// ABOUTME: Covers allow-lists, all-of ingredient matching, search, options, and guide keywords
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use bapsang::intelligence::legacy::{
    extract_legacy_filter_options, filter_legacy_videos, find_replacement_guide,
    find_replacement_guides,
};
use bapsang::models::{LegacyFilterState, LegacyVideo};

fn ids(videos: &[LegacyVideo]) -> Vec<&str> {
    videos.iter().map(|v| v.id.as_str()).collect()
}

#[test]
fn test_empty_filter_returns_everything_in_order() {
    common::init_test_logging();

    let videos = common::legacy_videos();
    let result = filter_legacy_videos(&videos, &LegacyFilterState::default());
    assert_eq!(result, videos);
}

#[test]
fn test_region_filter_selects_single_video() {
    let videos = common::legacy_videos();
    let filters = LegacyFilterState {
        region: vec!["경북 안동".to_owned()],
        ..LegacyFilterState::default()
    };
    assert_eq!(ids(&filter_legacy_videos(&videos, &filters)), vec!["v1"]);
}

#[test]
fn test_multiple_regions_are_an_allow_list() {
    let videos = common::legacy_videos();
    let filters = LegacyFilterState {
        region: vec!["경기 개성".to_owned(), "경북 안동".to_owned()],
        ..LegacyFilterState::default()
    };
    assert_eq!(ids(&filter_legacy_videos(&videos, &filters)), vec!["v1", "v3"]);
}

#[test]
fn test_ingredients_require_every_listed_item() {
    let videos = common::legacy_videos();
    let one = LegacyFilterState {
        ingredients: vec!["간장".to_owned()],
        ..LegacyFilterState::default()
    };
    assert_eq!(ids(&filter_legacy_videos(&videos, &one)), vec!["v1", "v3"]);

    let both = LegacyFilterState {
        ingredients: vec!["간장".to_owned(), "쌀".to_owned()],
        ..LegacyFilterState::default()
    };
    assert_eq!(ids(&filter_legacy_videos(&videos, &both)), vec!["v1"]);
}

#[test]
fn test_ingredient_and_search_narrow_to_intersection() {
    let videos = common::legacy_videos();
    let filters = LegacyFilterState {
        ingredients: vec!["쌀".to_owned()],
        search_term: "  전주 ".to_owned(),
        ..LegacyFilterState::default()
    };
    assert_eq!(ids(&filter_legacy_videos(&videos, &filters)), vec!["v2"]);
}

#[test]
fn test_search_matches_master_name() {
    let videos = common::legacy_videos();
    let filters = LegacyFilterState {
        search_term: "이영숙".to_owned(),
        ..LegacyFilterState::default()
    };
    assert_eq!(ids(&filter_legacy_videos(&videos, &filters)), vec!["v3"]);
}

#[test]
fn test_constraints_without_a_match_yield_empty() {
    let videos = common::legacy_videos();
    let filters = LegacyFilterState {
        region: vec!["경북 안동".to_owned()],
        era: vec!["고려".to_owned()],
        ..LegacyFilterState::default()
    };
    assert!(filter_legacy_videos(&videos, &filters).is_empty());
}

#[test]
fn test_filter_options_are_unique_and_sorted() {
    let mut videos = common::legacy_videos();
    videos.reverse();
    videos.push(videos[0].clone());

    let options = extract_legacy_filter_options(&videos);
    assert_eq!(options.regions, vec!["경기 개성", "경북 안동", "전북 전주"]);
    assert_eq!(options.eras, vec!["고려", "조선 후기"]);
    assert_eq!(
        options.ingredients,
        vec!["간장", "고추장", "도라지", "배", "배추", "쌀", "콩나물"]
    );

    let mut shuffled = common::legacy_videos();
    shuffled.rotate_left(1);
    assert_eq!(extract_legacy_filter_options(&shuffled), options);
}

#[test]
fn test_guide_found_by_either_name() {
    let guides = common::replacement_guides();
    let by_traditional = find_replacement_guide(&guides, "조청").unwrap();
    let by_modern = find_replacement_guide(&guides, "올리고").unwrap();
    assert_eq!(by_traditional, by_modern);
    assert_eq!(by_traditional.modern.name, "올리고당");
}

#[test]
fn test_guide_keyword_is_case_insensitive() {
    let guides = common::replacement_guides();
    let guide = find_replacement_guide(&guides, " SOY ").unwrap();
    assert_eq!(guide.traditional.name, "집간장");
}

#[test]
fn test_guide_misses_and_blank_keywords() {
    let guides = common::replacement_guides();
    assert!(find_replacement_guide(&guides, "트러플").is_none());
    assert!(find_replacement_guide(&guides, "").is_none());
    assert!(find_replacement_guide(&guides, "   ").is_none());
    assert!(find_replacement_guides(&guides, " ").is_empty());
}

#[test]
fn test_all_matching_guides_in_catalog_order() {
    let guides = common::replacement_guides();
    // "장" appears in 집간장 and 막장/된장
    let matches = find_replacement_guides(&guides, "장");
    let names: Vec<&str> = matches.iter().map(|g| g.traditional.name.as_str()).collect();
    assert_eq!(names, vec!["집간장", "막장"]);
}
