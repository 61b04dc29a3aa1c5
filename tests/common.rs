// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet test logging plus recipe, rule, family, and archive fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `bapsang`

use bapsang::models::{
    ExcludedFoodRule, FamilyMemberTab, GuideIngredient, LegacyMaster, LegacyVideo, MemberRole,
    NutritionTotals, RecipeForDiet, RecipeIngredient, ReplacementGuide, Sodium,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        // Another test binary harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Recipe with the given ingredient names and typical single-serving nutrition
pub fn recipe(id: &str, title: &str, ingredient_names: &[&str]) -> RecipeForDiet {
    RecipeForDiet {
        id: id.to_owned(),
        title: title.to_owned(),
        ingredients: ingredient_names
            .iter()
            .map(|name| RecipeIngredient::new(*name, "1", "인분"))
            .collect(),
        nutrition: NutritionTotals {
            calories: 450.0,
            carbohydrates: 60.0,
            protein: 20.0,
            fat: 12.0,
            sodium: Sodium::Known(800.0),
        },
    }
}

/// A small weekday menu
pub fn weekday_recipes() -> Vec<RecipeForDiet> {
    vec![
        recipe("r1", "된장찌개", &["된장", "두부", "애호박", "멸치 육수"]),
        recipe("r2", "바나나 스무디", &["바나나", "우유", "꿀"]),
        recipe("r3", "현미밥", &["현미", "물"]),
        recipe("r4", "땅콩버터 토스트", &["식빵", "Peanut Butter"]),
        recipe("r5", "빈 레시피", &[]),
    ]
}

/// Rules as they come from the upstream store, including an inert one
pub fn disease_rules() -> Vec<ExcludedFoodRule> {
    vec![
        ExcludedFoodRule::ingredient("ckd", "바나나"),
        ExcludedFoodRule::ingredient("ckd", "된장"),
        ExcludedFoodRule::ingredient("peanut_allergy", "peanut"),
        ExcludedFoodRule::ingredient("diabetes", "꿀"),
        ExcludedFoodRule {
            disease: "ckd".to_owned(),
            excluded_food_name: None,
            ..ExcludedFoodRule::default()
        },
    ]
}

/// Family tabs: owner with no flag, one opted in, one opted out
pub fn family_tabs() -> Vec<FamilyMemberTab> {
    vec![
        FamilyMemberTab::new("m1", "나", MemberRole::Owner),
        FamilyMemberTab::new("m2", "어머니", MemberRole::Member).with_include_in_unified(true),
        FamilyMemberTab::new("m3", "아버지", MemberRole::Member).with_include_in_unified(false),
        FamilyMemberTab::new("m4", "동생", MemberRole::Member),
    ]
}

fn legacy_video(
    id: &str,
    title: &str,
    region: &str,
    era: &str,
    ingredients: &[&str],
    master: &str,
) -> LegacyVideo {
    LegacyVideo {
        id: id.to_owned(),
        title: title.to_owned(),
        description: format!("{region}에서 전해 내려오는 {title}"),
        region: region.to_owned(),
        era: era.to_owned(),
        ingredients: ingredients.iter().map(|i| (*i).to_owned()).collect(),
        master: LegacyMaster {
            name: master.to_owned(),
            region: region.to_owned(),
            title: "종부".to_owned(),
        },
        video_url: None,
    }
}

/// Three archive records from different regions
pub fn legacy_videos() -> Vec<LegacyVideo> {
    vec![
        legacy_video(
            "v1",
            "헛제삿밥",
            "경북 안동",
            "조선 후기",
            &["쌀", "간장", "도라지"],
            "김순자",
        ),
        legacy_video(
            "v2",
            "전주비빔밥",
            "전북 전주",
            "조선 후기",
            &["쌀", "고추장", "콩나물"],
            "박정희",
        ),
        legacy_video(
            "v3",
            "개성 보쌈김치",
            "경기 개성",
            "고려",
            &["배추", "간장", "배"],
            "이영숙",
        ),
    ]
}

/// Replacement guides for hard-to-find traditional ingredients
pub fn replacement_guides() -> Vec<ReplacementGuide> {
    vec![
        ReplacementGuide {
            traditional: GuideIngredient {
                name: "조청".to_owned(),
                description: Some("쌀을 엿기름으로 삭혀 졸인 묽은 엿".to_owned()),
            },
            modern: GuideIngredient {
                name: "올리고당".to_owned(),
                description: None,
            },
            tips: vec!["단맛이 덜하므로 1.2배로 넣는다".to_owned()],
        },
        ReplacementGuide {
            traditional: GuideIngredient {
                name: "집간장".to_owned(),
                description: None,
            },
            modern: GuideIngredient {
                name: "Soy Sauce".to_owned(),
                description: Some("양조간장".to_owned()),
            },
            tips: Vec::new(),
        },
        ReplacementGuide {
            traditional: GuideIngredient {
                name: "막장".to_owned(),
                description: None,
            },
            modern: GuideIngredient {
                name: "된장".to_owned(),
                description: None,
            },
            tips: Vec::new(),
        },
    ]
}
