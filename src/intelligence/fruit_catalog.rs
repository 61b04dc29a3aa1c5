// ABOUTME: Built-in Korean seasonal fruit catalog with per-serving nutrition
// ABOUTME: Static table initialized once via LazyLock; values per one fruit exchange serving
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Seasonal fruit catalog.
//!
//! Serving sizes follow the Korean food exchange list, where one fruit
//! exchange is roughly 50 kcal. Potassium and sugar values are per serving,
//! taken from the national standard food composition table (10th revision)
//! and rounded to whole mg / g.

use bapsang_core::models::{Fruit, FruitNutrition};
use std::sync::LazyLock;

/// (id, name, serving g, kcal, potassium mg, sugar g, carbohydrate g, months)
type CatalogRow = (&'static str, &'static str, f64, f64, f64, f64, f64, &'static [u8]);

const CATALOG_ROWS: &[CatalogRow] = &[
    ("apple", "사과", 80.0, 50.0, 85.0, 10.0, 12.0, &[1, 2, 3, 8, 9, 10, 11, 12]),
    ("pear", "배", 110.0, 50.0, 130.0, 9.0, 12.0, &[1, 2, 9, 10, 11, 12]),
    ("tangerine", "귤", 120.0, 50.0, 180.0, 10.0, 12.0, &[1, 2, 11, 12]),
    ("strawberry", "딸기", 150.0, 50.0, 250.0, 7.0, 11.0, &[1, 2, 3, 4, 5]),
    ("korean_melon", "참외", 150.0, 50.0, 310.0, 10.0, 12.0, &[5, 6, 7, 8]),
    ("watermelon", "수박", 150.0, 45.0, 165.0, 9.0, 11.0, &[6, 7, 8]),
    ("peach", "복숭아", 150.0, 50.0, 270.0, 11.0, 13.0, &[7, 8, 9]),
    ("grape", "포도", 80.0, 50.0, 150.0, 12.0, 13.0, &[8, 9, 10]),
    ("sweet_persimmon", "단감", 80.0, 50.0, 130.0, 11.0, 13.0, &[10, 11, 12]),
    ("plum", "자두", 150.0, 50.0, 230.0, 11.0, 13.0, &[6, 7, 8]),
    ("blueberry", "블루베리", 80.0, 45.0, 60.0, 8.0, 11.0, &[6, 7, 8]),
    ("kiwi", "키위", 80.0, 50.0, 250.0, 7.0, 12.0, &[1, 2, 3, 4, 11, 12]),
    ("hallabong", "한라봉", 120.0, 55.0, 190.0, 12.0, 13.0, &[1, 2, 3, 4]),
    ("fig", "무화과", 80.0, 55.0, 190.0, 13.0, 14.0, &[8, 9, 10]),
];

static DEFAULT_FRUIT_CATALOG: LazyLock<Vec<Fruit>> = LazyLock::new(|| {
    CATALOG_ROWS
        .iter()
        .map(
            |&(id, name, serving_grams, calories, potassium, sugar, carbohydrates, months)| Fruit {
                id: id.to_owned(),
                name: name.to_owned(),
                serving_grams,
                nutrition: FruitNutrition {
                    calories,
                    potassium: Some(potassium),
                    sugar: Some(sugar),
                    carbohydrates: Some(carbohydrates),
                },
                season_months: months.to_vec(),
            },
        )
        .collect()
});

/// The built-in seasonal catalog, in display order
#[must_use]
pub fn default_fruit_catalog() -> &'static [Fruit] {
    &DEFAULT_FRUIT_CATALOG
}
