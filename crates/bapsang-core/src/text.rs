// ABOUTME: Text normalization for substring matching and Korean-locale ordering
// ABOUTME: Shared by the excluded-food filter, archive search, and filter option lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

//! Text helpers shared by the filters.
//!
//! Matching is trim + lowercase on both sides, then a plain substring test.
//! Ordering uses the ICU collator for the `ko` locale: punctuation and
//! symbols, then digits, then Hangul, then other scripts, with accents and
//! case only breaking ties.

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;

/// Trim and lowercase a string for matching
#[must_use]
pub fn normalize_for_match(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalized form of `value`, or `None` when nothing is left after trimming
#[must_use]
pub fn non_blank_normalized(value: &str) -> Option<String> {
    let normalized = normalize_for_match(value);
    (!normalized.is_empty()).then_some(normalized)
}

/// Whether `haystack` contains an already-normalized `needle`, ignoring case
#[must_use]
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

thread_local! {
    static KOREAN_COLLATOR: Option<Collator> =
        Collator::try_new(&locale!("ko").into(), CollatorOptions::new()).ok();
}

/// Compare two strings with the `ko` locale collator
///
/// Strings the collator considers equal fall back to code-point order, so the
/// result is a total order and sorting is deterministic.
#[must_use]
pub fn korean_locale_cmp(a: &str, b: &str) -> Ordering {
    KOREAN_COLLATOR
        .with(|collator| {
            collator
                .as_ref()
                .map_or(Ordering::Equal, |collator| collator.compare(a, b))
        })
        .then_with(|| a.cmp(b))
}

/// Distinct values in Korean-locale order
pub fn sorted_korean_unique<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = values.into_iter().map(Into::into).collect();
    out.sort_by(|a, b| korean_locale_cmp(a, b));
    out.dedup();
    out
}
