// ABOUTME: Food-heritage archive browsing: record filtering and replacement guides
// ABOUTME: Re-exports the archive filter, option extraction, and guide lookup functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

/// Archive record filtering and filter-panel options
pub mod filter;
/// Traditional/modern ingredient replacement guides
pub mod replacement;

pub use filter::{extract_legacy_filter_options, filter_legacy_videos};
pub use replacement::{find_replacement_guide, find_replacement_guides};
