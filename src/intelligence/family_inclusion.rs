// ABOUTME: Resolves which family members take part in the unified diet view
// ABOUTME: Server-provided ids win; otherwise tabs whose inclusion flag is not false
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

use bapsang_core::models::FamilyMemberTab;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Inputs available to the inclusion resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct InclusionRequest<'a> {
    /// Member tabs of the family switcher, if loaded
    pub member_tabs: Option<&'a [FamilyMemberTab]>,
    /// Ids the server already resolved, if any
    pub included_member_ids: Option<&'a [String]>,
}

/// Where a resolved id list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InclusionSource {
    /// The server-provided list was used verbatim
    Server,
    /// Derived from the tabs' inclusion flags
    TabDefaults,
}

/// Resolved member ids with their provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusionResolution {
    /// Member ids included in the unified view
    pub ids: Vec<String>,
    /// Which input produced `ids`
    pub source: InclusionSource,
}

/// Resolve included members and report which input decided
///
/// A non-empty server list is authoritative. An empty server list counts as
/// not provided.
#[must_use]
pub fn resolve_included_members(request: InclusionRequest<'_>) -> InclusionResolution {
    if let Some(ids) = request.included_member_ids.filter(|ids| !ids.is_empty()) {
        return InclusionResolution {
            ids: ids.to_vec(),
            source: InclusionSource::Server,
        };
    }

    let tabs = request.member_tabs.unwrap_or_default();
    let ids: Vec<String> = tabs
        .iter()
        .filter(|tab| tab.unified_inclusion().is_included())
        .map(|tab| tab.id.clone())
        .collect();

    debug!(
        tabs = tabs.len(),
        included = ids.len(),
        "Derived unified-view members from tab flags"
    );

    InclusionResolution {
        ids,
        source: InclusionSource::TabDefaults,
    }
}

/// Member ids included in the unified view, in tab order
#[must_use]
pub fn derive_included_member_ids(request: InclusionRequest<'_>) -> Vec<String> {
    resolve_included_members(request).ids
}
