// ABOUTME: Family member roster records used by the unified diet view
// ABOUTME: FamilyMemberTab, MemberRole, and the UnifiedInclusion tri-state resolution
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

use serde::{Deserialize, Serialize};

/// Role of a member within the family roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// The account owner
    #[serde(rename = "self")]
    Owner,
    /// Any other family member
    #[default]
    Member,
}

/// Whether a member takes part in the unified diet view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnifiedInclusion {
    /// Included (flag set to `true` or never set)
    Included,
    /// Explicitly switched off by the user
    ExcludedExplicitly,
}

impl UnifiedInclusion {
    /// Resolve the stored tri-state flag
    ///
    /// Absence means included; only an explicit `false` excludes.
    #[must_use]
    pub const fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(false) => Self::ExcludedExplicitly,
            Some(true) | None => Self::Included,
        }
    }

    /// Whether this resolution includes the member
    #[must_use]
    pub const fn is_included(self) -> bool {
        matches!(self, Self::Included)
    }
}

/// One tab of the family-member switcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberTab {
    /// Member identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Owner or member
    #[serde(default)]
    pub role: MemberRole,
    /// Stored inclusion flag, absent for members created before the flag existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_in_unified: Option<bool>,
}

impl FamilyMemberTab {
    /// Create a tab with no stored inclusion flag
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: MemberRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            include_in_unified: None,
        }
    }

    /// Set the stored inclusion flag
    #[must_use]
    pub const fn with_include_in_unified(mut self, flag: bool) -> Self {
        self.include_in_unified = Some(flag);
        self
    }

    /// Resolved inclusion state of this member
    #[must_use]
    pub const fn unified_inclusion(&self) -> UnifiedInclusion {
        UnifiedInclusion::from_flag(self.include_in_unified)
    }
}
