// ABOUTME: Core types for the Bapsang family-aware diet filtering engine
// ABOUTME: Foundation crate with error handling, shared value records, and text helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

#![deny(unsafe_code)]

//! # Bapsang Core
//!
//! Foundation crate providing the shared value records and error types used by
//! the filtering and aggregation engine. Records arrive from an external
//! persistence layer and are never mutated here.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Recipes, excluded-food rules, family members, fruits, archive records
//! - **text**: Match normalization and Korean-locale collation

/// Unified error handling system with standard error codes
pub mod errors;

/// Plain value records exchanged with the persistence layer
pub mod models;

/// Text normalization and Korean-locale ordering helpers
pub mod text;

pub use errors::{AppError, ErrorCode};
