// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: a validating wrapper and runtime contracts.
//!
//! Two complementary approaches to the one precondition the search has:
//!
//! 1. **Type-level wrapper** (`SortedSlice`) that checks order once at
//!    construction. If you hold one, the slice is sorted.
//!
//! 2. **Runtime contracts** that panic in debug builds when the order is
//!    violated. Zero-cost in release, but catch bugs during development.
//!
//! Plain `search` uses neither and simply documents the precondition.

mod types;
pub mod contracts;

pub use types::*;
