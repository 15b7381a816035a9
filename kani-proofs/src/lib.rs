// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the halving search.
//!
//! This standalone crate extracts the halving step and the recursive search
//! and provides mathematical proofs of their correctness using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Bounds**: the midpoint always lies in `[low, high)`
//! 2. **Progress**: both successor windows are strictly smaller
//! 3. **No overflow**: `low + (high - low) / 2` never overflows, even at `usize::MAX`
//! 4. **No panics**: search never panics on any input, sorted or not
//! 5. **Correctness**: on sorted input, search agrees with a linear scan

use std::cmp::Ordering;

// ============================================================================
// HALVING STEP (copied from src/search/mod.rs)
// ============================================================================

/// Midpoint of a non-empty window `[low, high)`.
pub fn midpoint(low: usize, high: usize) -> usize {
    low + (high - low) / 2
}

/// Recursive membership search over `sorted[low..high]`.
pub fn search_range<T: Ord>(sorted: &[T], target: &T, low: usize, high: usize) -> bool {
    if low >= high {
        return false;
    }
    let mid = midpoint(low, high);
    match sorted[mid].cmp(target) {
        Ordering::Equal => true,
        Ordering::Greater => search_range(sorted, target, low, mid),
        Ordering::Less => search_range(sorted, target, mid + 1, high),
    }
}

pub fn search<T: Ord>(sorted: &[T], target: &T) -> bool {
    search_range(sorted, target, 0, sorted.len())
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    const MAX_LEN: usize = 8;

    /// Verify the midpoint is in bounds and both halves shrink, for every window.
    #[kani::proof]
    fn verify_midpoint_bounds_and_progress() {
        let low: usize = kani::any();
        let high: usize = kani::any();
        kani::assume(low < high);

        let mid = midpoint(low, high);

        kani::assert(low <= mid && mid < high, "midpoint must lie in [low, high)");
        kani::assert(mid - low < high - low, "left window must shrink");
        kani::assert(high - (mid + 1) < high - low, "right window must shrink");
    }

    /// Verify search never panics, whatever order the values are in.
    #[kani::proof]
    #[kani::unwind(10)] // log2(MAX_LEN) + 2 levels of recursion, plus slack
    fn verify_search_no_panic() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let values: [u8; MAX_LEN] = kani::any();
        let target: u8 = kani::any();

        // This must not panic (the answer is unspecified when unsorted)
        let _ = search(&values[..len], &target);
    }

    /// Verify search agrees with a linear scan on sorted input.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_search_matches_scan() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let values: [u8; MAX_LEN] = kani::any();
        let target: u8 = kani::any();
        let slice = &values[..len];

        for i in 1..len {
            kani::assume(slice[i - 1] <= slice[i]);
        }

        let expected = slice.iter().any(|v| *v == target);
        kani::assert(
            search(slice, &target) == expected,
            "search must agree with a linear scan on sorted input",
        );
    }
}

// ============================================================================
// REGULAR TESTS (run with cargo test)
// ============================================================================
