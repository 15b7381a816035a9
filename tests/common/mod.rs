//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use proptest::prelude::*;

// Re-export canonical test utilities from halving::testing
pub use halving::testing::{linear_contains, make_day, make_wardrobe, sorted};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Arbitrary sorted vector, duplicates allowed (small value range forces them).
pub fn sorted_vec_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..64).prop_map(sorted)
}

/// Sorted vector over the full `i64` range, exercising extreme values.
pub fn wide_sorted_vec_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..200).prop_map(sorted)
}

/// Non-empty sorted vector together with one of its elements.
pub fn sorted_with_member() -> impl Strategy<Value = (Vec<i64>, i64)> {
    prop::collection::vec(-1_000i64..1_000, 1..128)
        .prop_map(sorted)
        .prop_flat_map(|values| {
            let len = values.len();
            (Just(values), 0..len)
        })
        .prop_map(|(values, i)| {
            let member = values[i];
            (values, member)
        })
}

/// Arbitrary vector with no ordering guarantee.
pub fn unsorted_vec_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..40)
}
