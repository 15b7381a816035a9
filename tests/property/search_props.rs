//! Property tests for halving-search correctness.
//!
//! Verifies that:
//! 1. Every element of a sorted slice is found
//! 2. Values absent from a sorted slice are never reported
//! 3. Recursive, iterative, comparator and std searches agree
//! 4. Arbitrary (unsorted) input never panics

use super::common::{
    linear_contains, sorted_vec_strategy, sorted_with_member, unsorted_vec_strategy,
    wide_sorted_vec_strategy,
};
use halving::{probes, search, search_by, search_iterative};
use proptest::prelude::*;

proptest! {
    /// Property: Present values are always found
    #[test]
    fn prop_member_is_found((values, member) in sorted_with_member()) {
        prop_assert!(search(&values, &member));
        prop_assert!(search_iterative(&values, &member));
    }

    /// Property: Absent values are never found
    ///
    /// Targets are drawn from a range wider than the values, so a good share
    /// of them are misses.
    #[test]
    fn prop_absent_is_not_found(values in sorted_vec_strategy(), target in -80i64..80) {
        prop_assume!(!values.contains(&target));
        prop_assert!(!search(&values, &target));
    }

    /// Property: Search agrees with a linear scan on sorted input
    #[test]
    fn prop_matches_linear_scan(values in sorted_vec_strategy(), target in -60i64..60) {
        prop_assert_eq!(search(&values, &target), linear_contains(&values, &target));
    }

    /// Property: All search forms agree with the standard library
    #[test]
    fn prop_all_forms_agree(values in wide_sorted_vec_strategy(), target in any::<i64>()) {
        let expected = values.binary_search(&target).is_ok();
        prop_assert_eq!(search(&values, &target), expected);
        prop_assert_eq!(search_iterative(&values, &target), expected);
        prop_assert_eq!(search_by(&values, |probe| probe.cmp(&target)), expected);
    }

    /// Property: Extreme values are found without overflow
    #[test]
    fn prop_extremes_found(values in wide_sorted_vec_strategy()) {
        if let (Some(first), Some(last)) = (values.first(), values.last()) {
            prop_assert!(search(&values, first));
            prop_assert!(search(&values, last));
        }
    }

    /// Property: Unsorted input returns an answer instead of panicking
    #[test]
    fn prop_unsorted_never_panics(values in unsorted_vec_strategy(), target in -25i64..25) {
        let _ = search(&values, &target);
        let _ = search_iterative(&values, &target);
        let _ = probes(&values, &target);
    }

    /// Property: Search is pure
    #[test]
    fn prop_repeat_calls_agree(values in sorted_vec_strategy(), target in -60i64..60) {
        let first = search(&values, &target);
        prop_assert_eq!(search(&values, &target), first);
        prop_assert_eq!(search(&values, &target), first);
    }
}

// ============================================================================
// PROBE PROPERTIES
// ============================================================================

proptest! {
    /// Property: Every midpoint lies inside its window
    #[test]
    fn prop_mid_within_window(values in sorted_vec_strategy(), target in -60i64..60) {
        for probe in probes(&values, &target) {
            prop_assert!(probe.low <= probe.high && probe.high <= values.len());
            if let Some(mid) = probe.mid {
                prop_assert!(probe.low <= mid && mid < probe.high);
            }
        }
    }

    /// Property: Windows strictly shrink and the walk is logarithmic
    #[test]
    fn prop_windows_shrink(values in sorted_vec_strategy(), target in -60i64..60) {
        let steps = probes(&values, &target);
        for pair in steps.windows(2) {
            prop_assert!(pair[1].width() < pair[0].width());
        }

        let bound = if values.is_empty() {
            1
        } else {
            values.len().ilog2() as usize + 2
        };
        prop_assert!(steps.len() <= bound, "{} probes for {} values", steps.len(), values.len());
    }

    /// Property: The trace ends in a hit exactly when search succeeds
    #[test]
    fn prop_trace_agrees_with_search(values in sorted_vec_strategy(), target in -60i64..60) {
        let steps = probes(&values, &target);
        let last = steps.last().copied();
        prop_assert!(last.is_some());
        prop_assert_eq!(last.map(|p| p.is_hit()), Some(search(&values, &target)));
        prop_assert!(steps.iter().filter(|p| p.is_hit()).count() <= 1);
    }
}
