//! Property tests for the validating `SortedSlice` wrapper.

use super::common::{linear_contains, sorted_vec_strategy, unsorted_vec_strategy};
use halving::{is_sorted, search, InvariantError, SortedSlice};
use proptest::prelude::*;

proptest! {
    /// Property: Sorted input is always accepted
    #[test]
    fn prop_sorted_accepted(values in sorted_vec_strategy()) {
        prop_assert!(SortedSlice::new(&values).is_ok());
        prop_assert!(is_sorted(&values));
    }

    /// Property: Acceptance is exactly sortedness, and rejection names the first descent
    #[test]
    fn prop_rejection_names_first_descent(values in unsorted_vec_strategy()) {
        match SortedSlice::new(&values) {
            Ok(_) => prop_assert!(values.windows(2).all(|w| w[0] <= w[1])),
            Err(InvariantError::Unsorted { position, len }) => {
                prop_assert_eq!(len, values.len());
                prop_assert!(values[position - 1] > values[position]);
                prop_assert!(values[..position].windows(2).all(|w| w[0] <= w[1]));
            }
        }
    }

    /// Property: A validated slice answers like the plain search and a linear scan
    #[test]
    fn prop_validated_matches_plain(values in sorted_vec_strategy(), target in -60i64..60) {
        let sorted = SortedSlice::new(&values).unwrap();
        prop_assert_eq!(sorted.contains(&target), search(&values, &target));
        prop_assert_eq!(sorted.contains(&target), linear_contains(&values, &target));
    }
}
