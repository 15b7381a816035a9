//! Property tests for the numeric drills.

use halving::drills::{FibonacciTerms, MAX_COUNT, MAX_WIDTH};
use halving::{random_bits, sum_fibonacci};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    /// Property: The sum equals the sum of the yielded terms
    #[test]
    fn prop_sum_matches_terms(count in 0u32..=MAX_COUNT) {
        let expected: u64 = FibonacciTerms::new().take(count as usize).sum();
        prop_assert_eq!(sum_fibonacci(count).unwrap(), expected);
    }

    /// Property: Every count past the limit overflows
    #[test]
    fn prop_past_limit_overflows(count in (MAX_COUNT + 1)..1_000) {
        prop_assert!(sum_fibonacci(count).is_err());
    }

    /// Property: Each term is the sum of the two before it
    #[test]
    fn prop_terms_recur(start in 0usize..80) {
        let terms: Vec<u64> = FibonacciTerms::new().skip(start).take(3).collect();
        prop_assert_eq!(terms[0] + terms[1], terms[2]);
    }

    /// Property: Drawn value is the base-2 reading of the bits and fits the width
    #[test]
    fn prop_bits_spell_value(seed in any::<u64>(), width in 1u32..=MAX_WIDTH) {
        let draw = random_bits(&mut StdRng::seed_from_u64(seed), width).unwrap();
        prop_assert_eq!(draw.bits.len(), width as usize);
        prop_assert!(draw.bits.chars().all(|c| c == '0' || c == '1'));
        prop_assert_eq!(u32::from_str_radix(&draw.bits, 2).unwrap(), draw.value);
        prop_assert!(u64::from(draw.value) < 1u64 << width);
    }
}
