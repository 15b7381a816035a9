// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing the halving search against a linear scan.
//!
//! The fuzzer hands over arbitrary values in arbitrary order. Unsorted input
//! must still return (no panic, no out-of-bounds index). Once sorted, every
//! search form must agree with the scan exactly.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use halving::{probes, search, search_iterative, SortedSlice};

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<i32>,
    target: i32,
}

fuzz_target!(|input: Input| {
    let Input { mut values, target } = input;

    // Property 1: unsorted input never panics
    let _ = search(&values, &target);
    let _ = search_iterative(&values, &target);
    let _ = probes(&values, &target);

    // Property 2: on sorted input, every form agrees with the scan
    values.sort_unstable();
    let expected = values.contains(&target);
    assert_eq!(search(&values, &target), expected);
    assert_eq!(search_iterative(&values, &target), expected);

    let sorted = SortedSlice::new(&values).expect("sorted input must validate");
    assert_eq!(sorted.contains(&target), expected);

    // Property 3: the trace ends on a hit exactly when the value is present
    let steps = probes(&values, &target);
    assert_eq!(steps.last().map(|p| p.is_hit()), Some(expected));
});
