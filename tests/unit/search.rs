//! Literal search scenarios.

use halving::{search, search_by_key, SortedSlice};

const DIGITS: [i64; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

#[test]
fn finds_five_in_digits() {
    assert!(search(&DIGITS, &5));
}

#[test]
fn misses_ten_in_digits() {
    assert!(!search(&DIGITS, &10));
}

#[test]
fn empty_sequence_is_always_a_miss() {
    let empty: Vec<i64> = Vec::new();
    for target in [-1, 0, 1, i64::MAX] {
        assert!(!search(&empty, &target));
    }
}

#[test]
fn single_element() {
    assert!(search(&[5], &5));
    assert!(!search(&[5], &3));
}

#[test]
fn duplicates_report_existence() {
    assert!(search(&[1, 2, 2, 2, 3], &2));
}

#[test]
fn works_on_strings() {
    let mut colours = vec!["RED", "BLUE", "GREEN", "WHITE", "BLACK"];
    colours.sort_unstable();
    assert!(search(&colours, &"GREEN"));
    assert!(!search(&colours, &"PINK"));
}

#[test]
fn works_on_records_by_key() {
    struct Reading {
        at: u32,
    }

    let readings = [Reading { at: 10 }, Reading { at: 20 }, Reading { at: 35 }];
    assert!(search_by_key(&readings, &20, |r| r.at));
    assert!(!search_by_key(&readings, &21, |r| r.at));
}

#[test]
fn large_sequence() {
    let values: Vec<u64> = (0..100_000).map(|v| v * 3).collect();
    assert!(search(&values, &299_997));
    assert!(!search(&values, &299_998));
    assert!(search(&values, &0));
}

#[test]
fn validated_slice_rejects_descending() {
    let err = SortedSlice::new(&[3, 2, 1]).unwrap_err();
    assert_eq!(err.to_string(), "slice not sorted at position 1 (of 3 elements)");
}
