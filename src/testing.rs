//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::wardrobe::{DayColours, Wardrobe, Weekday};

/// Sorted copy of `values`.
pub fn sorted(mut values: Vec<i64>) -> Vec<i64> {
    values.sort_unstable();
    values
}

/// Reference answer: linear scan.
pub fn linear_contains<T: PartialEq>(values: &[T], target: &T) -> bool {
    values.iter().any(|v| v == target)
}

/// Create a day entry from string literals.
pub fn make_day(day: Weekday, colours: &[&str]) -> DayColours {
    DayColours {
        day,
        colours: colours.iter().map(|c| c.to_string()).collect(),
    }
}

/// Create a wardrobe from `(day, colours)` pairs. Panics on duplicate days.
pub fn make_wardrobe(days: &[(Weekday, &[&str])]) -> Wardrobe {
    Wardrobe::new(days.iter().map(|(d, c)| make_day(*d, c)).collect())
        .expect("test wardrobe has a repeated day")
}
