// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Membership tests over sorted slices by recursive halving.
//!
//! Every function here assumes the slice is sorted in non-decreasing order.
//! That precondition is documented, not checked: on unsorted input the answer
//! is unspecified (it may miss a present element or report one that is not
//! there), but nothing panics. Use [`SortedSlice`](crate::SortedSlice) when
//! the input comes from somewhere you don't trust.
//!
//! The search never copies a sub-slice. Each step narrows a `[low, high)`
//! window into the original slice, so the whole call allocates nothing and
//! recurses at most `⌊log2 n⌋ + 1` times.

mod trace;
pub mod utils;

pub use trace::{probes, Probe};

use std::cmp::Ordering;

/// Returns `true` if `target` occurs in `sorted`.
///
/// # Preconditions
///
/// `sorted` must be in non-decreasing order. This is not validated.
///
/// With duplicates, any matching midpoint answers `true`; there is no
/// guarantee about which occurrence was hit.
///
/// # Example
///
/// ```
/// use halving::search;
///
/// assert!(search(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &5));
/// assert!(!search(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &10));
/// assert!(!search::<i32>(&[], &1));
/// ```
pub fn search<T: Ord>(sorted: &[T], target: &T) -> bool {
    search_range(sorted, target, 0, sorted.len())
}

/// One halving step over `sorted[low..high]`.
fn search_range<T: Ord>(sorted: &[T], target: &T, low: usize, high: usize) -> bool {
    if low >= high {
        return false;
    }

    // INVARIANT: low <= mid < high, so the index is in bounds and both
    // halves below are strictly smaller than [low, high).
    let mid = low + (high - low) / 2;

    match sorted[mid].cmp(target) {
        Ordering::Equal => true,
        Ordering::Greater => search_range(sorted, target, low, mid),
        Ordering::Less => search_range(sorted, target, mid + 1, high),
    }
}

/// Loop form of [`search`]. Same answers, same precondition.
pub fn search_iterative<T: Ord>(sorted: &[T], target: &T) -> bool {
    search_by(sorted, |probe| probe.cmp(target))
}

/// Halving search driven by a comparator.
///
/// `compare` returns how an element orders relative to the value being
/// sought: `Less` if the element is too small, `Greater` if too large. This
/// mirrors [`slice::binary_search_by`] but only reports existence.
pub fn search_by<T, F>(sorted: &[T], mut compare: F) -> bool
where
    F: FnMut(&T) -> Ordering,
{
    let mut low = 0;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match compare(&sorted[mid]) {
            Ordering::Equal => return true,
            Ordering::Greater => high = mid,
            Ordering::Less => low = mid + 1,
        }
    }

    false
}

/// Halving search on a key projected out of each element.
///
/// `sorted` must be ordered by `key_fn`.
pub fn search_by_key<T, K, F>(sorted: &[T], key: &K, mut key_fn: F) -> bool
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    search_by(sorted, |probe| key_fn(probe).cmp(key))
}
