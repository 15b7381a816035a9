//! Runtime contracts for the sortedness precondition.
//!
//! These are debug-mode assertions. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. State the precondition the search relies on, in code
//!
//! The plain [`search`](crate::search) never calls them; it trusts the
//! caller. They guard the places that *claim* sortedness without checking
//! it, such as [`SortedSlice::new_unchecked`](super::SortedSlice::new_unchecked).
//!
//! # Usage
//!
//! ```ignore
//! use halving::verify::contracts::*;
//!
//! // In debug builds, this panics if the slice has a descent
//! check_sorted(&values);
//!
//! // In release builds, this is a no-op
//! ```

/// Check that a slice is in non-decreasing order.
///
/// # Panics (debug builds only)
/// Panics at the first index `i` where `slice[i - 1] > slice[i]`.
#[inline]
pub fn check_sorted<T: Ord>(slice: &[T]) {
    if cfg!(debug_assertions) {
        for i in 1..slice.len() {
            debug_assert!(
                slice[i - 1] <= slice[i],
                "Contract violation: Sorted - descent at position {} of {}",
                i,
                slice.len()
            );
        }
    }
}

/// Check that a halving window is well-formed and its midpoint is inside it.
///
/// # Panics (debug builds only)
/// Panics if `low > high`, `high > len`, or `mid` falls outside `[low, high)`.
#[inline]
pub fn check_window(low: usize, mid: usize, high: usize, len: usize) {
    debug_assert!(
        low <= high && high <= len,
        "Contract violation: Window - [{}, {}) not within [0, {})",
        low,
        high,
        len
    );
    debug_assert!(
        low <= mid && mid < high,
        "Contract violation: Midpoint - {} outside [{}, {})",
        mid,
        low,
        high
    );
}
