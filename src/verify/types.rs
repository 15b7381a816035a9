// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A slice wrapper that makes "searched an unsorted slice" unrepresentable.
//!
//! [`search`](crate::search) trusts its caller. When you can't, wrap the data
//! in [`SortedSlice`]: sortedness is checked once at construction, and every
//! search afterwards runs without re-checking. The cost is a single linear
//! pass upfront.
//!
//! # Example
//!
//! ```
//! use halving::{InvariantError, SortedSlice};
//!
//! let values = [1, 3, 5, 7];
//! let sorted = SortedSlice::new(&values).unwrap();
//! assert!(sorted.contains(&5));
//!
//! let err = SortedSlice::new(&[4, 2, 9]).unwrap_err();
//! assert_eq!(err, InvariantError::Unsorted { position: 1, len: 3 });
//! ```

use std::fmt;

use super::contracts::check_sorted;
use crate::search::{probes, search, Probe};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `slice[position - 1] > slice[position]`.
    Unsorted { position: usize, len: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::Unsorted { position, len } => {
                write!(
                    f,
                    "slice not sorted at position {} (of {} elements)",
                    position, len
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Returns the first position `i` where `slice[i - 1] > slice[i]`, if any.
pub fn first_descent<T: Ord>(slice: &[T]) -> Option<usize> {
    slice
        .windows(2)
        .position(|pair| pair[0] > pair[1])
        .map(|i| i + 1)
}

/// True if `slice` is in non-decreasing order.
pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    first_descent(slice).is_none()
}

/// A borrowed slice known to be in non-decreasing order.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `slice[i] <= slice[j]`
#[derive(Debug, Clone, Copy)]
pub struct SortedSlice<'a, T> {
    inner: &'a [T],
}

impl<'a, T: Ord> SortedSlice<'a, T> {
    /// Validate `slice` and wrap it.
    ///
    /// Returns `Err` naming the first descent if the slice is not sorted.
    pub fn new(slice: &'a [T]) -> Result<Self, InvariantError> {
        match first_descent(slice) {
            Some(position) => Err(InvariantError::Unsorted {
                position,
                len: slice.len(),
            }),
            None => Ok(Self { inner: slice }),
        }
    }

    /// Wrap `slice` without the linear check.
    ///
    /// The caller vouches for the order. Debug builds still assert it.
    pub fn new_unchecked(slice: &'a [T]) -> Self {
        check_sorted(slice);
        Self { inner: slice }
    }

    /// True if `target` occurs in the slice.
    pub fn contains(&self, target: &T) -> bool {
        search(self.inner, target)
    }

    /// The windows visited while looking for `target`.
    pub fn probes(&self, target: &T) -> Vec<Probe> {
        probes(self.inner, target)
    }

    /// Get the underlying slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.inner
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<'a, T: Ord> TryFrom<&'a [T]> for SortedSlice<'a, T> {
    type Error = InvariantError;

    fn try_from(slice: &'a [T]) -> Result<Self, Self::Error> {
        Self::new(slice)
    }
}
