// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fibonacci summation in fixed-width arithmetic.
//!
//! The terms start from the first sum of the seeds `0, 1`, so the sequence
//! is `1, 2, 3, 5, 8, ...`. Every addition is checked; nothing wraps.

use crate::error::{Error, Result};

/// Number of terms summed when no count is given.
pub const DEFAULT_COUNT: u32 = 50;

/// Largest count whose sum fits in a `u64`.
pub const MAX_COUNT: u32 = 90;

/// Iterator over `1, 2, 3, 5, 8, ...`.
///
/// Ends (rather than wrapping) once the next term would overflow `u64`.
#[derive(Debug, Clone)]
pub struct FibonacciTerms {
    prev: u64,
    curr: u64,
    done: bool,
}

impl FibonacciTerms {
    pub fn new() -> Self {
        Self {
            prev: 0,
            curr: 1,
            done: false,
        }
    }
}

impl Default for FibonacciTerms {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciTerms {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        match self.prev.checked_add(self.curr) {
            Some(term) => {
                self.prev = self.curr;
                self.curr = term;
                Some(term)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for FibonacciTerms {}

/// Sum of the first `count` terms of [`FibonacciTerms`].
///
/// Returns [`Error::Overflow`] for any `count` above [`MAX_COUNT`].
///
/// ```
/// assert_eq!(halving::sum_fibonacci(50).unwrap(), 53_316_291_171);
/// ```
pub fn sum_fibonacci(count: u32) -> Result<u64> {
    let overflow = || Error::Overflow {
        what: "Fibonacci sum",
        count,
    };

    let mut total: u64 = 0;
    let mut terms = FibonacciTerms::new();
    for _ in 0..count {
        let term = terms.next().ok_or_else(overflow)?;
        total = total.checked_add(term).ok_or_else(overflow)?;
    }

    tracing::debug!(count, total, "summed Fibonacci terms");
    Ok(total)
}
