// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Step-by-step record of a halving search.
//!
//! Same walk as [`search`](super::search), but every window it inspects is
//! kept so the CLI can show how the range collapsed.

use std::cmp::Ordering;

use crate::verify::contracts::check_window;

/// One window visited during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Inclusive lower bound of the window.
    pub low: usize,
    /// Exclusive upper bound of the window.
    pub high: usize,
    /// Midpoint compared against the target, or `None` when the window was empty.
    pub mid: Option<usize>,
    /// How `sorted[mid]` compared to the target.
    pub ordering: Option<Ordering>,
}

impl Probe {
    /// True if this probe landed on the target.
    pub fn is_hit(&self) -> bool {
        self.ordering == Some(Ordering::Equal)
    }

    /// Number of elements still under consideration.
    pub fn width(&self) -> usize {
        self.high - self.low
    }
}

/// Record every window the search visits for `target`.
///
/// The last probe is either a hit or an empty window (`mid == None`). A slice
/// of `n` elements produces at most `⌊log2 n⌋ + 2` probes.
pub fn probes<T: Ord>(sorted: &[T], target: &T) -> Vec<Probe> {
    let mut steps = Vec::new();
    let mut low = 0;
    let mut high = sorted.len();

    loop {
        if low >= high {
            tracing::trace!(low, high, "window empty");
            steps.push(Probe {
                low,
                high,
                mid: None,
                ordering: None,
            });
            return steps;
        }

        let mid = low + (high - low) / 2;
        check_window(low, mid, high, sorted.len());
        let ordering = sorted[mid].cmp(target);
        tracing::trace!(low, high, mid, ?ordering, "probe");
        steps.push(Probe {
            low,
            high,
            mid: Some(mid),
            ordering: Some(ordering),
        });

        match ordering {
            Ordering::Equal => return steps,
            Ordering::Greater => high = mid,
            Ordering::Less => low = mid + 1,
        }
    }
}
