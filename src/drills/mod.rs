// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small numeric drills that ride along with the search.
//!
//! Neither depends on the search. They exist because the exercise set they
//! came from asked for them: sum the first fifty Fibonacci numbers, and draw
//! a random 4-bit number and read it back in base 10.

mod bits;
mod fibonacci;

pub use bits::{random_bits, BitDraw, DEFAULT_WIDTH, MAX_WIDTH};
pub use fibonacci::{sum_fibonacci, FibonacciTerms, DEFAULT_COUNT, MAX_COUNT};
