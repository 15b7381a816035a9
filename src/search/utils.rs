// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsing helpers for search input that arrives as text.

use crate::error::{Error, Result};

/// Parse a list of integers separated by commas and/or whitespace.
///
/// Empty fragments are skipped, so `"1,, 2"` and `" 1 2 "` both parse.
///
/// # Example
///
/// ```ignore
/// let values = parse_sequence("1, 2 3,4");
/// assert_eq!(values.unwrap(), vec![1, 2, 3, 4]);
/// ```
pub fn parse_sequence(input: &str) -> Result<Vec<i64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(parse_value)
        .collect()
}

/// Parse a single integer, reporting the offending text on failure.
pub fn parse_value(token: &str) -> Result<i64> {
    token.trim().parse::<i64>().map_err(|e| Error::Parse {
        input: token.to_string(),
        reason: e.to_string(),
    })
}
