// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random fixed-width binary numbers.

use std::fmt;

use rand::Rng;

use crate::error::{Error, Result};

/// Width drawn when none is given.
pub const DEFAULT_WIDTH: u32 = 4;

/// Widest draw that still fits the `u32` value.
pub const MAX_WIDTH: u32 = 32;

/// A drawn bit string and the number it spells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitDraw {
    /// Bits, most significant first (`"0110"`).
    pub bits: String,
    /// Base-10 reading of `bits`.
    pub value: u32,
}

impl fmt::Display for BitDraw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.bits, self.value)
    }
}

/// Draw `width` independent fair bits.
///
/// ```
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let draw = halving::random_bits(&mut rng, 4).unwrap();
/// assert_eq!(draw.bits.len(), 4);
/// assert!(draw.value < 16);
/// ```
pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, width: u32) -> Result<BitDraw> {
    if width == 0 || width > MAX_WIDTH {
        return Err(Error::InvalidWidth {
            width,
            max: MAX_WIDTH,
        });
    }

    let mut bits = String::with_capacity(width as usize);
    let mut value: u32 = 0;
    for _ in 0..width {
        let bit: u32 = rng.gen_range(0..=1);
        bits.push(if bit == 1 { '1' } else { '0' });
        // width <= 32, so the shifted-out bit is always zero
        value = (value << 1) | bit;
    }

    tracing::debug!(width, %bits, value, "drew random bits");
    Ok(BitDraw { bits, value })
}
