//! Fibonacci and random-bit drills.

use halving::drills::{DEFAULT_COUNT, DEFAULT_WIDTH, MAX_COUNT};
use halving::{random_bits, sum_fibonacci, Error};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn first_fifty_fibonacci_sum() {
    assert_eq!(sum_fibonacci(DEFAULT_COUNT).unwrap(), 53_316_291_171);
}

#[test]
fn overflow_is_reported() {
    let err = sum_fibonacci(MAX_COUNT + 1).unwrap_err();
    assert_eq!(err.to_string(), "Fibonacci sum overflows u64 after 91 terms");
}

#[test]
fn default_draw_is_four_bits() {
    let mut rng = StdRng::seed_from_u64(2024);
    let draw = random_bits(&mut rng, DEFAULT_WIDTH).unwrap();
    assert_eq!(draw.bits.len(), 4);
    assert!(draw.value <= 15);
}

#[test]
fn invalid_width_message() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = random_bits(&mut rng, 40).unwrap_err();
    assert!(matches!(err, Error::InvalidWidth { width: 40, max: 32 }));
    assert_eq!(err.to_string(), "bit width 40 is outside 1..=32");
}
