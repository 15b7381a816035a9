//! Membership search over sorted slices by recursive halving.
//!
//! The core is [`search`]: given a slice in non-decreasing order and a
//! target, it narrows a `[low, high)` window until it either lands on the
//! target or the window is empty. No sub-slices are copied and nothing is
//! allocated. Around it sit a few companions:
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │  search/     │◀────│  verify/     │
//! │ (search,     │     │ (SortedSlice,│
//! │  probes)     │     │  contracts)  │
//! └──────────────┘     └──────────────┘
//!
//! ┌──────────────┐     ┌──────────────┐
//! │  drills/     │     │  wardrobe/   │
//! │ (fibonacci,  │     │ (tally,      │
//! │  random bits)│     │  summary)    │
//! └──────────────┘     └──────────────┘
//! ```
//!
//! | Module     | What it does                                          |
//! |------------|-------------------------------------------------------|
//! | `search`   | Recursive and iterative halving, probe traces         |
//! | `verify`   | Validated `SortedSlice` wrapper, debug contracts      |
//! | `drills`   | Fibonacci sums, random fixed-width binary numbers     |
//! | `wardrobe` | Weekday → colours table, frequency tally, persistence |
//!
//! # Usage
//!
//! ```
//! use halving::{search, SortedSlice};
//!
//! let values = [1, 2, 3, 4, 5, 6, 7, 8, 9];
//! assert!(search(&values, &5));
//!
//! // When the input isn't trusted, validate once and search freely.
//! let sorted = SortedSlice::new(&values).unwrap();
//! assert!(!sorted.contains(&10));
//! ```

// Module declarations
pub mod drills;
pub mod error;
mod search;
pub mod testing;
pub mod verify;
pub mod wardrobe;

// Re-exports for public API
pub use drills::{random_bits, sum_fibonacci, BitDraw, FibonacciTerms};
pub use error::{Error, Result};
pub use search::utils::{parse_sequence, parse_value};
pub use search::{probes, search, search_by, search_by_key, search_iterative, Probe};
pub use verify::{is_sorted, InvariantError, SortedSlice};
pub use wardrobe::{ColourTally, SummaryRow, Wardrobe, Weekday};
