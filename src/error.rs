// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Crate-wide error type.
//!
//! The search itself never fails. Everything that can (file I/O, parsing,
//! validated construction, fixed-width arithmetic) funnels into [`Error`].

use std::path::PathBuf;

use crate::verify::InvariantError;
use crate::wardrobe::Weekday;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantError),

    #[error("{what} overflows u64 after {count} terms")]
    Overflow { what: &'static str, count: u32 },

    #[error("bit width {width} is outside 1..={max}")]
    InvalidWidth { width: u32, max: u32 },

    #[error("{0} appears more than once in the wardrobe table")]
    DuplicateDay(Weekday),

    #[error("summary already exists at {} (pass --overwrite to replace it)", .0.display())]
    SummaryExists(PathBuf),

    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
