// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Persisting the colour-frequency summary.
//!
//! The summary is one `(id, colour, frequency)` row per colour, written as a
//! pretty-printed JSON array. Creating a summary where one already exists is
//! an error unless the caller asks to overwrite, the same way creating a
//! table that already exists fails.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ColourTally;
use crate::error::{Error, Result};

/// One persisted summary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// 1-based serial id.
    pub id: u32,
    pub colour: String,
    pub frequency: u32,
}

/// Write the rows of `tally` to `path`.
///
/// Fails with [`Error::SummaryExists`] if `path` exists and `overwrite` is
/// false. Returns the rows that were written.
pub fn persist(
    path: impl AsRef<Path>,
    tally: &ColourTally,
    overwrite: bool,
) -> Result<Vec<SummaryRow>> {
    let path = path.as_ref();
    let rows = tally.rows();
    let json = serde_json::to_string_pretty(&rows)?;

    let mut file = OpenOptions::new()
        .write(true)
        .truncate(overwrite)
        .create(overwrite)
        .create_new(!overwrite)
        .open(path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => Error::SummaryExists(path.to_path_buf()),
            _ => Error::io(path, e),
        })?;
    file.write_all(json.as_bytes()).map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "persisted colour summary");
    Ok(rows)
}

/// Read summary rows back from `path`.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<SummaryRow>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let rows: Vec<SummaryRow> = serde_json::from_str(&json)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read colour summary");
    Ok(rows)
}
