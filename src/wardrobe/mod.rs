// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weekday → worn-colours table and its frequency tally.
//!
//! A [`Wardrobe`] is an ordinary value: build the classroom table with
//! [`Wardrobe::classroom`], or load one from JSON, and pass it where it's
//! needed. [`Wardrobe::tally`] reduces it to a [`ColourTally`], whose rows
//! are what [`summary`] persists.

pub mod summary;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use summary::SummaryRow;

/// Day of the week, serialized upper case (`"MONDAY"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "MONDAY",
            Weekday::Tuesday => "TUESDAY",
            Weekday::Wednesday => "WEDNESDAY",
            Weekday::Thursday => "THURSDAY",
            Weekday::Friday => "FRIDAY",
            Weekday::Saturday => "SATURDAY",
            Weekday::Sunday => "SUNDAY",
        };
        f.write_str(name)
    }
}

/// Colours worn on one day, in the order they were recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayColours {
    pub day: Weekday,
    pub colours: Vec<String>,
}

/// Weekday → colours table. Each weekday appears at most once.
///
/// Deserializing goes through [`Wardrobe::new`], so a table with a repeated
/// weekday fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWardrobe")]
pub struct Wardrobe {
    days: Vec<DayColours>,
}

/// Wire shape of [`Wardrobe`] before the duplicate-day check.
#[derive(Deserialize)]
struct RawWardrobe {
    days: Vec<DayColours>,
}

impl TryFrom<RawWardrobe> for Wardrobe {
    type Error = Error;

    fn try_from(raw: RawWardrobe) -> Result<Self> {
        Self::new(raw.days)
    }
}

impl Wardrobe {
    /// Build a table, rejecting repeated weekdays.
    pub fn new(days: Vec<DayColours>) -> Result<Self> {
        let mut seen = Vec::with_capacity(days.len());
        for entry in &days {
            if seen.contains(&entry.day) {
                return Err(Error::DuplicateDay(entry.day));
            }
            seen.push(entry.day);
        }
        Ok(Self { days })
    }

    /// The five-day table from the original classroom exercise.
    pub fn classroom() -> Self {
        const MONDAY: &[&str] = &[
            "GREEN", "YELLOW", "GREEN", "BROWN", "BLUE", "PINK", "BLUE", "YELLOW", "ORANGE",
            "CREAM", "ORANGE", "RED", "WHITE", "BLUE", "WHITE", "BLUE", "BLUE", "BLUE", "GREEN",
        ];
        const TUESDAY: &[&str] = &[
            "ARSH", "BROWN", "GREEN", "BROWN", "BLUE", "BLUE", "BLUE", "PINK", "PINK", "ORANGE",
            "ORANGE", "RED", "WHITE", "BLUE", "WHITE", "WHITE", "BLUE", "BLUE", "BLUE",
        ];
        const WEDNESDAY: &[&str] = &[
            "GREEN", "YELLOW", "GREEN", "BROWN", "BLUE", "PINK", "RED", "YELLOW", "ORANGE", "RED",
            "ORANGE", "RED", "BLUE", "BLUE", "WHITE", "BLUE", "BLUE", "WHITE", "WHITE",
        ];
        const THURSDAY: &[&str] = &[
            "BLUE", "BLUE", "GREEN", "WHITE", "BLUE", "BROWN", "PINK", "YELLOW", "ORANGE", "CREAM",
            "ORANGE", "RED", "WHITE", "BLUE", "WHITE", "BLUE", "BLUE", "BLUE", "GREEN",
        ];
        const FRIDAY: &[&str] = &[
            "GREEN", "WHITE", "GREEN", "BROWN", "BLUE", "BLUE", "BLACK", "WHITE", "ORANGE", "RED",
            "RED", "RED", "WHITE", "BLUE", "WHITE", "BLUE", "BLUE", "BLUE", "WHITE",
        ];

        let day = |day: Weekday, colours: &[&str]| DayColours {
            day,
            colours: colours.iter().map(|c| c.to_string()).collect(),
        };

        Self {
            days: vec![
                day(Weekday::Monday, MONDAY),
                day(Weekday::Tuesday, TUESDAY),
                day(Weekday::Wednesday, WEDNESDAY),
                day(Weekday::Thursday, THURSDAY),
                day(Weekday::Friday, FRIDAY),
            ],
        }
    }

    /// Parse a table from JSON: `{ "days": [{ "day": "MONDAY", "colours": [...] }] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawWardrobe = serde_json::from_str(json)?;
        raw.try_into()
    }

    /// Load a table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let wardrobe = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), days = wardrobe.days.len(), "loaded wardrobe table");
        Ok(wardrobe)
    }

    pub fn days(&self) -> &[DayColours] {
        &self.days
    }

    /// Colours recorded for `day`, if the table has that day.
    pub fn colours_on(&self, day: Weekday) -> Option<&[String]> {
        self.days
            .iter()
            .find(|entry| entry.day == day)
            .map(|entry| entry.colours.as_slice())
    }

    /// Count every colour across all days.
    pub fn tally(&self) -> ColourTally {
        let mut tally = ColourTally::default();
        for entry in &self.days {
            for colour in &entry.colours {
                tally.record(colour);
            }
        }
        tally
    }
}

/// Colour → number of times worn, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColourTally {
    counts: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl ColourTally {
    fn record(&mut self, colour: &str) {
        match self.index.get(colour) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(colour.to_string(), self.counts.len());
                self.counts.push((colour.to_string(), 1));
            }
        }
    }

    /// How many times `colour` was worn (0 if never).
    pub fn get(&self, colour: &str) -> u32 {
        self.index
            .get(colour)
            .map(|&slot| self.counts[slot].1)
            .unwrap_or(0)
    }

    /// Total number of recorded colours across all days.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Number of distinct colours.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(colour, frequency)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(c, n)| (c.as_str(), *n))
    }

    /// Summary rows with 1-based serial ids, in first-seen order.
    pub fn rows(&self) -> Vec<SummaryRow> {
        self.iter()
            .enumerate()
            .map(|(i, (colour, frequency))| SummaryRow {
                id: i as u32 + 1,
                colour: colour.to_string(),
                frequency,
            })
            .collect()
    }
}
