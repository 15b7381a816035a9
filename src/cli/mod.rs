// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the halving command-line interface.
//!
//! Four subcommands: `search` to test membership in a sorted list, `fib` and
//! `bits` for the numeric drills, and `colours` to tally (and optionally
//! persist) the wardrobe table.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "halving",
    about = "Binary search over sorted sequences, plus classroom drills",
    version
)]
pub struct Cli {
    /// Log at debug level (overridden by HALVING_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Test whether TARGET occurs in a sorted list of integers
    Search {
        /// Value to look for
        #[arg(allow_negative_numbers = true)]
        target: String,

        /// Sorted values, comma- and/or space-separated (default: 1..=9)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        /// Reject unsorted input instead of returning an unspecified answer
        #[arg(long)]
        checked: bool,

        /// Show every window the search visited
        #[arg(long)]
        trace: bool,
    },

    /// Sum the first N Fibonacci numbers (1, 2, 3, 5, ...)
    Fib {
        /// Number of terms to sum
        #[arg(short, long, default_value = "50")]
        count: u32,
    },

    /// Draw a random binary number and print it in base 10
    Bits {
        /// Number of bits to draw (1-32)
        #[arg(short, long, default_value = "4")]
        width: u32,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Tally how often each colour was worn across the week
    Colours {
        /// JSON wardrobe table to use instead of the built-in one
        #[arg(short, long)]
        table: Option<PathBuf>,

        /// Write the summary rows to this JSON file
        #[arg(short, long)]
        persist: Option<PathBuf>,

        /// Replace an existing summary file
        #[arg(long, requires = "persist")]
        overwrite: bool,

        /// Print the summary rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
