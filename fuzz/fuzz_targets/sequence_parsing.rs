// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the command-line sequence parser.
//!
//! Any string must parse to a list or come back as `Err`. A successful parse
//! must survive being printed and parsed again.

#![no_main]

use libfuzzer_sys::fuzz_target;
use halving::parse_sequence;

fuzz_target!(|data: &str| {
    if let Ok(values) = parse_sequence(data) {
        let printed = values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let reparsed = parse_sequence(&printed).expect("printed sequence must parse");
        assert_eq!(values, reparsed);
    }
});
