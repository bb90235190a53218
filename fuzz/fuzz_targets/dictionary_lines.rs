// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the loader and engine.
//!
//! Arbitrary bytes become a word list: invalid UTF-8, NULs, CRLF, 10 KB
//! lines. Loading from memory must never fail, and the computed set must
//! always satisfy the closure invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use reducible::{
    build_report, compute_reducible_set_with, load_dictionary_with_stats, validate_reducible_set,
    EngineOptions, MAX_WORD_LEN,
};

fuzz_target!(|data: &[u8]| {
    let (dictionary, stats) =
        load_dictionary_with_stats(data).expect("in-memory reads cannot fail");

    assert_eq!(stats.accepted, dictionary.len());
    assert_eq!(stats.accepted + stats.duplicates + stats.rejected(), stats.lines);
    for word in dictionary.iter() {
        assert!(word.len() <= MAX_WORD_LEN);
        assert!(word.as_bytes().iter().all(u8::is_ascii_lowercase));
    }

    let sequential = compute_reducible_set_with(&dictionary, &EngineOptions::sequential());
    let default = compute_reducible_set_with(&dictionary, &EngineOptions::default());
    assert_eq!(sequential, default, "evaluation mode changed the result");

    if let Err(e) = validate_reducible_set(&sequential, &dictionary) {
        panic!("closure invariant broken: {}", e);
    }

    let report = build_report(&dictionary, &sequential);
    assert!(report.words.windows(2).all(|w| w[0] < w[1]));
    assert!(report.words.iter().all(|w| w.len() == MAX_WORD_LEN));
});
