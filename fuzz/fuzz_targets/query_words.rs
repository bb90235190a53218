// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for lookups.
//!
//! A structured input: a small word list plus one arbitrary query string.
//! `is_reducible` and `reduction_chain` must agree, and every chain must be
//! a valid sequence of single-letter deletions ending at a root.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use reducible::{compute_reducible_set, is_reducible, load_dictionary, reduction_chain};

#[derive(Debug, Arbitrary)]
struct Input {
    words: Vec<String>,
    query: String,
}

fuzz_target!(|input: Input| {
    let text = input.words.join("\n");
    let dictionary = load_dictionary(text.as_bytes()).expect("in-memory reads cannot fail");
    let set = compute_reducible_set(&dictionary);

    let member = is_reducible(&input.query, &set);
    let chain = reduction_chain(&input.query, &set);
    assert_eq!(member, chain.is_some());

    if let Some(chain) = chain {
        let root = chain.last().expect("chains are never empty");
        assert!(root.is_root());
        for pair in chain.windows(2) {
            assert!(pair[0].deletions().any(|d| d == pair[1]));
        }
    }
});
