// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a reducible set into output.
//!
//! Pure functions of the dictionary and the set. The text rendering is the
//! program's contract on stdout:
//!
//! ```text
//! Total reducible 9-letter words: <count>
//! <word>
//! ...
//! ```

use std::io::{self, Write};

use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::engine::ReducibleSet;
use crate::word::{Word, MAX_WORD_LEN};

/// Reducible dictionary words of one length, sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub length: usize,
    pub total: usize,
    pub words: Vec<Word>,
}

impl Report {
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Total reducible {}-letter words: {}",
            self.length, self.total
        )?;
        for word in &self.words {
            writeln!(out, "{}", word)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// The 9-letter report.
pub fn build_report(dictionary: &Dictionary, set: &ReducibleSet) -> Report {
    build_report_for_length(dictionary, set, MAX_WORD_LEN)
}

/// Dictionary words of exactly `length` letters that are also in `set`.
///
/// Roots missing from the dictionary are not reported, even at length 1.
pub fn build_report_for_length(
    dictionary: &Dictionary,
    set: &ReducibleSet,
    length: usize,
) -> Report {
    let words: Vec<Word> = dictionary
        .words_of_length(length)
        .into_iter()
        .filter(|word| set.contains(word))
        .collect();

    Report {
        length,
        total: words.len(),
        words,
    }
}

/// Dictionary and reducible counts for one length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthSummary {
    pub length: usize,
    pub words: usize,
    pub reducible: usize,
}

/// One row per length 1..=9.
pub fn summarize_lengths(dictionary: &Dictionary, set: &ReducibleSet) -> Vec<LengthSummary> {
    let buckets = dictionary.buckets();
    buckets
        .counts()
        .into_iter()
        .map(|(length, words)| LengthSummary {
            length,
            words,
            reducible: buckets
                .get(length)
                .iter()
                .filter(|word| set.contains(word))
                .count(),
        })
        .collect()
}
