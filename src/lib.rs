// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reducible words: dictionary words that shrink to "a" or "i" one deleted
//! letter at a time, with every intermediate also a dictionary word.
//!
//! ```text
//! sciat → scat → cat → at → a
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌─────────────┐
//! │ dictionary.rs│────▶│  engine/      │────▶│  report.rs  │
//! │ (lines →     │     │ (DP over word │     │ (9-letter   │
//! │  Dictionary) │     │  length)      │     │  listing)   │
//! └──────────────┘     └───────────────┘     └─────────────┘
//!        │                     │                    │
//!        ▼                     ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  word.rs (Word, deletions)     verify/ (invariants)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The loader never fails on bad lines, only on a failing reader. The engine
//! never fails at all: `Word` already rules out anything it can't handle.
//!
//! # Usage
//!
//! ```
//! use reducible::{build_report, compute_reducible_set, is_reducible, load_dictionary};
//!
//! let dictionary = load_dictionary("a\nI\nat\ncat\nscat\ndog\n".as_bytes()).unwrap();
//! let set = compute_reducible_set(&dictionary);
//!
//! assert!(is_reducible("scat", &set));
//! assert!(!is_reducible("dog", &set));
//! assert_eq!(build_report(&dictionary, &set).total, 0);
//! ```

mod dictionary;
mod engine;
mod error;
mod query;
#[cfg(feature = "http")]
mod remote;
mod report;
pub mod testing;
pub mod verify;
mod word;

pub use dictionary::{
    load_dictionary, load_dictionary_file, load_dictionary_file_with_stats,
    load_dictionary_with_stats, normalize_line, Dictionary, LoadStats,
};
#[cfg(feature = "parallel")]
pub use engine::compute_reducible_set_with_progress;
pub use engine::{
    compute_reducible_set, compute_reducible_set_observed, compute_reducible_set_with,
    has_reducible_parent, ClassSummary, EngineOptions, Evaluation, LengthBuckets, ReducibleSet,
};
pub use error::LoadError;
pub use query::{is_reducible, reduction_chain};
#[cfg(feature = "http")]
pub use remote::{is_url, load_dictionary_url, load_dictionary_url_with_stats};
pub use report::{build_report, build_report_for_length, summarize_lengths, LengthSummary, Report};
pub use verify::{validate_reducible_set, InvariantError};
pub use word::{Deletions, Rejection, Word, MAX_WORD_LEN, ROOTS};
