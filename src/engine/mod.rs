// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The reducibility engine: dynamic programming over word length.
//!
//! A word is reducible when it is "a" or "i", or when deleting one of its
//! letters gives a reducible word of the dictionary. Checking that directly
//! means walking ancestor chains, which blows up. Instead we go bottom-up:
//!
//! ```text
//!   seed {a, i}
//!      │
//!      ▼
//!   length 2 ──▶ length 3 ──▶ ... ──▶ length 9
//!   (each class reads only the committed shorter classes)
//! ```
//!
//! By the time length L is processed, every reducible word of length L-1 is
//! already in the set, so each word costs L hash lookups. Total work is
//! linear in the number of letters in the dictionary.
//!
//! Words of one length never depend on each other, so a class can be decided
//! in any order, or in parallel (see `parallel.rs`). The class is committed
//! as a whole before the next length starts.

mod buckets;
#[cfg(feature = "parallel")]
mod parallel;
mod set;

pub use buckets::LengthBuckets;
#[cfg(feature = "parallel")]
pub use parallel::compute_reducible_set_with_progress;
pub use set::ReducibleSet;

use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::verify::contracts;
use crate::word::{Word, MAX_WORD_LEN};

/// How the words of one length class are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Evaluation {
    /// One thread, bucket order.
    Sequential,
    /// Rayon over the bucket when it is large enough. Falls back to
    /// sequential when the `parallel` feature is off.
    #[default]
    Parallel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineOptions {
    pub evaluation: Evaluation,
}

impl EngineOptions {
    pub fn sequential() -> Self {
        EngineOptions {
            evaluation: Evaluation::Sequential,
        }
    }
}

/// Outcome of one committed length class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassSummary {
    pub length: usize,
    /// Dictionary words of this length.
    pub candidates: usize,
    /// Of those, how many were added to the set.
    pub reducible: usize,
}

/// True if some single-letter deletion of `word` is already in `set`.
///
/// Single-letter words have no deletions and always return false; the
/// roots are reducible by seeding, not by this test.
pub fn has_reducible_parent(word: &Word, set: &ReducibleSet) -> bool {
    word.deletions().any(|parent| set.contains(&parent))
}

/// Compute every reducible word of `dictionary`.
///
/// The result always contains "a" and "i", whether or not the dictionary does.
pub fn compute_reducible_set(dictionary: &Dictionary) -> ReducibleSet {
    compute_reducible_set_with(dictionary, &EngineOptions::default())
}

pub fn compute_reducible_set_with(dictionary: &Dictionary, options: &EngineOptions) -> ReducibleSet {
    compute_reducible_set_observed(dictionary, options, |_| {})
}

/// Same as [`compute_reducible_set_with`], calling `on_class` after each
/// length class is committed (lengths 2 through 9, in order).
pub fn compute_reducible_set_observed<F>(
    dictionary: &Dictionary,
    options: &EngineOptions,
    mut on_class: F,
) -> ReducibleSet
where
    F: FnMut(&ClassSummary),
{
    let mut buckets = dictionary.buckets();
    // Length 1 contributes nothing: the only reducible single letters are
    // the roots, and those are seeded.
    drop(buckets.take(1));

    let mut result = ReducibleSet::seeded();

    for length in 2..=MAX_WORD_LEN {
        let class = buckets.take(length);
        let reducible = evaluate_class(&class, &result, options.evaluation);
        let summary = ClassSummary {
            length,
            candidates: class.len(),
            reducible: reducible.len(),
        };
        // INVARIANT: a class is committed only after every word in it was
        // decided against lengths < L; nothing of length L is visible yet.
        result.commit(reducible);
        on_class(&summary);
    }

    contracts::check_reducible_set(&result, dictionary);
    result
}

fn evaluate_class(class: &[Word], set: &ReducibleSet, evaluation: Evaluation) -> Vec<Word> {
    match evaluation {
        #[cfg(feature = "parallel")]
        Evaluation::Parallel => parallel::evaluate_class(class, set),
        _ => evaluate_class_sequential(class, set),
    }
}

fn evaluate_class_sequential(class: &[Word], set: &ReducibleSet) -> Vec<Word> {
    class
        .iter()
        .filter(|word| has_reducible_parent(word, set))
        .copied()
        .collect()
}
