// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel evaluation of a length class, plus progress reporting.
//!
//! Every word in a class only reads the set as it stood when the class
//! started, so the class is embarrassingly parallel: `par_iter()` over the
//! bucket, filter, `collect()`. The collect is the barrier; nothing is merged
//! until every word has been decided.
//!
//! Small classes stay on the calling thread. Rayon's split overhead is larger
//! than a few hundred hash lookups.

use indicatif::ProgressBar;
use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::word::{Word, MAX_WORD_LEN};

use super::{
    compute_reducible_set_observed, evaluate_class_sequential, has_reducible_parent,
    EngineOptions, ReducibleSet,
};

/// Classes smaller than this are decided sequentially.
pub(super) const PARALLEL_THRESHOLD: usize = 2048;

pub(super) fn evaluate_class(class: &[Word], set: &ReducibleSet) -> Vec<Word> {
    if class.len() < PARALLEL_THRESHOLD {
        return evaluate_class_sequential(class, set);
    }

    class
        .par_iter()
        .filter(|word| has_reducible_parent(word, set))
        .copied()
        .collect()
}

/// Compute the reducible set, ticking `progress` once per length class.
///
/// The bar length is set to the number of classes (8). The caller owns the
/// bar's style and finishing.
pub fn compute_reducible_set_with_progress(
    dictionary: &Dictionary,
    options: &EngineOptions,
    progress: &ProgressBar,
) -> ReducibleSet {
    progress.set_length((MAX_WORD_LEN - 1) as u64);
    progress.set_position(0);

    compute_reducible_set_observed(dictionary, options, |summary| {
        progress.set_message(format!(
            "length {}: {}/{}",
            summary.length, summary.reducible, summary.candidates
        ));
        progress.inc(1);
    })
}
