// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lookups against a computed reducible set.

use crate::engine::ReducibleSet;
use crate::word::Word;

/// Is `word` reducible? Lowercases first, then checks membership.
///
/// No trimming: " at" is not a word and so is not reducible. Anything that
/// fails word validation after lowercasing simply isn't a member.
pub fn is_reducible(word: &str, set: &ReducibleSet) -> bool {
    Word::new(&word.to_lowercase())
        .map(|word| set.contains(&word))
        .unwrap_or(false)
}

/// One way to shrink `word` down to a root, longest first.
///
/// At each step takes the lowest-index deletion that stays in the set. The
/// closure invariant guarantees such a deletion exists for every member
/// longer than one letter, so the walk always reaches "a" or "i".
///
/// ```
/// use reducible::{compute_reducible_set, load_dictionary, reduction_chain};
///
/// let dictionary = load_dictionary("a\nat\ncat\nscat\nsciat\n".as_bytes()).unwrap();
/// let set = compute_reducible_set(&dictionary);
/// let chain: Vec<String> = reduction_chain("SCIAT", &set)
///     .unwrap()
///     .iter()
///     .map(|w| w.to_string())
///     .collect();
/// assert_eq!(chain, ["sciat", "scat", "cat", "at", "a"]);
/// ```
pub fn reduction_chain(word: &str, set: &ReducibleSet) -> Option<Vec<Word>> {
    let mut current = Word::new(&word.to_lowercase()).ok()?;
    if !set.contains(&current) {
        return None;
    }

    let mut chain = Vec::with_capacity(current.len());
    chain.push(current);
    while current.len() > 1 {
        // INVARIANT: every member longer than one letter has a member parent,
        // so `?` never fires on a set produced by the engine.
        current = current.deletions().find(|parent| set.contains(parent))?;
        chain.push(current);
    }
    Some(chain)
}
