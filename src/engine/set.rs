// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::hash_set;
use std::collections::HashSet;

use crate::word::{Word, ROOTS};

/// Words reachable from "a" or "i" by single-letter insertions that stay
/// inside the dictionary.
///
/// Only the engine grows this set; callers get it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducibleSet {
    words: HashSet<Word>,
}

impl ReducibleSet {
    /// The starting state: exactly the two roots.
    pub fn seeded() -> Self {
        ReducibleSet {
            words: ROOTS.into_iter().collect(),
        }
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Word> {
        self.words.iter()
    }

    /// Members of exactly `length` letters, sorted.
    pub fn words_of_length(&self, length: usize) -> Vec<Word> {
        let mut words: Vec<Word> = self
            .words
            .iter()
            .filter(|w| w.len() == length)
            .copied()
            .collect();
        words.sort_unstable();
        words
    }

    /// All members, sorted.
    pub fn to_sorted_vec(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.words.iter().copied().collect();
        words.sort_unstable();
        words
    }

    /// Commit one finished length class.
    pub(crate) fn commit<I: IntoIterator<Item = Word>>(&mut self, class: I) {
        self.words.extend(class);
    }
}

impl<'a> IntoIterator for &'a ReducibleSet {
    type Item = &'a Word;
    type IntoIter = hash_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
