// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-length scratch buckets.
//!
//! Index `L` holds the dictionary words of exactly `L` letters. The engine
//! moves each bucket out as it processes that length class, so a bucket is
//! freed as soon as its class has been committed.

use crate::word::{Word, MAX_WORD_LEN};

#[derive(Debug, Clone, Default)]
pub struct LengthBuckets {
    // Slot 0 is never filled; words are never empty.
    buckets: [Vec<Word>; MAX_WORD_LEN + 1],
}

impl LengthBuckets {
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        let mut buckets = LengthBuckets::default();
        for word in words {
            // INVARIANT: 1 <= word.len() <= MAX_WORD_LEN, so the index is in range.
            buckets.buckets[word.len()].push(word);
        }
        buckets
    }

    /// Words of exactly `length` letters. Empty for lengths outside 1..=9.
    pub fn get(&self, length: usize) -> &[Word] {
        self.buckets.get(length).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Move a bucket out, leaving an empty one behind.
    pub fn take(&mut self, length: usize) -> Vec<Word> {
        self.buckets
            .get_mut(length)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Number of words across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// `(length, count)` for every length 1..=9, zero counts included.
    pub fn counts(&self) -> Vec<(usize, usize)> {
        (1..=MAX_WORD_LEN)
            .map(|length| (length, self.buckets[length].len()))
            .collect()
    }
}
