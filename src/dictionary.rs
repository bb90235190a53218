// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dictionary loading: raw lines in, a set of valid words out.
//!
//! Each line is trimmed, lowercased, and kept only if it is 1 to 9 letters of
//! `a..=z`. Anything else is dropped and counted. The only way loading fails
//! is the reader itself failing.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r`. Trimming strips control
//! characters and spaces (everything up to U+0020) and nothing else, so a
//! trailing no-break space still gets the line rejected.
//!
//! Lines are split from raw bytes and decoded lossily, so a stray Latin-1
//! byte costs one rejected line instead of the whole load.

use std::collections::hash_set;
use std::collections::{HashSet, VecDeque};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::engine::LengthBuckets;
use crate::error::LoadError;
use crate::word::{Rejection, Word};

/// A deduplicated set of valid words. Built once, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<Word>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, returning false if it was already present.
    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
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

    /// Partition the dictionary into per-length scratch buckets.
    pub fn buckets(&self) -> LengthBuckets {
        LengthBuckets::from_words(self.words.iter().copied())
    }

    /// Words of exactly `length` letters, sorted.
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
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Dictionary {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = hash_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// What happened to each line during a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Lines read from the source.
    pub lines: usize,
    /// Distinct words kept.
    pub accepted: usize,
    /// Valid lines that repeated an earlier word.
    pub duplicates: usize,
    /// Blank after trimming.
    pub empty: usize,
    /// More than nine letters.
    pub too_long: usize,
    /// Contained something outside `a..=z` after lowercasing.
    pub non_alphabetic: usize,
}

impl LoadStats {
    pub fn rejected(&self) -> usize {
        self.empty + self.too_long + self.non_alphabetic
    }

    fn record_rejection(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Empty => self.empty += 1,
            Rejection::TooLong { .. } => self.too_long += 1,
            Rejection::NonAlphabetic { .. } => self.non_alphabetic += 1,
        }
    }
}

/// Normalize one raw line into a word: trim, lowercase, validate.
pub fn normalize_line(line: &str) -> Result<Word, Rejection> {
    let trimmed = line.trim_matches(|c: char| c <= ' ');
    if trimmed.is_empty() {
        return Err(Rejection::Empty);
    }
    Word::new(&trimmed.to_lowercase())
}

/// Load a dictionary from any buffered line source.
pub fn load_dictionary<R: BufRead>(reader: R) -> Result<Dictionary, LoadError> {
    load_dictionary_with_stats(reader).map(|(dictionary, _)| dictionary)
}

/// Load a dictionary and report what was kept and dropped.
pub fn load_dictionary_with_stats<R: BufRead>(
    reader: R,
) -> Result<(Dictionary, LoadStats), LoadError> {
    let mut dictionary = Dictionary::new();
    let mut stats = LoadStats::default();

    for line in RawLines::new(reader) {
        let line = line?;
        stats.lines += 1;

        match normalize_line(&String::from_utf8_lossy(&line)) {
            Ok(word) => {
                if dictionary.insert(word) {
                    stats.accepted += 1;
                } else {
                    stats.duplicates += 1;
                }
            }
            Err(rejection) => stats.record_rejection(rejection),
        }
    }

    Ok((dictionary, stats))
}

/// Byte lines ending at `\n`, `\r\n` or a lone `\r`, terminators removed.
struct RawLines<R> {
    reader: R,
    pending: VecDeque<Vec<u8>>,
    done: bool,
}

impl<R: BufRead> RawLines<R> {
    fn new(reader: R) -> Self {
        RawLines {
            reader,
            pending: VecDeque::new(),
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            if self.done {
                return None;
            }

            let mut chunk = Vec::new();
            match self.reader.read_until(b'\n', &mut chunk) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    if chunk.last() == Some(&b'\n') {
                        chunk.pop();
                    }
                    // A trailing '\r' terminates the last piece rather than
                    // starting an empty one.
                    let ends_with_cr = chunk.last() == Some(&b'\r');
                    let mut pieces: Vec<Vec<u8>> =
                        chunk.split(|&b| b == b'\r').map(<[u8]>::to_vec).collect();
                    if ends_with_cr {
                        pieces.pop();
                    }
                    self.pending.extend(pieces);
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// Open `path` and load it as a word list.
pub fn load_dictionary_file(path: &Path) -> Result<Dictionary, LoadError> {
    load_dictionary_file_with_stats(path).map(|(dictionary, _)| dictionary)
}

pub fn load_dictionary_file_with_stats(
    path: &Path,
) -> Result<(Dictionary, LoadStats), LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_dictionary_with_stats(BufReader::new(file))
}
