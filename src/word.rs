// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `Word` value type and single-letter deletion.
//!
//! A word is at most nine lowercase ASCII letters, so it fits inline in ten
//! bytes and is `Copy`. Every candidate produced while checking a word's
//! parents is built on the stack; the hot loop of the engine never allocates.
//!
//! Construction is the only place validation happens. Once you hold a `Word`
//! it is non-empty, at most [`MAX_WORD_LEN`] long, and all `a..=z`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest word the system accepts.
pub const MAX_WORD_LEN: usize = 9;

/// The only length-1 words that are reducible by definition.
pub const ROOTS: [Word; 2] = [Word::letter(b'a'), Word::letter(b'i')];

/// Why a candidate string is not a [`Word`].
///
/// Rejections are not failures: the loader counts them and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("empty line")]
    Empty,
    #[error("{len} letters exceeds the {}-letter limit", MAX_WORD_LEN)]
    TooLong { len: usize },
    #[error("non-letter character {ch:?}")]
    NonAlphabetic { ch: char },
}

/// A lowercase ASCII word of 1 to 9 letters.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Word {
    len: u8,
    // INVARIANT: bytes[len..] is always zero; only bytes[..len] is ever
    // compared or hashed.
    bytes: [u8; MAX_WORD_LEN],
}

impl Word {
    /// Build a single-letter word. Used for the root constants.
    const fn letter(byte: u8) -> Self {
        let mut bytes = [0u8; MAX_WORD_LEN];
        bytes[0] = byte;
        Word { len: 1, bytes }
    }

    /// Strict constructor: accepts only `a..=z`, 1 to 9 letters, as given.
    ///
    /// No trimming or case folding happens here; see
    /// [`normalize_line`](crate::normalize_line) for the loader's lenient path.
    pub fn new(text: &str) -> Result<Self, Rejection> {
        if text.is_empty() {
            return Err(Rejection::Empty);
        }
        let len = text.chars().count();
        if len > MAX_WORD_LEN {
            return Err(Rejection::TooLong { len });
        }
        if let Some(ch) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(Rejection::NonAlphabetic { ch });
        }

        let mut bytes = [0u8; MAX_WORD_LEN];
        bytes[..text.len()].copy_from_slice(text.as_bytes());
        Ok(Word {
            len: text.len() as u8,
            bytes,
        })
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    pub fn as_str(&self) -> &str {
        // INVARIANT: construction admits only ASCII letters, which are valid UTF-8.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// True for "a" and "i".
    pub fn is_root(&self) -> bool {
        ROOTS.contains(self)
    }

    /// The word with the letter at `index` removed.
    ///
    /// Returns `None` for single-letter words (the result would be empty) and
    /// for out-of-range indices.
    pub fn delete_at(&self, index: usize) -> Option<Word> {
        let len = self.len();
        if len < 2 || index >= len {
            return None;
        }

        let mut bytes = [0u8; MAX_WORD_LEN];
        bytes[..index].copy_from_slice(&self.bytes[..index]);
        bytes[index..len - 1].copy_from_slice(&self.bytes[index + 1..len]);
        Some(Word {
            len: self.len - 1,
            bytes,
        })
    }

    /// Every single-letter deletion, in index order.
    ///
    /// A word of length L yields exactly L candidates (duplicates included,
    /// "catle" appears twice for "cattle"). Single-letter words yield none.
    pub fn deletions(&self) -> Deletions {
        Deletions {
            word: *self,
            index: 0,
        }
    }
}

/// Iterator returned by [`Word::deletions`].
#[derive(Debug, Clone)]
pub struct Deletions {
    word: Word,
    index: usize,
}

impl Iterator for Deletions {
    type Item = Word;

    fn next(&mut self) -> Option<Word> {
        let deleted = self.word.delete_at(self.index)?;
        self.index += 1;
        Some(deleted)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.word.len() < 2 {
            0
        } else {
            self.word.len().saturating_sub(self.index)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Deletions {}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

// Lexicographic, not length-first: "ab" < "b".
impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.as_str())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Word {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Word::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = Rejection;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Word::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.as_str().to_string()
    }
}
