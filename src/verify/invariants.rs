// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

use crate::dictionary::Dictionary;
use crate::engine::{has_reducible_parent, ReducibleSet};
use crate::word::{Word, ROOTS};

/// A reducible set that breaks one of its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A root is missing from the set.
    #[error("root {0} is missing")]
    MissingRoot(Word),
    /// A single letter other than "a" or "i" made it into the set.
    #[error("single letter {0} is not a root")]
    UnexpectedRoot(Word),
    /// A member has no deletion that is itself a member.
    #[error("{0} has no reducible single-letter deletion")]
    Orphan(Word),
    /// A member is neither a root nor a dictionary word.
    #[error("{0} is not in the dictionary")]
    OutsideDictionary(Word),
}

/// Check every invariant of `set` against the dictionary it was built from.
///
/// Members are visited in sorted order so the reported violation is stable.
pub fn validate_reducible_set(
    set: &ReducibleSet,
    dictionary: &Dictionary,
) -> Result<(), InvariantError> {
    if let Some(root) = ROOTS.iter().find(|root| !set.contains(root)) {
        return Err(InvariantError::MissingRoot(*root));
    }

    for word in set.to_sorted_vec() {
        if word.len() == 1 {
            if !word.is_root() {
                return Err(InvariantError::UnexpectedRoot(word));
            }
            continue;
        }
        if !dictionary.contains(&word) {
            return Err(InvariantError::OutsideDictionary(word));
        }
        if !has_reducible_parent(&word, set) {
            return Err(InvariantError::Orphan(word));
        }
    }

    Ok(())
}
