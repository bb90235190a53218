// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the engine.
//!
//! These panic in debug builds when the engine's output breaks an invariant
//! and compile to nothing in release.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! The engine calls `check_reducible_set` on every result it returns. The
//! property tests lean on that: any counterexample proptest finds trips the
//! contract with the offending word in the message.

use crate::dictionary::Dictionary;
use crate::engine::ReducibleSet;

#[cfg(debug_assertions)]
use super::validate_reducible_set;

/// Check the invariants of a freshly computed set.
///
/// # Panics (debug builds only)
/// Panics with the first violated invariant.
#[inline]
pub fn check_reducible_set(set: &ReducibleSet, dictionary: &Dictionary) {
    #[cfg(debug_assertions)]
    {
        // INVARIANT: the engine only returns sets closed under
        // "has a reducible parent" and contained in dictionary ∪ {a, i}.
        if let Err(violation) = validate_reducible_set(set, dictionary) {
            panic!("Contract violation: {}", violation);
        }
    }

    #[cfg(not(debug_assertions))]
    let _ = (set, dictionary);
}
