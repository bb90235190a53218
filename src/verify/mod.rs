// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked invariants and debug-build contracts.
//!
//! Two ways to catch a broken engine:
//!
//! 1. **Checked validation** (`validate_reducible_set`) returns the first
//!    violated invariant as a typed error. Tests and fuzz targets use it
//!    directly.
//!
//! 2. **Runtime contracts** (`contracts::check_reducible_set`) panic in debug
//!    builds when the engine hands back a set that is not closed. Free in
//!    release.
//!
//! # Invariants
//!
//! | Invariant      | Meaning                                                      |
//! |----------------|--------------------------------------------------------------|
//! | roots          | "a" and "i" are members; no other single letter is           |
//! | closure        | every member of length L>1 has a member deletion of length L-1 |
//! | subset         | every member other than the roots is a dictionary word       |

mod invariants;
pub mod contracts;

pub use invariants::*;
