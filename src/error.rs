// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loader errors.
//!
//! Only the line source can fail. Malformed lines are filtered, not raised;
//! see [`Rejection`](crate::Rejection).
//!
//! Messages leave the underlying error to `source()`, so a caller
//! printing the chain sees each cause once.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The word list file could not be opened.
    #[error("failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The word list URL could not be fetched, or answered with an error status.
    #[cfg(feature = "http")]
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The line source failed part way through. No partial dictionary is kept.
    #[error("failed to read word list")]
    Read(#[from] io::Error),
}
