// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word lists served over HTTP(S).
//!
//! The response body streams straight into the line loader; nothing is
//! buffered whole. Transport failures and error statuses become
//! [`LoadError::Fetch`]; a body that breaks off part way is a
//! [`LoadError::Read`] like any other reader failure.

use std::io::BufReader;
use std::time::Duration;

use crate::dictionary::{load_dictionary_with_stats, Dictionary, LoadStats};
use crate::error::LoadError;

/// Upper bound on the whole fetch, body included.
const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// True for `http://` and `https://` inputs.
pub fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

pub fn load_dictionary_url(url: &str) -> Result<Dictionary, LoadError> {
    load_dictionary_url_with_stats(url).map(|(dictionary, _)| dictionary)
}

/// Fetch `url` and load the body as a word list.
pub fn load_dictionary_url_with_stats(url: &str) -> Result<(Dictionary, LoadStats), LoadError> {
    let fetch_error = |source: reqwest::Error| LoadError::Fetch {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(fetch_error)?;
    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(fetch_error)?;

    load_dictionary_with_stats(BufReader::new(response))
}
