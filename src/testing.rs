// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplicating word lists.

#![doc(hidden)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread;

use crate::dictionary::Dictionary;
use crate::word::Word;

/// The reference word list: every word reduces except "sating".
pub const SCENARIO_LINES: [&str; 13] = [
    "a", "i", "at", "it", "in", "cat", "sat", "sin", "scat", "sati", "sing", "sciat", "sating",
];

/// The reducible subset of [`SCENARIO_LINES`].
pub const SCENARIO_REDUCIBLE: [&str; 12] = [
    "a", "i", "at", "it", "in", "cat", "sat", "sin", "scat", "sati", "sing", "sciat",
];

/// Build a dictionary from already-valid words.
///
/// Panics on anything that is not a valid word; this is for fixtures only.
pub fn dictionary_from(words: &[&str]) -> Dictionary {
    words
        .iter()
        .map(|text| Word::new(text).unwrap_or_else(|r| panic!("bad fixture {:?}: {}", text, r)))
        .collect()
}

/// The dictionary built from [`SCENARIO_LINES`].
pub fn scenario_dictionary() -> Dictionary {
    dictionary_from(&SCENARIO_LINES)
}

/// The scenario word list as loader input, one word per line.
pub fn scenario_text() -> String {
    let mut text = SCENARIO_LINES.join("\n");
    text.push('\n');
    text
}

/// Serve exactly one HTTP response on a loopback port and return its URL.
///
/// `status` is the status line after the version, e.g. `"200 OK"`. The
/// server thread reads the request headers, answers, and exits.
pub fn serve_once(status: &str, body: &str) -> String {
    let listener =
        TcpListener::bind("127.0.0.1:0").unwrap_or_else(|e| panic!("bind failed: {}", e));
    let addr = listener
        .local_addr()
        .unwrap_or_else(|e| panic!("no local address: {}", e));
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );

    thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            let mut reader = BufReader::new(&stream);
            let mut line = String::new();
            while reader.read_line(&mut line).map(|n| n > 0).unwrap_or(false) {
                if line == "\r\n" {
                    break;
                }
                line.clear();
            }
            let _ = (&stream).write_all(response.as_bytes());
        }
    });

    format!("http://{}/words.txt", addr)
}

/// A loopback URL with nothing listening behind it.
pub fn unused_local_url() -> String {
    let listener =
        TcpListener::bind("127.0.0.1:0").unwrap_or_else(|e| panic!("bind failed: {}", e));
    let addr = listener
        .local_addr()
        .unwrap_or_else(|e| panic!("no local address: {}", e));
    drop(listener);
    format!("http://{}/words.txt", addr)
}
