//! Shared test utilities and fixtures.

#![allow(dead_code)]

use reducible::{load_dictionary, Dictionary, ReducibleSet, Word};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

// Re-export canonical fixtures from reducible::testing
pub use reducible::testing::{
    dictionary_from, scenario_dictionary, scenario_text, serve_once, unused_local_url,
    SCENARIO_LINES, SCENARIO_REDUCIBLE,
};

// ============================================================================
// LOADING
// ============================================================================

/// Load a dictionary from in-memory lines through the real loader.
pub fn load_lines(lines: &[&str]) -> Dictionary {
    let text = lines.join("\n");
    load_dictionary(text.as_bytes()).expect("in-memory reads never fail")
}

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_word_list(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write word list");
    path
}

// ============================================================================
// COMPARISON HELPERS
// ============================================================================

/// Members of a set as sorted strings.
pub fn set_strings(set: &ReducibleSet) -> BTreeSet<String> {
    set.iter().map(Word::to_string).collect()
}

/// Dictionary words as sorted strings.
pub fn dictionary_strings(dictionary: &Dictionary) -> BTreeSet<String> {
    dictionary.iter().map(Word::to_string).collect()
}

/// Sorted owned strings from literals.
pub fn strings(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}
