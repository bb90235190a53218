//! Library-level workflows: load from a real file, compute, query, report.

use super::common::{
    set_strings, strings, write_word_list, SCENARIO_LINES, SCENARIO_REDUCIBLE,
};
use reducible::{
    build_report, compute_reducible_set, compute_reducible_set_with, is_reducible,
    load_dictionary_file, load_dictionary_file_with_stats, reduction_chain, validate_reducible_set,
    EngineOptions, LoadError,
};
use tempfile::TempDir;

#[test]
fn test_scenario_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_word_list(dir.path(), "scenario.txt", &SCENARIO_LINES.join("\n"));

    let dictionary = load_dictionary_file(&path).unwrap();
    let set = compute_reducible_set(&dictionary);

    assert_eq!(set_strings(&set), strings(&SCENARIO_REDUCIBLE));
    assert!(validate_reducible_set(&set, &dictionary).is_ok());
    assert!(is_reducible("Sciat", &set));
    assert!(!is_reducible("sating", &set));
}

#[test]
fn test_file_with_windows_line_endings() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_word_list(dir.path(), "crlf.txt", "A\r\nAT\r\nCAT\r\n\r\n");

    let (dictionary, stats) = load_dictionary_file_with_stats(&path).unwrap();
    assert_eq!(stats.lines, 4);
    assert_eq!(stats.accepted, 3);
    assert_eq!(stats.empty, 1);

    let set = compute_reducible_set(&dictionary);
    let chain: Vec<String> = reduction_chain("cat", &set)
        .unwrap()
        .iter()
        .map(|w| w.to_string())
        .collect();
    assert_eq!(chain, vec!["cat", "at", "a"]);
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("absent.txt");

    match load_dictionary_file(&missing) {
        Err(LoadError::Open { path, source }) => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected open failure, got {:?}", other),
    }
}

/// Each rung is the previous one with a letter prepended, so every length
/// class depends on the one below it.
#[test]
fn test_ladder_reaches_length_nine() {
    let ladder = ["i", "ti", "sti", "nsti", "ansti", "tansti", "stansti", "istansti", "aistansti"];
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_word_list(dir.path(), "ladder.txt", &ladder.join("\n"));

    let dictionary = load_dictionary_file(&path).unwrap();
    let set = compute_reducible_set(&dictionary);
    let report = build_report(&dictionary, &set);

    assert_eq!(report.total, 1);
    assert_eq!(report.words[0].as_str(), "aistansti");

    let chain = reduction_chain("aistansti", &set).unwrap();
    let chain: Vec<&str> = chain.iter().map(|w| w.as_str()).collect();
    assert_eq!(chain, ladder.iter().rev().copied().collect::<Vec<_>>());
}

#[test]
fn test_breaking_one_rung_breaks_everything_above() {
    let ladder = ["i", "ti", "sti", "nsti", "tansti", "stansti", "istansti", "aistansti"];
    let dictionary = super::common::load_lines(&ladder);
    let set = compute_reducible_set_with(&dictionary, &EngineOptions::sequential());

    assert_eq!(set_strings(&set), strings(&["a", "i", "ti", "sti", "nsti"]));
    assert_eq!(build_report(&dictionary, &set).total, 0);
}
