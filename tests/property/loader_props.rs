//! Loader properties over arbitrary line soup.

use std::collections::{BTreeSet, HashSet};

use super::common::dictionary_strings;
use super::oracles::oracle_load;
use proptest::prelude::*;
use reducible::{load_dictionary, load_dictionary_with_stats, MAX_WORD_LEN};

/// Lines mixing valid words, case, padding, digits, punctuation and
/// over-length strings.
fn line_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z]{1,9}").unwrap(),
        prop::string::string_regex("[ \t]{0,2}[A-Za-z]{1,9}[ \t]{0,2}").unwrap(),
        prop::string::string_regex("[\\x01-\\x20\\xa0]{0,2}[a-z]{1,9}[\\x01-\\x20\\xa0]{0,2}").unwrap(),
        prop::string::string_regex("[a-z]{10,14}").unwrap(),
        prop::string::string_regex("[a-z0-9_'-]{1,9}").unwrap(),
        prop::string::string_regex("[ \t]{0,3}").unwrap(),
        any::<String>(),
    ]
}

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    // Embedded newlines would split a generated "line" in two.
    prop::collection::vec(line_strategy(), 0..40).prop_map(|lines| {
        lines
            .into_iter()
            .map(|l| l.replace(['\n', '\r'], ""))
            .collect()
    })
}

/// One `\n`-terminated line per entry, so empty trailing lines still count.
fn to_text(lines: &[String]) -> String {
    to_text_with(lines, "\n")
}

fn to_text_with(lines: &[String], terminator: &str) -> String {
    lines.iter().map(|line| format!("{}{}", line, terminator)).collect()
}

proptest! {
    /// Property: the loader agrees with the plain-string oracle.
    #[test]
    fn prop_loader_matches_oracle(lines in lines_strategy()) {
        let dictionary = load_dictionary(to_text(&lines).as_bytes()).unwrap();
        let expected: BTreeSet<String> = oracle_load(&lines).into_iter().collect();
        prop_assert_eq!(dictionary_strings(&dictionary), expected);
    }

    /// Property: nothing over nine letters or outside a-z ever loads.
    #[test]
    fn prop_loaded_words_are_valid(lines in lines_strategy()) {
        let dictionary = load_dictionary(to_text(&lines).as_bytes()).unwrap();
        for word in dictionary.iter() {
            prop_assert!(word.len() <= MAX_WORD_LEN);
            prop_assert!(word.as_bytes().iter().all(u8::is_ascii_lowercase));
        }
    }

    /// Property: valid lowercase words load back as exactly themselves.
    #[test]
    fn prop_valid_words_round_trip(
        words in prop::collection::vec(prop::string::string_regex("[a-z]{1,9}").unwrap(), 0..40)
    ) {
        let dictionary = load_dictionary(to_text(&words).as_bytes()).unwrap();
        let expected: BTreeSet<String> = words.iter().cloned().collect();
        prop_assert_eq!(dictionary_strings(&dictionary), expected);
    }

    /// Property: every line is accounted for exactly once.
    #[test]
    fn prop_stats_account_for_every_line(lines in lines_strategy()) {
        let (dictionary, stats) = load_dictionary_with_stats(to_text(&lines).as_bytes()).unwrap();
        prop_assert_eq!(stats.lines, lines.len());
        prop_assert_eq!(stats.accepted, dictionary.len());
        prop_assert_eq!(stats.accepted + stats.duplicates + stats.rejected(), stats.lines);

        let unique: HashSet<&String> = lines.iter().collect();
        prop_assert!(dictionary.len() <= unique.len());
    }

    /// Property: `\n`, `\r\n` and a lone `\r` all end a line the same way.
    #[test]
    fn prop_line_terminators_are_interchangeable(lines in lines_strategy()) {
        let lf = load_dictionary_with_stats(to_text_with(&lines, "\n").as_bytes()).unwrap();
        let crlf = load_dictionary_with_stats(to_text_with(&lines, "\r\n").as_bytes()).unwrap();
        let cr = load_dictionary_with_stats(to_text_with(&lines, "\r").as_bytes()).unwrap();
        prop_assert_eq!(&lf, &crlf);
        prop_assert_eq!(&lf, &cr);
    }
}
