//! Engine properties over random dictionaries.
//!
//! Dictionaries are drawn from a five-letter alphabet that includes both
//! roots, so a useful share of random words actually reduce.

use std::collections::HashSet;

use super::common::{load_lines, set_strings};
use super::oracles::OracleReducer;
use proptest::prelude::*;
use reducible::{
    compute_reducible_set, compute_reducible_set_with, has_reducible_parent, EngineOptions,
    Evaluation, Word,
};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aistn]{1,7}").unwrap()
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..120)
}

fn as_refs(words: &[String]) -> Vec<&str> {
    words.iter().map(String::as_str).collect()
}

proptest! {
    /// Property: the engine and the recursive oracle agree exactly.
    #[test]
    fn prop_engine_matches_oracle(words in dictionary_strategy()) {
        let dictionary = load_lines(&as_refs(&words));
        let plain: HashSet<String> = words.iter().cloned().collect();

        let engine = set_strings(&compute_reducible_set(&dictionary));
        let oracle: std::collections::BTreeSet<String> =
            OracleReducer::new(&plain).reducible_set().into_iter().collect();

        prop_assert_eq!(engine, oracle);
    }

    /// Property: every member longer than one letter has a member parent.
    #[test]
    fn prop_members_have_a_parent(words in dictionary_strategy()) {
        let dictionary = load_lines(&as_refs(&words));
        let set = compute_reducible_set(&dictionary);

        for word in set.iter().filter(|w| w.len() > 1) {
            let parent = word.deletions().find(|p| set.contains(p));
            prop_assert!(parent.is_some(), "{} has no parent", word);
            prop_assert_eq!(parent.map(|p| p.len()), Some(word.len() - 1));
        }
    }

    /// Property: the set never leaves dictionary ∪ {a, i}.
    #[test]
    fn prop_subset_of_dictionary_and_roots(words in dictionary_strategy()) {
        let dictionary = load_lines(&as_refs(&words));
        let set = compute_reducible_set(&dictionary);

        for word in set.iter() {
            prop_assert!(word.is_root() || dictionary.contains(word));
        }
    }

    /// Property: dictionary words outside the set have no member parent.
    #[test]
    fn prop_excluded_words_have_no_parent(words in dictionary_strategy()) {
        let dictionary = load_lines(&as_refs(&words));
        let set = compute_reducible_set(&dictionary);

        for word in dictionary.iter().filter(|w| !set.contains(w)) {
            prop_assert!(!has_reducible_parent(word, &set));
        }
    }

    /// Property: evaluation mode never changes the answer.
    #[test]
    fn prop_parallel_matches_sequential(words in dictionary_strategy()) {
        let dictionary = load_lines(&as_refs(&words));
        let parallel = compute_reducible_set_with(
            &dictionary,
            &EngineOptions { evaluation: Evaluation::Parallel },
        );
        let sequential = compute_reducible_set_with(&dictionary, &EngineOptions::sequential());
        prop_assert_eq!(parallel, sequential);
    }

    /// Property: adding words never removes members (monotone in the dictionary).
    #[test]
    fn prop_growing_the_dictionary_only_grows_the_set(
        base in dictionary_strategy(),
        extra in dictionary_strategy(),
    ) {
        let small = compute_reducible_set(&load_lines(&as_refs(&base)));
        let mut combined = base.clone();
        combined.extend(extra);
        let large = compute_reducible_set(&load_lines(&as_refs(&combined)));

        for word in small.iter() {
            prop_assert!(large.contains(word));
        }
    }

    /// Property: deletions have the documented shape for any word.
    #[test]
    fn prop_deletions_shape(text in prop::string::string_regex("[a-z]{1,9}").unwrap()) {
        let word = Word::new(&text).unwrap();
        let deletions: Vec<Word> = word.deletions().collect();
        let expected = if text.len() == 1 { 0 } else { text.len() };
        prop_assert_eq!(deletions.len(), expected);
        for (i, deleted) in deletions.iter().enumerate() {
            let manual = format!("{}{}", &text[..i], &text[i + 1..]);
            prop_assert_eq!(deleted.as_str(), manual.as_str());
        }
    }
}
