//! Engine behavior on hand-built dictionaries.

use super::common::{dictionary_from, scenario_dictionary, set_strings, strings, SCENARIO_REDUCIBLE};
use reducible::{
    compute_reducible_set, compute_reducible_set_observed, compute_reducible_set_with,
    has_reducible_parent, ClassSummary, Dictionary, EngineOptions, Evaluation, ReducibleSet, Word,
};

#[test]
fn reference_list_reduces_all_but_sating() {
    let set = compute_reducible_set(&scenario_dictionary());
    assert_eq!(set_strings(&set), strings(&SCENARIO_REDUCIBLE));
}

#[test]
fn seed_is_exactly_the_roots() {
    let set = ReducibleSet::seeded();
    assert_eq!(set_strings(&set), strings(&["a", "i"]));
}

#[test]
fn no_backtracking_across_lengths() {
    // "tt" is rejected at length 2 and never reconsidered, so "ttt" (whose
    // only parent is "tt") is rejected too. "tat" qualifies through "at".
    let set = compute_reducible_set(&dictionary_from(&["at", "tt", "tat", "ttt"]));
    assert!(set.contains(&Word::new("tat").unwrap()));
    assert!(!set.contains(&Word::new("tt").unwrap()));
    assert!(!set.contains(&Word::new("ttt").unwrap()));
}

#[test]
fn nine_letter_chain_is_found() {
    let chain = [
        "a", "at", "pat", "plat", "plate", "platte", "platter", "splatter", "splatters",
    ];
    let set = compute_reducible_set(&dictionary_from(&chain));
    assert_eq!(set.len(), chain.len() + 1); // plus the unlisted root "i"
    assert!(set.contains(&Word::new("splatters").unwrap()));
}

#[test]
fn removing_a_link_breaks_everything_above_it() {
    let set = compute_reducible_set(&dictionary_from(&[
        "a", "at", "pat", "plate", "platte", "platter", "splatter", "splatters",
    ]));
    assert_eq!(set_strings(&set), strings(&["a", "at", "i", "pat"]));
}

#[test]
fn parent_test_against_scenario() {
    let set = compute_reducible_set(&scenario_dictionary());
    assert!(has_reducible_parent(&Word::new("sciat").unwrap(), &set));
    assert!(!has_reducible_parent(&Word::new("sating").unwrap(), &set));
    assert!(!has_reducible_parent(&Word::new("cattle").unwrap(), &set));
}

#[test]
fn evaluation_modes_agree() {
    let dictionary = scenario_dictionary();
    let parallel = compute_reducible_set_with(
        &dictionary,
        &EngineOptions {
            evaluation: Evaluation::Parallel,
        },
    );
    let sequential = compute_reducible_set_with(&dictionary, &EngineOptions::sequential());
    assert_eq!(parallel, sequential);
}

#[test]
fn observer_reports_scenario_classes() {
    let mut summaries = Vec::new();
    compute_reducible_set_observed(
        &scenario_dictionary(),
        &EngineOptions::default(),
        |summary| summaries.push(*summary),
    );
    assert_eq!(summaries.len(), 8);
    assert_eq!(
        summaries[4],
        ClassSummary {
            length: 6,
            candidates: 1,
            reducible: 0
        }
    );
}

#[test]
fn empty_dictionary() {
    let set = compute_reducible_set(&Dictionary::new());
    assert_eq!(set.len(), 2);
}
