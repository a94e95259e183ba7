//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.


use std::collections::HashSet;
use std::sync::Arc;

use zita::augment::{ZiEda, ZiEdaConfig};
use zita::lexicon::{ZiMemoryThesaurus, ZiPartOfSpeech};

fn thesaurus() -> Arc<ZiMemoryThesaurus> {
    Arc::new(
        ZiMemoryThesaurus::new()
            .with_synset("eng", ZiPartOfSpeech::Noun, ["town", "township", "burg"])
            .with_synset("eng", ZiPartOfSpeech::Verb, ["going", "departing"])
            .with_synset("eng", ZiPartOfSpeech::Noun, ["john", "can", "toilet"]),
    )
}

fn sorted_tokens(sentence: &str) -> Vec<String> {
    let mut tokens: Vec<String> = sentence.split_whitespace().map(str::to_string).collect();
    tokens.sort();
    tokens
}

#[test]
fn random_swap_keeps_the_token_multiset() {
    let mut eda = ZiEda::new(ZiEdaConfig::default(), thesaurus()).unwrap();
    let input = "John is going to town";
    let out = eda.random_swap(input, 1).unwrap();
    assert_eq!(out.split_whitespace().count(), 5);
    assert_eq!(sorted_tokens(&out), sorted_tokens(input));
}

#[test]
fn random_deletion_single_token_is_unchanged() {
    let mut eda = ZiEda::new(ZiEdaConfig::default(), thesaurus()).unwrap();
    assert_eq!(eda.random_deletion("town", 1.0).unwrap(), "town");
}

#[test]
fn random_deletion_with_p_one_keeps_exactly_one_token() {
    let mut eda = ZiEda::new(ZiEdaConfig::default().seed(9), thesaurus()).unwrap();
    let input = "John is going to town";
    let out = eda.random_deletion(input, 1.0).unwrap();
    assert_eq!(out.split_whitespace().count(), 1);
    assert!(input.split_whitespace().any(|token| token == out));
}

#[test]
fn out_of_range_probability_is_rejected_before_mutation() {
    let mut eda = ZiEda::new(ZiEdaConfig::default(), thesaurus()).unwrap();
    let err = eda.random_deletion("John is going to town", 1.5).unwrap_err();
    assert!(err.is_validation());
    assert!(eda.last_operation().sentence.is_none());
}

#[test]
fn blank_sentences_are_rejected() {
    let mut eda = ZiEda::new(ZiEdaConfig::default(), thesaurus()).unwrap();
    assert!(eda.random_swap("   ", 1).unwrap_err().is_validation());
    assert!(eda.synonym_replacement("", 1, None).unwrap_err().is_validation());
}

#[test]
fn synonym_replacement_changes_at_most_n_word_types() {
    let input = "John is going to town";
    let original: HashSet<&str> = input.split_whitespace().collect();
    for seed in 0..20 {
        let mut eda = ZiEda::new(ZiEdaConfig::default().seed(seed), thesaurus()).unwrap();
        let out = eda.synonym_replacement(input, 1, None).unwrap();
        let changed = out
            .split_whitespace()
            .filter(|token| !original.contains(token))
            .count();
        assert!(changed <= 1, "seed {seed}: {out}");
    }
}

#[test]
fn synonym_replacement_without_candidates_returns_input() {
    let mut eda = ZiEda::new(ZiEdaConfig::default(), thesaurus()).unwrap();
    let input = "the cat sat on a mat";
    assert_eq!(eda.synonym_replacement(input, 3, None).unwrap(), input);
}

#[test]
fn custom_stop_words_protect_tokens() {
    let config = ZiEdaConfig::default().stop_words(vec!["town".to_string(), "going".to_string()]);
    let mut eda = ZiEda::new(config, thesaurus()).unwrap();
    let out = eda.synonym_replacement("going to town", 2, None).unwrap();
    assert_eq!(out, "going to town");
}

#[test]
fn random_insertion_grows_by_inserted_synonyms() {
    let mut eda = ZiEda::new(ZiEdaConfig::default().seed(4), thesaurus()).unwrap();
    let out = eda.random_insertion("going to town", 2).unwrap();
    let tokens: Vec<&str> = out.split_whitespace().collect();
    assert_eq!(tokens.len(), 5);
    let allowed = ["going", "to", "town", "departing", "township", "burg"];
    assert!(tokens.iter().all(|token| allowed.contains(token)), "{out}");
}

#[test]
fn same_seed_gives_same_output() {
    let input = "John is going to town";
    let mut first = ZiEda::new(ZiEdaConfig::default().seed(21), thesaurus()).unwrap();
    let mut second = ZiEda::new(ZiEdaConfig::default().seed(21), thesaurus()).unwrap();
    for _ in 0..5 {
        assert_eq!(
            first.synonym_replacement(input, 2, None).unwrap(),
            second.synonym_replacement(input, 2, None).unwrap()
        );
    }
}
