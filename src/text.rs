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

//! # Sentence Utilities
//!
//! Whitespace tokenization, the shared validation routines every augmenter
//! runs before touching its input, synonym normalization and the default
//! English stop-word list.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Splits a sentence into whitespace-separated tokens.
#[allow(non_snake_case)]
pub fn tokenize(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(str::to_string).collect()
}

/// Joins tokens with single spaces, reversing [`tokenize`].
#[allow(non_snake_case)]
pub fn join(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// Rejects sentences that are empty after trimming.
#[allow(non_snake_case)]
pub fn validate_sentence(sentence: &str) -> Result<()> {
    if sentence.trim().is_empty() {
        return Err(ZiError::validation("sentence must be a valid sentence"));
    }
    Ok(())
}

/// Rejects probabilities outside `[0, 1]`, including NaN.
#[allow(non_snake_case)]
pub fn validate_probability(name: &str, p: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(ZiError::validation(format!(
            "{name} must be a fraction between 0 and 1, got {p}"
        )));
    }
    Ok(())
}

fn non_letters() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^a-z ]").expect("static pattern compiles"))
}

/// Normalizes a raw thesaurus lemma: lowercase, `_` and `-` become spaces,
/// anything other than ASCII letters and spaces is dropped.
#[allow(non_snake_case)]
pub fn normalize_synonym(lemma: &str) -> String {
    let lowered = lemma.replace(['_', '-'], " ").to_lowercase();
    non_letters().replace_all(&lowered, "").into_owned()
}

/// True when a lemma spans more than one word.
#[allow(non_snake_case)]
pub fn is_multi_word(lemma: &str) -> bool {
    lemma.contains('_') || lemma.contains('-') || lemma.trim().contains(char::is_whitespace)
}

/// Bookkeeping of the most recent call on an augmenter.
///
/// Recorded for introspection only; augmentation never reads it back.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiLastOperation {
    pub sentence: Option<String>,
    pub p: Option<f64>,
    pub n: Option<usize>,
}

impl ZiLastOperation {
    #[allow(non_snake_case)]
    pub fn record(&mut self, sentence: &str, p: Option<f64>, n: Option<usize>) {
        self.sentence = Some(sentence.to_string());
        self.p = p;
        self.n = n;
    }
}

/// English stop words, excluded from replacement sources by default.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Builds the stop-word set, falling back to [`ENGLISH_STOP_WORDS`].
#[allow(non_snake_case)]
pub fn stop_word_set(custom: Option<&[String]>) -> HashSet<String> {
    match custom {
        Some(words) => words.iter().cloned().collect(),
        None => ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_join_round_trip() {
        let tokens = tokenize("  John   is going\tto town ");
        assert_eq!(tokens, vec!["John", "is", "going", "to", "town"]);
        assert_eq!(join(&tokens), "John is going to town");
    }

    #[test]
    fn blank_sentences_are_rejected() {
        assert!(validate_sentence("   ").is_err());
        assert!(validate_sentence("").is_err());
        assert!(validate_sentence("ok").is_ok());
    }

    #[test]
    fn probability_bounds() {
        assert!(validate_probability("p", 0.0).is_ok());
        assert!(validate_probability("p", 1.0).is_ok());
        assert!(validate_probability("p", 1.5).is_err());
        assert!(validate_probability("p", -0.1).is_err());
        assert!(validate_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn synonym_normalization() {
        assert_eq!(normalize_synonym("Give_Out"), "give out");
        assert_eq!(normalize_synonym("well-known"), "well known");
        assert_eq!(normalize_synonym("o'clock2"), "oclock");
    }

    #[test]
    fn multi_word_detection() {
        assert!(is_multi_word("give_out"));
        assert!(is_multi_word("give out"));
        assert!(!is_multi_word("walk"));
    }

    #[test]
    fn default_stop_words_are_english() {
        let words = stop_word_set(None);
        assert!(words.contains("the"));
        assert!(!words.contains("town"));
        let custom = stop_word_set(Some(&["town".to_string()]));
        assert!(custom.contains("town"));
        assert!(!custom.contains("the"));
    }
}
