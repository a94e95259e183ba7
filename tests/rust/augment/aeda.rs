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


use zita::augment::{ZiAeda, ZiAedaConfig};

const MARKS: [&str; 6] = [".", ";", "?", ":", "!", ","];

#[test]
fn five_tokens_receive_exactly_one_mark() {
    let mut aeda = ZiAeda::new(ZiAedaConfig::default()).unwrap();
    for _ in 0..25 {
        let out = aeda.punct_insertion("John is going to town").unwrap();
        let tokens: Vec<&str> = out.split_whitespace().collect();
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens.iter().filter(|t| MARKS.contains(t)).count(), 1);
        let words: Vec<&str> = tokens.into_iter().filter(|t| !MARKS.contains(t)).collect();
        assert_eq!(words, vec!["John", "is", "going", "to", "town"]);
    }
}

#[test]
fn mark_never_lands_after_the_last_token() {
    let mut aeda = ZiAeda::new(ZiAedaConfig::default().seed(17)).unwrap();
    for _ in 0..50 {
        let out = aeda.punct_insertion("a b c").unwrap();
        let last = out.split_whitespace().last().unwrap();
        assert_eq!(last, "c");
    }
}

#[test]
fn two_tokens_are_rejected() {
    let mut aeda = ZiAeda::new(ZiAedaConfig::default()).unwrap();
    assert!(aeda.punct_insertion("hello world").unwrap_err().is_validation());
}

#[test]
fn seeded_runs_are_reproducible() {
    let sentence = "the quick brown fox jumps over the lazy dog";
    let mut first = ZiAeda::new(ZiAedaConfig::default().seed(5)).unwrap();
    let mut second = ZiAeda::new(ZiAedaConfig::default().seed(5)).unwrap();
    assert_eq!(
        first.punct_insertion(sentence).unwrap(),
        second.punct_insertion(sentence).unwrap()
    );
}
