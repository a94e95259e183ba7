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


use std::io::Write;

use tempfile::NamedTempFile;
use zita::augment::{ZiEmbeddingConfig, ZiFasttext, ZiWord2vec};
use zita::lexicon::{ZiEmbeddingModel, ZiNearestNeighbors};
use zita::ZiError;

fn vectors_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "4 3").unwrap();
    writeln!(file, "king 0.9 0.1 0.0").unwrap();
    writeln!(file, "queen 0.85 0.15 0.0").unwrap();
    writeln!(file, "apple 0.0 0.1 0.9").unwrap();
    writeln!(file, "pear 0.0 0.2 0.8").unwrap();
    file
}

#[test]
fn loads_word2vec_text_with_header() {
    let file = vectors_file();
    let model = ZiEmbeddingModel::load(file.path()).unwrap();
    assert_eq!(model.vocab_size(), 4);
    assert_eq!(model.dim(), 3);
    let neighbors = model.nearest("king", 1).unwrap();
    assert_eq!(neighbors[0].0, "queen");
    assert!(model.nearest("unicorn", 3).is_none());
}

#[test]
fn exhaustive_top_one_swaps_to_closest_word() {
    let file = vectors_file();
    let config = ZiEmbeddingConfig::default().exhaustive(true).seed(3);
    let mut augmenter = ZiWord2vec::from_path(file.path(), config).unwrap();
    let out = augmenter.augment("King eats Apple pie", 1).unwrap();
    assert_eq!(out, "queen eats pear pie");
}

#[test]
fn stochastic_mode_with_p_zero_only_lowercases() {
    let file = vectors_file();
    let config = ZiEmbeddingConfig::default().p(0.0);
    let mut augmenter = ZiFasttext::from_path(file.path(), config).unwrap();
    assert_eq!(augmenter.augment("King eats Apple", 10).unwrap(), "king eats apple");
}

#[test]
fn stochastic_replacements_come_from_the_vocabulary() {
    let file = vectors_file();
    let config = ZiEmbeddingConfig::default().p(1.0).runs(2).seed(8);
    let mut augmenter = ZiWord2vec::from_path(file.path(), config).unwrap();
    let vocabulary = ["king", "queen", "apple", "pear", "the"];
    for _ in 0..10 {
        let out = augmenter.augment("the king", 10).unwrap();
        assert!(out.split_whitespace().all(|t| vocabulary.contains(&t)), "{out}");
    }
}

#[test]
fn missing_model_fails_at_construction() {
    let err = ZiWord2vec::from_path("/nonexistent/model.vec", ZiEmbeddingConfig::default()).unwrap_err();
    assert!(matches!(err, ZiError::NotFound { .. }));
}

#[test]
fn out_of_range_probability_fails_before_loading() {
    let err = ZiWord2vec::from_path("/nonexistent/model.vec", ZiEmbeddingConfig::default().p(1.5))
        .unwrap_err();
    assert!(err.is_validation());
}
