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

//! # Embedding Neighborhood Replacement
//!
//! Replaces tokens with words that sit close to them in an embedding space.
//! Two modes are supported:
//!
//! - **exhaustive**: every token is replaced by a uniform pick from its
//!   `top_n` neighbors
//! - **stochastic**: positions are chosen by the geometric sampler and the
//!   replacement is drawn with probability proportional to similarity
//!
//! Tokens missing from the vocabulary are left as they are.

use std::path::Path;

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::{seeded_rng, ZiTextAugmenter};
use crate::errors::Result;
use crate::lexicon::{ZiEmbeddingModel, ZiNearestNeighbors};
use crate::sampler::ZiGeometricSampler;
use crate::text::{join, tokenize, validate_probability, validate_sentence};

/// Neighbor list size fetched in stochastic mode.
const DEFAULT_NEIGHBORS: usize = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiEmbeddingConfig {
    pub p: f64,
    pub runs: usize,
    /// Replace every token instead of a sampled subset.
    pub exhaustive: bool,
    pub seed: Option<u64>,
    /// Neighbor cap used by [`ZiTextAugmenter::augment_text`].
    pub top_n: usize,
}

impl Default for ZiEmbeddingConfig {
    fn default() -> Self {
        Self {
            p: 0.5,
            runs: 1,
            exhaustive: false,
            seed: None,
            top_n: DEFAULT_NEIGHBORS,
        }
    }
}

impl ZiEmbeddingConfig {
    #[allow(non_snake_case)]
    pub fn p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    #[allow(non_snake_case)]
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    #[allow(non_snake_case)]
    pub fn exhaustive(mut self, exhaustive: bool) -> Self {
        self.exhaustive = exhaustive;
        self
    }

    #[allow(non_snake_case)]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[allow(non_snake_case)]
    pub fn validate(&self) -> Result<()> {
        validate_probability("p", self.p)
    }
}

/// Replaces words with nearest neighbors from an embedding model `M`.
pub struct ZiEmbeddingAugmenter<M> {
    config: ZiEmbeddingConfig,
    model: M,
    sampler: ZiGeometricSampler,
    rng: StdRng,
}

/// Augmenter over word2vec-format vectors.
pub type ZiWord2vec = ZiEmbeddingAugmenter<ZiEmbeddingModel>;

/// Augmenter over fastText vectors, which share the word2vec text format.
pub type ZiFasttext = ZiEmbeddingAugmenter<ZiEmbeddingModel>;

impl<M> std::fmt::Debug for ZiEmbeddingAugmenter<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZiEmbeddingAugmenter")
            .field("config", &self.config)
            .field("sampler", &self.sampler)
            .finish_non_exhaustive()
    }
}

impl<M: ZiNearestNeighbors> ZiEmbeddingAugmenter<M> {
    #[allow(non_snake_case)]
    pub fn new(config: ZiEmbeddingConfig, model: M) -> Result<Self> {
        config.validate()?;
        let sampler = ZiGeometricSampler::new(config.p)?;
        let rng = seeded_rng(config.seed);
        Ok(Self {
            config,
            model,
            sampler,
            rng,
        })
    }

    #[allow(non_snake_case)]
    pub fn config(&self) -> &ZiEmbeddingConfig {
        &self.config
    }

    #[allow(non_snake_case)]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Lowercases and tokenizes `sentence`, then applies `runs` replacement
    /// rounds. `top_n` only bounds exhaustive mode.
    #[allow(non_snake_case)]
    pub fn augment(&mut self, sentence: &str, top_n: usize) -> Result<String> {
        validate_sentence(sentence)?;
        let mut words = tokenize(&sentence.to_lowercase());

        for _ in 0..self.config.runs {
            if self.config.exhaustive {
                self.replace_all(&mut words, top_n);
            } else {
                self.replace_sampled(&mut words);
            }
        }
        Ok(join(&words))
    }

    fn replace_all(&mut self, words: &mut [String], top_n: usize) {
        for word in words.iter_mut() {
            let Some(neighbors) = self.model.nearest(word, top_n) else {
                log::debug!("embedding miss for '{word}'");
                continue;
            };
            if let Some((candidate, _)) = neighbors.choose(&mut self.rng) {
                *word = candidate.to_lowercase();
            }
        }
    }

    fn replace_sampled(&mut self, words: &mut [String]) {
        let positions = self.sampler.select_indices(words.len(), &mut self.rng);
        for index in positions {
            let Some(neighbors) = self.model.nearest(&words[index], DEFAULT_NEIGHBORS) else {
                log::debug!("embedding miss for '{}'", words[index]);
                continue;
            };
            let weights: Vec<f32> = neighbors.iter().map(|(_, sim)| sim.max(0.0)).collect();
            let Ok(distribution) = WeightedIndex::new(&weights) else {
                continue;
            };
            words[index] = neighbors[distribution.sample(&mut self.rng)].0.to_lowercase();
        }
    }
}

impl ZiEmbeddingAugmenter<ZiEmbeddingModel> {
    /// Loads a word2vec text file and builds the augmenter over it.
    #[allow(non_snake_case)]
    pub fn from_path(path: impl AsRef<Path>, config: ZiEmbeddingConfig) -> Result<Self> {
        config.validate()?;
        let model = ZiEmbeddingModel::load(path)?;
        Self::new(config, model)
    }
}

impl<M: ZiNearestNeighbors + Send> ZiTextAugmenter for ZiEmbeddingAugmenter<M> {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn augment_text(&mut self, text: &str) -> Result<String> {
        let top_n = self.config.top_n;
        self.augment(text, top_n)
    }
}
