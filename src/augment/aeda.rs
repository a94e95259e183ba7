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

//! # An Easier Data Augmentation
//!
//! Random punctuation insertion from Karimi et al. (2021), "AEDA: An Easier
//! Data Augmentation Technique for Text Classification".

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{seeded_rng, ZiTextAugmenter};
use crate::errors::{Result, ZiError};
use crate::text::{join, tokenize, validate_sentence};

/// Shortest sentence that can receive a punctuation mark.
const MIN_TOKENS: usize = 3;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiAedaConfig {
    pub punctuations: Vec<String>,
    pub seed: u64,
}

impl Default for ZiAedaConfig {
    fn default() -> Self {
        Self {
            punctuations: [".", ";", "?", ":", "!", ","]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            seed: 1,
        }
    }
}

impl ZiAedaConfig {
    #[allow(non_snake_case)]
    pub fn punctuations(mut self, marks: &[&str]) -> Self {
        self.punctuations = marks.iter().map(|m| m.to_string()).collect();
        self
    }

    #[allow(non_snake_case)]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[allow(non_snake_case)]
    pub fn validate(&self) -> Result<()> {
        if self.punctuations.is_empty() {
            return Err(ZiError::validation("aeda requires at least one punctuation mark"));
        }
        if self.punctuations.iter().any(|p| p.trim().is_empty()) {
            return Err(ZiError::validation("aeda punctuation marks may not be blank"));
        }
        Ok(())
    }
}

/// Inserts random punctuation marks between tokens.
#[derive(Debug)]
pub struct ZiAeda {
    config: ZiAedaConfig,
    rng: StdRng,
}

impl ZiAeda {
    #[allow(non_snake_case)]
    pub fn new(config: ZiAedaConfig) -> Result<Self> {
        config.validate()?;
        let rng = seeded_rng(Some(config.seed));
        Ok(Self { config, rng })
    }

    #[allow(non_snake_case)]
    pub fn config(&self) -> &ZiAedaConfig {
        &self.config
    }

    /// Inserts between 1 and `tokens / 3` punctuation marks at random
    /// positions.
    #[allow(non_snake_case)]
    pub fn punct_insertion(&mut self, sentence: &str) -> Result<String> {
        validate_sentence(sentence)?;
        let mut words = tokenize(sentence);
        if words.len() < MIN_TOKENS {
            return Err(ZiError::validation(format!(
                "punctuation insertion needs at least {MIN_TOKENS} tokens, got {}",
                words.len()
            )));
        }

        let marks = self.rng.gen_range(1..=words.len() / MIN_TOKENS);
        for _ in 0..marks {
            let Some(mark) = self.config.punctuations.choose(&mut self.rng).cloned() else {
                break;
            };
            let position = self.rng.gen_range(0..words.len());
            words.insert(position, mark);
        }
        log::debug!("aeda inserted {marks} punctuation marks");
        Ok(join(&words))
    }
}

impl ZiTextAugmenter for ZiAeda {
    fn name(&self) -> &'static str {
        "aeda"
    }

    fn augment_text(&mut self, text: &str) -> Result<String> {
        self.punct_insertion(text)
    }
}
