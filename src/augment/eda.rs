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

//! # Easy Data Augmentation
//!
//! Four sentence edits from Wei & Zou (2019), "EDA: Easy Data Augmentation
//! Techniques for Boosting Performance on Text Classification Tasks":
//!
//! - synonym replacement of `n` distinct non-stop words
//! - random deletion with probability `p`
//! - `n` random swaps of two positions
//! - `n` random insertions of a synonym of a sentence word
//!
//! ```rust
//! use std::sync::Arc;
//! use zita::augment::{ZiEda, ZiEdaConfig};
//! use zita::lexicon::{ZiMemoryThesaurus, ZiPartOfSpeech};
//!
//! let thesaurus = ZiMemoryThesaurus::new()
//!     .with_synset("eng", ZiPartOfSpeech::Noun, ["town", "township"]);
//! let mut eda = ZiEda::new(ZiEdaConfig::default(), Arc::new(thesaurus))?;
//! let out = eda.synonym_replacement("John is going to town", 1, None)?;
//! ```

use std::collections::{BTreeSet, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{seeded_rng, ZiSharedThesaurus, ZiTextAugmenter};
use crate::errors::{Result, ZiError};
use crate::lexicon::DEFAULT_THESAURUS_LANG;
use crate::text::{
    join, normalize_synonym, stop_word_set, tokenize, validate_probability, validate_sentence,
    ZiLastOperation,
};

/// Draws allowed when looking for a distinct second swap index.
const MAX_SWAP_RETRIES: usize = 3;

/// Source words tried before an insertion gives up.
const MAX_INSERTION_ATTEMPTS: usize = 10;

/// Stop words, seed and thesaurus language for [`ZiEda`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiEdaConfig {
    /// Words never chosen as replacement sources. `None` uses English.
    pub stop_words: Option<Vec<String>>,
    pub seed: u64,
    /// Thesaurus language code.
    pub lang: String,
}

impl Default for ZiEdaConfig {
    fn default() -> Self {
        Self {
            stop_words: None,
            seed: 1,
            lang: DEFAULT_THESAURUS_LANG.to_string(),
        }
    }
}

impl ZiEdaConfig {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(non_snake_case)]
    pub fn stop_words(mut self, words: Vec<String>) -> Self {
        self.stop_words = Some(words);
        self
    }

    #[allow(non_snake_case)]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[allow(non_snake_case)]
    pub fn lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    #[allow(non_snake_case)]
    pub fn validate(&self) -> Result<()> {
        if self.lang.trim().is_empty() {
            return Err(ZiError::validation("eda 'lang' may not be empty"));
        }
        Ok(())
    }
}

/// Easy data augmentation editor over a shared thesaurus. Every edit
/// records its inputs, readable through [`ZiEda::last_operation`].
pub struct ZiEda {
    config: ZiEdaConfig,
    stop_words: HashSet<String>,
    thesaurus: ZiSharedThesaurus,
    rng: StdRng,
    last: ZiLastOperation,
}

impl std::fmt::Debug for ZiEda {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZiEda")
            .field("config", &self.config)
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

impl ZiEda {
    #[allow(non_snake_case)]
    pub fn new(config: ZiEdaConfig, thesaurus: ZiSharedThesaurus) -> Result<Self> {
        config.validate()?;
        let stop_words = stop_word_set(config.stop_words.as_deref());
        let rng = seeded_rng(Some(config.seed));
        Ok(Self {
            config,
            stop_words,
            thesaurus,
            rng,
            last: ZiLastOperation::default(),
        })
    }

    #[allow(non_snake_case)]
    pub fn config(&self) -> &ZiEdaConfig {
        &self.config
    }

    #[allow(non_snake_case)]
    pub fn last_operation(&self) -> &ZiLastOperation {
        &self.last
    }

    fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word) || self.stop_words.contains(&word.to_lowercase())
    }

    /// Normalized synonyms of `word` without the word itself, in a seeded
    /// order that only depends on the thesaurus contents.
    fn synonyms_of(&mut self, word: &str) -> Vec<String> {
        let mut synonyms: BTreeSet<String> = self
            .thesaurus
            .synonyms(word, None, &self.config.lang)
            .iter()
            .map(|lemma| normalize_synonym(lemma))
            .filter(|lemma| !lemma.trim().is_empty())
            .collect();
        synonyms.remove(word);
        synonyms.remove(&word.to_lowercase());

        let mut synonyms: Vec<String> = synonyms.into_iter().collect();
        synonyms.shuffle(&mut self.rng);
        synonyms
    }

    /// Replaces every occurrence of up to `n` distinct non-stop words with a
    /// synonym. Fewer replacements happen when candidates run out.
    #[allow(non_snake_case)]
    pub fn synonym_replacement(
        &mut self,
        sentence: &str,
        n: usize,
        top_n: Option<usize>,
    ) -> Result<String> {
        validate_sentence(sentence)?;
        self.last.record(sentence, None, Some(n));

        let mut words = tokenize(sentence);
        let mut candidates: Vec<String> = words
            .iter()
            .filter(|word| !self.is_stop_word(word))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        candidates.shuffle(&mut self.rng);

        let mut replaced = 0;
        for candidate in candidates {
            if replaced >= n {
                break;
            }
            let mut synonyms = self.synonyms_of(&candidate);
            if let Some(limit) = top_n {
                synonyms.truncate(limit);
            }
            let Some(synonym) = synonyms.choose(&mut self.rng).cloned() else {
                continue;
            };
            for word in words.iter_mut().filter(|word| **word == candidate) {
                *word = synonym.clone();
            }
            replaced += 1;
        }

        log::debug!("eda synonym replacement: {replaced}/{n} words replaced");
        Ok(join(&words))
    }

    /// Drops each word with probability `p`, never returning an empty string.
    #[allow(non_snake_case)]
    pub fn random_deletion(&mut self, sentence: &str, p: f64) -> Result<String> {
        validate_sentence(sentence)?;
        validate_probability("p", p)?;
        self.last.record(sentence, Some(p), None);

        let words = tokenize(sentence);
        if words.len() == 1 {
            return Ok(words[0].clone());
        }

        let kept: Vec<String> = words
            .iter()
            .filter(|_| self.rng.gen::<f64>() > p)
            .cloned()
            .collect();

        if kept.is_empty() {
            let survivor = words
                .choose(&mut self.rng)
                .cloned()
                .unwrap_or_default();
            return Ok(survivor);
        }
        Ok(join(&kept))
    }

    /// Swaps two random positions `n` times.
    #[allow(non_snake_case)]
    pub fn random_swap(&mut self, sentence: &str, n: usize) -> Result<String> {
        validate_sentence(sentence)?;
        self.last.record(sentence, None, Some(n));

        let mut words = tokenize(sentence);
        for _ in 0..n {
            self.swap_word(&mut words);
        }
        Ok(join(&words))
    }

    fn swap_word(&mut self, words: &mut [String]) {
        let len = words.len();
        let first = self.rng.gen_range(0..len);
        let rng = &mut self.rng;
        match distinct_index(first, || rng.gen_range(0..len)) {
            Some(second) => words.swap(first, second),
            None => log::debug!("eda swap skipped: no distinct position found"),
        }
    }

    /// Inserts a synonym of a random sentence word at a random position,
    /// `n` times.
    #[allow(non_snake_case)]
    pub fn random_insertion(&mut self, sentence: &str, n: usize) -> Result<String> {
        validate_sentence(sentence)?;
        self.last.record(sentence, None, Some(n));

        let mut words = tokenize(sentence);
        for _ in 0..n {
            self.add_word(&mut words);
        }
        Ok(join(&words))
    }

    fn add_word(&mut self, words: &mut Vec<String>) {
        for _ in 0..MAX_INSERTION_ATTEMPTS {
            let sources: Vec<String> = words
                .iter()
                .filter(|word| !self.is_stop_word(word))
                .cloned()
                .collect();
            let Some(source) = sources.choose(&mut self.rng).cloned() else {
                return;
            };

            let synonyms = self.synonyms_of(&source);
            if let Some(synonym) = synonyms.into_iter().next() {
                let position = self.rng.gen_range(0..words.len());
                words.insert(position, synonym);
                return;
            }
        }
        log::debug!("eda insertion skipped after {MAX_INSERTION_ATTEMPTS} attempts");
    }
}

/// Draws up to `MAX_SWAP_RETRIES` indices, returning the first that differs
/// from `first`.
fn distinct_index(first: usize, mut draw: impl FnMut() -> usize) -> Option<usize> {
    (0..MAX_SWAP_RETRIES).map(|_| draw()).find(|&index| index != first)
}

/// One EDA edit with its parameters, for use where a single
/// sentence-to-sentence function is needed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ZiEdaMethod {
    SynonymReplacement {
        #[serde(default = "default_n")]
        n: usize,
        #[serde(default)]
        top_n: Option<usize>,
    },
    RandomDeletion {
        #[serde(default = "default_p")]
        p: f64,
    },
    RandomSwap {
        #[serde(default = "default_n")]
        n: usize,
    },
    RandomInsertion {
        #[serde(default = "default_n")]
        n: usize,
    },
}

fn default_n() -> usize {
    1
}

fn default_p() -> f64 {
    0.1
}

impl ZiEdaMethod {
    #[allow(non_snake_case)]
    pub fn validate(&self) -> Result<()> {
        if let ZiEdaMethod::RandomDeletion { p } = self {
            validate_probability("p", *p)?;
        }
        Ok(())
    }
}

/// A [`ZiEda`] bound to one edit method.
#[derive(Debug)]
pub struct ZiEdaTask {
    eda: ZiEda,
    method: ZiEdaMethod,
}

impl ZiEdaTask {
    #[allow(non_snake_case)]
    pub fn new(eda: ZiEda, method: ZiEdaMethod) -> Result<Self> {
        method.validate()?;
        Ok(Self { eda, method })
    }
}

impl ZiTextAugmenter for ZiEdaTask {
    fn name(&self) -> &'static str {
        match self.method {
            ZiEdaMethod::SynonymReplacement { .. } => "eda.synonym_replacement",
            ZiEdaMethod::RandomDeletion { .. } => "eda.random_deletion",
            ZiEdaMethod::RandomSwap { .. } => "eda.random_swap",
            ZiEdaMethod::RandomInsertion { .. } => "eda.random_insertion",
        }
    }

    fn augment_text(&mut self, text: &str) -> Result<String> {
        match self.method.clone() {
            ZiEdaMethod::SynonymReplacement { n, top_n } => {
                self.eda.synonym_replacement(text, n, top_n)
            }
            ZiEdaMethod::RandomDeletion { p } => self.eda.random_deletion(text, p),
            ZiEdaMethod::RandomSwap { n } => self.eda.random_swap(text, n),
            ZiEdaMethod::RandomInsertion { n } => self.eda.random_insertion(text, n),
        }
    }
}
