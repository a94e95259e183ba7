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

//! # Part-of-speech Scoped Synonyms
//!
//! Replaces verbs and/or nouns with single-word thesaurus synonyms of the same
//! part of speech. The sentence is tagged once; all verb passes run before any
//! noun pass, so a noun pass sees the verbs already substituted.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use super::{seeded_rng, ZiSharedTagger, ZiSharedThesaurus, ZiTextAugmenter};
use crate::errors::{Result, ZiError};
use crate::lexicon::{ZiPartOfSpeech, DEFAULT_THESAURUS_LANG};
use crate::sampler::ZiGeometricSampler;
use crate::text::{is_multi_word, join, tokenize, validate_probability, validate_sentence};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiWordnetConfig {
    pub verbs: bool,
    pub nouns: bool,
    pub runs: usize,
    /// Geometric sampler success probability.
    pub p: f64,
    pub seed: Option<u64>,
    /// Language used by [`ZiTextAugmenter::augment_text`].
    pub lang: String,
    /// Synonym cap used by [`ZiTextAugmenter::augment_text`].
    pub top_n: Option<usize>,
}

impl Default for ZiWordnetConfig {
    fn default() -> Self {
        Self {
            verbs: true,
            nouns: false,
            runs: 1,
            p: 0.5,
            seed: None,
            lang: DEFAULT_THESAURUS_LANG.to_string(),
            top_n: Some(10),
        }
    }
}

impl ZiWordnetConfig {
    #[allow(non_snake_case)]
    pub fn verbs(mut self, enabled: bool) -> Self {
        self.verbs = enabled;
        self
    }

    #[allow(non_snake_case)]
    pub fn nouns(mut self, enabled: bool) -> Self {
        self.nouns = enabled;
        self
    }

    #[allow(non_snake_case)]
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    #[allow(non_snake_case)]
    pub fn p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    #[allow(non_snake_case)]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[allow(non_snake_case)]
    pub fn validate(&self) -> Result<()> {
        validate_probability("p", self.p)?;
        if self.lang.trim().is_empty() {
            return Err(ZiError::validation("wordnet 'lang' may not be empty"));
        }
        Ok(())
    }
}

/// Replaces verbs and nouns with thesaurus synonyms chosen by part of speech.
pub struct ZiWordnet {
    config: ZiWordnetConfig,
    thesaurus: ZiSharedThesaurus,
    tagger: ZiSharedTagger,
    sampler: ZiGeometricSampler,
    rng: StdRng,
}

impl std::fmt::Debug for ZiWordnet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZiWordnet")
            .field("config", &self.config)
            .field("sampler", &self.sampler)
            .finish_non_exhaustive()
    }
}

impl ZiWordnet {
    #[allow(non_snake_case)]
    pub fn new(
        config: ZiWordnetConfig,
        thesaurus: ZiSharedThesaurus,
        tagger: ZiSharedTagger,
    ) -> Result<Self> {
        config.validate()?;
        let sampler = ZiGeometricSampler::new(config.p)?;
        let rng = seeded_rng(config.seed);
        Ok(Self {
            config,
            thesaurus,
            tagger,
            sampler,
            rng,
        })
    }

    #[allow(non_snake_case)]
    pub fn config(&self) -> &ZiWordnetConfig {
        &self.config
    }

    /// Lowercases `sentence` and runs the configured verb and noun passes.
    /// `top_n` of `None` (or zero) keeps every synonym.
    #[allow(non_snake_case)]
    pub fn augment(&mut self, sentence: &str, lang: &str, top_n: Option<usize>) -> Result<String> {
        validate_sentence(sentence)?;
        let mut words = tokenize(&sentence.to_lowercase());
        let tagged = self.tagger.tag(&words);

        let mut passes = Vec::new();
        if self.config.verbs {
            passes.extend(std::iter::repeat(ZiPartOfSpeech::Verb).take(self.config.runs));
        }
        if self.config.nouns {
            passes.extend(std::iter::repeat(ZiPartOfSpeech::Noun).take(self.config.runs));
        }

        let mut replaced = 0;
        for pos in passes {
            replaced += self.replace_pass(&mut words, &tagged, pos, lang, top_n);
        }
        log::debug!("wordnet replaced {replaced} tokens");
        Ok(join(&words))
    }

    fn replace_pass(
        &mut self,
        words: &mut [String],
        tagged: &[(String, String)],
        pos: ZiPartOfSpeech,
        lang: &str,
        top_n: Option<usize>,
    ) -> usize {
        let candidates: Vec<usize> = tagged
            .iter()
            .enumerate()
            .filter(|(_, (_, tag))| ZiPartOfSpeech::from_tag(tag) == Some(pos))
            .map(|(index, _)| index)
            .collect();

        let mut replaced = 0;
        for index in self.sampler.select(&candidates, &mut self.rng) {
            let mut synonyms: Vec<String> = self
                .thesaurus
                .synonyms(&tagged[index].0, Some(pos), lang)
                .into_iter()
                .filter(|lemma| !is_multi_word(lemma))
                .collect();
            if let Some(limit) = top_n.filter(|limit| *limit > 0) {
                synonyms.truncate(limit);
            }
            if let Some(synonym) = self.sampler.select(&synonyms, &mut self.rng).first() {
                words[index] = synonym.to_lowercase();
                replaced += 1;
            }
        }
        replaced
    }
}

impl ZiTextAugmenter for ZiWordnet {
    fn name(&self) -> &'static str {
        "wordnet"
    }

    fn augment_text(&mut self, text: &str) -> Result<String> {
        let lang = self.config.lang.clone();
        let top_n = self.config.top_n;
        self.augment(text, &lang, top_n)
    }
}
