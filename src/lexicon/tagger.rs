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

//! # Part-of-speech Tagging
//!
//! The tagger contract used by the POS augmenter and a dictionary tagger
//! derived from a thesaurus.

use std::collections::HashMap;

use super::thesaurus::ZiMemoryThesaurus;

/// Part-of-speech tagging contract. Tags are Penn-style strings; only the
/// leading letter (`N`, `V`, `J`, `R`) is interpreted by the augmenters.
pub trait ZiPosTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;
}

/// Dictionary tagger: a fixed word → tag table with a fallback tag.
#[derive(Clone, Debug)]
pub struct ZiLexiconTagger {
    lexicon: HashMap<String, String>,
    default_tag: String,
}

impl Default for ZiLexiconTagger {
    fn default() -> Self {
        Self {
            lexicon: HashMap::new(),
            default_tag: "X".to_string(),
        }
    }
}

impl ZiLexiconTagger {
    #[allow(non_snake_case)]
    pub fn new(default_tag: impl Into<String>) -> Self {
        Self {
            lexicon: HashMap::new(),
            default_tag: default_tag.into(),
        }
    }

    /// Tags every thesaurus word by the first part of speech it was
    /// registered under.
    #[allow(non_snake_case)]
    pub fn from_thesaurus(thesaurus: &ZiMemoryThesaurus, lang: &str) -> Self {
        let mut tagger = Self::default();
        for (word, parts) in thesaurus.entries(lang) {
            if let Some(pos) = parts.first() {
                tagger.lexicon.insert(word, pos.penn_tag().to_string());
            }
        }
        tagger
    }

    #[allow(non_snake_case)]
    pub fn with_word(mut self, word: &str, tag: &str) -> Self {
        self.lexicon.insert(word.to_lowercase(), tag.to_string());
        self
    }
}

impl ZiPosTagger for ZiLexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        tokens
            .iter()
            .map(|token| {
                let tag = self
                    .lexicon
                    .get(&token.to_lowercase())
                    .unwrap_or(&self.default_tag)
                    .clone();
                (token.clone(), tag)
            })
            .collect()
    }
}
