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

//! # Thesaurus Lookup
//!
//! The [`ZiThesaurus`] trait maps a word (optionally restricted to a part of
//! speech) in a given language to its set of synonym lemmas. A miss is an
//! empty set, never an error.
//!
//! [`ZiMemoryThesaurus`] is a synset-based implementation: a word's synonyms
//! are the lemmas of every synset the word belongs to, the word itself
//! included (callers strip self-matches). Synsets can be loaded from a
//! tab-separated file:
//!
//! ```text
//! # lang  pos  lemmas
//! eng     v    walk,stroll,amble
//! eng     n    town,township,city
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Language code used when callers do not name one.
pub const DEFAULT_THESAURUS_LANG: &str = "eng";

/// Coarse part of speech understood by the thesaurus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ZiPartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl ZiPartOfSpeech {
    /// Parses single-letter or spelled-out codes (`n`, `v`, `a`/`s`, `r`).
    #[allow(non_snake_case)]
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "n" | "noun" => Some(Self::Noun),
            "v" | "verb" => Some(Self::Verb),
            "a" | "s" | "adj" | "adjective" => Some(Self::Adjective),
            "r" | "adv" | "adverb" => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Maps a Penn-style tag (`VBZ`, `NNS`, `JJ`, `RB`) to a part of speech.
    #[allow(non_snake_case)]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.chars().next()? {
            'N' => Some(Self::Noun),
            'V' => Some(Self::Verb),
            'J' => Some(Self::Adjective),
            'R' => Some(Self::Adverb),
            _ => None,
        }
    }

    /// Canonical Penn-style tag for this part of speech.
    #[allow(non_snake_case)]
    pub fn penn_tag(&self) -> &'static str {
        match self {
            Self::Noun => "NN",
            Self::Verb => "VB",
            Self::Adjective => "JJ",
            Self::Adverb => "RB",
        }
    }
}

/// Synonym lookup contract.
pub trait ZiThesaurus {
    /// Synonym lemmas of `word` in `lang`, restricted to `pos` when given.
    fn synonyms(&self, word: &str, pos: Option<ZiPartOfSpeech>, lang: &str) -> BTreeSet<String>;
}

/// A group of interchangeable lemmas sharing one part of speech.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiSynset {
    pub lang: String,
    pub pos: ZiPartOfSpeech,
    pub lemmas: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ZiMemoryThesaurus {
    synsets: Vec<ZiSynset>,
    index: HashMap<(String, String), Vec<usize>>,
}

impl ZiMemoryThesaurus {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a synset; lemmas are indexed case-insensitively.
    #[allow(non_snake_case)]
    pub fn add_synset<I, S>(&mut self, lang: &str, pos: ZiPartOfSpeech, lemmas: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lemmas: Vec<String> = lemmas
            .into_iter()
            .map(Into::into)
            .filter(|lemma: &String| !lemma.trim().is_empty())
            .collect();
        if lemmas.is_empty() {
            return;
        }

        let id = self.synsets.len();
        for lemma in &lemmas {
            let key = (lang.to_string(), lemma.to_lowercase());
            let ids = self.index.entry(key).or_default();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        self.synsets.push(ZiSynset {
            lang: lang.to_string(),
            pos,
            lemmas,
        });
    }

    /// Builder-style variant of [`Self::add_synset`].
    #[allow(non_snake_case)]
    pub fn with_synset<I, S>(mut self, lang: &str, pos: ZiPartOfSpeech, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_synset(lang, pos, lemmas);
        self
    }

    /// Loads synsets from a `lang<TAB>pos<TAB>lemma,lemma,...` file.
    #[allow(non_snake_case)]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ZiError::not_found(path.display().to_string()));
        }

        let reader = BufReader::new(File::open(path)?);
        let mut thesaurus = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            thesaurus.load_line(&line?, idx + 1)?;
        }

        log::info!(
            "loaded {} synsets from thesaurus {}",
            thesaurus.len(),
            path.display()
        );
        Ok(thesaurus)
    }

    fn load_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(());
        }

        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 3 {
            return Err(ZiError::validation(format!(
                "thesaurus line {line_no}: expected 'lang<TAB>pos<TAB>lemmas'"
            )));
        }
        let pos = ZiPartOfSpeech::parse(parts[1]).ok_or_else(|| {
            ZiError::validation(format!(
                "thesaurus line {line_no}: unknown part of speech '{}'",
                parts[1]
            ))
        })?;
        self.add_synset(parts[0].trim(), pos, parts[2].split(',').map(str::trim));
        Ok(())
    }

    #[allow(non_snake_case)]
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    #[allow(non_snake_case)]
    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Parts of speech `word` is listed under, in registration order.
    #[allow(non_snake_case)]
    pub fn parts_of_speech(&self, word: &str, lang: &str) -> Vec<ZiPartOfSpeech> {
        let mut found = Vec::new();
        for id in self.synset_ids(word, lang) {
            let pos = self.synsets[*id].pos;
            if !found.contains(&pos) {
                found.push(pos);
            }
        }
        found
    }

    /// Every (word, parts of speech) pair known in `lang`.
    #[allow(non_snake_case)]
    pub fn entries(&self, lang: &str) -> Vec<(String, Vec<ZiPartOfSpeech>)> {
        let mut words: Vec<&String> = self
            .index
            .keys()
            .filter(|(l, _)| l == lang)
            .map(|(_, word)| word)
            .collect();
        words.sort();
        words
            .into_iter()
            .map(|word| (word.clone(), self.parts_of_speech(word, lang)))
            .collect()
    }

    fn synset_ids(&self, word: &str, lang: &str) -> &[usize] {
        self.index
            .get(&(lang.to_string(), word.to_lowercase()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl ZiThesaurus for ZiMemoryThesaurus {
    fn synonyms(&self, word: &str, pos: Option<ZiPartOfSpeech>, lang: &str) -> BTreeSet<String> {
        self.synset_ids(word, lang)
            .iter()
            .map(|id| &self.synsets[*id])
            .filter(|synset| pos.map_or(true, |wanted| synset.pos == wanted))
            .flat_map(|synset| synset.lemmas.iter().cloned())
            .collect()
    }
}
