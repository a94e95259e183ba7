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
use std::sync::Arc;

use tempfile::NamedTempFile;
use zita::augment::{ZiWordnet, ZiWordnetConfig};
use zita::lexicon::{ZiLexiconTagger, ZiMemoryThesaurus, ZiPartOfSpeech};

fn thesaurus_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "# lang\tpos\tlemmas").unwrap();
    writeln!(file, "eng\tv\twalk,stroll").unwrap();
    writeln!(file, "eng\tn\tdog,domestic_dog,canis").unwrap();
    writeln!(file, "eng\tn\tpark,parkland").unwrap();
    file
}

fn wordnet(config: ZiWordnetConfig) -> ZiWordnet {
    let file = thesaurus_file();
    let thesaurus = ZiMemoryThesaurus::load(file.path()).unwrap();
    let tagger = ZiLexiconTagger::from_thesaurus(&thesaurus, "eng");
    ZiWordnet::new(config, Arc::new(thesaurus), Arc::new(tagger)).unwrap()
}

#[test]
fn verbs_and_nouns_are_replaced_with_single_words() {
    let config = ZiWordnetConfig::default().nouns(true).p(1.0).seed(1);
    let mut augmenter = wordnet(config);
    let out = augmenter.augment("Dogs walk in the Park", "eng", None).unwrap();
    assert_eq!(out, "dogs stroll in the park");
}

#[test]
fn synonyms_are_capped_by_top_n() {
    let config = ZiWordnetConfig::default().verbs(false).nouns(true).p(1.0);
    let mut augmenter = wordnet(config);
    assert_eq!(augmenter.augment("dog", "eng", Some(1)).unwrap(), "canis");
}

#[test]
fn other_languages_have_no_synonyms() {
    let config = ZiWordnetConfig::default().nouns(true).p(1.0);
    let mut augmenter = wordnet(config);
    assert_eq!(augmenter.augment("walk the dog", "fra", None).unwrap(), "walk the dog");
}

#[test]
fn noun_pass_ignores_verb_tagged_tokens() {
    let thesaurus = ZiMemoryThesaurus::new()
        .with_synset("eng", ZiPartOfSpeech::Verb, ["fish", "angle"])
        .with_synset("eng", ZiPartOfSpeech::Noun, ["fish", "pisces"]);
    let tagger = ZiLexiconTagger::new("X").with_word("fish", "VB");
    let config = ZiWordnetConfig::default().nouns(true).p(1.0);
    let mut augmenter = ZiWordnet::new(config, Arc::new(thesaurus), Arc::new(tagger)).unwrap();
    assert_eq!(augmenter.augment("fish", "eng", None).unwrap(), "angle");
}

#[test]
fn missing_thesaurus_file_is_not_found() {
    let err = ZiMemoryThesaurus::load("/nonexistent/thesaurus.tsv").unwrap_err();
    assert!(matches!(err, zita::ZiError::NotFound { .. }));
}
