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

//! # Lexical Collaborators
//!
//! The augmenters reach external linguistic resources only through the
//! traits defined here:
//!
//! - **thesaurus** ([`ZiThesaurus`]): word + part of speech + language to a
//!   set of synonym lemmas
//! - **embedding** ([`ZiNearestNeighbors`]): token to ranked
//!   (candidate, similarity) pairs
//! - **tagger** ([`ZiPosTagger`]): tokens to (token, tag) pairs
//! - **translator** ([`ZiTranslator`]): text between two languages, with a
//!   distinguished "not translated" outcome
//!
//! Each module also ships a self-contained implementation so the crate can be
//! used without external services.

pub mod embedding;
pub mod tagger;
pub mod thesaurus;
pub mod translator;

pub use embedding::{ZiEmbeddingModel, ZiNearestNeighbors};
pub use tagger::{ZiLexiconTagger, ZiPosTagger};
pub use thesaurus::{ZiMemoryThesaurus, ZiPartOfSpeech, ZiSynset, ZiThesaurus, DEFAULT_THESAURUS_LANG};
pub use translator::{ZiHttpTranslatorConfig, ZiTranslation, ZiTranslator};
#[cfg(feature = "http")]
pub use translator::ZiHttpTranslator;
