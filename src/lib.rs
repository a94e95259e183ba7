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

//! # Zita
//!
//! Data augmentation for NLP training sets. Text augmenters produce new
//! variants of a sentence; the mixup augmenter blends numeric feature batches.
//!
//! ## Module Overview
//!
//! - **augment**: the augmenters (EDA, AEDA, part-of-speech synonyms,
//!   embedding neighbors, round-trip translation, mixup)
//! - **lexicon**: thesaurus, embedding, tagger and translator contracts with
//!   bundled implementations
//! - **sampler**: geometric position sampler shared by the text augmenters
//! - **text**: tokenization, validation and stop words
//! - **languages**: supported translation language codes
//! - **record** / **operator** / **operators** / **pipeline**: record batches,
//!   augmentation operators and config-driven pipelines
//!
//! ## Feature Flags
//!
//! - `http` (default): HTTP translation backend and the `augment.translate`
//!   operator
//!
//! ## Quick Start
//!
//! ```rust
//! use zita::augment::{ZiAeda, ZiAedaConfig};
//!
//! let mut aeda = ZiAeda::new(ZiAedaConfig::default())?;
//! let noisy = aeda.punct_insertion("John is going to town")?;
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T, ZiError>`](errors::Result).
//! Invalid configuration is reported at construction, before anything is
//! augmented; lookup misses in the lexical resources are never errors.

#![allow(non_snake_case)]

pub mod augment;
pub mod errors;
pub mod languages;
pub mod lexicon;
pub mod operator;
pub mod operators;
pub mod pipeline;
pub mod record;
pub mod sampler;
pub mod text;

pub use augment::{
    ZiAeda, ZiAedaConfig, ZiEda, ZiEdaConfig, ZiEdaMethod, ZiEdaTask, ZiEmbeddingAugmenter,
    ZiEmbeddingConfig, ZiFasttext, ZiMixedBatch, ZiMixup, ZiMixupConfig, ZiMixupFlow,
    ZiTextAugmenter, ZiTranslate, ZiTranslateConfig, ZiWord2vec, ZiWordnet, ZiWordnetConfig,
};
pub use errors::{Result, ZiError};
pub use languages::ZI_LANGUAGES;
pub use lexicon::{
    ZiEmbeddingModel, ZiLexiconTagger, ZiMemoryThesaurus, ZiNearestNeighbors, ZiPartOfSpeech,
    ZiPosTagger, ZiThesaurus, ZiTranslation, ZiTranslator,
};
pub use operator::{execute_operator, ZiOperator};
pub use pipeline::{ZiOperatorFactory, ZiPipeline, ZiPipelineBuilder};
pub use record::{ZiMetadata, ZiRecord, ZiRecordBatch};
pub use sampler::ZiGeometricSampler;
