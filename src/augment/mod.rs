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

//! # Augmenters
//!
//! Every text augmenter follows the same shape: pick candidate positions
//! under a policy, draw a replacement from a candidate set, apply the edit
//! and repeat for a bounded number of runs.
//!
//! - **eda** ([`ZiEda`]): thesaurus synonym replacement, random deletion,
//!   swap and insertion
//! - **aeda** ([`ZiAeda`]): random punctuation insertion
//! - **wordnet** ([`ZiWordnet`]): verb/noun scoped synonym replacement
//! - **embedding** ([`ZiEmbeddingAugmenter`]): replacement from embedding
//!   neighborhoods
//! - **translate** ([`ZiTranslate`]): round-trip translation paraphrase
//! - **mixup** ([`ZiMixup`]): convex combination of numeric feature batches
//!
//! Each augmenter is built from a serde-friendly config struct validated once
//! at construction, and owns its random source.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::Result;
use crate::lexicon::{ZiPosTagger, ZiThesaurus};

pub mod aeda;
pub mod eda;
pub mod embedding;
pub mod mixup;
pub mod translate;
pub mod wordnet;

pub use aeda::{ZiAeda, ZiAedaConfig};
pub use eda::{ZiEda, ZiEdaConfig, ZiEdaMethod, ZiEdaTask};
pub use embedding::{ZiEmbeddingAugmenter, ZiEmbeddingConfig, ZiFasttext, ZiWord2vec};
pub use mixup::{ZiMixedBatch, ZiMixup, ZiMixupConfig, ZiMixupFlow};
pub use translate::{ZiTranslate, ZiTranslateConfig};
pub use wordnet::{ZiWordnet, ZiWordnetConfig};

/// Thesaurus handle shared between augmenters.
pub type ZiSharedThesaurus = Arc<dyn ZiThesaurus + Send + Sync>;

/// Tagger handle shared between augmenters.
pub type ZiSharedTagger = Arc<dyn ZiPosTagger + Send + Sync>;

/// Sentence-in, sentence-out view of an augmenter, used by record operators.
pub trait ZiTextAugmenter: Send {
    /// Method name recorded in record metadata.
    fn name(&self) -> &'static str;

    fn augment_text(&mut self, text: &str) -> Result<String>;
}

pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
