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

//! # Round-trip Translation
//!
//! Paraphrases text by translating it into a pivot language and back. When the
//! primary backend declines either leg, the round trip is retried on the
//! fallback backend.

use serde::{Deserialize, Serialize};

use super::ZiTextAugmenter;
use crate::errors::{Result, ZiError};
use crate::languages::is_supported;
use crate::lexicon::{ZiTranslation, ZiTranslator};
use crate::text::validate_sentence;

pub type ZiBoxedTranslator = Box<dyn ZiTranslator + Send + Sync>;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZiTranslateConfig {
    /// Language of the input text.
    pub src: String,
    /// Pivot language.
    pub to: String,
}

impl ZiTranslateConfig {
    #[allow(non_snake_case)]
    pub fn new(src: &str, to: &str) -> Self {
        Self {
            src: src.to_string(),
            to: to.to_string(),
        }
    }

    #[allow(non_snake_case)]
    pub fn validate(&self) -> Result<()> {
        for (field, code) in [("src", &self.src), ("to", &self.to)] {
            if code.trim().is_empty() {
                return Err(ZiError::validation(format!("translate '{field}' is required")));
            }
            if !is_supported(code) {
                return Err(ZiError::validation(format!(
                    "translate '{field}' has unsupported language code '{code}'"
                )));
            }
        }
        Ok(())
    }
}

/// Round-trip paraphraser over a primary translation backend with an
/// optional fallback used when the primary declines a leg.
#[derive(Debug)]
pub struct ZiTranslate {
    config: ZiTranslateConfig,
    primary: ZiBoxedTranslator,
    fallback: Option<ZiBoxedTranslator>,
}

impl ZiTranslate {
    #[allow(non_snake_case)]
    pub fn new(config: ZiTranslateConfig, primary: ZiBoxedTranslator) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            primary,
            fallback: None,
        })
    }

    #[allow(non_snake_case)]
    pub fn with_fallback(mut self, fallback: ZiBoxedTranslator) -> Self {
        self.fallback = Some(fallback);
        self
    }

    #[allow(non_snake_case)]
    pub fn config(&self) -> &ZiTranslateConfig {
        &self.config
    }

    /// Lowercased `src → to → src` paraphrase of `text`.
    #[allow(non_snake_case)]
    pub fn augment(&self, text: &str) -> Result<String> {
        validate_sentence(text)?;
        let lowered = text.to_lowercase();
        let (src, to) = (self.config.src.as_str(), self.config.to.as_str());

        let output = match (self.round_trip(self.primary.as_ref(), &lowered, src, to)?, &self.fallback) {
            (ZiRoundTrip::Done(text), _) => text,
            (_, Some(fallback)) => {
                log::warn!(
                    "translator '{}' declined {src}<->{to}, retrying with '{}'",
                    self.primary.name(),
                    fallback.name()
                );
                self.pass_through_round_trip(fallback.as_ref(), &lowered, src, to)?
            }
            (ZiRoundTrip::DeclinedOutbound, None) => {
                self.primary.translate(&lowered, to, src)?.or_original(&lowered)
            }
            (ZiRoundTrip::DeclinedReturn(pivot), None) => pivot,
        };
        Ok(output.to_lowercase())
    }

    /// Both legs on one backend, stopping at the first declined leg.
    fn round_trip(
        &self,
        backend: &(dyn ZiTranslator + Send + Sync),
        text: &str,
        src: &str,
        to: &str,
    ) -> Result<ZiRoundTrip> {
        let ZiTranslation::Translated(pivot) = backend.translate(text, src, to)? else {
            return Ok(ZiRoundTrip::DeclinedOutbound);
        };
        Ok(match backend.translate(&pivot, to, src)? {
            ZiTranslation::Translated(back) => ZiRoundTrip::Done(back),
            ZiTranslation::NotTranslated => ZiRoundTrip::DeclinedReturn(pivot),
        })
    }

    /// Both legs on one backend; a declined leg keeps its input.
    fn pass_through_round_trip(
        &self,
        backend: &(dyn ZiTranslator + Send + Sync),
        text: &str,
        src: &str,
        to: &str,
    ) -> Result<String> {
        let pivot = backend.translate(text, src, to)?.or_original(text);
        Ok(backend.translate(&pivot, to, src)?.or_original(&pivot))
    }
}

/// Outcome of one backend's round trip. A declined return leg keeps the
/// pivot so it is not requested again.
enum ZiRoundTrip {
    Done(String),
    DeclinedOutbound,
    DeclinedReturn(String),
}

impl ZiTextAugmenter for ZiTranslate {
    fn name(&self) -> &'static str {
        "translate"
    }

    fn augment_text(&mut self, text: &str) -> Result<String> {
        self.augment(text)
    }
}
