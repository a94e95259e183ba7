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

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::augment::{
    ZiAeda, ZiAedaConfig, ZiEda, ZiEdaConfig, ZiEdaMethod, ZiEdaTask, ZiEmbeddingConfig,
    ZiTextAugmenter, ZiWord2vec, ZiWordnet, ZiWordnetConfig,
};
#[cfg(feature = "http")]
use crate::augment::{ZiTranslate, ZiTranslateConfig};
use crate::errors::{Result, ZiError};
use crate::lexicon::{ZiLexiconTagger, ZiMemoryThesaurus};
#[cfg(feature = "http")]
use crate::lexicon::{ZiHttpTranslator, ZiHttpTranslatorConfig};
use crate::operator::ZiOperator;
use crate::operators::field::ZiFieldPath;
use crate::record::ZiRecordBatch;

/// Runs a text augmenter over one string field of every record.
///
/// Augmented records are tagged with `augmented: true` and
/// `augmentation_method` in their metadata. With `preserve_original` the
/// untouched batch is emitted first, followed by the augmented copies whose
/// ids get an `_aug` suffix. Records without a string at `path` pass through
/// unchanged, as do records the augmenter rejects as invalid input.
pub struct ZiAugmentText {
    operator: &'static str,
    path: ZiFieldPath,
    augmenter: Mutex<Box<dyn ZiTextAugmenter>>,
    preserve_original: bool,
}

impl std::fmt::Debug for ZiAugmentText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZiAugmentText")
            .field("operator", &self.operator)
            .field("path", &self.path)
            .field("preserve_original", &self.preserve_original)
            .finish_non_exhaustive()
    }
}

impl ZiAugmentText {
    #[allow(non_snake_case)]
    pub fn new(
        operator: &'static str,
        path: ZiFieldPath,
        augmenter: Box<dyn ZiTextAugmenter>,
        preserve_original: bool,
    ) -> Self {
        Self {
            operator,
            path,
            augmenter: Mutex::new(augmenter),
            preserve_original,
        }
    }
}

impl ZiOperator for ZiAugmentText {
    fn name(&self) -> &'static str {
        self.operator
    }

    fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
        let mut augmenter = self
            .augmenter
            .lock()
            .map_err(|_| ZiError::internal(format!("{} augmenter lock poisoned", self.operator)))?;

        let mut originals = Vec::new();
        let mut output = Vec::with_capacity(batch.len());
        let mut skipped = 0usize;

        for record in batch {
            if self.preserve_original {
                originals.push(record.clone());
            }
            let text = match self.path.resolve(&record) {
                Some(Value::String(text)) => text.clone(),
                _ => {
                    skipped += 1;
                    if !self.preserve_original {
                        output.push(record);
                    }
                    continue;
                }
            };

            let augmented = match augmenter.augment_text(&text) {
                Ok(augmented) => augmented,
                Err(err) if err.is_validation() => {
                    log::warn!(
                        "{} skipped record {:?}: {err}",
                        self.operator,
                        record.id.as_deref().unwrap_or("<no id>")
                    );
                    skipped += 1;
                    if !self.preserve_original {
                        output.push(record);
                    }
                    continue;
                }
                Err(err) => return Err(err),
            };

            let mut record = record;
            self.path.set_value(&mut record, Value::String(augmented));
            let metadata = record.metadata_mut();
            metadata.insert("augmented".to_string(), Value::Bool(true));
            metadata.insert(
                "augmentation_method".to_string(),
                Value::String(augmenter.name().to_string()),
            );
            if self.preserve_original {
                if let Some(id) = &record.id {
                    record.id = Some(format!("{id}_aug"));
                }
            }
            output.push(record);
        }

        if skipped > 0 {
            log::debug!("{}: {skipped} records passed through unaugmented", self.operator);
        }
        originals.extend(output);
        Ok(originals)
    }
}

fn config_object<'a>(operator: &str, config: &'a Value) -> Result<&'a Map<String, Value>> {
    config
        .as_object()
        .ok_or_else(|| ZiError::validation(format!("{operator} config must be object")))
}

fn required_str<'a>(operator: &str, obj: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ZiError::validation(format!("{operator} requires string '{key}'")))
}

fn typed_config<T: DeserializeOwned>(operator: &str, config: &Value) -> Result<T> {
    serde_json::from_value(config.clone())
        .map_err(|err| ZiError::validation(format!("{operator} config invalid: {err}")))
}

fn common_options(operator: &str, obj: &Map<String, Value>) -> Result<(ZiFieldPath, bool)> {
    let path = ZiFieldPath::parse(required_str(operator, obj, "path")?)?;
    let preserve_original = obj
        .get("preserve_original")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    Ok((path, preserve_original))
}

fn load_thesaurus(operator: &str, obj: &Map<String, Value>) -> Result<ZiMemoryThesaurus> {
    ZiMemoryThesaurus::load(required_str(operator, obj, "thesaurus_path")?)
}

#[allow(non_snake_case)]
pub fn augment_eda_factory(config: &Value) -> Result<Box<dyn ZiOperator + Send + Sync>> {
    const NAME: &str = "augment.eda";
    let obj = config_object(NAME, config)?;
    let (path, preserve_original) = common_options(NAME, obj)?;
    let method: ZiEdaMethod = typed_config(NAME, config)?;
    let eda_config: ZiEdaConfig = typed_config(NAME, config)?;

    let thesaurus = load_thesaurus(NAME, obj)?;
    let eda = ZiEda::new(eda_config, Arc::new(thesaurus))?;
    let task = ZiEdaTask::new(eda, method)?;
    Ok(Box::new(ZiAugmentText::new(NAME, path, Box::new(task), preserve_original)))
}

#[allow(non_snake_case)]
pub fn augment_aeda_factory(config: &Value) -> Result<Box<dyn ZiOperator + Send + Sync>> {
    const NAME: &str = "augment.aeda";
    let obj = config_object(NAME, config)?;
    let (path, preserve_original) = common_options(NAME, obj)?;
    let aeda = ZiAeda::new(typed_config::<ZiAedaConfig>(NAME, config)?)?;
    Ok(Box::new(ZiAugmentText::new(NAME, path, Box::new(aeda), preserve_original)))
}

#[allow(non_snake_case)]
pub fn augment_wordnet_factory(config: &Value) -> Result<Box<dyn ZiOperator + Send + Sync>> {
    const NAME: &str = "augment.wordnet";
    let obj = config_object(NAME, config)?;
    let (path, preserve_original) = common_options(NAME, obj)?;
    let wordnet_config: ZiWordnetConfig = typed_config(NAME, config)?;

    let thesaurus = load_thesaurus(NAME, obj)?;
    let tagger = ZiLexiconTagger::from_thesaurus(&thesaurus, &wordnet_config.lang);
    let wordnet = ZiWordnet::new(wordnet_config, Arc::new(thesaurus), Arc::new(tagger))?;
    Ok(Box::new(ZiAugmentText::new(NAME, path, Box::new(wordnet), preserve_original)))
}

#[allow(non_snake_case)]
pub fn augment_embedding_factory(config: &Value) -> Result<Box<dyn ZiOperator + Send + Sync>> {
    const NAME: &str = "augment.embedding";
    let obj = config_object(NAME, config)?;
    let (path, preserve_original) = common_options(NAME, obj)?;
    let embedding_config: ZiEmbeddingConfig = typed_config(NAME, config)?;
    let model_path = required_str(NAME, obj, "model_path")?;

    let augmenter = ZiWord2vec::from_path(model_path, embedding_config)?;
    Ok(Box::new(ZiAugmentText::new(NAME, path, Box::new(augmenter), preserve_original)))
}

#[cfg(feature = "http")]
#[allow(non_snake_case)]
pub fn augment_translate_factory(config: &Value) -> Result<Box<dyn ZiOperator + Send + Sync>> {
    const NAME: &str = "augment.translate";
    let obj = config_object(NAME, config)?;
    let (path, preserve_original) = common_options(NAME, obj)?;
    let translate_config = ZiTranslateConfig::new(
        required_str(NAME, obj, "src")?,
        required_str(NAME, obj, "to")?,
    );

    let primary_config: ZiHttpTranslatorConfig = typed_config(NAME, config)?;
    let mut translate = ZiTranslate::new(
        translate_config,
        Box::new(ZiHttpTranslator::new("primary", primary_config.clone())?),
    )?;
    if let Some(endpoint) = obj.get("fallback_endpoint").and_then(Value::as_str) {
        let fallback_config = ZiHttpTranslatorConfig {
            endpoint: endpoint.to_string(),
            ..primary_config
        };
        translate = translate.with_fallback(Box::new(ZiHttpTranslator::new("fallback", fallback_config)?));
    }
    Ok(Box::new(ZiAugmentText::new(NAME, path, Box::new(translate), preserve_original)))
}
