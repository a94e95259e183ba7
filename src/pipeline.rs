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

//! # Pipelines
//!
//! A pipeline is an ordered list of operators built from configuration steps
//! of the form `{"operator": "<name>", "config": {...}}`, given either as a
//! JSON array or as a YAML document:
//!
//! ```yaml
//! steps:
//!   - operator: augment.aeda
//!     config:
//!       path: payload.text
//!       preserve_original: true
//! ```

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};
use crate::operator::{execute_operator, ZiOperator};
use crate::operators::augment;
use crate::record::ZiRecordBatch;

pub type ZiOperatorFactory = fn(&Value) -> Result<Box<dyn ZiOperator + Send + Sync>>;

/// Linear pipeline applying its stages in order.
#[derive(Debug)]
pub struct ZiPipeline {
    stages: Vec<Box<dyn ZiOperator + Send + Sync>>,
}

impl ZiPipeline {
    #[allow(non_snake_case)]
    pub fn new(stages: Vec<Box<dyn ZiOperator + Send + Sync>>) -> Self {
        ZiPipeline { stages }
    }

    #[allow(non_snake_case)]
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    #[allow(non_snake_case)]
    pub fn run(&self, mut batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
        for stage in &self.stages {
            let before = batch.len();
            batch = execute_operator(stage.as_ref(), batch)?;
            log::debug!("stage {}: {before} -> {} records", stage.name(), batch.len());
        }
        Ok(batch)
    }

    /// Runs the pipeline on consecutive slices of at most `chunk_size`
    /// records and concatenates the results.
    #[allow(non_snake_case)]
    pub fn run_chunked(&self, batch: ZiRecordBatch, chunk_size: usize) -> Result<ZiRecordBatch> {
        if chunk_size == 0 {
            return Err(ZiError::validation("chunk_size must be at least 1"));
        }
        let mut output = Vec::with_capacity(batch.len());
        for chunk in batch.chunks(chunk_size) {
            output.extend(self.run(chunk.to_vec())?);
        }
        Ok(output)
    }

    #[allow(non_snake_case)]
    pub fn validate(&self) -> Result<()> {
        if self.stages.is_empty() {
            return Err(ZiError::pipeline("pipeline", "no stages configured"));
        }
        Ok(())
    }
}

/// Registry of operator factories keyed by operator name.
pub struct ZiPipelineBuilder {
    factories: HashMap<String, ZiOperatorFactory>,
}

impl Default for ZiPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZiPipelineBuilder {
    #[allow(non_snake_case)]
    pub fn new() -> Self {
        ZiPipelineBuilder {
            factories: HashMap::new(),
        }
    }

    /// Builder with every bundled augmentation operator registered.
    #[allow(non_snake_case)]
    pub fn with_defaults() -> Self {
        let mut builder = Self::new();
        builder.register("augment.eda", augment::augment_eda_factory);
        builder.register("augment.aeda", augment::augment_aeda_factory);
        builder.register("augment.wordnet", augment::augment_wordnet_factory);
        builder.register("augment.embedding", augment::augment_embedding_factory);
        #[cfg(feature = "http")]
        builder.register("augment.translate", augment::augment_translate_factory);
        builder
    }

    #[allow(non_snake_case)]
    pub fn register(&mut self, name: impl Into<String>, factory: ZiOperatorFactory) {
        self.factories.insert(name.into(), factory);
    }

    #[allow(non_snake_case)]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    #[allow(non_snake_case)]
    pub fn build_from_config(&self, steps: &[Value]) -> Result<ZiPipeline> {
        let mut stages = Vec::with_capacity(steps.len());
        for (index, step) in steps.iter().enumerate() {
            let object = step.as_object().ok_or_else(|| {
                ZiError::validation(format!("pipeline step #{index} must be an object"))
            })?;
            let operator_name = object.get("operator").and_then(Value::as_str).ok_or_else(|| {
                ZiError::validation(format!("pipeline step #{index} missing string 'operator'"))
            })?;
            let factory = self.factories.get(operator_name).ok_or_else(|| {
                ZiError::validation(format!("unknown operator '{operator_name}'"))
            })?;

            let config = object.get("config").cloned().unwrap_or(Value::Null);
            let operator = factory(&config)
                .map_err(|err| ZiError::pipeline(format!("step #{index} ({operator_name})"), err.to_string()))?;
            stages.push(operator);
        }

        let pipeline = ZiPipeline::new(stages);
        pipeline.validate()?;
        Ok(pipeline)
    }

    /// Builds from a YAML document holding either a step list or a mapping
    /// with a `steps` list.
    #[allow(non_snake_case)]
    pub fn build_from_yaml(&self, source: &str) -> Result<ZiPipeline> {
        let yaml: serde_yaml::Value = serde_yaml::from_str(source)
            .map_err(|err| ZiError::validation(format!("invalid YAML: {err}")))?;
        let steps = match yaml_to_json(&yaml)? {
            Value::Array(steps) => steps,
            Value::Object(mut map) => match map.remove("steps") {
                Some(Value::Array(steps)) => steps,
                _ => return Err(ZiError::validation("YAML pipeline requires a 'steps' array")),
            },
            _ => return Err(ZiError::validation("YAML pipeline must be a list or a mapping")),
        };
        self.build_from_config(&steps)
    }
}

fn yaml_to_json(yaml: &serde_yaml::Value) -> Result<Value> {
    Ok(match yaml {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s.clone()),
        serde_yaml::Value::Sequence(items) => {
            Value::Array(items.iter().map(yaml_to_json).collect::<Result<_>>()?)
        }
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    _ => return Err(ZiError::validation("YAML mapping keys must be scalars")),
                };
                object.insert(key, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(&tagged.value)?,
    })
}
