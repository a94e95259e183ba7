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

use serde_json::json;
use tempfile::NamedTempFile;
use zita::{ZiPipelineBuilder, ZiRecord};

fn thesaurus_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "eng\tn\ttown,township").unwrap();
    writeln!(file, "eng\tv\tgoing,departing").unwrap();
    file
}

fn records() -> Vec<ZiRecord> {
    vec![
        ZiRecord::new(Some("r1".to_string()), json!({"text": "John is going to town"})),
        ZiRecord::new(Some("r2".to_string()), json!({"title": "no text field"})),
    ]
}

#[test]
fn eda_operator_swaps_tokens_and_tags_metadata() {
    let thesaurus = thesaurus_file();
    let steps = vec![json!({
        "operator": "augment.eda",
        "config": {
            "path": "payload.text",
            "method": "random_swap",
            "n": 2,
            "seed": 3,
            "thesaurus_path": thesaurus.path().to_str().unwrap(),
        }
    })];
    let pipeline = ZiPipelineBuilder::with_defaults().build_from_config(&steps).unwrap();
    let out = pipeline.run(records()).unwrap();

    assert_eq!(out.len(), 2);
    let text = out[0].payload["text"].as_str().unwrap();
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort();
    assert_eq!(tokens, vec!["John", "going", "is", "to", "town"]);
    let metadata = out[0].metadata.as_ref().unwrap();
    assert_eq!(metadata["augmentation_method"], json!("eda.random_swap"));
    assert!(out[1].metadata.is_none());
}

#[test]
fn chained_operators_preserve_originals() {
    let thesaurus = thesaurus_file();
    let steps = vec![
        json!({
            "operator": "augment.eda",
            "config": {
                "path": "payload.text",
                "method": "synonym_replacement",
                "n": 1,
                "thesaurus_path": thesaurus.path().to_str().unwrap(),
                "preserve_original": true,
            }
        }),
        json!({
            "operator": "augment.aeda",
            "config": {"path": "payload.text", "seed": 2}
        }),
    ];
    let pipeline = ZiPipelineBuilder::with_defaults().build_from_config(&steps).unwrap();
    assert_eq!(pipeline.stage_names(), vec!["augment.eda", "augment.aeda"]);

    let out = pipeline.run(records()).unwrap();
    let ids: Vec<&str> = out.iter().map(|r| r.id.as_deref().unwrap()).collect();
    assert_eq!(ids, vec!["r1", "r2", "r1_aug"]);
    for record in [&out[0], &out[2]] {
        let method = &record.metadata.as_ref().unwrap()["augmentation_method"];
        assert_eq!(method, &json!("aeda"));
    }
}

#[test]
fn yaml_pipeline_builds_embedding_stage() {
    let mut model = NamedTempFile::new().unwrap();
    writeln!(model, "town 1.0 0.0").unwrap();
    writeln!(model, "city 0.9 0.1").unwrap();
    let yaml = format!(
        "steps:\n  - operator: augment.embedding\n    config:\n      path: payload.text\n      model_path: {}\n      exhaustive: true\n      top_n: 1\n",
        model.path().display()
    );
    let pipeline = ZiPipelineBuilder::with_defaults().build_from_yaml(&yaml).unwrap();
    let out = pipeline.run(records()).unwrap();
    assert_eq!(out[0].payload["text"], json!("john is going to city"));
}

#[test]
fn factory_errors_name_the_failing_step() {
    let steps = vec![json!({
        "operator": "augment.wordnet",
        "config": {"path": "payload.text", "thesaurus_path": "/nonexistent/thesaurus.tsv"}
    })];
    let err = ZiPipelineBuilder::with_defaults().build_from_config(&steps).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("augment.wordnet"), "{message}");
}

#[test]
fn probability_out_of_range_is_rejected_at_build_time() {
    let thesaurus = thesaurus_file();
    let steps = vec![json!({
        "operator": "augment.eda",
        "config": {
            "path": "payload.text",
            "method": "random_deletion",
            "p": 1.5,
            "thesaurus_path": thesaurus.path().to_str().unwrap(),
        }
    })];
    assert!(ZiPipelineBuilder::with_defaults().build_from_config(&steps).is_err());
}
