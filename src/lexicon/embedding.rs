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

//! # Embedding Neighborhoods
//!
//! [`ZiNearestNeighbors`] is the capability the embedding augmenters depend
//! on: a ranked list of (candidate, similarity) pairs for a token, or `None`
//! when the token is outside the vocabulary.
//!
//! [`ZiEmbeddingModel`] keeps unit-normalized word vectors in memory and
//! ranks neighbors by cosine similarity. Models load from the word2vec text
//! format (an optional `count dim` header, then `word v1 v2 ...` per line),
//! which both word2vec and fastText tooling can export.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::{Array2, ArrayView1, Axis};

use crate::errors::{Result, ZiError};

/// Nearest-neighbor lookup contract.
pub trait ZiNearestNeighbors {
    /// Up to `top_n` neighbors of `token`, most similar first.
    fn nearest(&self, token: &str, top_n: usize) -> Option<Vec<(String, f32)>>;
}

#[derive(Clone, Debug)]
pub struct ZiEmbeddingModel {
    words: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Array2<f32>,
}

impl ZiEmbeddingModel {
    /// Builds a model from (word, vector) pairs. All vectors must share one
    /// dimension; a repeated word keeps its first vector.
    #[allow(non_snake_case)]
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Vec<f32>)>,
    {
        let mut words = Vec::new();
        let mut index = HashMap::new();
        let mut flat = Vec::new();
        let mut dim = None;

        for (word, vector) in pairs {
            match dim {
                None => dim = Some(vector.len()),
                Some(d) if d != vector.len() => {
                    return Err(ZiError::validation(format!(
                        "embedding for '{word}' has dimension {}, expected {d}",
                        vector.len()
                    )));
                }
                _ => {}
            }
            if index.contains_key(&word) {
                continue;
            }
            index.insert(word.clone(), words.len());
            words.push(word);
            flat.extend(normalized(vector));
        }

        let dim = dim.unwrap_or(0);
        if dim == 0 && !words.is_empty() {
            return Err(ZiError::validation("embedding vectors may not be empty"));
        }
        let vectors = Array2::from_shape_vec((words.len(), dim), flat)
            .map_err(|err| ZiError::internal(format!("embedding matrix: {err}")))?;

        Ok(Self {
            words,
            index,
            vectors,
        })
    }

    /// Loads a word2vec text-format model. A missing file is reported as
    /// [`ZiError::NotFound`].
    #[allow(non_snake_case)]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ZiError::not_found(format!(
                "embedding model {}",
                path.display()
            )));
        }

        let model = Self::parse(BufReader::new(File::open(path)?))?;
        log::info!(
            "loaded embedding model {} ({} words, dim {})",
            path.display(),
            model.vocab_size(),
            model.dim()
        );
        Ok(model)
    }

    /// Parses word2vec text format from any reader.
    #[allow(non_snake_case)]
    pub fn parse<R: BufRead>(reader: R) -> Result<Self> {
        let mut pairs = Vec::new();
        let mut expected_dim = None;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.is_empty() {
                continue;
            }
            if idx == 0 && fields.len() == 2 {
                if let (Ok(_), Ok(dim)) = (fields[0].parse::<usize>(), fields[1].parse::<usize>()) {
                    expected_dim = Some(dim);
                    continue;
                }
            }

            let vector = fields[1..]
                .iter()
                .map(|value| value.parse::<f32>())
                .collect::<std::result::Result<Vec<f32>, _>>()
                .map_err(|err| {
                    ZiError::validation(format!("embedding line {}: {err}", idx + 1))
                })?;
            if let Some(dim) = expected_dim {
                if vector.len() != dim {
                    return Err(ZiError::validation(format!(
                        "embedding line {}: expected {dim} values, found {}",
                        idx + 1,
                        vector.len()
                    )));
                }
            }
            pairs.push((fields[0].to_string(), vector));
        }

        Self::from_pairs(pairs)
    }

    #[allow(non_snake_case)]
    pub fn vocab_size(&self) -> usize {
        self.words.len()
    }

    #[allow(non_snake_case)]
    pub fn dim(&self) -> usize {
        self.vectors.ncols()
    }

    #[allow(non_snake_case)]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Unit-normalized vector of `word`.
    #[allow(non_snake_case)]
    pub fn vector(&self, word: &str) -> Option<ArrayView1<'_, f32>> {
        self.index.get(word).map(|row| self.vectors.row(*row))
    }
}

fn normalized(vector: Vec<f32>) -> Vec<f32> {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm == 0.0 {
        return vector;
    }
    vector.into_iter().map(|v| v / norm).collect()
}

impl ZiNearestNeighbors for ZiEmbeddingModel {
    fn nearest(&self, token: &str, top_n: usize) -> Option<Vec<(String, f32)>> {
        let row = *self.index.get(token)?;
        let query = self.vectors.index_axis(Axis(0), row);
        let scores = self.vectors.dot(&query);

        let mut ranked: Vec<(usize, f32)> = scores
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != row)
            .map(|(idx, score)| (idx, *score))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        ranked.truncate(top_n);

        Some(
            ranked
                .into_iter()
                .map(|(idx, score)| (self.words[idx].clone(), score))
                .collect(),
        )
    }
}
