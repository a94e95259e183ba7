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

use serde_json::{Map, Value};

use crate::errors::{Result, ZiError};
use crate::record::ZiRecord;

/// Dot-delimited path into a record, rooted at `payload` or `metadata`.
///
/// `payload` alone addresses the whole payload; `metadata` paths need at
/// least one key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiFieldPath {
    root: ZiFieldRoot,
    keys: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ZiFieldRoot {
    Payload,
    Metadata,
}

impl ZiFieldPath {
    #[allow(non_snake_case)]
    pub fn parse(path: &str) -> Result<Self> {
        let mut segments = path
            .split('.')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string);

        let root = match segments.next().as_deref() {
            Some("payload") => ZiFieldRoot::Payload,
            Some("metadata") => ZiFieldRoot::Metadata,
            Some(_) => {
                return Err(ZiError::validation(format!(
                    "field path '{path}' must start with 'payload' or 'metadata'"
                )))
            }
            None => return Err(ZiError::validation("field path may not be empty")),
        };
        let keys: Vec<String> = segments.collect();
        if root == ZiFieldRoot::Metadata && keys.is_empty() {
            return Err(ZiError::validation("metadata paths must include at least one key"));
        }
        Ok(Self { root, keys })
    }

    #[allow(non_snake_case)]
    pub fn resolve<'a>(&self, record: &'a ZiRecord) -> Option<&'a Value> {
        let (mut current, rest) = match self.root {
            ZiFieldRoot::Payload => (&record.payload, self.keys.as_slice()),
            ZiFieldRoot::Metadata => {
                let (first, rest) = self.keys.split_first()?;
                (record.metadata.as_ref()?.get(first)?, rest)
            }
        };
        for key in rest {
            current = current.as_object()?.get(key)?;
        }
        Some(current)
    }

    /// Writes `value` at this path, creating intermediate objects. Returns
    /// `false` when a non-object value sits on the way.
    #[allow(non_snake_case)]
    pub fn set_value(&self, record: &mut ZiRecord, value: Value) -> bool {
        let map = match self.root {
            ZiFieldRoot::Payload => {
                if self.keys.is_empty() {
                    record.payload = value;
                    return true;
                }
                if !record.payload.is_object() {
                    record.payload = Value::Object(Map::new());
                }
                match record.payload.as_object_mut() {
                    Some(map) => map,
                    None => return false,
                }
            }
            ZiFieldRoot::Metadata => record.metadata_mut(),
        };
        insert_nested(map, &self.keys, value)
    }
}

fn insert_nested(map: &mut Map<String, Value>, keys: &[String], value: Value) -> bool {
    let Some((last, parents)) = keys.split_last() else {
        return false;
    };
    let mut current = map;
    for key in parents {
        let entry = current
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        current = match entry.as_object_mut() {
            Some(next) => next,
            None => return false,
        };
    }
    current.insert(last.clone(), value);
    true
}
