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

//! # Records
//!
//! [`ZiRecord`] is the unit the record operators work on: an optional id, a
//! JSON payload holding the text to augment, and optional metadata where
//! augmentation tags are written.
//!
//! ```rust
//! use serde_json::json;
//! use zita::record::ZiRecord;
//!
//! let mut record = ZiRecord::new(Some("r1".to_string()), json!({"text": "he walks"}));
//! record.metadata_mut().insert("source".to_string(), json!("corpus"));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Free-form key/value attributes attached to a record.
pub type ZiMetadata = Map<String, Value>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZiRecord {
    pub id: Option<String>,
    pub payload: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ZiMetadata>,
}

impl ZiRecord {
    #[allow(non_snake_case)]
    pub fn new(id: impl Into<Option<String>>, payload: Value) -> Self {
        ZiRecord {
            id: id.into(),
            payload,
            metadata: None,
        }
    }

    #[allow(non_snake_case)]
    pub fn with_metadata(mut self, metadata: ZiMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Metadata map, created empty on first access.
    #[allow(non_snake_case)]
    pub fn metadata_mut(&mut self) -> &mut ZiMetadata {
        self.metadata.get_or_insert_with(ZiMetadata::new)
    }
}

pub type ZiRecordBatch = Vec<ZiRecord>;
