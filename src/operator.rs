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

//! # Operators
//!
//! A [`ZiOperator`] maps a batch of records to a new batch. It may emit more
//! records than it receives; augmentation operators do so when the original
//! records are kept next to their augmented copies.

use crate::errors::{Result, ZiError};
use crate::record::ZiRecordBatch;

pub trait ZiOperator: std::fmt::Debug {
    /// Registry name, e.g. `augment.eda`.
    fn name(&self) -> &'static str;

    fn apply(&self, batch: ZiRecordBatch) -> Result<ZiRecordBatch>;
}

/// Applies `operator`, attributing any failure to it by name.
#[allow(non_snake_case)]
pub fn execute_operator(operator: &dyn ZiOperator, batch: ZiRecordBatch) -> Result<ZiRecordBatch> {
    operator
        .apply(batch)
        .map_err(|err| ZiError::operator(operator.name(), err.to_string()))
}
