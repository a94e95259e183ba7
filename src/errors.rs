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

//! # Zita Error Module
//!
//! This module defines the error types used throughout Zita.
//!
//! ## Error Categories
//!
//! - **Validation**: Malformed configuration or arguments (out-of-range
//!   probability, blank sentence, unsupported language code). Raised before
//!   any augmentation side effect.
//! - **NotFound**: A required resource such as an embedding model or a
//!   thesaurus file is missing. Raised at construction time.
//! - **Backend**: A collaborator (translation service, model loader) failed
//!   beyond its documented soft-failure outcome.
//! - **Io / Serde**: Filesystem and serialization failures.
//! - **Operator / Pipeline**: Failures raised while running record operators.
//! - **Internal**: Unexpected internal failures.
//!
//! Lookup misses (a token absent from a thesaurus or embedding vocabulary)
//! are not errors; augmenters degrade to a no-op for that token.
//!
//! ## Usage
//!
//! ```rust
//! use zita::errors::{Result, ZiError};
//!
//! fn check(p: f64) -> Result<()> {
//!     if !(0.0..=1.0).contains(&p) {
//!         return Err(ZiError::validation("p must be a fraction between 0 and 1"));
//!     }
//!     Ok(())
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Zita.
pub type Result<T> = std::result::Result<T, ZiError>;

/// Canonical error enumeration for Zita.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum ZiError {
    /// Errors originating from filesystem or network IO.
    #[error("io error: {0}")]
    Io(String),

    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// A required resource (model, thesaurus file) does not exist.
    #[error("resource not found: {resource}")]
    NotFound { resource: String },

    /// Failure reported by an external collaborator.
    #[error("backend '{backend}' failed: {message}")]
    Backend { backend: String, message: String },

    /// Any failure raised by an operator implementation.
    #[error("operator '{operator}' failed: {message}")]
    Operator { operator: String, message: String },

    /// Failures that occur while orchestrating a pipeline.
    #[error("pipeline error at stage '{stage}': {message}")]
    Pipeline { stage: String, message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for ZiError {
    fn from(err: io::Error) -> Self {
        ZiError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ZiError {
    fn from(err: serde_json::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZiError {
    fn from(err: serde_yaml::Error) -> Self {
        ZiError::Serde(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for ZiError {
    fn from(err: reqwest::Error) -> Self {
        ZiError::backend("http", err.to_string())
    }
}

impl ZiError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        ZiError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct missing-resource errors.
    pub fn not_found<T: Into<String>>(resource: T) -> Self {
        ZiError::NotFound {
            resource: resource.into(),
        }
    }

    /// Helper to construct collaborator errors.
    pub fn backend(name: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Backend {
            backend: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct operator errors.
    pub fn operator(name: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Operator {
            operator: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct pipeline errors.
    pub fn pipeline(stage: impl Into<String>, message: impl Into<String>) -> Self {
        ZiError::Pipeline {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        ZiError::Internal(message.into())
    }

    /// Returns true for errors raised by argument or configuration checks.
    pub fn is_validation(&self) -> bool {
        matches!(self, ZiError::Validation { .. })
    }
}
