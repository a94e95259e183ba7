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

//! # Translation Backends
//!
//! [`ZiTranslator`] translates text between two language codes. Besides a
//! successful translation and a hard failure (`Err`), a backend can report
//! [`ZiTranslation::NotTranslated`] when it declined to change the text; the
//! round-trip augmenter treats that as a signal to try its fallback backend.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
#[cfg(feature = "http")]
use crate::errors::ZiError;

/// Outcome of a single translation call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZiTranslation {
    Translated(String),
    NotTranslated,
}

impl ZiTranslation {
    /// The translated text, or `original` when nothing was translated.
    #[allow(non_snake_case)]
    pub fn or_original(self, original: &str) -> String {
        match self {
            ZiTranslation::Translated(text) => text,
            ZiTranslation::NotTranslated => original.to_string(),
        }
    }
}

/// Translation contract consumed by the round-trip augmenter.
pub trait ZiTranslator: std::fmt::Debug {
    /// Short backend name used in logs and errors.
    fn name(&self) -> &str;

    fn translate(&self, text: &str, from: &str, to: &str) -> Result<ZiTranslation>;
}

/// Settings for [`ZiHttpTranslator`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiHttpTranslatorConfig {
    /// Service root; requests go to `{endpoint}/translate`.
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ZiHttpTranslatorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// Client for LibreTranslate-compatible JSON services.
///
/// Request: `{"q", "source", "target", "format": "text"}`; response:
/// `{"translatedText": "..."}`. A response that only echoes the input is
/// reported as [`ZiTranslation::NotTranslated`].
#[cfg(feature = "http")]
#[derive(Debug)]
pub struct ZiHttpTranslator {
    name: String,
    config: ZiHttpTranslatorConfig,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl ZiHttpTranslator {
    #[allow(non_snake_case)]
    pub fn new(name: impl Into<String>, config: ZiHttpTranslatorConfig) -> Result<Self> {
        if config.endpoint.trim().is_empty() {
            return Err(ZiError::validation("translator endpoint may not be empty"));
        }
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            name: name.into(),
            config,
            client,
        })
    }

    fn url(&self) -> String {
        format!("{}/translate", self.config.endpoint.trim_end_matches('/'))
    }
}

/// Interprets a translation service response body.
#[allow(non_snake_case)]
pub fn parse_translation_response(
    original: &str,
    body: &serde_json::Value,
) -> Option<ZiTranslation> {
    let translated = body.get("translatedText").and_then(|t| t.as_str())?;
    if translated.trim().to_lowercase() == original.trim().to_lowercase() {
        return Some(ZiTranslation::NotTranslated);
    }
    Some(ZiTranslation::Translated(translated.to_string()))
}

#[cfg(feature = "http")]
impl ZiTranslator for ZiHttpTranslator {
    fn name(&self) -> &str {
        &self.name
    }

    fn translate(&self, text: &str, from: &str, to: &str) -> Result<ZiTranslation> {
        let mut body = serde_json::Map::new();
        body.insert("q".to_string(), serde_json::Value::String(text.to_string()));
        body.insert("source".to_string(), serde_json::Value::String(from.to_string()));
        body.insert("target".to_string(), serde_json::Value::String(to.to_string()));
        body.insert("format".to_string(), serde_json::Value::String("text".to_string()));
        if let Some(api_key) = &self.config.api_key {
            body.insert("api_key".to_string(), serde_json::Value::String(api_key.clone()));
        }

        let response = self
            .client
            .post(self.url())
            .json(&body)
            .send()
            .map_err(|e| ZiError::backend(&self.name, format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(ZiError::backend(
                &self.name,
                format!("service returned {status}: {body}"),
            ));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| ZiError::backend(&self.name, format!("invalid response: {e}")))?;

        parse_translation_response(text, &json).ok_or_else(|| {
            ZiError::backend(&self.name, "response missing 'translatedText'")
        })
    }
}
