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


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use zita::augment::{ZiTranslate, ZiTranslateConfig};
use zita::lexicon::{ZiTranslation, ZiTranslator};
use zita::{Result, ZiError};

/// Backend that never changes its input.
#[derive(Debug, Default)]
struct Identity {
    calls: Arc<AtomicUsize>,
}

impl ZiTranslator for Identity {
    fn name(&self) -> &str {
        "identity"
    }

    fn translate(&self, _text: &str, _from: &str, _to: &str) -> Result<ZiTranslation> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ZiTranslation::NotTranslated)
    }
}

/// Backend that tags its output with the target language.
#[derive(Debug)]
struct Tagging;

impl ZiTranslator for Tagging {
    fn name(&self) -> &str {
        "tagging"
    }

    fn translate(&self, text: &str, _from: &str, to: &str) -> Result<ZiTranslation> {
        Ok(ZiTranslation::Translated(format!("{text} [{to}]")))
    }
}

#[test]
fn identity_round_trip_returns_lowercased_input() {
    let translate = ZiTranslate::new(ZiTranslateConfig::new("en", "es"), Box::new(Identity::default())).unwrap();
    assert_eq!(translate.augment("He walks").unwrap(), "he walks");
}

#[test]
fn declined_primary_falls_back() {
    let calls = Arc::new(AtomicUsize::new(0));
    let primary = Identity { calls: calls.clone() };
    let translate = ZiTranslate::new(ZiTranslateConfig::new("en", "de"), Box::new(primary))
        .unwrap()
        .with_fallback(Box::new(Tagging));
    assert_eq!(translate.augment("He Walks").unwrap(), "he walks [de] [en]");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn translated_primary_skips_fallback() {
    let calls = Arc::new(AtomicUsize::new(0));
    let translate = ZiTranslate::new(ZiTranslateConfig::new("en", "fr"), Box::new(Tagging))
        .unwrap()
        .with_fallback(Box::new(Identity { calls: calls.clone() }));
    assert_eq!(translate.augment("hi").unwrap(), "hi [fr] [en]");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn config_requires_supported_languages() {
    let err = ZiTranslate::new(ZiTranslateConfig::new("en", "klingon"), Box::new(Tagging)).unwrap_err();
    assert!(matches!(err, ZiError::Validation { .. }));
    let err = ZiTranslate::new(ZiTranslateConfig::default(), Box::new(Tagging)).unwrap_err();
    assert!(err.is_validation());
}

#[cfg(feature = "http")]
#[test]
fn unreachable_http_backend_reports_backend_error() {
    use zita::lexicon::{ZiHttpTranslator, ZiHttpTranslatorConfig};

    let config = ZiHttpTranslatorConfig {
        endpoint: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
        ..Default::default()
    };
    let backend = ZiHttpTranslator::new("local", config).unwrap();
    let translate = ZiTranslate::new(ZiTranslateConfig::new("en", "es"), Box::new(backend)).unwrap();
    let err = translate.augment("he walks").unwrap_err();
    assert!(matches!(err, ZiError::Backend { .. }));
}
