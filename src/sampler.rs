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

//! # Geometric Sampler
//!
//! First-success selection over an ordered candidate sequence. Every
//! candidate runs an independent geometric trial with success probability
//! `p`; a candidate is selected when the trial succeeds on the very first
//! attempt (zero failures). In expectation a `p`-fraction of the candidates
//! is kept, in input order, without replacement.

use rand::Rng;
use rand_distr::{Distribution, Geometric};

use crate::errors::{Result, ZiError};
use crate::text::validate_probability;

#[derive(Clone, Copy, Debug)]
pub struct ZiGeometricSampler {
    p: f64,
    distribution: Geometric,
}

impl ZiGeometricSampler {
    /// Builds a sampler, rejecting `p` outside `[0, 1]`.
    #[allow(non_snake_case)]
    pub fn new(p: f64) -> Result<Self> {
        validate_probability("p", p)?;
        let distribution = Geometric::new(p).map_err(|err| {
            ZiError::validation(format!("invalid geometric parameter: {err}"))
        })?;
        Ok(Self { p, distribution })
    }

    #[allow(non_snake_case)]
    pub fn p(&self) -> f64 {
        self.p
    }

    fn first_trial<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        self.distribution.sample(rng) == 0
    }

    /// Positions in `0..len` whose trial succeeded first time.
    #[allow(non_snake_case)]
    pub fn select_indices<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Vec<usize> {
        (0..len).filter(|_| self.first_trial(rng)).collect()
    }

    /// The selected subsequence of `items`.
    #[allow(non_snake_case)]
    pub fn select<T: Clone, R: Rng + ?Sized>(&self, items: &[T], rng: &mut R) -> Vec<T> {
        items
            .iter()
            .filter(|_| self.first_trial(rng))
            .cloned()
            .collect()
    }
}
