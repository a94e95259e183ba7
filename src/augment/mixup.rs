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

//! # Batch Mixup
//!
//! Zhang et al. (2018), "mixup: Beyond Empirical Risk Minimization". Each row
//! is blended with a randomly permuted partner row:
//!
//! ```text
//! mixed[i] = λ[i]·x[i] + (1 - λ[i])·x[π(i)],   λ[i] ~ Beta(α, α)
//! ```
//!
//! Labels, when given, are blended with the same λ and π. [`ZiMixupFlow`]
//! turns a dataset into an endless stream of mixed mini-batches.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution};
use serde::{Deserialize, Serialize};

use super::seeded_rng;
use crate::errors::{Result, ZiError};

/// Beta shape, run count and seed for [`ZiMixup`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiMixupConfig {
    /// Beta distribution shape, shared by both parameters.
    pub alpha: f64,
    pub runs: usize,
    pub seed: u64,
}

impl Default for ZiMixupConfig {
    fn default() -> Self {
        Self {
            alpha: 0.2,
            runs: 1,
            seed: 1,
        }
    }
}

impl ZiMixupConfig {
    #[allow(non_snake_case)]
    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    #[allow(non_snake_case)]
    pub fn runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    #[allow(non_snake_case)]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[allow(non_snake_case)]
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ZiError::validation(format!(
                "mixup 'alpha' must be a positive number, got {}",
                self.alpha
            )));
        }
        if self.runs == 0 {
            return Err(ZiError::validation("mixup 'runs' must be at least 1"));
        }
        Ok(())
    }
}

/// Output of one mixup call. With `runs > 1` the per-run results are stacked
/// along the row axis.
#[derive(Clone, Debug, PartialEq)]
pub struct ZiMixedBatch {
    pub data: Array2<f64>,
    pub labels: Option<Array2<f64>>,
    pub lambdas: Array1<f64>,
}

/// Mixup augmenter for row-major feature batches.
#[derive(Debug)]
pub struct ZiMixup {
    config: ZiMixupConfig,
    beta: Beta<f64>,
    rng: StdRng,
}

impl ZiMixup {
    #[allow(non_snake_case)]
    pub fn new(config: ZiMixupConfig) -> Result<Self> {
        config.validate()?;
        let beta = Beta::new(config.alpha, config.alpha)
            .map_err(|err| ZiError::validation(format!("invalid mixup alpha: {err}")))?;
        let rng = seeded_rng(Some(config.seed));
        Ok(Self { config, beta, rng })
    }

    #[allow(non_snake_case)]
    pub fn config(&self) -> &ZiMixupConfig {
        &self.config
    }

    /// Mixes `x` (and `y`, row-aligned with `x`) `runs` times.
    #[allow(non_snake_case)]
    pub fn mixup_data(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: Option<ArrayView2<'_, f64>>,
    ) -> Result<ZiMixedBatch> {
        check_rows(&x, y.as_ref())?;
        Ok(self.mix(x, y, self.beta, self.config.runs))
    }

    /// Like [`mixup_data`](Self::mixup_data) but draws λ from
    /// `Beta(alpha, alpha)` for this call only.
    #[allow(non_snake_case)]
    pub fn mixup_data_with_alpha(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: Option<ArrayView2<'_, f64>>,
        alpha: f64,
    ) -> Result<ZiMixedBatch> {
        ZiMixupConfig {
            alpha,
            ..self.config.clone()
        }
        .validate()?;
        check_rows(&x, y.as_ref())?;
        let beta = Beta::new(alpha, alpha)
            .map_err(|err| ZiError::validation(format!("invalid mixup alpha: {err}")))?;
        Ok(self.mix(x, y, beta, self.config.runs))
    }

    fn mix(
        &mut self,
        x: ArrayView2<'_, f64>,
        y: Option<ArrayView2<'_, f64>>,
        beta: Beta<f64>,
        runs: usize,
    ) -> ZiMixedBatch {
        let rows = x.nrows();
        let mut data = Array2::zeros((rows * runs, x.ncols()));
        let mut labels = y.as_ref().map(|y| Array2::zeros((rows * runs, y.ncols())));
        let mut lambdas = Array1::zeros(rows * runs);

        let mut partners: Vec<usize> = (0..rows).collect();
        for run in 0..runs {
            partners.shuffle(&mut self.rng);
            for (i, &j) in partners.iter().enumerate() {
                let out = run * rows + i;
                let lambda = beta.sample(&mut self.rng);
                lambdas[out] = lambda;
                data.row_mut(out)
                    .assign(&(&x.row(i) * lambda + &x.row(j) * (1.0 - lambda)));
                if let (Some(y), Some(labels)) = (y.as_ref(), labels.as_mut()) {
                    labels
                        .row_mut(out)
                        .assign(&(&y.row(i) * lambda + &y.row(j) * (1.0 - lambda)));
                }
            }
        }

        ZiMixedBatch {
            data,
            labels,
            lambdas,
        }
    }

    /// Endless mini-batch stream over `data`. The flow owns its own random
    /// state derived from this augmenter.
    #[allow(non_snake_case)]
    pub fn flow(
        &mut self,
        data: Array2<f64>,
        labels: Option<Array2<f64>>,
        batch_size: usize,
        shuffle: bool,
        runs: usize,
    ) -> Result<ZiMixupFlow> {
        if data.nrows() == 0 {
            return Err(ZiError::validation("mixup flow needs at least one row"));
        }
        if batch_size == 0 {
            return Err(ZiError::validation("mixup flow 'batch_size' must be at least 1"));
        }
        if runs == 0 {
            return Err(ZiError::validation("mixup flow 'runs' must be at least 1"));
        }
        check_rows(&data.view(), labels.as_ref().map(|l| l.view()).as_ref())?;

        let mixup = ZiMixup {
            config: self.config.clone().runs(runs),
            beta: self.beta,
            rng: StdRng::seed_from_u64(self.rng.gen()),
        };
        let order = (0..data.nrows()).collect();
        Ok(ZiMixupFlow {
            rng: StdRng::seed_from_u64(self.rng.gen()),
            mixup,
            data,
            labels,
            order,
            batch_size,
            shuffle,
            cursor: 0,
            epoch: 0,
        })
    }
}

fn check_rows(x: &ArrayView2<'_, f64>, y: Option<&ArrayView2<'_, f64>>) -> Result<()> {
    match y {
        Some(y) if y.nrows() != x.nrows() => Err(ZiError::validation(format!(
            "labels have {} rows but data has {}",
            y.nrows(),
            x.nrows()
        ))),
        _ => Ok(()),
    }
}

/// Iterator over mixed mini-batches. Wraps around at the end of each epoch,
/// reshuffling first when `shuffle` is set.
#[derive(Debug)]
pub struct ZiMixupFlow {
    rng: StdRng,
    mixup: ZiMixup,
    data: Array2<f64>,
    labels: Option<Array2<f64>>,
    order: Vec<usize>,
    batch_size: usize,
    shuffle: bool,
    cursor: usize,
    epoch: usize,
}

impl ZiMixupFlow {
    /// `ceil(rows / batch_size)`.
    #[allow(non_snake_case)]
    pub fn batches_per_epoch(&self) -> usize {
        self.data.nrows().div_ceil(self.batch_size)
    }

    /// Number of completed epochs.
    #[allow(non_snake_case)]
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    /// Abandons the current epoch; the next batch starts a fresh one.
    #[allow(non_snake_case)]
    pub fn reset(&mut self) {
        if self.cursor != 0 {
            self.cursor = 0;
            self.epoch += 1;
        }
    }
}

impl Iterator for ZiMixupFlow {
    type Item = ZiMixedBatch;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == 0 && self.shuffle {
            self.order.shuffle(&mut self.rng);
        }

        let start = self.cursor * self.batch_size;
        let end = (start + self.batch_size).min(self.order.len());
        let rows = &self.order[start..end];
        let x = self.data.select(Axis(0), rows);
        let y = self.labels.as_ref().map(|labels| labels.select(Axis(0), rows));

        self.cursor += 1;
        if self.cursor == self.batches_per_epoch() {
            self.cursor = 0;
            self.epoch += 1;
        }

        let runs = self.mixup.config.runs;
        Some(self.mixup.mix(x.view(), y.as_ref().map(|y| y.view()), self.mixup.beta, runs))
    }
}
