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


use ndarray::{array, Array2, Axis};
use proptest::prelude::*;
use zita::augment::{ZiMixup, ZiMixupConfig};

#[test]
fn flow_yields_ceil_batches_per_epoch() {
    let mut mixup = ZiMixup::new(ZiMixupConfig::default()).unwrap();
    let data = Array2::from_shape_fn((100, 2), |(i, j)| (i + j) as f64);
    let mut flow = mixup.flow(data, None, 32, true, 1).unwrap();
    assert_eq!(flow.batches_per_epoch(), 4);

    let sizes: Vec<usize> = flow.by_ref().take(4).map(|batch| batch.data.nrows()).collect();
    assert_eq!(sizes, vec![32, 32, 32, 4]);
    assert_eq!(flow.epoch(), 1);

    let next = flow.next().unwrap();
    assert_eq!(next.data.nrows(), 32);
}

#[test]
fn flow_mixes_labels_alongside_data() {
    let mut mixup = ZiMixup::new(ZiMixupConfig::default()).unwrap();
    let data = Array2::from_shape_fn((10, 3), |(i, _)| i as f64);
    let labels = Array2::from_shape_fn((10, 2), |(i, j)| if i % 2 == j { 1.0 } else { 0.0 });
    let mut flow = mixup.flow(data, Some(labels), 4, false, 2).unwrap();
    let batch = flow.next().unwrap();
    assert_eq!(batch.data.nrows(), 8);
    assert_eq!(batch.labels.as_ref().unwrap().nrows(), 8);
    assert_eq!(batch.lambdas.len(), 8);
}

#[test]
fn flow_rejects_mismatched_labels() {
    let mut mixup = ZiMixup::new(ZiMixupConfig::default()).unwrap();
    let err = mixup
        .flow(Array2::zeros((4, 2)), Some(Array2::zeros((3, 1))), 2, true, 1)
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn identical_rows_are_fixed_points() {
    let mut mixup = ZiMixup::new(ZiMixupConfig::default().alpha(0.7)).unwrap();
    let x = array![[2.0, -1.0], [2.0, -1.0], [2.0, -1.0]];
    let batch = mixup.mixup_data(x.view(), None).unwrap();
    for row in batch.data.rows() {
        assert!((row[0] - 2.0).abs() < 1e-12 && (row[1] + 1.0).abs() < 1e-12);
    }
}

proptest! {
    #[test]
    fn rows_are_convex_combinations_of_input_rows(
        rows in 1usize..12,
        alpha in 0.1f64..4.0,
        seed in any::<u64>(),
    ) {
        let x = Array2::from_shape_fn((rows, 2), |(i, j)| ((i * 7 + j * 3) % 11) as f64);
        let mut mixup = ZiMixup::new(ZiMixupConfig::default().alpha(alpha).seed(seed)).unwrap();
        let batch = mixup.mixup_data(x.view(), None).unwrap();
        prop_assert_eq!(batch.data.nrows(), rows);

        for (out, lambda) in batch.data.axis_iter(Axis(0)).zip(batch.lambdas.iter()) {
            prop_assert!((0.0..=1.0).contains(lambda));
            let on_segment = x.axis_iter(Axis(0)).any(|xi| {
                x.axis_iter(Axis(0)).any(|xj| {
                    out.iter()
                        .zip(xi.iter().zip(xj.iter()))
                        .all(|(o, (a, b))| (o - (lambda * a + (1.0 - lambda) * b)).abs() < 1e-9)
                })
            });
            prop_assert!(on_segment);
        }
    }
}
