//! Labeled feature vectors.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// # Overview
///
/// A feature vector with its class label.
///
/// # Examples
///
/// ```
/// use rulemine_rs::Sample;
///
/// let s = Sample::new(vec![0.5, 1.0], 2);
/// assert_eq!(s.n_features(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    pub features: Vec<f32>,
    pub label:    usize
}

impl Sample {
    #[inline]
    pub fn new(features: Vec<f32>, label: usize) -> Self {
        Self {
            features,
            label
        }
    }

    #[inline(always)]
    pub fn n_features(&self) -> usize {
        self.features.len()
    }
}

/// # Overview
///
/// Checks that a dataset is non-empty, has a constant non-zero vector length
/// and that every label is below `n_classes`. Returns the vector length.
pub fn validate_samples(samples: &[Sample], n_classes: usize) -> Result<usize> {
    let first = samples.first().ok_or(Error::EmptyDataset)?;
    let expected = first.n_features();
    if expected == 0 {
        return Err(Error::EmptyFeatures);
    }

    for sample in samples {
        if sample.n_features() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                got: sample.n_features()
            });
        }
        if sample.label >= n_classes {
            return Err(Error::LabelOutOfRange {
                label: sample.label,
                n_classes
            });
        }
    }
    Ok(expected)
}
