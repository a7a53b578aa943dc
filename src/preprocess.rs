//! Removal of feature dimensions that never vary.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    Sample,
    error::{Error, Result}
};

/// # Overview
///
/// Selects the feature dimensions that take more than one value across a
/// training set. A constant dimension cannot separate any samples, so
/// dropping it shrinks the search space without losing rules.
///
/// The same mask must be applied to every vector later fed to the ensemble.
///
/// # Examples
///
/// ```
/// use rulemine_rs::{FeatureMask, Sample};
///
/// let samples = vec![
///     Sample::new(vec![0.0, 1.0, 7.0], 0),
///     Sample::new(vec![0.0, 2.0, 7.0], 1),
/// ];
/// let mask = FeatureMask::from_samples(&samples).unwrap();
///
/// assert_eq!(mask.kept(), &[1]);
/// assert_eq!(mask.apply(&[9.0, 3.0, 9.0]), vec![3.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FeatureMask {
    kept:       Vec<usize>,
    n_features: usize
}

impl FeatureMask {
    /// # Overview
    ///
    /// Builds the mask from training samples.
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        let first = samples.first().ok_or(Error::EmptyDataset)?;
        let n_features = first.n_features();

        if let Some(bad) = samples.iter().find(|s| s.n_features() != n_features) {
            return Err(Error::DimensionMismatch {
                expected: n_features,
                got:      bad.n_features()
            });
        }

        let kept = (0..n_features)
            .filter(|&i| {
                let reference = first.features[i];
                samples[1..].iter().any(|s| s.features[i] != reference)
            })
            .collect();

        Ok(Self {
            kept,
            n_features
        })
    }

    /// # Overview
    ///
    /// Indices of the dimensions that vary, ascending.
    #[inline(always)]
    pub fn kept(&self) -> &[usize] {
        &self.kept
    }

    /// # Overview
    ///
    /// Indices of the constant dimensions, ascending.
    pub fn removed(&self) -> Vec<usize> {
        (0..self.n_features)
            .filter(|i| self.kept.binary_search(i).is_err())
            .collect()
    }

    /// # Overview
    ///
    /// Vector length before masking.
    #[inline(always)]
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// # Overview
    ///
    /// Projects a vector onto the kept dimensions. Indices beyond the end of
    /// `x` are skipped.
    pub fn apply(&self, x: &[f32]) -> Vec<f32> {
        self.kept.iter().filter_map(|&i| x.get(i).copied()).collect()
    }

    /// # Overview
    ///
    /// Projects every sample, keeping labels.
    pub fn apply_samples(&self, samples: &[Sample]) -> Vec<Sample> {
        samples
            .iter()
            .map(|s| Sample::new(self.apply(&s.features), s.label))
            .collect()
    }
}
