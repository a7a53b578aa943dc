//! Per-feature domains of distinct observed values.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    Sample,
    error::{Error, Result}
};

/// # Overview
///
/// Distinct values seen in each feature dimension of a training set, sorted
/// ascending. Every dimension holds at least one value.
///
/// Ordering is canonical (`f32::total_cmp`), so two domains built from the
/// same samples enumerate identically regardless of sample order.
///
/// # Examples
///
/// ```
/// use rulemine_rs::{FeatureDomains, Sample};
///
/// let samples = vec![
///     Sample::new(vec![3.0, 1.0], 0),
///     Sample::new(vec![1.0, 1.0], 1),
///     Sample::new(vec![3.0, 1.0], 1),
/// ];
/// let domains = FeatureDomains::from_samples(&samples).unwrap();
///
/// assert_eq!(domains.values(0), &[1.0, 3.0]);
/// assert_eq!(domains.values(1), &[1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FeatureDomains {
    values: Vec<Vec<f32>>
}

impl FeatureDomains {
    /// # Overview
    ///
    /// Collects the distinct values of every dimension.
    pub fn from_samples(samples: &[Sample]) -> Result<Self> {
        let first = samples.first().ok_or(Error::EmptyDataset)?;
        let n_dims = first.n_features();
        if n_dims == 0 {
            return Err(Error::EmptyFeatures);
        }

        let mut values: Vec<Vec<f32>> = (0..n_dims)
            .map(|_| Vec::with_capacity(samples.len()))
            .collect();
        for sample in samples {
            if sample.n_features() != n_dims {
                return Err(Error::DimensionMismatch {
                    expected: n_dims,
                    got:      sample.n_features()
                });
            }
            for (column, &v) in values.iter_mut().zip(&sample.features) {
                column.push(v);
            }
        }

        Self::from_values(values)
    }

    /// # Overview
    ///
    /// Builds domains from raw per-dimension values, sorting and removing
    /// duplicates.
    pub fn from_values(mut values: Vec<Vec<f32>>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::EmptyFeatures);
        }
        for column in &mut values {
            if column.is_empty() {
                return Err(Error::EmptyDataset);
            }
            column.sort_unstable_by(f32::total_cmp);
            // -0.0 and 0.0 sort adjacent and compare equal
            column.dedup_by(|a, b| a == b || a.total_cmp(b).is_eq());
            column.shrink_to_fit();
        }
        Ok(Self {
            values
        })
    }

    #[inline(always)]
    pub fn n_dims(&self) -> usize {
        self.values.len()
    }

    #[inline(always)]
    pub fn len(&self, dim: usize) -> usize {
        self.values[dim].len()
    }

    #[inline(always)]
    pub fn values(&self, dim: usize) -> &[f32] {
        &self.values[dim]
    }

    #[inline(always)]
    pub fn value(&self, dim: usize, pos: usize) -> f32 {
        self.values[dim][pos]
    }

    /// # Overview
    ///
    /// Number of distinct single conditions: two directions per value.
    pub fn radix(&self) -> u128 {
        self.values.iter().map(|c| 2 * c.len() as u128).sum()
    }

    /// # Overview
    ///
    /// Number of candidate rules with `n_conditions` slots, `None` on
    /// overflow.
    pub fn search_space(&self, n_conditions: usize) -> Option<u128> {
        let exp = u32::try_from(n_conditions).ok()?;
        self.radix().checked_pow(exp)
    }
}
