//! Parallel perfection scan, prediction and evaluation using rayon.

use rayon::prelude::*;

use crate::{
    MinerConfig, Rule, RuleEnsemble, Sample,
    error::{Error, Result},
    miner::Tally
};

/// # Overview
///
/// Same outcome as [`crate::check_perfect`], with the sample scan split
/// across threads. Partial tallies merge and the reduction stops on the
/// first label conflict.
pub fn check_perfect_parallel(
    rule: &Rule,
    samples: &[Sample],
    min_evidence: usize
) -> Option<usize> {
    samples
        .par_iter()
        .filter(|s| rule.satisfies(&s.features))
        .map(|s| Some(Tally::single(s.label)))
        .try_reduce(Tally::default, Tally::merge)?
        .accept(min_evidence)
}

/// # Overview
///
/// Parallel prediction for multiple inputs.
pub fn predict_batch(ensemble: &RuleEnsemble, x: &[Vec<f32>]) -> Vec<Option<usize>> {
    x.par_iter().map(|xi| ensemble.predict(xi)).collect()
}

/// # Overview
///
/// Parallel accuracy. Abstentions count as wrong.
pub fn evaluate_parallel(ensemble: &RuleEnsemble, samples: &[Sample]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let correct: usize = samples
        .par_iter()
        .filter(|s| ensemble.predict(&s.features) == Some(s.label))
        .count();
    correct as f32 / samples.len() as f32
}

/// # Overview
///
/// K-fold cross-validation with parallel folds. Folds are contiguous in
/// dataset order; the last fold absorbs the remainder.
///
/// Fails if `k_folds` is zero or exceeds the sample count, or if any fold
/// fails to mine.
pub fn cross_validate(config: MinerConfig, samples: &[Sample], k_folds: usize) -> Result<Vec<f32>> {
    if samples.is_empty() {
        return Err(Error::EmptyDataset);
    }
    if k_folds == 0 || k_folds > samples.len() {
        return Err(Error::InvalidFolds {
            k_folds,
            n_samples: samples.len()
        });
    }
    let fold_size = samples.len() / k_folds;

    (0..k_folds)
        .into_par_iter()
        .map(|fold| {
            let test_start = fold * fold_size;
            let test_end = if fold == k_folds - 1 {
                samples.len()
            } else {
                test_start + fold_size
            };

            let train: Vec<Sample> = samples[..test_start]
                .iter()
                .chain(&samples[test_end..])
                .cloned()
                .collect();
            let test = &samples[test_start..test_end];

            RuleEnsemble::fit(config, &train).map(|e| e.evaluate(test))
        })
        .collect()
}
