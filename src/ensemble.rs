//! Rule ensemble - perfect rules voting on new inputs.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{MinerConfig, Rule, RuleMiner, Sample, error::Result, search::MineStats};

/// # Overview
///
/// Perfect rules in discovery order, each voting for its label.
///
/// # Examples
///
/// ```
/// use rulemine_rs::{MinerConfig, RuleEnsemble, Sample};
///
/// let config = MinerConfig::builder().classes(3).conditions(2).build().unwrap();
/// let samples = vec![
///     Sample::new(vec![0.0, 1.0], 0),
///     Sample::new(vec![1.0, 1.0], 1),
///     Sample::new(vec![2.0, 0.0], 2),
/// ];
///
/// let ensemble = RuleEnsemble::fit(config, &samples).unwrap();
/// assert_eq!(ensemble.evaluate(&samples), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RuleEnsemble {
    rules:        Vec<Rule>,
    distribution: Vec<usize>,
    n_classes:    usize,
    stats:        MineStats
}

impl RuleEnsemble {
    /// # Overview
    ///
    /// Mines all perfect rules from `samples`. Shorthand for
    /// [`RuleMiner::mine`].
    pub fn fit(config: MinerConfig, samples: &[Sample]) -> Result<Self> {
        RuleMiner::new(config).mine(samples)
    }

    pub(crate) fn from_parts(
        n_classes: usize,
        rules: Vec<Rule>,
        distribution: Vec<usize>,
        stats: MineStats
    ) -> Self {
        Self {
            rules,
            distribution,
            n_classes,
            stats
        }
    }

    #[inline(always)]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// # Overview
    ///
    /// Number of kept rules per label.
    #[inline(always)]
    pub fn distribution(&self) -> &[usize] {
        &self.distribution
    }

    #[inline(always)]
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    #[inline(always)]
    pub fn stats(&self) -> &MineStats {
        &self.stats
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// # Overview
    ///
    /// Number of satisfied rules per label. Labels outside `n_classes` do
    /// not vote.
    pub fn class_votes(&self, x: &[f32]) -> Vec<usize> {
        let mut votes = vec![0usize; self.n_classes];
        for label in self
            .rules
            .iter()
            .filter(|r| r.satisfies(x))
            .filter_map(Rule::label)
        {
            if let Some(v) = votes.get_mut(label) {
                *v += 1;
            }
        }
        votes
    }

    /// # Overview
    ///
    /// Label with the most votes, lowest label on ties. `None` when no rule
    /// matches.
    pub fn predict(&self, x: &[f32]) -> Option<usize> {
        let mut best = None;
        let mut best_votes = 0;
        for (label, votes) in self.class_votes(x).into_iter().enumerate() {
            if votes > best_votes {
                best = Some(label);
                best_votes = votes;
            }
        }
        best
    }

    /// # Overview
    ///
    /// Batch prediction for multiple inputs.
    #[inline]
    pub fn predict_batch(&self, xs: &[Vec<f32>]) -> Vec<Option<usize>> {
        xs.iter().map(|x| self.predict(x)).collect()
    }

    /// # Overview
    ///
    /// Accuracy on labeled samples. Abstentions count as wrong.
    pub fn evaluate(&self, samples: &[Sample]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        let correct = samples
            .iter()
            .filter(|s| self.predict(&s.features) == Some(s.label))
            .count();
        correct as f32 / samples.len() as f32
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::{Condition, Direction, FeatureDomains};

    fn hand_built() -> RuleEnsemble {
        let d = FeatureDomains::from_values(vec![vec![1.0, 2.0]]).unwrap();
        let gt1 = Condition::new(&d, 0, 0, Direction::Greater).unwrap();
        let le2 = Condition::new(&d, 0, 1, Direction::LessEqual).unwrap();
        let gt2 = Condition::new(&d, 0, 1, Direction::Greater).unwrap();

        let rules = vec![
            Rule::from_conditions(vec![gt1]).frozen(2),
            Rule::from_conditions(vec![le2]).frozen(0),
            Rule::from_conditions(vec![gt2]).frozen(2),
        ];
        let stats = MineStats {
            candidates:   4,
            rules_found:  3,
            search_space: Some(4)
        };
        RuleEnsemble::from_parts(3, rules, vec![1, 0, 2], stats)
    }

    #[test]
    fn votes_per_label() {
        let e = hand_built();

        assert_eq!(e.class_votes(&[1.5]), vec![1, 0, 1]);
        assert_eq!(e.class_votes(&[3.0]), vec![0, 0, 2]);
        assert_eq!(e.class_votes(&[0.0]), vec![1, 0, 0]);
    }

    #[test]
    fn ties_go_to_lower_label() {
        let e = hand_built();
        assert_eq!(e.predict(&[1.5]), Some(0));
    }

    #[test]
    fn majority_wins() {
        let e = hand_built();
        assert_eq!(e.predict(&[3.0]), Some(2));
    }

    #[test]
    fn abstains_without_match() {
        let e = hand_built();
        assert_eq!(e.predict(&[]), None);
        assert_eq!(e.class_votes(&[]), vec![0, 0, 0]);
    }

    #[test]
    fn out_of_range_label_does_not_vote() {
        let d = FeatureDomains::from_values(vec![vec![1.0]]).unwrap();
        let gt = Condition::new(&d, 0, 0, Direction::Greater).unwrap();
        let rules = vec![
            Rule::from_conditions(vec![gt]).frozen(7),
            Rule::from_conditions(vec![gt]).frozen(1),
        ];
        let stats = MineStats {
            candidates:   2,
            rules_found:  2,
            search_space: Some(2)
        };
        let e = RuleEnsemble::from_parts(2, rules, vec![0, 1], stats);

        assert_eq!(e.class_votes(&[2.5]), vec![0, 1]);
        assert_eq!(e.predict(&[2.5]), Some(1));
    }

    #[test]
    fn evaluate_counts_abstain_as_wrong() {
        let e = hand_built();
        let samples = vec![
            Sample::new(vec![0.0], 0),
            Sample::new(vec![3.0], 2),
            Sample::new(vec![1.5], 2),
            Sample::new(vec![], 1),
        ];

        assert!((e.evaluate(&samples) - 0.5).abs() < 1e-6);
        assert_eq!(e.evaluate(&[]), 0.0);
    }

    #[test]
    fn batch_matches_single() {
        let e = hand_built();
        let xs = vec![vec![0.0], vec![1.5], vec![3.0]];

        assert_eq!(e.predict_batch(&xs), vec![Some(0), Some(0), Some(2)]);
    }
}
