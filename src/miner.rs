//! Exhaustive search for perfect rules.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use tracing::{debug, info, trace, warn};

use crate::{
    FeatureDomains, MinerConfig, Rule, RuleEnsemble, Sample,
    error::{Error, Result},
    sample::validate_samples,
    search::{MineOptions, MineStats, Progress}
};

/// # Overview
///
/// Running summary of the samples matched by a candidate: the label seen so
/// far and how many samples carried it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub label: Option<usize>,
    pub count: usize
}

impl Tally {
    #[inline]
    pub fn single(label: usize) -> Self {
        Self {
            label: Some(label),
            count: 1
        }
    }

    /// # Overview
    ///
    /// Adds one matching sample. `None` on a label conflict.
    #[inline]
    pub fn push(self, label: usize) -> Option<Self> {
        match self.label {
            Some(seen) if seen != label => None,
            _ => Some(Self {
                label: Some(label),
                count: self.count + 1
            })
        }
    }

    /// # Overview
    ///
    /// Combines two partial tallies. `None` on a label conflict.
    #[inline]
    pub fn merge(self, other: Self) -> Option<Self> {
        match (self.label, other.label) {
            (None, _) => Some(other),
            (_, None) => Some(self),
            (Some(a), Some(b)) if a == b => Some(Self {
                label: Some(a),
                count: self.count + other.count
            }),
            _ => None
        }
    }

    /// # Overview
    ///
    /// The label if at least `min_evidence` samples matched.
    #[inline]
    pub fn accept(self, min_evidence: usize) -> Option<usize> {
        self.label.filter(|_| self.count >= min_evidence)
    }
}

/// # Overview
///
/// Returns the label of `rule` if it is perfect: every matching sample shares
/// one label and at least `min_evidence` samples match. Stops scanning at the
/// first conflicting label.
///
/// # Examples
///
/// ```
/// use rulemine_rs::{Condition, Direction, FeatureDomains, Rule, Sample, check_perfect};
///
/// let samples = vec![Sample::new(vec![1.0], 0), Sample::new(vec![2.0], 1)];
/// let domains = FeatureDomains::from_samples(&samples).unwrap();
/// let c = Condition::new(&domains, 0, 0, Direction::Greater).unwrap();
///
/// assert_eq!(check_perfect(&Rule::from_conditions(vec![c]), &samples, 1), Some(1));
/// assert_eq!(check_perfect(&Rule::from_conditions(vec![c]), &samples, 2), None);
/// ```
pub fn check_perfect(rule: &Rule, samples: &[Sample], min_evidence: usize) -> Option<usize> {
    samples
        .iter()
        .filter(|s| rule.satisfies(&s.features))
        .try_fold(Tally::default(), |tally, s| tally.push(s.label))?
        .accept(min_evidence)
}

#[cfg(feature = "parallel")]
#[inline]
fn scan(rule: &Rule, samples: &[Sample], min_evidence: usize, parallel: bool) -> Option<usize> {
    if parallel {
        crate::parallel::check_perfect_parallel(rule, samples, min_evidence)
    } else {
        check_perfect(rule, samples, min_evidence)
    }
}

#[cfg(not(feature = "parallel"))]
#[inline]
fn scan(rule: &Rule, samples: &[Sample], min_evidence: usize, _parallel: bool) -> Option<usize> {
    check_perfect(rule, samples, min_evidence)
}

/// # Overview
///
/// Enumerates every rule with `n_conditions` threshold conditions over the
/// training samples' observed values and keeps the perfect ones.
///
/// # Examples
///
/// ```
/// use rulemine_rs::{MinerConfig, RuleMiner, Sample};
///
/// let config = MinerConfig::builder().classes(2).build().unwrap();
/// let samples = vec![
///     Sample::new(vec![1.0], 0),
///     Sample::new(vec![2.0], 1),
///     Sample::new(vec![3.0], 1),
/// ];
///
/// let ensemble = RuleMiner::new(config).mine(&samples).unwrap();
/// assert_eq!(ensemble.predict(&[0.5]), Some(0));
/// assert_eq!(ensemble.predict(&[2.5]), Some(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMiner {
    config: MinerConfig
}

impl RuleMiner {
    #[inline]
    pub fn new(config: MinerConfig) -> Self {
        Self {
            config
        }
    }

    #[inline]
    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// # Overview
    ///
    /// Runs the full search with default options.
    pub fn mine(&self, samples: &[Sample]) -> Result<RuleEnsemble> {
        self.mine_with(samples, MineOptions::default())
    }

    /// # Overview
    ///
    /// Runs the full search, reporting progress through `options`.
    ///
    /// Fails eagerly on invalid input, with [`Error::Cancelled`] if the
    /// callback stops the search and with [`Error::NoRulesFound`] if no
    /// candidate is perfect.
    pub fn mine_with(&self, samples: &[Sample], mut options: MineOptions) -> Result<RuleEnsemble> {
        let MinerConfig {
            n_classes,
            n_conditions,
            min_evidence
        } = self.config;
        self.config.validate()?;
        validate_samples(samples, n_classes)?;

        let domains = FeatureDomains::from_samples(samples)?;
        let search_space = domains.search_space(n_conditions);
        debug!(
            samples = samples.len(),
            dims = domains.n_dims(),
            n_conditions,
            min_evidence,
            ?search_space,
            "starting rule search"
        );

        let mut cursor = Rule::first(n_conditions, &domains);
        let mut rules = Vec::new();
        let mut distribution = vec![0usize; n_classes];
        let mut slot_progress = vec![0f32; n_conditions];
        let mut candidates = 0u64;

        loop {
            candidates += 1;

            if let Some(label) = scan(&cursor, samples, min_evidence, options.parallel_scan) {
                rules.push(cursor.frozen(label));
                distribution[label] += 1;
            }

            if options.report_every > 0 && candidates % options.report_every == 0 {
                if let Some(callback) = options.callback.as_mut() {
                    cursor.write_progress(&domains, &mut slot_progress);
                    let progress = Progress {
                        candidates,
                        rules_found: rules.len(),
                        slot_progress: &slot_progress,
                        distribution: &distribution
                    };
                    trace!(candidates, rules_found = rules.len(), "search progress");
                    if !callback(&progress) {
                        warn!(candidates, "rule search cancelled");
                        return Err(Error::Cancelled {
                            candidates
                        });
                    }
                }
            }

            if cursor.advance(&domains) {
                break;
            }
        }

        if rules.is_empty() {
            warn!(candidates, min_evidence, "no perfect rules found");
            return Err(Error::NoRulesFound);
        }

        info!(
            candidates,
            rules_found = rules.len(),
            ?distribution,
            "rule search complete"
        );
        let stats = MineStats {
            candidates,
            rules_found: rules.len(),
            search_space
        };
        Ok(RuleEnsemble::from_parts(n_classes, rules, distribution, stats))
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::{Condition, Direction};

    fn scenario() -> Vec<Sample> {
        vec![
            Sample::new(vec![1.0], 0),
            Sample::new(vec![2.0], 1),
            Sample::new(vec![3.0], 1),
        ]
    }

    fn rule(domains: &FeatureDomains, dim: usize, pos: usize, direction: Direction) -> Rule {
        Rule::from_conditions(vec![Condition::new(domains, dim, pos, direction).unwrap()])
    }

    #[test]
    fn tally_push_and_conflict() {
        let t = Tally::default().push(2).unwrap().push(2).unwrap();
        assert_eq!(t, Tally {
            label: Some(2),
            count: 2
        });
        assert_eq!(t.push(1), None);
    }

    #[test]
    fn tally_merge() {
        let a = Tally::single(1);
        let b = Tally::single(1).push(1).unwrap();

        assert_eq!(a.merge(b).map(|t| t.count), Some(3));
        assert_eq!(Tally::default().merge(a), Some(a));
        assert_eq!(a.merge(Tally::single(0)), None);
    }

    #[test]
    fn tally_accept_requires_match() {
        assert_eq!(Tally::default().accept(1), None);
        assert_eq!(Tally::single(4).accept(1), Some(4));
        assert_eq!(Tally::single(4).accept(2), None);
    }

    #[test]
    fn perfect_rules_in_scenario() {
        let samples = scenario();
        let d = FeatureDomains::from_samples(&samples).unwrap();

        assert_eq!(check_perfect(&rule(&d, 0, 0, Direction::LessEqual), &samples, 1), Some(0));
        assert_eq!(check_perfect(&rule(&d, 0, 0, Direction::Greater), &samples, 1), Some(1));
        assert_eq!(check_perfect(&rule(&d, 0, 0, Direction::Greater), &samples, 3), None);
        // matches 1.0 and 2.0: mixed labels
        assert_eq!(check_perfect(&rule(&d, 0, 1, Direction::LessEqual), &samples, 1), None);
        // matches nothing
        assert_eq!(check_perfect(&rule(&d, 0, 2, Direction::Greater), &samples, 1), None);
    }

    #[test]
    fn mine_scenario() {
        let config = MinerConfig::builder().classes(2).build().unwrap();
        let ensemble = RuleMiner::new(config).mine(&scenario()).unwrap();

        // x<=1 -> 0, x>1 -> 1, x>2 -> 1, x<=3 mixed, x<=2 mixed, x>3 empty
        assert_eq!(ensemble.len(), 3);
        assert_eq!(ensemble.distribution(), &[1, 2]);
        assert_eq!(ensemble.stats().candidates, 6);
        assert_eq!(ensemble.stats().search_space, Some(6));
        assert_eq!(ensemble.rules()[0].label(), Some(1));
        assert_eq!(ensemble.rules()[1].label(), Some(0));
    }

    #[test]
    fn unreachable_evidence() {
        let config = MinerConfig::builder().classes(2).min_evidence(4).build().unwrap();
        let result = RuleMiner::new(config).mine(&scenario());
        assert_eq!(result.unwrap_err(), Error::NoRulesFound);
    }

    #[test]
    fn invalid_input_is_eager() {
        let config = MinerConfig::builder().classes(2).build().unwrap();
        let miner = RuleMiner::new(config);

        assert_eq!(miner.mine(&[]).unwrap_err(), Error::EmptyDataset);

        let ragged = vec![Sample::new(vec![1.0, 2.0], 0), Sample::new(vec![1.0], 1)];
        assert!(matches!(
            miner.mine(&ragged),
            Err(Error::DimensionMismatch { .. })
        ));

        let bad_label = vec![Sample::new(vec![1.0], 2)];
        assert!(matches!(
            miner.mine(&bad_label),
            Err(Error::LabelOutOfRange { .. })
        ));
    }

    #[test]
    fn unvalidated_config_rejected() {
        let config = MinerConfig {
            n_classes:    2,
            n_conditions: 0,
            min_evidence: 1
        };
        let result = RuleMiner::new(config).mine(&scenario());
        assert_eq!(result.unwrap_err(), Error::InvalidConditionCount);
    }

    #[test]
    fn callback_cancels() {
        let config = MinerConfig::builder().classes(2).conditions(2).build().unwrap();
        let opts = MineOptions::new().report_every(5).with_callback(|p| p.candidates < 10);

        let result = RuleMiner::new(config).mine_with(&scenario(), opts);
        assert_eq!(result.unwrap_err(), Error::Cancelled {
            candidates: 10
        });
    }

    #[test]
    fn callback_sees_progress() {
        use std::sync::{
            Arc,
            atomic::{AtomicUsize, Ordering}
        };

        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let config = MinerConfig::builder().classes(2).conditions(2).build().unwrap();
        let opts = MineOptions::new().report_every(6).with_callback(move |p| {
            assert_eq!(p.slot_progress.len(), 2);
            assert!(p.slot_progress.iter().all(|f| (0.0..1.0).contains(f)));
            assert_eq!(p.distribution.len(), 2);
            seen.fetch_add(1, Ordering::Relaxed);
            true
        });

        let ensemble = RuleMiner::new(config).mine_with(&scenario(), opts).unwrap();
        assert_eq!(ensemble.stats().candidates, 36);
        assert_eq!(calls.load(Ordering::Relaxed), 6);
    }
}
