//! Rule - a conjunction of threshold conditions, enumerated as a
//! mixed-radix counter.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Condition, FeatureDomains};

/// # Overview
///
/// A conjunction `c0 AND c1 AND ...` of [`Condition`]s, optionally mapped to
/// the class label it predicts.
///
/// During search a single rule acts as a counter whose digits are its
/// conditions, slot 0 being least significant. Rules kept by the miner are
/// frozen copies carrying a label.
///
/// # Examples
///
/// ```
/// use rulemine_rs::{FeatureDomains, Rule};
///
/// let domains = FeatureDomains::from_values(vec![vec![1.0]]).unwrap();
/// let mut rule = Rule::first(2, &domains);
///
/// let mut visited = 1;
/// while !rule.advance(&domains) {
///     visited += 1;
/// }
/// assert_eq!(visited, 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rule {
    conditions: Vec<Condition>,
    label:      Option<usize>
}

impl Rule {
    /// # Overview
    ///
    /// Creates the first candidate: every slot at its minimum state.
    pub fn first(n_conditions: usize, domains: &FeatureDomains) -> Self {
        Self {
            conditions: (0..n_conditions).map(|_| Condition::first(domains)).collect(),
            label:      None
        }
    }

    /// # Overview
    ///
    /// Creates an unlabeled rule from explicit conditions.
    pub fn from_conditions(conditions: Vec<Condition>) -> Self {
        Self {
            conditions,
            label: None
        }
    }

    #[inline(always)]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[inline(always)]
    pub fn label(&self) -> Option<usize> {
        self.label
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// # Overview
    ///
    /// True iff every condition holds. Early exit on violation.
    #[inline]
    pub fn satisfies(&self, x: &[f32]) -> bool {
        self.conditions.iter().all(|c| c.satisfies(x))
    }

    /// # Overview
    ///
    /// Steps to the next candidate. Returns `true` once the carry ripples out
    /// of the most significant slot, i.e. the search space is exhausted and
    /// the rule is back at its first state.
    ///
    /// `domains` must be the ones the rule was seeded from.
    #[inline]
    pub fn advance(&mut self, domains: &FeatureDomains) -> bool {
        // `all` stops at the first digit that did not wrap
        self.conditions.iter_mut().all(|c| c.advance(domains))
    }

    /// # Overview
    ///
    /// Independent copy of the conditions without a label.
    pub fn snapshot(&self) -> Self {
        Self::from_conditions(self.conditions.clone())
    }

    /// # Overview
    ///
    /// Independent copy of the conditions mapped to `label`.
    pub fn frozen(&self, label: usize) -> Self {
        Self {
            conditions: self.conditions.clone(),
            label:      Some(label)
        }
    }

    /// # Overview
    ///
    /// Writes per-slot progress through the dimensions into `out`, one
    /// entry per condition.
    pub fn write_progress(&self, domains: &FeatureDomains, out: &mut [f32]) {
        for (slot, c) in out.iter_mut().zip(&self.conditions) {
            *slot = c.progress(domains);
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            write!(f, "TRUE")?;
        }
        for (i, c) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            write!(f, "({c})")?;
        }
        if let Some(label) = self.label {
            write!(f, " => {label}")?;
        }
        Ok(())
    }
}
