//! Configuration and builder for the rule miner.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// # Overview
///
/// Search parameters: number of classes, clauses per rule and the minimum
/// number of matching samples a perfect rule needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use]
pub struct MinerConfig {
    pub n_classes:    usize,
    pub n_conditions: usize,
    pub min_evidence: usize
}

impl MinerConfig {
    /// # Overview
    ///
    /// Creates a new MinerConfigBuilder.
    #[inline]
    #[must_use]
    pub fn builder() -> MinerConfigBuilder {
        MinerConfigBuilder::default()
    }

    /// # Overview
    ///
    /// Validates configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.n_classes == 0 {
            return Err(Error::MissingClasses);
        }
        if self.n_conditions == 0 {
            return Err(Error::InvalidConditionCount);
        }
        if self.min_evidence == 0 {
            return Err(Error::InvalidEvidence);
        }
        Ok(())
    }
}

/// # Overview
///
/// Builder for MinerConfig with validation.
#[derive(Debug, Default)]
pub struct MinerConfigBuilder {
    n_classes:    Option<usize>,
    n_conditions: Option<usize>,
    min_evidence: Option<usize>
}

impl MinerConfigBuilder {
    /// # Overview
    ///
    /// Sets the total number of class labels.
    pub fn classes(mut self, n: usize) -> Self {
        self.n_classes = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets conditions per rule (default: 1). The search space grows
    /// exponentially with this value.
    pub fn conditions(mut self, n: usize) -> Self {
        self.n_conditions = Some(n);
        self
    }

    /// # Overview
    ///
    /// Sets the minimum matching samples for a perfect rule (default: 1).
    pub fn min_evidence(mut self, n: usize) -> Self {
        self.min_evidence = Some(n);
        self
    }

    /// # Overview
    ///
    /// Builds and validates the MinerConfig.
    pub fn build(self) -> Result<MinerConfig> {
        let config = MinerConfig {
            n_classes:    self.n_classes.ok_or(Error::MissingClasses)?,
            n_conditions: self.n_conditions.unwrap_or(1),
            min_evidence: self.min_evidence.unwrap_or(1)
        };
        config.validate()?;
        Ok(config)
    }
}
