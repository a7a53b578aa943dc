//! Error types for rule mining.

use core::fmt;

/// # Overview
///
/// Errors that can occur when configuring or running the rule miner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingClasses,
    InvalidConditionCount,
    InvalidEvidence,
    EmptyDataset,
    EmptyFeatures,
    DimensionMismatch { expected: usize, got: usize },
    LabelOutOfRange { label: usize, n_classes: usize },
    InvalidFolds { k_folds: usize, n_samples: usize },
    NoRulesFound,
    Cancelled { candidates: u64 }
}

impl Error {
    /// # Overview
    ///
    /// True for errors raised by eager validation, before any search starts.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::NoRulesFound | Self::Cancelled { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClasses => write!(f, "n_classes must be > 0"),
            Self::InvalidConditionCount => write!(f, "n_conditions must be >= 1"),
            Self::InvalidEvidence => write!(f, "min_evidence must be >= 1"),
            Self::EmptyDataset => write!(f, "dataset cannot be empty"),
            Self::EmptyFeatures => write!(f, "samples must have at least one feature"),
            Self::DimensionMismatch {
                expected,
                got
            } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::LabelOutOfRange {
                label,
                n_classes
            } => {
                write!(f, "label {label} out of range for {n_classes} classes")
            }
            Self::InvalidFolds {
                k_folds,
                n_samples
            } => {
                write!(f, "cannot split {n_samples} samples into {k_folds} folds")
            }
            Self::NoRulesFound => write!(f, "no perfect rules found"),
            Self::Cancelled {
                candidates
            } => {
                write!(f, "search cancelled after {candidates} candidates")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// # Overview
///
/// Result type for rule mining operations.
pub type Result<T> = core::result::Result<T, Error>;
