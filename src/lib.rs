//! # Perfect Rule Mining
//!
//! Exhaustive search for conjunctive threshold rules that classify a training
//! set without error, combined into a voting ensemble.
//!
//! Every rule is a conjunction of `n_conditions` tests `x[d] <= v` or
//! `x[d] > v`, where `v` is a value observed in dimension `d` of the
//! training data. A rule is *perfect* when all samples it matches share one
//! label and at least `min_evidence` samples match.
//!
//! # Features
//!
//! - `std` (default): Standard library support
//! - `parallel`: Parallel perfection scan and evaluation via rayon
//! - `serde`: Serialization support
//!
//! # Examples
//!
//! ```
//! use rulemine_rs::{MinerConfig, RuleEnsemble, Sample};
//!
//! let config = MinerConfig::builder().classes(2).conditions(1).build().unwrap();
//!
//! let samples = vec![
//!     Sample::new(vec![1.0], 0),
//!     Sample::new(vec![2.0], 1),
//!     Sample::new(vec![3.0], 1),
//! ];
//!
//! let ensemble = RuleEnsemble::fit(config, &samples).unwrap();
//!
//! assert_eq!(ensemble.predict(&[0.5]), Some(0));
//! assert_eq!(ensemble.predict(&[2.5]), Some(1));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod condition;
mod config;
mod domain;
mod ensemble;
pub mod error;
mod miner;
mod preprocess;
mod rule;
mod sample;
pub mod search;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use condition::{Condition, Direction};
pub use config::{MinerConfig, MinerConfigBuilder};
pub use domain::FeatureDomains;
pub use ensemble::RuleEnsemble;
pub use error::{Error, Result};
pub use miner::{RuleMiner, Tally, check_perfect};
pub use preprocess::FeatureMask;
pub use rule::Rule;
pub use sample::{Sample, validate_samples};
pub use search::{MineOptions, MineStats, Progress, ProgressCallback};
