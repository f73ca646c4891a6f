//! # permutest
//!
//! Permutation-based hypothesis testing with stratified resampling and
//! areal confound control.
//!
//! This crate provides the resampling machinery for two questions:
//! - Are two continuous variables associated beyond chance?
//! - Does a numeric measure differ between two categorical groups, once a
//!   geographic/areal confound is accounted for?
//!
//! Four procedures are exposed, from least to most structured:
//! - A generic **permutation test** that randomizes the dependent side and
//!   derives a null distribution of the statistic (correlation or
//!   difference of group means).
//! - A **stratified permutation test** that randomizes only within strata,
//!   preserving each stratum's marginal structure.
//! - An **independent sampler** drawing one observation per stratum per
//!   group to eliminate within-stratum dependence.
//! - A **hybrid test** that checks whether the independent-sample group
//!   difference exceeds what relabeling the same sample would produce.
//!
//! All randomness is seedable and flows through explicit generators; each
//! replicate derives its own counter-seeded substream, so results are
//! reproducible and (with the `parallel` feature) identical under parallel
//! execution.
//!
//! ## Common Pitfall: Sidedness Is Yours to Choose
//!
//! The alternative hypothesis is a caller decision, never inferred from the
//! data. A correlation test is conventionally two-sided; a directional
//! group comparison wants [`Alternative::Greater`] or
//! [`Alternative::Less`]. The sign of the group difference follows the
//! canonical first-occurrence order of the labels, so check which group
//! your data presents first.
//!
//! ## Quick Start
//!
//! ```
//! use permutest::{Alternative, PermutationOracle};
//!
//! let x = vec![2.3, 4.1, 1.8, 5.5, 3.0, 6.2, 2.9, 4.8];
//! let groups = vec!["sov", "sov", "sov", "svo", "svo", "svo", "sov", "svo"];
//!
//! let result = PermutationOracle::new()
//!     .replicates(1_000)
//!     .seed(42)
//!     .alternative(Alternative::Greater)
//!     .group_difference_test(&x, &groups)
//!     .unwrap();
//!
//! if result.is_p_bounded() {
//!     println!("p < {}", result.p_value_bound());
//! } else {
//!     println!("p = {}", result.p_value);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod oracle;
mod result;
mod types;

// Functional modules
pub mod analysis;
pub mod output;
pub mod sampler;
pub mod statistics;

// Re-exports for public API
pub use config::Config;
pub use error::{Error, Result};
pub use oracle::PermutationOracle;
pub use result::{HybridResult, TestResult};
pub use types::Alternative;
