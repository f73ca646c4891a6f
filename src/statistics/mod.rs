//! Statistical primitives for permutation testing.
//!
//! This module provides the scalar statistics the engines resample:
//! - Descriptive statistics (mean, Bessel-corrected variance and SD)
//! - Pearson product-moment correlation
//! - Two-group partitioning and the difference-of-means statistic
//!
//! All functions are pure: they consume aligned real-valued sequences and
//! return one real scalar (or a validation error) with no side effects.

mod correlation;
mod descriptive;
mod group;

pub use correlation::correlation;
pub use descriptive::{mean, sample_std_dev, sample_variance};
pub use group::{difference_of_means, distinct_labels, partition_two, two_labels};

pub(crate) use correlation::correlation_unchecked;
pub(crate) use group::difference_with_labels;
