//! Two-group partitioning and the difference-of-means statistic.
//!
//! Group labels are compared by equality and are not required to be
//! ordered. The canonical group order is **first-occurrence order**: the
//! label seen first in the input slice is "group 1", the other is
//! "group 2", and the statistic is `mean(group 2) - mean(group 1)`.
//! Presenting the same data with the labels first encountered in the
//! opposite order therefore flips the sign of the statistic.

use crate::error::{Error, Result};

use super::descriptive::mean;

/// Distinct labels in first-occurrence order.
pub fn distinct_labels<L: PartialEq + Clone>(labels: &[L]) -> Vec<L> {
    let mut seen: Vec<L> = Vec::new();
    for label in labels {
        if !seen.contains(label) {
            seen.push(label.clone());
        }
    }
    seen
}

/// Validate that `labels` contains exactly two distinct values and return
/// them in canonical (first-occurrence) order.
///
/// # Errors
///
/// Returns [`Error::GroupCardinality`] for one or for three or more
/// distinct labels, and [`Error::EmptyInput`] for an empty slice.
pub fn two_labels<L: PartialEq + Clone>(labels: &[L]) -> Result<(L, L)> {
    if labels.is_empty() {
        return Err(Error::EmptyInput);
    }
    let seen = distinct_labels(labels);
    if seen.len() != 2 {
        return Err(Error::GroupCardinality { found: seen.len() });
    }
    let mut it = seen.into_iter();
    let first = it.next().ok_or(Error::EmptyInput)?;
    let second = it.next().ok_or(Error::EmptyInput)?;
    Ok((first, second))
}

/// Partition `x` into two subsets by label, in canonical order.
///
/// # Errors
///
/// Same validation as [`two_labels`], plus [`Error::LengthMismatch`] when
/// `x` and `labels` differ in length.
pub fn partition_two<L: PartialEq + Clone>(x: &[f64], labels: &[L]) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.len() != labels.len() {
        return Err(Error::LengthMismatch {
            left: x.len(),
            right: labels.len(),
        });
    }
    let (first, second) = two_labels(labels)?;
    let mut a = Vec::new();
    let mut b = Vec::new();
    for (value, label) in x.iter().zip(labels) {
        if *label == first {
            a.push(*value);
        } else if *label == second {
            b.push(*value);
        }
    }
    Ok((a, b))
}

/// Difference of group means: `mean(group 2) - mean(group 1)` under the
/// canonical first-occurrence group order.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if `x` and `labels` differ in length.
/// - [`Error::EmptyInput`] if the sequences are empty.
/// - [`Error::GroupCardinality`] if `labels` does not contain exactly two
///   distinct values. Both partitions are necessarily non-empty once the
///   cardinality check passes, since both labels were observed.
pub fn difference_of_means<L: PartialEq + Clone>(x: &[f64], labels: &[L]) -> Result<f64> {
    let (a, b) = partition_two(x, labels)?;
    Ok(mean(&b) - mean(&a))
}

/// Difference of means against a fixed pair of labels, for pre-validated
/// inputs.
///
/// Used inside replicate loops: a permutation of `labels` preserves the
/// label multiset, so both groups stay non-empty and the canonical order
/// fixed by the observed data stays in force.
pub(crate) fn difference_with_labels<L: PartialEq>(
    x: &[f64],
    labels: &[L],
    first: &L,
    second: &L,
) -> f64 {
    let mut sum_a = 0.0;
    let mut n_a = 0usize;
    let mut sum_b = 0.0;
    let mut n_b = 0usize;
    for (value, label) in x.iter().zip(labels) {
        if label == first {
            sum_a += value;
            n_a += 1;
        } else if label == second {
            sum_b += value;
            n_b += 1;
        }
    }
    debug_assert!(n_a > 0 && n_b > 0);
    sum_b / n_b as f64 - sum_a / n_a as f64
}
