//! Result types for permutation tests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Alternative;

/// Summary of a permutation test.
///
/// Produced by the permutation engine and its stratified variant. The
/// empirical p-value is a tail proportion of the null distribution and is
/// bounded below by `1 / replicates`; a reported value of exactly 0 means
/// "below the resolution of this replicate count", not a true zero
/// probability. Use [`TestResult::p_value_bound`] when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Statistic computed once on the unpermuted data.
    pub observed: f64,

    /// Mean of the null distribution.
    pub null_mean: f64,

    /// Bessel-corrected sample standard deviation of the null distribution.
    pub null_sd: f64,

    /// Standardized effect measure: `(observed - null_mean) / null_sd`.
    ///
    /// This is an effect-size-like quantity, not a probability.
    pub z_score: f64,

    /// Empirical tail proportion of the null distribution at least as
    /// extreme as the observed statistic, under `alternative`.
    pub p_value: f64,

    /// Number of replicates that built the null distribution.
    pub replicates: usize,

    /// Alternative hypothesis the p-value was computed under.
    pub alternative: Alternative,

    /// The full null distribution, in replicate order.
    ///
    /// Slot `i` was produced by replicate `i`, so two runs with the same
    /// seed yield identical vectors even under parallel execution.
    pub distribution: Vec<f64>,
}

impl TestResult {
    /// Whether the reported p-value is only a lower bound.
    ///
    /// True exactly when `p_value == 0`: no replicate reached the observed
    /// statistic, so the true p-value is only known to be below
    /// `1 / replicates`.
    pub fn is_p_bounded(&self) -> bool {
        self.p_value == 0.0
    }

    /// The p-value as a reportable upper bound.
    ///
    /// Returns `p_value` itself when it is positive, and `1 / replicates`
    /// when it is exactly 0.
    pub fn p_value_bound(&self) -> f64 {
        if self.is_p_bounded() {
            1.0 / self.replicates as f64
        } else {
            self.p_value
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "observed = {:.4}, z = {:.3}, ",
            self.observed, self.z_score
        )?;
        if self.is_p_bounded() {
            write!(f, "p < {:.4}", self.p_value_bound())?;
        } else {
            write!(f, "p = {:.4}", self.p_value)?;
        }
        write!(f, " ({} replicates)", self.replicates)
    }
}

/// Result of the hybrid significance test.
///
/// Each replicate records `indep_diff - perm_diff`: the group difference of
/// an independent (one observation per stratum per group) sample minus the
/// difference after randomly relabeling that same sample. A distribution
/// centered near zero, with `proportion_nonnegative` near 0.5, means the
/// independent-sample group difference is indistinguishable from relabeling
/// noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridResult {
    /// Mean of the replicate differences.
    pub mean: f64,

    /// Bessel-corrected sample standard deviation of the replicate
    /// differences (0 when only one replicate was requested).
    pub sd: f64,

    /// Proportion of replicates with `indep_diff - perm_diff >= 0`; the
    /// one-sided p-value of the procedure.
    pub proportion_nonnegative: f64,

    /// Number of replicates.
    pub replicates: usize,

    /// The full distribution of replicate differences, in replicate order.
    /// Histogram-ready.
    pub distribution: Vec<f64>,
}

impl fmt::Display for HybridResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean diff = {:.4}, sd = {:.4}, P(diff >= 0) = {:.3} ({} replicates)",
            self.mean, self.sd, self.proportion_nonnegative, self.replicates
        )
    }
}
