//! Main `PermutationOracle` entry point and builder.

use crate::analysis;
use crate::config::Config;
use crate::error::Result;
use crate::result::{HybridResult, TestResult};
use crate::sampler;
use crate::types::Alternative;

/// Main entry point for permutation testing.
///
/// Use the builder pattern to configure replicate count, seed, and
/// alternative, then run one of the tests. The oracle is cheap to clone and
/// holds no data; every test consumes caller-supplied aligned slices and
/// returns a fresh result record.
///
/// # Example
///
/// ```
/// use permutest::{Alternative, PermutationOracle};
///
/// let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let groups = vec!["A", "A", "A", "B", "B", "B"];
///
/// let result = PermutationOracle::new()
///     .replicates(1_000)
///     .seed(42)
///     .alternative(Alternative::Greater)
///     .group_difference_test(&x, &groups)
///     .unwrap();
///
/// assert_eq!(result.observed, 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PermutationOracle {
    config: Config,
}

impl PermutationOracle {
    /// Create with default configuration (1,000 replicates, entropy seed,
    /// two-sided).
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Set the replicate count for the null distribution.
    pub fn replicates(mut self, n: usize) -> Self {
        self.config.replicates = n;
        self
    }

    /// Set a deterministic seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the alternative hypothesis for the p-value.
    pub fn alternative(mut self, alternative: Alternative) -> Self {
        self.config.alternative = alternative;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Permutation test of association between two continuous variables.
    ///
    /// See [`analysis::correlation_test`].
    ///
    /// # Errors
    ///
    /// Propagates validation and degenerate-distribution errors.
    pub fn correlation_test(&self, x: &[f64], y: &[f64]) -> Result<TestResult> {
        analysis::correlation_test(x, y, &self.config)
    }

    /// Permutation test of a two-group difference in a numeric measure.
    ///
    /// See [`analysis::group_difference_test`].
    ///
    /// # Errors
    ///
    /// Propagates validation and degenerate-distribution errors.
    pub fn group_difference_test<L>(&self, x: &[f64], groups: &[L]) -> Result<TestResult>
    where
        L: PartialEq + Clone + Sync,
    {
        analysis::group_difference_test(x, groups, &self.config)
    }

    /// Within-stratum permutation test of a two-group difference.
    ///
    /// See [`analysis::stratified_group_test`].
    ///
    /// # Errors
    ///
    /// Propagates validation and degenerate-distribution errors.
    pub fn stratified_group_test<L, S>(
        &self,
        x: &[f64],
        groups: &[L],
        strata: &[S],
    ) -> Result<TestResult>
    where
        L: PartialEq + Clone + Sync,
        S: PartialEq + Clone,
    {
        analysis::stratified_group_test(x, groups, strata, &self.config)
    }

    /// Within-stratum permutation test of association between two
    /// continuous variables.
    ///
    /// See [`analysis::stratified_correlation_test`].
    ///
    /// # Errors
    ///
    /// Propagates validation and degenerate-distribution errors.
    pub fn stratified_correlation_test<S>(
        &self,
        x: &[f64],
        y: &[f64],
        strata: &[S],
    ) -> Result<TestResult>
    where
        S: PartialEq + Clone,
    {
        analysis::stratified_correlation_test(x, y, strata, &self.config)
    }

    /// Draw one equalized independent pair: one observation per stratum per
    /// group, larger side randomly subset to the smaller's length.
    ///
    /// Uses the oracle's seed when set. See
    /// [`analysis::draw_independent_pair`] and [`analysis::equalize_sizes`]
    /// for the unequalized building blocks with an explicit generator.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from the independent sampler.
    pub fn independent_pair<L, S>(
        &self,
        x: &[f64],
        groups: &[L],
        strata: &[S],
    ) -> Result<(Vec<f64>, Vec<f64>)>
    where
        L: PartialEq + Clone,
        S: PartialEq + Clone,
    {
        let mut rng = sampler::rng_from_seed(self.config.seed);
        let (a, b) = analysis::draw_independent_pair(&mut rng, x, groups, strata)?;
        Ok(analysis::equalize_sizes(&mut rng, a, b))
    }

    /// Hybrid significance test: independent subsampling plus relabeling
    /// permutation.
    ///
    /// See [`analysis::hybrid_test`].
    ///
    /// # Errors
    ///
    /// Propagates validation errors from the independent sampler.
    pub fn hybrid_test<L, S>(&self, x: &[f64], groups: &[L], strata: &[S]) -> Result<HybridResult>
    where
        L: PartialEq + Clone + Sync,
        S: PartialEq + Clone + Sync,
    {
        analysis::hybrid_test(x, groups, strata, &self.config)
    }
}
