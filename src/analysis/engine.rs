//! The generic permutation engine.
//!
//! The engine randomizes the relationship between two aligned variables by
//! permuting the second (dependent/grouping) sequence, recomputes the
//! statistic once per replicate, and summarizes the resulting null
//! distribution into a z-score and an empirical p-value.
//!
//! Replicate `i` always draws from its own generator seeded with
//! `counter_rng_seed(master, i)` and writes into slot `i` of a preallocated
//! distribution vector. Ordering is therefore collision-free and
//! reproducible, and the optional `parallel` path produces bit-identical
//! results to the sequential one.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::result::TestResult;
use crate::sampler::{self, counter_rng_seed};
use crate::statistics::{
    self, correlation, correlation_unchecked, difference_of_means, difference_with_labels,
    two_labels,
};
use crate::types::Alternative;

/// Build a null distribution of `replicates` statistics.
///
/// Each replicate runs `replicate_fn` with a generator derived from the
/// master seed and the replicate index, writing into its own slot.
pub(crate) fn null_distribution<F>(replicates: usize, master: u64, replicate_fn: F) -> Vec<f64>
where
    F: Fn(&mut Xoshiro256PlusPlus) -> f64 + Sync,
{
    let mut slots = vec![0.0f64; replicates];

    #[cfg(feature = "parallel")]
    {
        slots.par_iter_mut().enumerate().for_each(|(i, slot)| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(master, i as u64));
            *slot = replicate_fn(&mut rng);
        });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (i, slot) in slots.iter_mut().enumerate() {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(counter_rng_seed(master, i as u64));
            *slot = replicate_fn(&mut rng);
        }
    }

    slots
}

/// Summarize a null distribution against the observed statistic.
///
/// Derives the null mean, the Bessel-corrected null SD, the z-score, and
/// the empirical p-value under `alternative`.
///
/// # Errors
///
/// Returns [`Error::DegenerateDistribution`] when the null distribution has
/// zero spread (all replicates identical, or a single replicate), in which
/// case the z-score would be undefined.
pub(crate) fn summarize(
    observed: f64,
    distribution: Vec<f64>,
    alternative: Alternative,
) -> Result<TestResult> {
    let replicates = distribution.len();
    if replicates < 2 {
        return Err(Error::DegenerateDistribution { replicates });
    }

    let null_mean = statistics::mean(&distribution);
    let null_sd = statistics::sample_std_dev(&distribution);
    if null_sd == 0.0 {
        return Err(Error::DegenerateDistribution { replicates });
    }

    let extreme = distribution
        .iter()
        .filter(|&&r| alternative.at_least_as_extreme(r, observed))
        .count();

    Ok(TestResult {
        observed,
        null_mean,
        null_sd,
        z_score: (observed - null_mean) / null_sd,
        p_value: extreme as f64 / replicates as f64,
        replicates,
        alternative,
        distribution,
    })
}

/// Permutation test of association between two continuous variables.
///
/// Computes the Pearson correlation of `x` and `y` once, then builds a null
/// distribution by permuting `y` (the dependent side, by convention) and
/// recomputing the correlation for each replicate.
///
/// # Errors
///
/// Propagates validation errors from [`correlation`] and [`Config::validate`],
/// and [`Error::DegenerateDistribution`] when the null distribution has zero
/// spread.
pub fn correlation_test(x: &[f64], y: &[f64], config: &Config) -> Result<TestResult> {
    config.validate()?;
    // Validates lengths and variance; both are invariant under permutation,
    // so the replicate closure cannot fail.
    let observed = correlation(x, y)?;

    let master = sampler::master_seed(config.seed);
    let distribution = null_distribution(config.replicates, master, |rng| {
        let permuted_y = sampler::permuted(rng, y);
        correlation_unchecked(x, &permuted_y)
    });

    summarize(observed, distribution, config.alternative)
}

/// Permutation test of a group difference in a numeric measure.
///
/// Computes `mean(group 2) - mean(group 1)` once (canonical
/// first-occurrence group order), then builds a null distribution by
/// permuting the group labels and recomputing the difference for each
/// replicate.
///
/// # Errors
///
/// Propagates validation errors from [`difference_of_means`] and
/// [`Config::validate`], and [`Error::DegenerateDistribution`] when the
/// null distribution has zero spread.
pub fn group_difference_test<L>(x: &[f64], groups: &[L], config: &Config) -> Result<TestResult>
where
    L: PartialEq + Clone + Sync,
{
    config.validate()?;
    let observed = difference_of_means(x, groups)?;
    let (first, second) = two_labels(groups)?;

    let master = sampler::master_seed(config.seed);
    let distribution = null_distribution(config.replicates, master, |rng| {
        let permuted = sampler::permuted(rng, groups);
        difference_with_labels(x, &permuted, &first, &second)
    });

    summarize(observed, distribution, config.alternative)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_config(seed: u64) -> Config {
        Config {
            replicates: 500,
            seed: Some(seed),
            alternative: Alternative::TwoSided,
        }
    }

    #[test]
    fn same_seed_same_result() {
        let x: Vec<f64> = (0..40).map(|i| (i as f64 * 0.7).sin()).collect();
        let y: Vec<f64> = (0..40).map(|i| (i as f64 * 1.3).cos()).collect();
        let a = correlation_test(&x, &y, &seeded_config(9)).unwrap();
        let b = correlation_test(&x, &y, &seeded_config(9)).unwrap();
        assert_eq!(a.distribution, b.distribution);
        assert_eq!(a.p_value, b.p_value);
        assert_eq!(a.z_score, b.z_score);
    }

    #[test]
    fn different_seeds_differ() {
        let x: Vec<f64> = (0..40).map(|i| (i as f64 * 0.7).sin()).collect();
        let y: Vec<f64> = (0..40).map(|i| (i as f64 * 1.3).cos()).collect();
        let a = correlation_test(&x, &y, &seeded_config(1)).unwrap();
        let b = correlation_test(&x, &y, &seeded_config(2)).unwrap();
        assert_ne!(a.distribution, b.distribution);
    }

    #[test]
    fn strong_association_gives_bounded_p() {
        // y is a noisy copy of x; no permutation should reach the observed r.
        let x: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| v + (v * 0.37).sin()).collect();
        let result = correlation_test(&x, &y, &seeded_config(3)).unwrap();
        assert_eq!(result.p_value, 0.0);
        assert!(result.is_p_bounded());
        assert_eq!(result.p_value_bound(), 1.0 / 500.0);
    }

    #[test]
    fn separated_groups_give_small_one_sided_p() {
        let x: Vec<f64> = (0..20)
            .map(|i| if i < 10 { i as f64 * 0.1 } else { 100.0 + i as f64 * 0.1 })
            .collect();
        let groups: Vec<&str> = (0..20).map(|i| if i < 10 { "low" } else { "high" }).collect();
        let config = Config {
            alternative: Alternative::Greater,
            ..seeded_config(4)
        };
        let result = group_difference_test(&x, &groups, &config).unwrap();
        assert!(result.observed > 99.0);
        assert!(result.p_value <= 0.01, "p = {}", result.p_value);
        assert!(result.z_score > 2.0);
    }

    #[test]
    fn constant_measure_degenerates() {
        // Every permutation yields the same 0 difference.
        let x = vec![5.0; 12];
        let groups: Vec<u8> = (0..12).map(|i| (i % 2) as u8).collect();
        let result = group_difference_test(&x, &groups, &seeded_config(5));
        assert_eq!(
            result,
            Err(Error::DegenerateDistribution { replicates: 500 })
        );
    }

    #[test]
    fn p_value_always_in_unit_interval() {
        let x: Vec<f64> = (0..30).map(|i| (i as f64).sqrt()).collect();
        let groups: Vec<u8> = (0..30).map(|i| (i % 2) as u8).collect();
        for seed in 0..5 {
            let result = group_difference_test(&x, &groups, &seeded_config(seed)).unwrap();
            assert!((0.0..=1.0).contains(&result.p_value));
            assert_eq!(result.replicates, 500);
            assert_eq!(result.distribution.len(), 500);
        }
    }

    #[test]
    fn zero_replicates_rejected() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![2.0, 1.0, 4.0, 3.0];
        let config = Config {
            replicates: 0,
            seed: Some(1),
            alternative: Alternative::TwoSided,
        };
        assert_eq!(correlation_test(&x, &y, &config), Err(Error::NoReplicates));
    }
}
