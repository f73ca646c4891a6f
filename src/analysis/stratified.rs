//! Stratified (within-stratum) permutation tests.
//!
//! The stratified engine models a null hypothesis where the dependent side
//! is exchangeable only *within* naturally confounded clusters (areas): each
//! replicate permutes the dependent sequence independently inside every
//! stratum, so the per-stratum multiset of values is unchanged and only the
//! assignment of which unit holds which value moves.
//!
//! Reassembly contract: strata are iterated in first-occurrence order of
//! their labels, and both `x` and the permuted dependent sequence are
//! rebuilt by concatenating per-stratum slices in that same order. The row
//! order therefore differs from the input, but positional alignment between
//! the two rebuilt sequences is exact, which is all the statistics depend
//! on.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::result::TestResult;
use crate::sampler;
use crate::statistics::{
    correlation, correlation_unchecked, difference_of_means, difference_with_labels,
    distinct_labels, two_labels,
};

use super::engine::{null_distribution, summarize};

/// Row indices of each stratum, in first-occurrence order of the stratum
/// labels.
pub(crate) fn stratum_indices<S: PartialEq + Clone>(strata: &[S]) -> Vec<Vec<usize>> {
    let order = distinct_labels(strata);
    order
        .iter()
        .map(|label| {
            strata
                .iter()
                .enumerate()
                .filter(|(_, s)| *s == label)
                .map(|(i, _)| i)
                .collect()
        })
        .collect()
}

/// Gather the values of `seq` at each stratum's indices.
fn per_stratum<T: Clone>(seq: &[T], indices: &[Vec<usize>]) -> Vec<Vec<T>> {
    indices
        .iter()
        .map(|rows| rows.iter().map(|&i| seq[i].clone()).collect())
        .collect()
}

fn check_lengths(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::LengthMismatch { left, right });
    }
    Ok(())
}

/// Stratified permutation test of a group difference.
///
/// The observed statistic is the plain difference of group means (canonical
/// first-occurrence group order). Each replicate permutes the group labels
/// independently within every stratum and recomputes the difference on the
/// stratum-reassembled data; z and p are derived exactly as in the
/// unstratified engine.
///
/// # Errors
///
/// Propagates validation errors from [`difference_of_means`] and
/// [`Config::validate`]; [`Error::LengthMismatch`] when `strata` is not
/// aligned with `x`; [`Error::DegenerateDistribution`] when within-stratum
/// permutation cannot move the statistic (for example when every stratum is
/// single-group).
pub fn stratified_group_test<L, S>(
    x: &[f64],
    groups: &[L],
    strata: &[S],
    config: &Config,
) -> Result<TestResult>
where
    L: PartialEq + Clone + Sync,
    S: PartialEq + Clone,
{
    config.validate()?;
    check_lengths(x.len(), strata.len())?;
    let observed = difference_of_means(x, groups)?;
    let (first, second) = two_labels(groups)?;

    let indices = stratum_indices(strata);
    let x_parts = per_stratum(x, &indices);
    let group_parts = per_stratum(groups, &indices);
    let rebuilt_x: Vec<f64> = x_parts.into_iter().flatten().collect();

    let master = sampler::master_seed(config.seed);
    let distribution = null_distribution(config.replicates, master, |rng| {
        let mut rebuilt_groups: Vec<L> = Vec::with_capacity(rebuilt_x.len());
        for part in &group_parts {
            rebuilt_groups.extend(sampler::permuted(rng, part));
        }
        difference_with_labels(&rebuilt_x, &rebuilt_groups, &first, &second)
    });

    summarize(observed, distribution, config.alternative)
}

/// Stratified permutation test of association between two continuous
/// variables.
///
/// Identical randomization scheme, with `y` as the dependent sequence that
/// is permuted within strata. Note that for correlation-style statistics
/// (unlike the difference of means) permuting `y` is *not* interchangeable
/// with permuting `x`; the dependent-side convention is part of the
/// contract.
///
/// # Errors
///
/// Propagates validation errors from [`correlation`] and
/// [`Config::validate`]; [`Error::LengthMismatch`] when `strata` is not
/// aligned with `x`; [`Error::DegenerateDistribution`] when the null
/// distribution has zero spread.
pub fn stratified_correlation_test<S>(
    x: &[f64],
    y: &[f64],
    strata: &[S],
    config: &Config,
) -> Result<TestResult>
where
    S: PartialEq + Clone,
{
    config.validate()?;
    check_lengths(x.len(), strata.len())?;
    let observed = correlation(x, y)?;

    let indices = stratum_indices(strata);
    let x_parts = per_stratum(x, &indices);
    let y_parts = per_stratum(y, &indices);
    let rebuilt_x: Vec<f64> = x_parts.into_iter().flatten().collect();

    let master = sampler::master_seed(config.seed);
    let distribution = null_distribution(config.replicates, master, |rng| {
        let mut rebuilt_y: Vec<f64> = Vec::with_capacity(rebuilt_x.len());
        for part in &y_parts {
            rebuilt_y.extend(sampler::permuted(rng, part));
        }
        correlation_unchecked(&rebuilt_x, &rebuilt_y)
    });

    summarize(observed, distribution, config.alternative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Alternative;

    fn seeded_config(seed: u64) -> Config {
        Config {
            replicates: 400,
            seed: Some(seed),
            alternative: Alternative::TwoSided,
        }
    }

    #[test]
    fn stratum_indices_follow_first_occurrence() {
        let strata = vec!["north", "south", "north", "east", "south"];
        let indices = stratum_indices(&strata);
        assert_eq!(indices, vec![vec![0, 2], vec![1, 4], vec![3]]);
    }

    #[test]
    fn single_group_strata_cannot_move_the_statistic() {
        // Stratum 1 is all "A", stratum 2 is all "B": within-stratum
        // permutation leaves every label in place, so all replicates equal
        // the observed statistic and the null distribution is degenerate.
        // An unstratified permutation of the same data would mix freely.
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let groups = vec!["A", "A", "A", "A", "B", "B", "B", "B"];
        let strata = vec![1, 1, 1, 1, 2, 2, 2, 2];
        let result = stratified_group_test(&x, &groups, &strata, &seeded_config(1));
        assert_eq!(
            result,
            Err(Error::DegenerateDistribution { replicates: 400 })
        );
    }

    #[test]
    fn mixed_strata_produce_a_live_null() {
        let x = vec![1.0, 5.0, 2.0, 6.0, 3.0, 7.0, 4.0, 8.0];
        let groups = vec!["A", "B", "A", "B", "A", "B", "A", "B"];
        let strata = vec![1, 1, 1, 1, 2, 2, 2, 2];
        let result = stratified_group_test(&x, &groups, &strata, &seeded_config(2)).unwrap();
        assert_eq!(result.observed, 4.0);
        assert!(result.null_sd > 0.0);
        assert!((0.0..=1.0).contains(&result.p_value));
    }

    #[test]
    fn stratified_matches_seeded_rerun() {
        let x: Vec<f64> = (0..24).map(|i| (i as f64 * 0.9).sin()).collect();
        let groups: Vec<u8> = (0..24).map(|i| (i % 2) as u8).collect();
        let strata: Vec<u8> = (0..24).map(|i| (i / 6) as u8).collect();
        let a = stratified_group_test(&x, &groups, &strata, &seeded_config(7)).unwrap();
        let b = stratified_group_test(&x, &groups, &strata, &seeded_config(7)).unwrap();
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn strata_must_align_with_x() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let groups = vec!["A", "A", "B", "B"];
        let strata = vec![1, 2];
        assert_eq!(
            stratified_group_test(&x, &groups, &strata, &seeded_config(3)),
            Err(Error::LengthMismatch { left: 4, right: 2 })
        );
    }

    #[test]
    fn stratified_correlation_runs() {
        let x: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let y: Vec<f64> = (0..30).map(|i| (i as f64 * 1.7).cos()).collect();
        let strata: Vec<u8> = (0..30).map(|i| (i / 10) as u8).collect();
        let result = stratified_correlation_test(&x, &y, &strata, &seeded_config(4)).unwrap();
        assert!((0.0..=1.0).contains(&result.p_value));
        assert_eq!(result.replicates, 400);
    }
}
