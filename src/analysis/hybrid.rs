//! Hybrid significance test: independent subsampling plus permutation.
//!
//! A single independent draw (one observation per stratum per group) gives
//! an unbiased group difference, but no sense of how large that difference
//! would be under random relabeling of the very same sample. The hybrid
//! test pairs the two within each replicate: it records how much the
//! independent-sample difference exceeds a relabeled difference of the same
//! equalized sample. If group and area are in fact unrelated to the
//! measure, the recorded differences straddle zero and the proportion of
//! non-negative replicates lands near 0.5.

use crate::config::Config;
use crate::error::Result;
use crate::result::HybridResult;
use crate::sampler;
use crate::statistics::{mean, sample_std_dev};

use super::engine::null_distribution;
use super::independent::{bucket_by_group_and_stratum, draw_from_buckets, equalize_sizes};

/// Run the hybrid significance test.
///
/// Per replicate: draw an independent pair, equalize sizes by random
/// subsetting, compute `indep_diff = mean(b) - mean(a)`; then concatenate
/// the equalized samples, permute the concatenation, split it back into two
/// halves of the equalized size, compute `perm_diff` on the halves, and
/// record `indep_diff - perm_diff`.
///
/// # Errors
///
/// Propagates validation errors from the independent sampler
/// (length mismatches, empty input, group cardinality) and from
/// [`Config::validate`]. Once validation passes, every replicate succeeds:
/// each group observed at least one stratum, so both equalized samples are
/// non-empty.
pub fn hybrid_test<L, S>(x: &[f64], groups: &[L], strata: &[S], config: &Config) -> Result<HybridResult>
where
    L: PartialEq + Clone + Sync,
    S: PartialEq + Clone + Sync,
{
    config.validate()?;
    let buckets = bucket_by_group_and_stratum(x, groups, strata)?;

    let master = sampler::master_seed(config.seed);
    let distribution = null_distribution(config.replicates, master, |rng| {
        let (a, b) = draw_from_buckets(rng, &buckets);
        let (a, b) = equalize_sizes(rng, a, b);
        let indep_diff = mean(&b) - mean(&a);

        let half = a.len();
        let mut pool = a;
        pool.extend(b);
        let pool = sampler::permuted(rng, &pool);
        let perm_diff = mean(&pool[half..]) - mean(&pool[..half]);

        indep_diff - perm_diff
    });

    let replicates = distribution.len();
    let nonnegative = distribution.iter().filter(|&&d| d >= 0.0).count();
    let sd = if replicates >= 2 {
        sample_std_dev(&distribution)
    } else {
        0.0
    };

    Ok(HybridResult {
        mean: mean(&distribution),
        sd,
        proportion_nonnegative: nonnegative as f64 / replicates as f64,
        replicates,
        distribution,
    })
}
