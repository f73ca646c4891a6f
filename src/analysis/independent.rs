//! Independent subsampling: one observation per stratum per group.
//!
//! Observations within a stratum (area) are not independent draws; a
//! stratum with many observations would otherwise dominate a group mean.
//! The independent sampler removes within-stratum dependence by drawing
//! exactly one observation per stratum per group, producing two
//! stratum-independent sub-samples whose lengths equal the number of
//! distinct strata present in each group.

use rand::Rng;

use crate::error::{Error, Result};
use crate::sampler;
use crate::statistics::{distinct_labels, mean, two_labels};

/// Per-group observation values bucketed by stratum.
///
/// Bucket order follows first-occurrence order of the stratum labels within
/// each group's sub-dataset; every bucket is non-empty by construction.
#[derive(Debug, Clone)]
pub(crate) struct GroupedStrata {
    /// Buckets for the first-seen group label.
    pub first: Vec<Vec<f64>>,
    /// Buckets for the second-seen group label.
    pub second: Vec<Vec<f64>>,
}

/// Partition `(x, strata)` by the two group labels and bucket each group's
/// values by stratum.
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if the three sequences are not aligned.
/// - [`Error::EmptyInput`] if the sequences are empty (which is also the
///   only way the stratum set can be empty).
/// - [`Error::GroupCardinality`] if `groups` does not contain exactly two
///   distinct labels.
pub(crate) fn bucket_by_group_and_stratum<L, S>(
    x: &[f64],
    groups: &[L],
    strata: &[S],
) -> Result<GroupedStrata>
where
    L: PartialEq + Clone,
    S: PartialEq + Clone,
{
    if x.len() != groups.len() {
        return Err(Error::LengthMismatch {
            left: x.len(),
            right: groups.len(),
        });
    }
    if x.len() != strata.len() {
        return Err(Error::LengthMismatch {
            left: x.len(),
            right: strata.len(),
        });
    }
    let (first, second) = two_labels(groups)?;

    let bucket = |label: &L| -> Vec<Vec<f64>> {
        let rows: Vec<usize> = (0..x.len()).filter(|&i| groups[i] == *label).collect();
        let row_strata: Vec<S> = rows.iter().map(|&i| strata[i].clone()).collect();
        distinct_labels(&row_strata)
            .iter()
            .map(|stratum| {
                rows.iter()
                    .zip(&row_strata)
                    .filter(|(_, s)| *s == stratum)
                    .map(|(&i, _)| x[i])
                    .collect()
            })
            .collect()
    };

    Ok(GroupedStrata {
        first: bucket(&first),
        second: bucket(&second),
    })
}

/// Draw one observation per bucket for each group.
pub(crate) fn draw_from_buckets<R: Rng>(rng: &mut R, buckets: &GroupedStrata) -> (Vec<f64>, Vec<f64>) {
    fn draw<R: Rng>(parts: &[Vec<f64>], rng: &mut R) -> Vec<f64> {
        let mut out = Vec::with_capacity(parts.len());
        for vals in parts {
            out.push(sampler::choose_one(rng, vals));
        }
        out
    }
    let a = draw(&buckets.first, rng);
    let b = draw(&buckets.second, rng);
    (a, b)
}

/// Draw an independent pair of sub-samples: one observation per stratum per
/// group, uniformly at random within each stratum.
///
/// The two returned sequences follow the canonical first-occurrence group
/// order and may differ in length (a stratum absent from one group's
/// sub-dataset contributes no draw for that group). Use [`equalize_sizes`]
/// before computing a balanced difference.
///
/// # Errors
///
/// See [`bucket_by_group_and_stratum`].
pub fn draw_independent_pair<L, S, R>(
    rng: &mut R,
    x: &[f64],
    groups: &[L],
    strata: &[S],
) -> Result<(Vec<f64>, Vec<f64>)>
where
    L: PartialEq + Clone,
    S: PartialEq + Clone,
    R: Rng,
{
    let buckets = bucket_by_group_and_stratum(x, groups, strata)?;
    Ok(draw_from_buckets(rng, &buckets))
}

/// Equalize two sample sizes by randomly subsetting the larger sample
/// (without replacement) down to the smaller's length.
pub fn equalize_sizes<R: Rng>(rng: &mut R, a: Vec<f64>, b: Vec<f64>) -> (Vec<f64>, Vec<f64>) {
    let target = a.len().min(b.len());
    let shrink = |v: Vec<f64>, rng: &mut R| -> Vec<f64> {
        if v.len() > target {
            sampler::subsample_unchecked(rng, &v, target)
        } else {
            v
        }
    };
    let a = shrink(a, rng);
    let b = shrink(b, rng);
    (a, b)
}

/// Difference of means of an independent pair: `mean(b) - mean(a)`,
/// consistent with the canonical group-order sign convention.
///
/// # Errors
///
/// Returns [`Error::EmptyPartition`] if either sample is empty.
pub fn pair_difference_of_means(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::EmptyPartition);
    }
    Ok(mean(b) - mean(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    // Two groups over four areas; "west" appears only in group B.
    fn dataset() -> (Vec<f64>, Vec<&'static str>, Vec<&'static str>) {
        let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
        let groups = vec!["A", "A", "A", "A", "B", "B", "B", "B", "B"];
        let strata = vec![
            "north", "north", "south", "east", "north", "south", "east", "west", "west",
        ];
        (x, groups, strata)
    }

    #[test]
    fn one_draw_per_stratum_per_group() {
        let (x, groups, strata) = dataset();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let (a, b) = draw_independent_pair(&mut rng, &x, &groups, &strata).unwrap();
        // Group A spans 3 distinct strata, group B spans 4.
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 4);
        // Every drawn value belongs to the right group's sub-dataset.
        for v in &a {
            assert!(x[..4].contains(v));
        }
        for v in &b {
            assert!(x[4..].contains(v));
        }
    }

    #[test]
    fn draws_come_from_distinct_strata() {
        let (x, groups, strata) = dataset();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        for _ in 0..50 {
            let (a, _) = draw_independent_pair(&mut rng, &x, &groups, &strata).unwrap();
            // Group A's strata are north {1,2}, south {3}, east {4}: one
            // value from each bucket, in bucket order.
            assert!(a[0] == 1.0 || a[0] == 2.0);
            assert_eq!(a[1], 3.0);
            assert_eq!(a[2], 4.0);
        }
    }

    #[test]
    fn equalize_trims_larger_side_only() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![10.0, 20.0, 30.0, 40.0, 50.0];
        let (ea, eb) = equalize_sizes(&mut rng, a.clone(), b.clone());
        assert_eq!(ea, a);
        assert_eq!(eb.len(), 3);
        for v in &eb {
            assert!(b.contains(v));
        }
        let mut dedup = eb.clone();
        dedup.sort_by(f64::total_cmp);
        dedup.dedup();
        assert_eq!(dedup.len(), 3);
    }

    #[test]
    fn pair_difference_sign_convention() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert_eq!(pair_difference_of_means(&a, &b).unwrap(), 3.0);
        assert_eq!(pair_difference_of_means(&b, &a).unwrap(), -3.0);
    }

    #[test]
    fn empty_side_rejected() {
        assert_eq!(
            pair_difference_of_means(&[], &[1.0]),
            Err(Error::EmptyPartition)
        );
    }

    #[test]
    fn empty_input_rejected() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
        let result = draw_independent_pair::<&str, &str, _>(&mut rng, &[], &[], &[]);
        assert_eq!(result, Err(Error::EmptyInput));
    }

    #[test]
    fn misaligned_strata_rejected() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let x = vec![1.0, 2.0];
        let groups = vec!["A", "B"];
        let strata = vec!["north"];
        assert_eq!(
            draw_independent_pair(&mut rng, &x, &groups, &strata),
            Err(Error::LengthMismatch { left: 2, right: 1 })
        );
    }
}
