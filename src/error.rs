//! Error types for permutation testing.

/// Error returned when a test or sampling operation cannot proceed.
///
/// Two families of failure exist. Invalid-argument errors (length mismatch,
/// wrong group cardinality, oversized subsample requests) are deterministic
/// functions of the input and are surfaced immediately, never retried or
/// silently corrected. Degenerate errors (`ZeroVariance`,
/// `DegenerateDistribution`) mark inputs or null distributions for which the
/// requested statistic is undefined, so callers can avoid dividing by zero
/// or reporting a meaningless z-score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Two sequences that must be positionally aligned have different lengths.
    #[error("aligned sequences have different lengths: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first sequence.
        left: usize,
        /// Length of the second sequence.
        right: usize,
    },

    /// An input sequence was empty where at least one observation is required.
    #[error("input sequences must contain at least one observation")]
    EmptyInput,

    /// The group label sequence did not contain exactly two distinct values.
    ///
    /// Group-difference procedures are strictly binary; one group or three or
    /// more groups cannot be compared with a difference of means.
    #[error("expected exactly 2 distinct group labels, found {found}")]
    GroupCardinality {
        /// Number of distinct labels observed in the input.
        found: usize,
    },

    /// A group partition contained no observations.
    #[error("group partition is empty")]
    EmptyPartition,

    /// A subsample of `k` elements was requested from a shorter sequence.
    #[error("cannot draw {k} elements without replacement from a sequence of length {n}")]
    SubsampleTooLarge {
        /// Requested subsample size.
        k: usize,
        /// Length of the source sequence.
        n: usize,
    },

    /// The configured replicate count was zero.
    #[error("replicate count must be at least 1")]
    NoReplicates,

    /// An input sequence to the correlation statistic has zero variance,
    /// leaving the correlation coefficient undefined.
    #[error("input sequence has zero variance; correlation is undefined")]
    ZeroVariance,

    /// Every replicate produced the same statistic, so the null distribution
    /// has zero spread and the z-score is undefined.
    ///
    /// This typically means the permutation cannot change the statistic at
    /// all, for example when strata and groups coincide exactly or when the
    /// measure is constant.
    #[error("degenerate null distribution: zero variance across {replicates} replicates")]
    DegenerateDistribution {
        /// Number of replicates in the degenerate distribution.
        replicates: usize,
    },
}

/// Result type for permutation testing operations.
pub type Result<T> = std::result::Result<T, Error>;
