//! Shared types for test configuration and results.

use serde::{Deserialize, Serialize};

/// Alternative hypothesis for the empirical p-value.
///
/// The sidedness of a test is selected by the caller, never inferred from
/// the data. Correlation tests are conventionally two-sided; directional
/// group-difference tests use `Greater` (or `Less`, under the canonical
/// first-occurrence group order that fixes the sign of the difference).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alternative {
    /// Count replicates at least as extreme in magnitude as the observed
    /// statistic: `p = #{|r| >= |observed|} / R`.
    TwoSided,
    /// Count replicates at least as large as the observed statistic:
    /// `p = #{r >= observed} / R`.
    Greater,
    /// Count replicates at most as large as the observed statistic:
    /// `p = #{r <= observed} / R`.
    Less,
}

impl Alternative {
    /// Whether a replicate statistic is at least as extreme as the observed
    /// value under this alternative.
    pub(crate) fn at_least_as_extreme(self, replicate: f64, observed: f64) -> bool {
        match self {
            Alternative::TwoSided => replicate.abs() >= observed.abs(),
            Alternative::Greater => replicate >= observed,
            Alternative::Less => replicate <= observed,
        }
    }
}
