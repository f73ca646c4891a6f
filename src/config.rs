//! Configuration for permutation tests.

use crate::error::{Error, Result};
use crate::types::Alternative;

/// Configuration options shared by every resampling procedure.
///
/// A `Config` is constructed once per test invocation (usually through the
/// [`PermutationOracle`](crate::PermutationOracle) builder) and is read-only
/// for the duration of the run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of replicates used to build the null distribution.
    ///
    /// Must be at least 1. At least 1,000 is recommended for stable tail
    /// estimates; an empirical p-value can never resolve below
    /// `1 / replicates`. Default: 1,000.
    pub replicates: usize,

    /// Optional deterministic seed.
    ///
    /// When set, every replicate draws from its own generator seeded from
    /// this value and the replicate index, so results are reproducible and
    /// independent of execution order. When unset, a master seed is drawn
    /// from process entropy once per test run. Default: None.
    pub seed: Option<u64>,

    /// Alternative hypothesis used for the empirical p-value.
    ///
    /// Default: [`Alternative::TwoSided`].
    pub alternative: Alternative,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            replicates: 1_000,
            seed: None,
            alternative: Alternative::TwoSided,
        }
    }
}

impl Config {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoReplicates`] if `replicates` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.replicates == 0 {
            return Err(Error::NoReplicates);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.replicates, 1_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.alternative, Alternative::TwoSided);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_replicates_rejected() {
        let config = Config {
            replicates: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(Error::NoReplicates));
    }
}
