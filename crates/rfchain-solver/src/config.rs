//! Analysis configuration.

use std::path::Path;

use rfchain_core::RangePolicy;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::parallel::ParallelSweepConfig;

/// Settings that apply to every query made through a chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Out-of-characterization handling for table lookups.
    pub range_policy: RangePolicy,
    /// Parallel execution of frequency sweeps.
    pub parallel: ParallelSweepConfig,
}

impl AnalysisConfig {
    /// Fail on any query outside a component's characterized range.
    pub fn strict() -> Self {
        Self {
            range_policy: RangePolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: ParallelSweepConfig) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.range_policy, RangePolicy::Clamp);
        assert_eq!(config.parallel, ParallelSweepConfig::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = AnalysisConfig::from_json(r#"{"range_policy": "strict"}"#).unwrap();
        assert_eq!(config, AnalysisConfig::strict());

        let config =
            AnalysisConfig::from_json(r#"{"parallel": {"min_points_for_parallel": 8}}"#).unwrap();
        assert_eq!(config.range_policy, RangePolicy::Clamp);
        assert_eq!(config.parallel.min_points_for_parallel, 8);
        assert_eq!(config.parallel.chunk_size, None);
    }

    #[test]
    fn test_rejects_unknown_policy() {
        assert!(AnalysisConfig::from_json(r#"{"range_policy": "wrap"}"#).is_err());
    }
}
