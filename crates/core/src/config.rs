//! Benchmark harness configuration.
//!
//! The comparator does not time anything itself; these values are handed to
//! the harness (criterion) to shape the parameter sweep and timing windows.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Environment variable naming a TOML config file for the bench.
pub const CONFIG_ENV_VAR: &str = "FANOUT_BENCH_CONFIG";

/// Smallest sample count criterion accepts.
pub const MIN_MEASUREMENT_ITERATIONS: u32 = 10;

const DEFAULT_SUBSCRIBER_COUNTS: [usize; 4] = [1, 10, 100, 1000];

/// Parameter sweep and timing windows for the traversal benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Subscriber counts to benchmark, one comparator per entry
    subscriber_counts: Vec<usize>,

    /// Number of warm-up iterations
    warmup_iterations: u32,

    /// Length of each warm-up iteration in seconds
    warmup_iteration_secs: u64,

    /// Number of measurement iterations
    measurement_iterations: u32,

    /// Length of each measurement iteration in seconds
    measurement_iteration_secs: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            subscriber_counts: DEFAULT_SUBSCRIBER_COUNTS.to_vec(),
            warmup_iterations: 5,
            warmup_iteration_secs: 1,
            measurement_iterations: 10,
            measurement_iteration_secs: 1,
        }
    }
}

impl BenchConfig {
    /// Parse a config from TOML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the TOML is malformed or the values fail validation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| Error::config_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::config_read_failed(path, e.to_string()))?;
        Self::from_toml_str(&source)
    }

    /// Load from `path` when given, otherwise use the defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, parsed, or validated.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading bench config");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Load from the file named by `FANOUT_BENCH_CONFIG`, if set.
    ///
    /// # Errors
    ///
    /// Returns error if the named file cannot be read, parsed, or validated.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR);
        Self::resolve(path.as_deref().map(Path::new))
    }

    /// Replace the subscriber counts.
    ///
    /// # Errors
    ///
    /// Returns error if `counts` is empty.
    pub fn with_subscriber_counts(mut self, counts: Vec<usize>) -> Result<Self> {
        self.subscriber_counts = counts;
        self.validate()?;
        Ok(self)
    }

    /// Check the values criterion would otherwise reject at run time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` describing the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.subscriber_counts.is_empty() {
            return Err(Error::invalid_config("subscriber_counts cannot be empty"));
        }
        if self.warmup_iterations == 0 || self.warmup_iteration_secs == 0 {
            return Err(Error::invalid_config(
                "warm-up iterations and their length must be greater than 0",
            ));
        }
        if self.measurement_iterations < MIN_MEASUREMENT_ITERATIONS {
            return Err(Error::invalid_config(format!(
                "measurement_iterations must be at least {MIN_MEASUREMENT_ITERATIONS}, got {}",
                self.measurement_iterations
            )));
        }
        if self.measurement_iteration_secs == 0 {
            return Err(Error::invalid_config(
                "measurement_iteration_secs must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Subscriber counts to benchmark
    #[must_use]
    pub fn subscriber_counts(&self) -> &[usize] {
        &self.subscriber_counts
    }

    /// Total warm-up time per benchmark
    #[must_use]
    pub fn warm_up_time(&self) -> Duration {
        Duration::from_secs(self.warmup_iteration_secs)
            .saturating_mul(self.warmup_iterations)
    }

    /// Total measurement time per benchmark
    #[must_use]
    pub fn measurement_time(&self) -> Duration {
        Duration::from_secs(self.measurement_iteration_secs)
            .saturating_mul(self.measurement_iterations)
    }

    /// Number of criterion samples per benchmark
    #[must_use]
    pub fn sample_size(&self) -> usize {
        usize::try_from(self.measurement_iterations).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.subscriber_counts(), &[1, 10, 100, 1000]);
        assert_eq!(config.warm_up_time(), Duration::from_secs(5));
        assert_eq!(config.measurement_time(), Duration::from_secs(10));
        assert_eq!(config.sample_size(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BenchConfig::from_toml_str("subscriber_counts = [0, 5]").unwrap();
        assert_eq!(config.subscriber_counts(), &[0, 5]);
        assert_eq!(config.sample_size(), 10);
    }

    #[test]
    fn test_full_toml() {
        let config = BenchConfig::from_toml_str(
            r"
            subscriber_counts = [1, 2]
            warmup_iterations = 2
            warmup_iteration_secs = 3
            measurement_iterations = 20
            measurement_iteration_secs = 2
            ",
        )
        .unwrap();
        assert_eq!(config.warm_up_time(), Duration::from_secs(6));
        assert_eq!(config.measurement_time(), Duration::from_secs(40));
        assert_eq!(config.sample_size(), 20);
    }

    #[test]
    fn test_empty_counts_rejected() {
        let result = BenchConfig::from_toml_str("subscriber_counts = []");
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_too_few_measurement_iterations_rejected() {
        let result = BenchConfig::from_toml_str("measurement_iterations = 9");
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_zero_warmup_rejected() {
        let result = BenchConfig::from_toml_str("warmup_iteration_secs = 0");
        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = BenchConfig::from_toml_str("forks = 2");
        assert!(matches!(result, Err(Error::ConfigParseFailed { .. })));
    }

    #[test]
    fn test_resolve_without_path_is_default() {
        assert_eq!(BenchConfig::resolve(None).unwrap(), BenchConfig::default());
    }

    #[test]
    fn test_with_subscriber_counts() {
        let config = BenchConfig::default()
            .with_subscriber_counts(vec![7])
            .unwrap();
        assert_eq!(config.subscriber_counts(), &[7]);
        assert!(BenchConfig::default().with_subscriber_counts(Vec::new()).is_err());
    }
}
