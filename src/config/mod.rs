use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Upper modulus limit used when the caller gives none
pub const DEFAULT_BOUND: i64 = 65535;

/// Worker count used when the machine reports enough parallelism
pub const DEFAULT_WORKERS: usize = 16;

/// Largest accepted worker count
pub const MAX_WORKERS: usize = 256;

/// Search options, loadable from YAML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// Inclusive upper limit of candidate moduli
    #[serde(default = "default_bound")]
    pub bound: i64,

    /// Number of contiguous sub-ranges scanned in parallel
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Stop every worker once any worker has claimed a result.
    /// Off by default: all workers scan their full range.
    #[serde(default, rename = "earlyexit")]
    pub early_exit: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            bound: default_bound(),
            workers: default_workers(),
            early_exit: false,
        }
    }
}

impl SearchConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: SearchConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.bound < 0 {
            return Err(anyhow!("Bound must be >= 0, got {}", self.bound));
        }

        if self.workers < 1 || self.workers > MAX_WORKERS {
            return Err(anyhow!(
                "Workers must be between 1 and {}, got {}",
                MAX_WORKERS,
                self.workers
            ));
        }

        Ok(())
    }
}

// Default value functions for serde
fn default_bound() -> i64 {
    DEFAULT_BOUND
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(DEFAULT_WORKERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
bound: 100000
workers: 8
earlyexit: true
"#;

        let config: SearchConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.bound, 100000);
        assert_eq!(config.workers, 8);
        assert!(config.early_exit);
    }

    #[test]
    fn test_defaults() {
        let yaml = r#"
workers: 4
"#;

        let config: SearchConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.bound, DEFAULT_BOUND);
        assert_eq!(config.workers, 4);
        assert!(!config.early_exit);
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SearchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bound, 65535);
        assert!(config.workers >= 1 && config.workers <= DEFAULT_WORKERS);
    }

    #[test]
    fn test_validate_negative_bound() {
        let yaml = r#"
bound: -1
"#;

        let config: SearchConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_worker_range() {
        let mut config = SearchConfig::default();
        config.workers = 0;
        assert!(config.validate().is_err());

        config.workers = MAX_WORKERS + 1;
        assert!(config.validate().is_err());

        config.workers = MAX_WORKERS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SearchConfig::load("/nonexistent/lcg-search.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
