//! Runtime configuration, read from `config/bench.yaml`.
//!
//! Only the logging stack is configurable. Benchmark parameters are fixed
//! constants in [`crate::bench::harness::BenchParams`].

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::BenchError;

pub const DEFAULT_CONFIG_PATH: &str = "config/bench.yaml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    /// "hourly", "daily", anything else never rotates
    pub rotation: String,
    /// Mirror log lines to stderr. Stdout is reserved for the summary line.
    pub log_to_stderr: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "gauss_walk_bench.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            log_to_stderr: false,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| BenchError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    /// A file that exists and fails to parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        match Self::load(path) {
            Err(BenchError::ConfigRead { source, .. }) if source.kind() == ErrorKind::NotFound => {
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, BenchError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let cfg = AppConfig::from_yaml("log_level: debug\nuse_json: true\n").unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert!(cfg.use_json);
        assert_eq!(cfg.log_file, "gauss_walk_bench.log");
        assert!(!cfg.log_to_stderr);
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let err = AppConfig::from_yaml("use_json: [not, a, bool]").unwrap_err();
        assert!(matches!(err, BenchError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let cfg = AppConfig::load_or_default("config/does-not-exist.yaml").unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_missing_file_is_error_for_strict_load() {
        let err = AppConfig::load("config/does-not-exist.yaml").unwrap_err();
        assert!(matches!(err, BenchError::ConfigRead { .. }));
    }
}
