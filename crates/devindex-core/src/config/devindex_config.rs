//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ClusteringConfig, LoggingConfig, WeightsConfig};
use crate::errors::ConfigError;
use crate::types::Category;

/// Project config file name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "devindex.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`DEVINDEX_*`)
/// 3. Project config (`devindex.toml` in the project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DevIndexConfig {
    pub weights: WeightsConfig,
    pub clustering: ClusteringConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

/// Caller-supplied overrides that win over every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub cluster_count: Option<usize>,
    pub seed: Option<u64>,
    pub max_iterations: Option<usize>,
    pub log_level: Option<String>,
}

impl DevIndexConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &DevIndexConfig) -> Result<(), ConfigError> {
        for category in Category::ALL {
            if let Some(weight) = config.weights.get(category) {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("weights.{category}"),
                        message: "must be a finite, non-negative number".to_string(),
                    });
                }
            }
        }
        if config.weights.effective_weights().total() <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "weights".to_string(),
                message: "at least one category weight must be positive".to_string(),
            });
        }
        if config.clustering.effective_max_iterations() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.max_iterations".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        let threshold = config.clustering.effective_convergence_threshold();
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.convergence_threshold".to_string(),
                message: "must be a positive number".to_string(),
            });
        }
        if config.clustering.effective_min_k() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.min_k".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.clustering.effective_default_k() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "clustering.default_k".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.analysis.effective_min_year() > config.analysis.effective_max_year() {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.min_year".to_string(),
                message: "must not exceed analysis.max_year".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut DevIndexConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DevIndexConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        tracing::debug!(path = %path.display(), "merged project config");
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some` value.
    fn merge(base: &mut DevIndexConfig, other: &DevIndexConfig) {
        // Weights
        for category in Category::ALL {
            if let Some(weight) = other.weights.get(category) {
                base.weights.set(category, Some(weight));
            }
        }

        // Clustering
        if other.clustering.default_k.is_some() {
            base.clustering.default_k = other.clustering.default_k;
        }
        if other.clustering.min_k.is_some() {
            base.clustering.min_k = other.clustering.min_k;
        }
        if other.clustering.max_iterations.is_some() {
            base.clustering.max_iterations = other.clustering.max_iterations;
        }
        if other.clustering.convergence_threshold.is_some() {
            base.clustering.convergence_threshold = other.clustering.convergence_threshold;
        }
        if other.clustering.seed.is_some() {
            base.clustering.seed = other.clustering.seed;
        }

        // Analysis
        if other.analysis.min_year.is_some() {
            base.analysis.min_year = other.analysis.min_year;
        }
        if other.analysis.max_year.is_some() {
            base.analysis.max_year = other.analysis.max_year;
        }
        if other.analysis.default_region.is_some() {
            base.analysis.default_region = other.analysis.default_region.clone();
        }

        // Logging
        if other.logging.level.is_some() {
            base.logging.level = other.logging.level.clone();
        }
        if other.logging.json.is_some() {
            base.logging.json = other.logging.json;
        }
    }

    /// Apply environment variable overrides from the process environment.
    /// Pattern: `DEVINDEX_CLUSTER_COUNT`, `DEVINDEX_WEIGHT_ECONOMIC`, etc.
    fn apply_env_overrides(config: &mut DevIndexConfig) {
        Self::apply_env_from(config, |key| std::env::var(key).ok());
    }

    /// Apply environment-style overrides read through `lookup`.
    /// Unparseable values are ignored.
    pub fn apply_env_from<F>(config: &mut DevIndexConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for category in Category::ALL {
            let key = format!("DEVINDEX_WEIGHT_{}", category.as_str().to_ascii_uppercase());
            if let Some(v) = lookup(&key).and_then(|s| s.parse::<f64>().ok()) {
                config.weights.set(category, Some(v));
            }
        }
        if let Some(v) = lookup("DEVINDEX_CLUSTER_COUNT").and_then(|s| s.parse::<usize>().ok()) {
            config.clustering.default_k = Some(v);
        }
        if let Some(v) = lookup("DEVINDEX_MAX_ITERATIONS").and_then(|s| s.parse::<usize>().ok()) {
            config.clustering.max_iterations = Some(v);
        }
        if let Some(v) =
            lookup("DEVINDEX_CONVERGENCE_THRESHOLD").and_then(|s| s.parse::<f64>().ok())
        {
            config.clustering.convergence_threshold = Some(v);
        }
        if let Some(v) = lookup("DEVINDEX_SEED").and_then(|s| s.parse::<u64>().ok()) {
            config.clustering.seed = Some(v);
        }
        if let Some(v) = lookup("DEVINDEX_LOG_LEVEL") {
            config.logging.level = Some(v);
        }
        if let Some(v) = lookup("DEVINDEX_LOG_JSON").and_then(|s| s.parse::<bool>().ok()) {
            config.logging.json = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut DevIndexConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.cluster_count {
            config.clustering.default_k = Some(v);
        }
        if let Some(v) = overrides.seed {
            config.clustering.seed = Some(v);
        }
        if let Some(v) = overrides.max_iterations {
            config.clustering.max_iterations = Some(v);
        }
        if let Some(ref v) = overrides.log_level {
            config.logging.level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
