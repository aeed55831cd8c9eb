//! Configuration system for the development index engine.
//! TOML-based, 4-layer resolution: overrides > env > project > defaults.

pub mod analysis_config;
pub mod clustering_config;
pub mod devindex_config;
pub mod logging_config;
pub mod weights_config;

pub use analysis_config::AnalysisConfig;
pub use clustering_config::ClusteringConfig;
pub use devindex_config::{ConfigOverrides, DevIndexConfig};
pub use logging_config::LoggingConfig;
pub use weights_config::WeightsConfig;
