//! Analysis service configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REGION_ID, MAX_ANALYSIS_YEAR, MIN_ANALYSIS_YEAR};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Earliest accepted analysis year. Default: 2000.
    pub min_year: Option<i32>,
    /// Latest accepted analysis year. Default: 2100.
    pub max_year: Option<i32>,
    /// Region id reported for unscoped analyses. Default: "ALL".
    pub default_region: Option<String>,
}

impl AnalysisConfig {
    pub fn effective_min_year(&self) -> i32 {
        self.min_year.unwrap_or(MIN_ANALYSIS_YEAR)
    }

    pub fn effective_max_year(&self) -> i32 {
        self.max_year.unwrap_or(MAX_ANALYSIS_YEAR)
    }

    pub fn effective_default_region(&self) -> &str {
        self.default_region.as_deref().unwrap_or(DEFAULT_REGION_ID)
    }
}
