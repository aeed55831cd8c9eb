use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

/// Thematic category an indicator belongs to. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Economic,
    Social,
    Demographic,
    Infrastructure,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 4] = [
        Category::Economic,
        Category::Social,
        Category::Demographic,
        Category::Infrastructure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Economic => "economic",
            Self::Social => "social",
            Self::Demographic => "demographic",
            Self::Infrastructure => "infrastructure",
        }
    }

    /// Human-readable category title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Economic => "Economic Development",
            Self::Social => "Social Development",
            Self::Demographic => "Demographic Indicators",
            Self::Infrastructure => "Infrastructure Development",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economic" => Ok(Self::Economic),
            "social" => Ok(Self::Social),
            "demographic" => Ok(Self::Demographic),
            "infrastructure" => Ok(Self::Infrastructure),
            other => Err(CatalogError::UnknownCategory(other.to_string())),
        }
    }
}

/// Direction in which an indicator signals development.
///
/// `Neutral` indicators are scaled like `HigherIsBetter`; only
/// `LowerIsBetter` inverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "higher", alias = "higher-is-better")]
    HigherIsBetter,
    #[serde(rename = "lower", alias = "lower-is-better")]
    LowerIsBetter,
    #[serde(rename = "neutral")]
    Neutral,
}

impl FromStr for Polarity {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "higher" | "higher-is-better" => Ok(Self::HigherIsBetter),
            "lower" | "lower-is-better" => Ok(Self::LowerIsBetter),
            "neutral" => Ok(Self::Neutral),
            other => Err(CatalogError::UnknownPolarity(other.to_string())),
        }
    }
}

/// Static metadata for one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub unit: String,
    pub category: Category,
    #[serde(alias = "direction")]
    pub polarity: Polarity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl IndicatorDefinition {
    pub fn new(id: impl Into<String>, category: Category, polarity: Polarity) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            unit: String::new(),
            category,
            polarity,
            weight: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>, unit: impl Into<String>) -> Self {
        self.name = name.into();
        self.unit = unit.into();
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}
