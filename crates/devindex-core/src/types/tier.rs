use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed threshold-based development tier.
///
/// Independent of k-means output; callers pick which partition to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DevelopmentTier {
    High = 1,
    MediumHigh = 2,
    MediumLow = 3,
    Low = 4,
}

impl DevelopmentTier {
    pub const HIGH_THRESHOLD: f64 = 0.75;
    pub const MEDIUM_HIGH_THRESHOLD: f64 = 0.50;
    pub const MEDIUM_LOW_THRESHOLD: f64 = 0.25;

    pub const ALL: [DevelopmentTier; 4] = [
        DevelopmentTier::High,
        DevelopmentTier::MediumHigh,
        DevelopmentTier::MediumLow,
        DevelopmentTier::Low,
    ];

    /// Map a composite score to its tier. Lower bounds are inclusive.
    pub fn from_composite(composite: f64) -> Self {
        if composite >= Self::HIGH_THRESHOLD {
            Self::High
        } else if composite >= Self::MEDIUM_HIGH_THRESHOLD {
            Self::MediumHigh
        } else if composite >= Self::MEDIUM_LOW_THRESHOLD {
            Self::MediumLow
        } else {
            Self::Low
        }
    }

    /// 1-based tier number (1 = high development).
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::High => "High Development",
            Self::MediumHigh => "Medium-High Development",
            Self::MediumLow => "Medium-Low Development",
            Self::Low => "Low Development",
        }
    }
}

impl fmt::Display for DevelopmentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<DevelopmentTier> for u8 {
    fn from(tier: DevelopmentTier) -> Self {
        tier.number()
    }
}

impl TryFrom<u8> for DevelopmentTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::High),
            2 => Ok(Self::MediumHigh),
            3 => Ok(Self::MediumLow),
            4 => Ok(Self::Low),
            other => Err(format!("tier must be 1-4, got {other}")),
        }
    }
}
