//! Encounter difficulty tiers and the per-level XP budget row they select from

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Desired difficulty of a generated encounter
///
/// Tiers are ordered Low < Moderate < High. Budget lookups go through
/// [`BudgetRow::xp_for`], never through the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    #[serde(alias = "l", alias = "L", alias = "Low", alias = "LOW")]
    Low,
    #[serde(alias = "m", alias = "M", alias = "Moderate", alias = "MODERATE")]
    Moderate,
    #[serde(alias = "h", alias = "H", alias = "High", alias = "HIGH")]
    High,
}

impl DifficultyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown difficulty tier: {0}")]
pub struct ParseDifficultyError(pub String);

impl FromStr for DifficultyTier {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "low" => Ok(Self::Low),
            "m" | "moderate" => Ok(Self::Moderate),
            "h" | "high" => Ok(Self::High),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// XP thresholds for a single character level, one per difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRow {
    pub low: u32,
    pub moderate: u32,
    pub high: u32,
}

impl BudgetRow {
    pub const fn new(low: u32, moderate: u32, high: u32) -> Self {
        Self { low, moderate, high }
    }

    /// XP a single character contributes to the budget at the given tier
    pub fn xp_for(&self, tier: DifficultyTier) -> u32 {
        match tier {
            DifficultyTier::Low => self.low,
            DifficultyTier::Moderate => self.moderate,
            DifficultyTier::High => self.high,
        }
    }
}
