//! Polyhedral dice

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Standard dice available to the roller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiceType {
    #[serde(alias = "D4")]
    D4,
    #[serde(alias = "D6")]
    D6,
    #[serde(alias = "D8")]
    D8,
    #[serde(alias = "D10")]
    D10,
    #[serde(alias = "D12")]
    D12,
    #[serde(alias = "D20")]
    D20,
    #[serde(alias = "D100")]
    D100,
}

impl DiceType {
    pub const ALL: [DiceType; 7] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
        Self::D100,
    ];

    pub fn sides(&self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    pub fn from_sides(sides: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.sides() == sides)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown dice type: {0}")]
pub struct ParseDiceError(pub String);

impl FromStr for DiceType {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_prefix(['d', 'D'])
            .and_then(|n| n.parse::<u32>().ok())
            .and_then(Self::from_sides)
            .ok_or_else(|| ParseDiceError(s.to_string()))
    }
}
