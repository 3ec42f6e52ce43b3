//! Treasure dispositions and the treasure table row they index

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How much treasure a group of creatures is carrying or guarding,
/// from loose pocket change up to a dragon's hoard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreasureDisposition {
    #[serde(alias = "INCIDENTAL", alias = "Incidental")]
    Incidental,
    #[serde(alias = "USING", alias = "Using")]
    Using,
    #[serde(alias = "PERSONAL", alias = "Personal")]
    Personal,
    #[serde(alias = "STASH", alias = "Stash")]
    Stash,
    #[serde(alias = "TROVE", alias = "Trove")]
    Trove,
    #[serde(alias = "FORTUNE", alias = "Fortune")]
    Fortune,
    #[serde(alias = "HOARD", alias = "Hoard")]
    Hoard,
}

impl TreasureDisposition {
    pub const ALL: [TreasureDisposition; 7] = [
        Self::Incidental,
        Self::Using,
        Self::Personal,
        Self::Stash,
        Self::Trove,
        Self::Fortune,
        Self::Hoard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incidental => "incidental",
            Self::Using => "using",
            Self::Personal => "personal",
            Self::Stash => "stash",
            Self::Trove => "trove",
            Self::Fortune => "fortune",
            Self::Hoard => "hoard",
        }
    }
}

impl fmt::Display for TreasureDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown treasure disposition: {0}")]
pub struct ParseDispositionError(pub String);

impl FromStr for TreasureDisposition {
    type Err = ParseDispositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| ParseDispositionError(s.to_string()))
    }
}

/// One treasure table row: a description per disposition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasureRow {
    pub incidental: String,
    pub using: String,
    pub personal: String,
    pub stash: String,
    pub trove: String,
    pub fortune: String,
    pub hoard: String,
}

impl TreasureRow {
    pub fn get(&self, disposition: TreasureDisposition) -> &str {
        match disposition {
            TreasureDisposition::Incidental => &self.incidental,
            TreasureDisposition::Using => &self.using,
            TreasureDisposition::Personal => &self.personal,
            TreasureDisposition::Stash => &self.stash,
            TreasureDisposition::Trove => &self.trove,
            TreasureDisposition::Fortune => &self.fortune,
            TreasureDisposition::Hoard => &self.hoard,
        }
    }

    /// Build a row from descriptions given in disposition order
    pub fn from_ordered(values: [&str; 7]) -> Self {
        let [incidental, using, personal, stash, trove, fortune, hoard] = values;
        Self {
            incidental: incidental.to_string(),
            using: using.to_string(),
            personal: personal.to_string(),
            stash: stash.to_string(),
            trove: trove.to_string(),
            fortune: fortune.to_string(),
            hoard: hoard.to_string(),
        }
    }
}
