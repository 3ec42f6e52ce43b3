use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ToolError;
use crate::domain::value_objects::DifficultyTier;

/// Request to generate a random encounter
///
/// Levels are signed so out-of-range input reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterQuery {
    #[serde(default)]
    pub pcs: Vec<i64>,
    #[serde(default)]
    pub difficulty: Option<DifficultyTier>,
}

impl EncounterQuery {
    pub fn new(pcs: Vec<i64>, difficulty: DifficultyTier) -> Self {
        Self {
            pcs,
            difficulty: Some(difficulty),
        }
    }
}

/// Outcome of an encounter generation
///
/// `error` decides success. Other fields may be partially filled on failure
/// to aid diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterResult {
    pub query: EncounterQuery,
    pub total_party_budget: Option<u32>,
    pub encounter_crs: Option<Vec<u32>>,
    pub monsters_by_cr: Option<BTreeMap<u32, Vec<String>>>,
    pub error: Option<ToolError>,
}

impl EncounterResult {
    pub fn failed(query: EncounterQuery, error: ToolError) -> Self {
        Self {
            query,
            total_party_budget: None,
            encounter_crs: None,
            monsters_by_cr: None,
            error: Some(error),
        }
    }

    pub fn with_budget(mut self, budget: u32) -> Self {
        self.total_party_budget = Some(budget);
        self
    }

    pub fn with_crs(mut self, crs: Vec<u32>) -> Self {
        self.encounter_crs = Some(crs);
        self
    }

    pub fn with_monsters(mut self, monsters: BTreeMap<u32, Vec<String>>) -> Self {
        self.monsters_by_cr = Some(monsters);
        self
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
