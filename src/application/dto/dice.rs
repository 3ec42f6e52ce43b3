use serde::{Deserialize, Serialize};

use super::ToolError;
use crate::domain::value_objects::DiceType;

/// Request to roll `quantity` dice of one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollQuery {
    #[serde(default)]
    pub dice_type: Option<DiceType>,
    pub quantity: i64,
}

impl DiceRollQuery {
    pub fn new(dice_type: DiceType, quantity: i64) -> Self {
        Self {
            dice_type: Some(dice_type),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRollResult {
    pub query: DiceRollQuery,
    pub rolls: Vec<u32>,
    pub total: u64,
    pub error: Option<ToolError>,
}

impl DiceRollResult {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
