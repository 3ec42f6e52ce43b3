use serde::{Deserialize, Serialize};

use super::ToolError;
use crate::domain::value_objects::TreasureDisposition;

/// Request to generate treasure for a CR and disposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureQuery {
    pub cr: i64,
    #[serde(default)]
    pub disposition: Option<TreasureDisposition>,
}

impl TreasureQuery {
    pub fn new(cr: i64, disposition: TreasureDisposition) -> Self {
        Self {
            cr,
            disposition: Some(disposition),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasureResult {
    pub query: TreasureQuery,
    pub treasure: Option<String>,
    pub error: Option<ToolError>,
}

impl TreasureResult {
    pub fn success(query: TreasureQuery, treasure: String) -> Self {
        Self {
            query,
            treasure: Some(treasure),
            error: None,
        }
    }

    pub fn failed(query: TreasureQuery, error: ToolError) -> Self {
        Self {
            query,
            treasure: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
