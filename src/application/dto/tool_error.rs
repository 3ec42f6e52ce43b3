use serde::{Deserialize, Serialize};

pub const INVALID_ENCOUNTER_QUERY_MESSAGE: &str = "Encounter query must be an array of PC levels 1-20 and a difficulty level - L (low), M (moderate), H (high).";
pub const INTERNAL_ENCOUNTER_ERROR_MESSAGE: &str =
    "Internal error - Either generate an appropriate encounter yourself or try again later";
pub const PARTY_TOO_WEAK_MESSAGE: &str = "The total party level is too low to meet the minimum random encounter threshold. You should carefully plan an encounter for this weak group of PCs.";
pub const INVALID_TREASURE_QUERY_MESSAGE: &str =
    "Treasure query must have a CR 1-30 and a disposition - incidental, using, personal, stash, trove, fortune or hoard.";
pub const INTERNAL_TREASURE_ERROR_MESSAGE: &str =
    "Internal error in the treasure table - Generate your own treasure or try again later";

/// Category of a failed (or declined) generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolErrorKind {
    /// Caller input is malformed and can be corrected
    InvalidQuery,
    /// The party is too weak for a random encounter; not a fault
    PartyTooWeak,
    InternalTableError,
    InternalCompositionError,
    InternalCatalogError,
    RangeError,
    TableUnavailable,
    MissingBucket,
}

impl ToolErrorKind {
    /// Whether the caller can fix this by changing the query
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, Self::InvalidQuery | Self::RangeError)
    }

    /// Whether this is a fault at all, as opposed to a valid "nothing generated" outcome
    pub fn is_fault(&self) -> bool {
        !matches!(self, Self::PartyTooWeak)
    }
}

/// Error descriptor returned inline in tool results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolError {
    pub kind: ToolErrorKind,
    pub message: String,
}

impl ToolError {
    pub fn new(kind: ToolErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
