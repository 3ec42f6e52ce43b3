//! Data Transfer Objects - For the tool boundary
//!
//! DTOs live in the application layer so a transport host can
//! serialize/deserialize them directly.

mod dice;
mod encounter;
mod tool_error;
mod treasure;

pub use dice::{DiceRollQuery, DiceRollResult};
pub use encounter::{EncounterQuery, EncounterResult};
pub use tool_error::{
    ToolError, ToolErrorKind, INTERNAL_ENCOUNTER_ERROR_MESSAGE, INTERNAL_TREASURE_ERROR_MESSAGE,
    INVALID_ENCOUNTER_QUERY_MESSAGE, INVALID_TREASURE_QUERY_MESSAGE, PARTY_TOO_WEAK_MESSAGE,
};
pub use treasure::{TreasureQuery, TreasureResult};
