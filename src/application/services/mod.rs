//! Application services - Use case implementations
//!
//! Each service accepts its port dependencies at construction and returns
//! result DTOs with any failure folded in, so nothing crosses the tool
//! boundary as an `Err` or a panic.

pub mod dice_roller_service;
pub mod encounter_service;
pub mod treasure_service;

pub use dice_roller_service::{DiceRollerService, DEFAULT_MAX_DICE_PER_ROLL};
pub use encounter_service::{EncounterGeneratorService, EncounterGeneratorServiceImpl};
pub use treasure_service::TreasureGeneratorService;
