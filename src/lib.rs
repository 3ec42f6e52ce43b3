//! WrldBldr GM Tools - Encounter, treasure and dice generators for a GM assistant
//!
//! The crate follows the same hexagonal layout as the engine:
//! - `domain`: budget, CR composition and treasure bucket rules
//! - `application`: ports, DTOs and the generator services
//! - `infrastructure`: bundled tables, catalog, RNG adapters, config and wiring

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::dto::{
    DiceRollQuery, DiceRollResult, EncounterQuery, EncounterResult, ToolError, ToolErrorKind,
    TreasureQuery, TreasureResult,
};
pub use application::services::{
    DiceRollerService, EncounterGeneratorService, EncounterGeneratorServiceImpl,
    TreasureGeneratorService,
};
pub use domain::value_objects::{DiceType, DifficultyTier, TreasureDisposition};
pub use infrastructure::config::AppConfig;
pub use infrastructure::state::AppState;
