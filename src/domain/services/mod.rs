//! Domain services - Pure rules operating on the reference tables

mod budget_calculator;
mod cr_composer;
mod treasure_bucket;

pub use budget_calculator::{compute_budget, BudgetError};
pub use cr_composer::{compose_crs, CompositionError, MIN_MONSTER_XP_THRESHOLD};
pub use treasure_bucket::{lookup_treasure, map_cr_to_bucket, BucketError, TreasureLookupError};
