//! Domain layer - Core game rules with no external dependencies
//!
//! This layer contains:
//! - Value Objects: difficulty tiers, treasure dispositions, dice, reference tables
//! - Domain Services: XP budget, CR composition, treasure bucketing

pub mod services;
pub mod value_objects;
