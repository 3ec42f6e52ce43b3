//! Reference table port - Read-only access to the rules tables
//!
//! Tables are loaded and validated once by the provider before any generator
//! call. An empty table means the provider failed to load it; generators
//! report that as an internal error and never try to reload.

use crate::domain::value_objects::{BudgetTable, CrXpTable, TreasureTable};

pub trait ReferenceTablePort: Send + Sync {
    /// XP value per challenge rating (CR 1-30)
    fn xp_by_cr(&self) -> &CrXpTable;

    /// Per-character XP budget by level (1-20) and difficulty tier
    fn xp_budget_per_level(&self) -> &BudgetTable;

    /// Treasure descriptions by CR bucket and disposition
    fn treasure_by_bucket(&self) -> &TreasureTable;
}
