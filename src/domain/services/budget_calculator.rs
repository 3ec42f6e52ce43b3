//! Encounter XP budget from party levels

use crate::domain::value_objects::{BudgetTable, DifficultyTier};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    #[error("XP budget table is empty")]
    TableUnavailable,
    #[error("No XP budget entry for character level {level}")]
    MissingTableEntry { level: u32 },
    #[error("XP budget overflowed while summing the party")]
    Overflow,
}

/// Sum each character's XP threshold for the requested tier.
///
/// Fails as a whole if any level has no row; a partial sum would silently
/// under-budget the party. Level range checks belong to the caller.
pub fn compute_budget(
    table: &BudgetTable,
    levels: &[u32],
    difficulty: DifficultyTier,
) -> Result<u32, BudgetError> {
    if table.is_empty() {
        return Err(BudgetError::TableUnavailable);
    }

    levels.iter().try_fold(0u32, |total, &level| {
        let row = table
            .row(level)
            .ok_or(BudgetError::MissingTableEntry { level })?;
        total
            .checked_add(row.xp_for(difficulty))
            .ok_or(BudgetError::Overflow)
    })
}
