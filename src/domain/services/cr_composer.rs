//! Random decomposition of an XP budget into monster challenge ratings
//!
//! Each step draws a CR uniformly from `1..=k`, where `k` is the largest CR
//! the remaining budget can still afford, then spends that CR's XP. Drawing
//! below `k` keeps encounters varied instead of always producing one big
//! monster; the result is not a tight packing of the budget.

use crate::domain::value_objects::{CrXpTable, MIN_CR};

/// XP of a CR 1 creature. Budgets below this are not worth a random encounter
/// and composition stops once the remaining budget drops under it.
pub const MIN_MONSTER_XP_THRESHOLD: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompositionError {
    #[error("CR to XP table is empty")]
    TableUnavailable,
    #[error("Drawn CR {0} has no XP value")]
    MissingCr(u32),
}

/// Compose an ordered list of CRs for `budget`.
///
/// `draw(min, max)` must return a uniformly distributed integer in
/// `min..=max`; out-of-range values are clamped. An empty list is a valid
/// outcome for budgets under [`MIN_MONSTER_XP_THRESHOLD`].
pub fn compose_crs(
    table: &CrXpTable,
    budget: u32,
    mut draw: impl FnMut(u32, u32) -> u32,
) -> Result<Vec<u32>, CompositionError> {
    if table.is_empty() {
        return Err(CompositionError::TableUnavailable);
    }

    let mut selected = Vec::new();
    let mut remaining = budget;

    while remaining >= MIN_MONSTER_XP_THRESHOLD {
        let Some(upper) = table.highest_cr_within(remaining) else {
            // CR 1 costs more than the threshold
            break;
        };

        let cr = draw(MIN_CR, upper).clamp(MIN_CR, upper);
        let xp = table.xp_of(cr).ok_or(CompositionError::MissingCr(cr))?;

        selected.push(cr);
        // xp(cr) <= xp(upper) <= remaining since XP never decreases with CR
        remaining -= xp;
    }

    Ok(selected)
}
