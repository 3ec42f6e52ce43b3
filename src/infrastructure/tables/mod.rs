//! In-memory reference table provider

mod srd_2024;

use crate::application::ports::outbound::ReferenceTablePort;
use crate::domain::value_objects::{
    BudgetTable, CrXpTable, TableError, TreasureRow, TreasureTable,
};

/// Reference tables held in memory for the life of the process
#[derive(Debug, Clone)]
pub struct StaticReferenceTables {
    xp_by_cr: CrXpTable,
    xp_budget_per_level: BudgetTable,
    treasure_by_bucket: TreasureTable,
}

impl StaticReferenceTables {
    pub fn new(
        xp_by_cr: CrXpTable,
        xp_budget_per_level: BudgetTable,
        treasure_by_bucket: TreasureTable,
    ) -> Self {
        Self {
            xp_by_cr,
            xp_budget_per_level,
            treasure_by_bucket,
        }
    }

    /// The bundled SRD tables, validated on construction
    pub fn srd() -> Result<Self, TableError> {
        let xp_by_cr = CrXpTable::from_entries(srd_2024::XP_BY_CR)?;
        let xp_budget_per_level = BudgetTable::from_rows(srd_2024::XP_BUDGET_PER_LEVEL)?;
        let treasure_by_bucket = TreasureTable::from_rows(
            srd_2024::TREASURE_BY_BUCKET
                .into_iter()
                .map(|(bucket, row)| (bucket, TreasureRow::from_ordered(row))),
        )?;

        tracing::info!(
            crs = xp_by_cr.len(),
            "Loaded SRD reference tables"
        );
        Ok(Self::new(xp_by_cr, xp_budget_per_level, treasure_by_bucket))
    }
}

impl ReferenceTablePort for StaticReferenceTables {
    fn xp_by_cr(&self) -> &CrXpTable {
        &self.xp_by_cr
    }

    fn xp_budget_per_level(&self) -> &BudgetTable {
        &self.xp_budget_per_level
    }

    fn treasure_by_bucket(&self) -> &TreasureTable {
        &self.treasure_by_bucket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::{map_cr_to_bucket, MIN_MONSTER_XP_THRESHOLD};
    use crate::domain::value_objects::{
        DifficultyTier, TreasureDisposition, MAX_CHARACTER_LEVEL, MAX_CR, MIN_CHARACTER_LEVEL,
        MIN_CR,
    };

    #[test]
    fn test_srd_tables_are_complete() {
        let tables = StaticReferenceTables::srd().unwrap();

        assert_eq!(tables.xp_by_cr().len(), MAX_CR as usize);
        for level in MIN_CHARACTER_LEVEL..=MAX_CHARACTER_LEVEL {
            assert!(tables.xp_budget_per_level().row(level).is_some(), "level {level}");
        }
        for cr in MIN_CR..=MAX_CR {
            let bucket = map_cr_to_bucket(i64::from(cr)).unwrap();
            assert!(tables.treasure_by_bucket().row(bucket).is_some(), "cr {cr}");
        }
    }

    #[test]
    fn test_cr_one_matches_encounter_threshold() {
        let tables = StaticReferenceTables::srd().unwrap();
        assert_eq!(tables.xp_by_cr().xp_of(1), Some(MIN_MONSTER_XP_THRESHOLD));
    }

    #[test]
    fn test_budget_tiers_rise_with_difficulty() {
        let tables = StaticReferenceTables::srd().unwrap();
        for level in MIN_CHARACTER_LEVEL..=MAX_CHARACTER_LEVEL {
            let row = tables.xp_budget_per_level().row(level).unwrap();
            assert!(row.xp_for(DifficultyTier::Low) < row.xp_for(DifficultyTier::Moderate));
            assert!(row.xp_for(DifficultyTier::Moderate) < row.xp_for(DifficultyTier::High));
        }
    }

    #[test]
    fn test_every_treasure_cell_is_filled() {
        let tables = StaticReferenceTables::srd().unwrap();
        for (bucket, _) in srd_2024::TREASURE_BY_BUCKET {
            let row = tables.treasure_by_bucket().row(bucket).unwrap();
            for disposition in TreasureDisposition::ALL {
                assert!(!row.get(disposition).is_empty());
            }
        }
    }
}
