//! Reference tables - Immutable lookup tables shared by every request
//!
//! Each table checks its invariants when it is built so the generators can
//! rely on them afterwards:
//! - `CrXpTable`: CRs contiguous from 1, XP positive and non-decreasing
//! - `BudgetTable`: character levels within 1..=20
//! - `TreasureTable`: keys are the ten CR bucket starts (1, 4, ..., 28)

use std::collections::BTreeMap;

use super::{BudgetRow, TreasureRow};

pub const MIN_CR: u32 = 1;
pub const MAX_CR: u32 = 30;
pub const MIN_CHARACTER_LEVEL: u32 = 1;
pub const MAX_CHARACTER_LEVEL: u32 = 20;

/// Width of a treasure bucket in CR steps
pub const TREASURE_BUCKET_WIDTH: u32 = 3;

/// Errors raised while building a reference table
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("CR {0} is outside the supported range 1-30")]
    CrOutOfDomain(u32),
    #[error("Character level {0} is outside the supported range 1-20")]
    LevelOutOfDomain(u32),
    #[error("Key {0} appears more than once")]
    DuplicateKey(u32),
    #[error("CR {0} has no XP value")]
    NonPositiveXp(u32),
    #[error("CR table is not contiguous: expected CR {expected}, found CR {found}")]
    NonContiguous { expected: u32, found: u32 },
    #[error("XP decreases from CR {previous_cr} to CR {cr}")]
    NonMonotonic { previous_cr: u32, cr: u32 },
    #[error("{0} is not a treasure bucket key")]
    InvalidBucket(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CrXp {
    cr: u32,
    xp: u32,
}

/// XP awarded per challenge rating, indexed for binary search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrXpTable {
    entries: Vec<CrXp>,
}

impl CrXpTable {
    /// A table with no entries, standing in for one that failed to load
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (u32, u32)>) -> Result<Self, TableError> {
        let mut entries: Vec<CrXp> = entries
            .into_iter()
            .map(|(cr, xp)| CrXp { cr, xp })
            .collect();
        entries.sort_by_key(|e| e.cr);

        let mut previous: Option<CrXp> = None;
        for (index, entry) in entries.iter().enumerate() {
            if !(MIN_CR..=MAX_CR).contains(&entry.cr) {
                return Err(TableError::CrOutOfDomain(entry.cr));
            }
            if entry.xp == 0 {
                return Err(TableError::NonPositiveXp(entry.cr));
            }
            if let Some(prev) = previous {
                if prev.cr == entry.cr {
                    return Err(TableError::DuplicateKey(entry.cr));
                }
                if entry.xp < prev.xp {
                    return Err(TableError::NonMonotonic {
                        previous_cr: prev.cr,
                        cr: entry.cr,
                    });
                }
            }
            let expected = MIN_CR + index as u32;
            if entry.cr != expected {
                return Err(TableError::NonContiguous {
                    expected,
                    found: entry.cr,
                });
            }
            previous = Some(*entry);
        }

        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, cr: u32) -> bool {
        self.xp_of(cr).is_some()
    }

    /// XP value of a single creature of the given CR
    pub fn xp_of(&self, cr: u32) -> Option<u32> {
        // contiguous from MIN_CR, so the CR is its own index
        let index = cr.checked_sub(MIN_CR)? as usize;
        self.entries.get(index).map(|e| e.xp)
    }

    /// Largest CR whose XP value fits within `budget`
    pub fn highest_cr_within(&self, budget: u32) -> Option<u32> {
        let fitting = self.entries.partition_point(|e| e.xp <= budget);
        fitting.checked_sub(1).map(|i| self.entries[i].cr)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.entries.iter().map(|e| (e.cr, e.xp))
    }
}

/// Per-character XP budget by level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetTable {
    rows: BTreeMap<u32, BudgetRow>,
}

impl BudgetTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: impl IntoIterator<Item = (u32, BudgetRow)>) -> Result<Self, TableError> {
        let mut table = BTreeMap::new();
        for (level, row) in rows {
            if !(MIN_CHARACTER_LEVEL..=MAX_CHARACTER_LEVEL).contains(&level) {
                return Err(TableError::LevelOutOfDomain(level));
            }
            if table.insert(level, row).is_some() {
                return Err(TableError::DuplicateKey(level));
            }
        }
        Ok(Self { rows: table })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, level: u32) -> Option<&BudgetRow> {
        self.rows.get(&level)
    }
}

/// Treasure descriptions keyed by CR bucket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreasureTable {
    rows: BTreeMap<u32, TreasureRow>,
}

impl TreasureTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: impl IntoIterator<Item = (u32, TreasureRow)>) -> Result<Self, TableError> {
        let mut table = BTreeMap::new();
        for (bucket, row) in rows {
            if !is_bucket_key(bucket) {
                return Err(TableError::InvalidBucket(bucket));
            }
            if table.insert(bucket, row).is_some() {
                return Err(TableError::DuplicateKey(bucket));
            }
        }
        Ok(Self { rows: table })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, bucket: u32) -> Option<&TreasureRow> {
        self.rows.get(&bucket)
    }
}

fn is_bucket_key(key: u32) -> bool {
    (MIN_CR..=MAX_CR).contains(&key) && (key - MIN_CR) % TREASURE_BUCKET_WIDTH == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xp_table() -> CrXpTable {
        CrXpTable::from_entries([(1, 200), (2, 450), (3, 700), (4, 1100)]).unwrap()
    }

    #[test]
    fn test_xp_lookup() {
        let table = xp_table();
        assert_eq!(table.xp_of(1), Some(200));
        assert_eq!(table.xp_of(4), Some(1100));
        assert_eq!(table.xp_of(0), None);
        assert_eq!(table.xp_of(5), None);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_highest_cr_within() {
        let table = xp_table();
        assert_eq!(table.highest_cr_within(199), None);
        assert_eq!(table.highest_cr_within(200), Some(1));
        assert_eq!(table.highest_cr_within(699), Some(2));
        assert_eq!(table.highest_cr_within(700), Some(3));
        assert_eq!(table.highest_cr_within(1_000_000), Some(4));
        assert_eq!(CrXpTable::empty().highest_cr_within(1_000), None);
    }

    #[test]
    fn test_entries_are_sorted_on_load() {
        let table = CrXpTable::from_entries([(3, 700), (1, 200), (2, 450)]).unwrap();
        assert_eq!(table.iter().map(|(cr, _)| cr).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_rejects_gap() {
        let err = CrXpTable::from_entries([(1, 200), (3, 700)]).unwrap_err();
        assert_eq!(err, TableError::NonContiguous { expected: 2, found: 3 });

        let err = CrXpTable::from_entries([(2, 450)]).unwrap_err();
        assert_eq!(err, TableError::NonContiguous { expected: 1, found: 2 });
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            CrXpTable::from_entries([(1, 200), (2, 100)]).unwrap_err(),
            TableError::NonMonotonic { previous_cr: 1, cr: 2 }
        );
        assert_eq!(
            CrXpTable::from_entries([(1, 0)]).unwrap_err(),
            TableError::NonPositiveXp(1)
        );
        assert_eq!(
            CrXpTable::from_entries([(1, 200), (1, 200)]).unwrap_err(),
            TableError::DuplicateKey(1)
        );
        assert_eq!(
            CrXpTable::from_entries([(31, 200)]).unwrap_err(),
            TableError::CrOutOfDomain(31)
        );
    }

    #[test]
    fn test_budget_table_domain() {
        assert!(BudgetTable::from_rows([(1, BudgetRow::new(50, 75, 100))]).is_ok());
        assert_eq!(
            BudgetTable::from_rows([(21, BudgetRow::new(1, 2, 3))]).unwrap_err(),
            TableError::LevelOutOfDomain(21)
        );
        assert_eq!(
            BudgetTable::from_rows([
                (2, BudgetRow::new(1, 2, 3)),
                (2, BudgetRow::new(1, 2, 3)),
            ])
            .unwrap_err(),
            TableError::DuplicateKey(2)
        );
    }

    #[test]
    fn test_treasure_table_keys() {
        let row = TreasureRow::from_ordered(["a", "b", "c", "d", "e", "f", "g"]);
        assert!(TreasureTable::from_rows([(1, row.clone()), (28, row.clone())]).is_ok());
        assert_eq!(
            TreasureTable::from_rows([(2, row)]).unwrap_err(),
            TableError::InvalidBucket(2)
        );
    }
}
