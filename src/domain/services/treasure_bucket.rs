//! Treasure table bucketing
//!
//! The treasure table groups CRs in threes: 1-3, 4-6, ..., 28-30. Each group
//! is keyed by its lowest CR.

use crate::domain::value_objects::{
    TreasureDisposition, TreasureTable, MAX_CR, MIN_CR, TREASURE_BUCKET_WIDTH,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("CR {0} is outside the treasure table range 1-30")]
pub struct BucketError(pub i64);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreasureLookupError {
    #[error("Treasure table is empty")]
    TableUnavailable,
    #[error("Treasure table has no row for bucket {0}")]
    MissingBucket(u32),
}

/// Map a CR to the key of the treasure bucket containing it
pub fn map_cr_to_bucket(cr: i64) -> Result<u32, BucketError> {
    if cr < i64::from(MIN_CR) || cr > i64::from(MAX_CR) {
        return Err(BucketError(cr));
    }
    let bucket_index = (cr as u32 - MIN_CR) / TREASURE_BUCKET_WIDTH;
    Ok(MIN_CR + TREASURE_BUCKET_WIDTH * bucket_index)
}

/// Treasure description for a bucket and disposition
pub fn lookup_treasure(
    table: &TreasureTable,
    bucket: u32,
    disposition: TreasureDisposition,
) -> Result<&str, TreasureLookupError> {
    if table.is_empty() {
        return Err(TreasureLookupError::TableUnavailable);
    }
    table
        .row(bucket)
        .map(|row| row.get(disposition))
        .ok_or(TreasureLookupError::MissingBucket(bucket))
}
