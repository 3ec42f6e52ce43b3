//! Treasure Service - Treasure descriptions by CR and disposition

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::application::dto::{
    ToolError, ToolErrorKind, TreasureQuery, TreasureResult, INTERNAL_TREASURE_ERROR_MESSAGE,
    INVALID_TREASURE_QUERY_MESSAGE,
};
use crate::application::ports::outbound::ReferenceTablePort;
use crate::domain::services::{lookup_treasure, map_cr_to_bucket, TreasureLookupError};

/// Service for looking up treasure in the bucketed treasure table
#[derive(Clone)]
pub struct TreasureGeneratorService {
    tables: Arc<dyn ReferenceTablePort>,
}

impl TreasureGeneratorService {
    pub fn new(tables: Arc<dyn ReferenceTablePort>) -> Self {
        Self { tables }
    }

    /// Generate treasure for a CR (1-30) and disposition.
    /// Never fails; check `TreasureResult::error`.
    #[instrument(skip(self))]
    pub fn generate_treasure(&self, query: TreasureQuery) -> TreasureResult {
        info!(?query, "New treasure generator query");

        let Some(disposition) = query.disposition else {
            warn!(?query, "Treasure query has no disposition");
            return TreasureResult::failed(
                query,
                ToolError::new(ToolErrorKind::InvalidQuery, INVALID_TREASURE_QUERY_MESSAGE),
            );
        };

        let bucket = match map_cr_to_bucket(query.cr) {
            Ok(bucket) => bucket,
            Err(e) => {
                warn!(error = %e, "Treasure query CR out of range");
                return TreasureResult::failed(
                    query,
                    ToolError::new(ToolErrorKind::RangeError, e.to_string()),
                );
            }
        };

        let treasure = match lookup_treasure(self.tables.treasure_by_bucket(), bucket, disposition) {
            Ok(treasure) => treasure.to_string(),
            Err(e) => {
                error!(bucket, error = %e, "Treasure table lookup failed");
                let kind = match e {
                    TreasureLookupError::TableUnavailable => ToolErrorKind::TableUnavailable,
                    TreasureLookupError::MissingBucket(_) => ToolErrorKind::MissingBucket,
                };
                return TreasureResult::failed(
                    query,
                    ToolError::new(kind, INTERNAL_TREASURE_ERROR_MESSAGE),
                );
            }
        };

        info!(bucket, %treasure, "Treasure generation completed");
        TreasureResult::success(query, treasure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{
        BudgetTable, CrXpTable, TreasureDisposition, TreasureRow, TreasureTable,
    };
    use crate::infrastructure::tables::StaticReferenceTables;

    fn service_with(treasure: TreasureTable) -> TreasureGeneratorService {
        TreasureGeneratorService::new(Arc::new(StaticReferenceTables::new(
            CrXpTable::empty(),
            BudgetTable::empty(),
            treasure,
        )))
    }

    fn partial_table() -> TreasureTable {
        TreasureTable::from_rows([
            (
                1,
                TreasureRow::from_ordered(["1 cp", "1 sp", "1 gp", "10 gp", "50 gp", "100 gp", "500 gp"]),
            ),
            (
                10,
                TreasureRow::from_ordered(["a", "b", "c", "d", "a trove", "f", "g"]),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_looks_up_bucket_and_disposition() {
        let service = service_with(partial_table());

        let result = service.generate_treasure(TreasureQuery::new(11, TreasureDisposition::Trove));
        assert!(result.is_success());
        assert_eq!(result.treasure.as_deref(), Some("a trove"));

        let result = service.generate_treasure(TreasureQuery::new(3, TreasureDisposition::Hoard));
        assert_eq!(result.treasure.as_deref(), Some("500 gp"));
    }

    #[test]
    fn test_cr_out_of_range() {
        let service = service_with(partial_table());
        for cr in [0, 31, -2] {
            let result = service.generate_treasure(TreasureQuery::new(cr, TreasureDisposition::Stash));
            assert_eq!(result.error.unwrap().kind, ToolErrorKind::RangeError);
            assert!(result.treasure.is_none());
        }
    }

    #[test]
    fn test_missing_disposition() {
        let service = service_with(partial_table());
        let result = service.generate_treasure(TreasureQuery {
            cr: 5,
            disposition: None,
        });
        assert_eq!(result.error.unwrap().kind, ToolErrorKind::InvalidQuery);
    }

    #[test]
    fn test_missing_bucket() {
        let service = service_with(partial_table());
        let result = service.generate_treasure(TreasureQuery::new(5, TreasureDisposition::Using));
        let error = result.error.unwrap();
        assert_eq!(error.kind, ToolErrorKind::MissingBucket);
        assert_eq!(error.message, INTERNAL_TREASURE_ERROR_MESSAGE);
    }

    #[test]
    fn test_empty_table() {
        let service = service_with(TreasureTable::empty());
        let result = service.generate_treasure(TreasureQuery::new(5, TreasureDisposition::Using));
        assert_eq!(result.error.unwrap().kind, ToolErrorKind::TableUnavailable);
    }
}
