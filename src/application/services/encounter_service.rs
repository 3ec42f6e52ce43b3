//! Encounter Service - Random monster encounters from party levels
//!
//! Runs the pipeline validate -> budget -> threshold check -> CR composition
//! -> monster lookup. Every failure is folded into the returned
//! `EncounterResult`; internal causes are logged here and only the error
//! kind and a generic hint reach the caller.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

use crate::application::dto::{
    EncounterQuery, EncounterResult, ToolError, ToolErrorKind, INTERNAL_ENCOUNTER_ERROR_MESSAGE,
    INVALID_ENCOUNTER_QUERY_MESSAGE, PARTY_TOO_WEAK_MESSAGE,
};
use crate::application::ports::outbound::{
    CatalogError, MonsterCatalogPort, RandomPort, ReferenceTablePort,
};
use crate::domain::services::{compose_crs, compute_budget, MIN_MONSTER_XP_THRESHOLD};
use crate::domain::value_objects::{DifficultyTier, MAX_CHARACTER_LEVEL, MIN_CHARACTER_LEVEL};

/// Encounter generation use case
#[async_trait]
pub trait EncounterGeneratorService: Send + Sync {
    /// Generate a random encounter. Never fails; check `EncounterResult::error`.
    async fn generate_encounter(&self, query: EncounterQuery) -> EncounterResult;
}

/// Default implementation of EncounterGeneratorService using port abstractions
#[derive(Clone)]
pub struct EncounterGeneratorServiceImpl {
    tables: Arc<dyn ReferenceTablePort>,
    catalog: Arc<dyn MonsterCatalogPort>,
    random: Arc<dyn RandomPort>,
}

impl EncounterGeneratorServiceImpl {
    pub fn new(
        tables: Arc<dyn ReferenceTablePort>,
        catalog: Arc<dyn MonsterCatalogPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        Self {
            tables,
            catalog,
            random,
        }
    }

    /// Validate an encounter query, returning the levels and tier if usable
    fn validate_query(query: &EncounterQuery) -> Option<(Vec<u32>, DifficultyTier)> {
        let difficulty = query.difficulty?;
        if query.pcs.is_empty() {
            return None;
        }
        let levels = query
            .pcs
            .iter()
            .map(|&level| {
                u32::try_from(level)
                    .ok()
                    .filter(|l| (MIN_CHARACTER_LEVEL..=MAX_CHARACTER_LEVEL).contains(l))
            })
            .collect::<Option<Vec<u32>>>()?;
        Some((levels, difficulty))
    }

    /// Fetch monster names once per distinct CR
    async fn resolve_monsters(
        &self,
        crs: &[u32],
    ) -> Result<BTreeMap<u32, Vec<String>>, CatalogError> {
        let unique: BTreeSet<u32> = crs.iter().copied().collect();
        let mut monsters = BTreeMap::new();
        for cr in unique {
            let names = self.catalog.find_names_by_cr(cr).await?;
            debug!(cr, count = names.len(), "Resolved monsters for CR");
            monsters.insert(cr, names);
        }
        Ok(monsters)
    }
}

fn internal(kind: ToolErrorKind) -> ToolError {
    ToolError::new(kind, INTERNAL_ENCOUNTER_ERROR_MESSAGE)
}

#[async_trait]
impl EncounterGeneratorService for EncounterGeneratorServiceImpl {
    #[instrument(skip(self), fields(party_size = query.pcs.len()))]
    async fn generate_encounter(&self, query: EncounterQuery) -> EncounterResult {
        info!(?query, "Generating a random encounter");

        let Some((levels, difficulty)) = Self::validate_query(&query) else {
            warn!(?query, "Invalid random encounter query");
            return EncounterResult::failed(
                query,
                ToolError::new(ToolErrorKind::InvalidQuery, INVALID_ENCOUNTER_QUERY_MESSAGE),
            );
        };

        let budget = match compute_budget(self.tables.xp_budget_per_level(), &levels, difficulty) {
            Ok(budget) => budget,
            Err(e) => {
                error!(error = %e, "Failed to compute encounter budget");
                return EncounterResult::failed(query, internal(ToolErrorKind::InternalTableError));
            }
        };

        if budget < MIN_MONSTER_XP_THRESHOLD {
            warn!(
                budget,
                threshold = MIN_MONSTER_XP_THRESHOLD,
                "Encounter budget below minimum threshold, no encounter generated"
            );
            return EncounterResult::failed(
                query,
                ToolError::new(ToolErrorKind::PartyTooWeak, PARTY_TOO_WEAK_MESSAGE),
            )
            .with_budget(budget);
        }

        let composed = compose_crs(self.tables.xp_by_cr(), budget, |min, max| {
            self.random.random_range(min, max)
        });
        let crs = match composed {
            Ok(crs) if !crs.is_empty() => crs,
            Ok(crs) => {
                error!(budget, "CR list is empty when it should be populated");
                return EncounterResult::failed(
                    query,
                    internal(ToolErrorKind::InternalCompositionError),
                )
                .with_budget(budget)
                .with_crs(crs);
            }
            Err(e) => {
                error!(budget, error = %e, "Failed to compose encounter CRs");
                return EncounterResult::failed(
                    query,
                    internal(ToolErrorKind::InternalCompositionError),
                )
                .with_budget(budget);
            }
        };

        let monsters = match self.resolve_monsters(&crs).await {
            Ok(monsters) if monsters.values().any(|names| !names.is_empty()) => monsters,
            Ok(monsters) => {
                error!(?crs, "Monster catalog returned no monsters for any encounter CR");
                return EncounterResult::failed(query, internal(ToolErrorKind::InternalCatalogError))
                    .with_budget(budget)
                    .with_crs(crs)
                    .with_monsters(monsters);
            }
            Err(e) => {
                error!(?crs, error = %e, "Monster catalog lookup failed");
                return EncounterResult::failed(query, internal(ToolErrorKind::InternalCatalogError))
                    .with_budget(budget)
                    .with_crs(crs);
            }
        };

        info!(budget, ?crs, "Random encounter generated");
        EncounterResult {
            query,
            total_party_budget: Some(budget),
            encounter_crs: Some(crs),
            monsters_by_cr: Some(monsters),
            error: None,
        }
    }
}
