//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::outbound::{MonsterCatalogPort, RandomPort, ReferenceTablePort};
use crate::application::services::{
    DiceRollerService, EncounterGeneratorServiceImpl, TreasureGeneratorService,
};
use crate::infrastructure::catalog::InMemoryMonsterCatalog;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::random::{SeededRandomAdapter, ThreadRngAdapter};
use crate::infrastructure::tables::StaticReferenceTables;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub tables: Arc<dyn ReferenceTablePort>,
    // Application services
    pub encounter_service: EncounterGeneratorServiceImpl,
    pub treasure_service: TreasureGeneratorService,
    pub dice_roller_service: DiceRollerService,
}

impl AppState {
    /// Wire the services over the bundled SRD tables and monster catalog
    pub fn new(config: AppConfig) -> Result<Self> {
        let tables = StaticReferenceTables::srd().context("bundled SRD tables are invalid")?;
        let catalog = InMemoryMonsterCatalog::srd();

        let random: Arc<dyn RandomPort> = match config.rng_seed {
            Some(seed) => {
                tracing::info!(seed, "Using seeded RNG");
                Arc::new(SeededRandomAdapter::new(seed))
            }
            None => Arc::new(ThreadRngAdapter),
        };

        Ok(Self::with_collaborators(
            config,
            Arc::new(tables),
            Arc::new(catalog),
            random,
        ))
    }

    /// Wire the services over host-provided adapters
    pub fn with_collaborators(
        config: AppConfig,
        tables: Arc<dyn ReferenceTablePort>,
        catalog: Arc<dyn MonsterCatalogPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let encounter_service =
            EncounterGeneratorServiceImpl::new(tables.clone(), catalog, random.clone());
        let treasure_service = TreasureGeneratorService::new(tables.clone());
        let dice_roller_service = DiceRollerService::new(random, config.max_dice_per_roll);

        Self {
            config,
            tables,
            encounter_service,
            treasure_service,
            dice_roller_service,
        }
    }
}
