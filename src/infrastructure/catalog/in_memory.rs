//! In-memory monster catalog

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::srd_monsters::SRD_MONSTERS;
use crate::application::ports::outbound::{CatalogError, MonsterCatalogPort};

/// Monster names grouped by CR.
///
/// The owning host fills it during startup (`srd()`, `from_entries()` or
/// `ingest()`); generators only read.
#[derive(Debug, Default)]
pub struct InMemoryMonsterCatalog {
    by_cr: RwLock<HashMap<u32, Vec<String>>>,
}

impl InMemoryMonsterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<N: Into<String>>(entries: impl IntoIterator<Item = (N, u32)>) -> Self {
        let mut by_cr: HashMap<u32, Vec<String>> = HashMap::new();
        for (name, cr) in entries {
            by_cr.entry(cr).or_default().push(name.into());
        }
        for names in by_cr.values_mut() {
            names.sort();
            names.dedup();
        }
        Self {
            by_cr: RwLock::new(by_cr),
        }
    }

    /// Catalog seeded with the bundled SRD monsters
    pub fn srd() -> Self {
        let catalog = Self::from_entries(SRD_MONSTERS.iter().copied());
        tracing::info!(monsters = SRD_MONSTERS.len(), "Loaded SRD monster catalog");
        catalog
    }

    /// Add a monster. Re-adding an existing name at the same CR is a no-op.
    pub async fn ingest(&self, name: impl Into<String>, cr: u32) {
        let name = name.into();
        let mut by_cr = self.by_cr.write().await;
        let names = by_cr.entry(cr).or_default();
        if let Err(pos) = names.binary_search(&name) {
            names.insert(pos, name);
        }
    }

    /// Total number of monsters across every CR
    pub async fn len(&self) -> usize {
        self.by_cr.read().await.values().map(Vec::len).sum()
    }
}

#[async_trait]
impl MonsterCatalogPort for InMemoryMonsterCatalog {
    async fn find_names_by_cr(&self, cr: u32) -> Result<Vec<String>, CatalogError> {
        Ok(self
            .by_cr
            .read()
            .await
            .get(&cr)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_is_sorted_and_exact() {
        let catalog = InMemoryMonsterCatalog::from_entries([
            ("Owlbear", 3),
            ("Basilisk", 3),
            ("Ogre", 2),
        ]);
        assert_eq!(
            catalog.find_names_by_cr(3).await.unwrap(),
            vec!["Basilisk".to_string(), "Owlbear".to_string()]
        );
        assert_eq!(catalog.find_names_by_cr(2).await.unwrap(), vec!["Ogre".to_string()]);
        assert!(catalog.find_names_by_cr(4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ingest_keeps_order_and_skips_duplicates() {
        let catalog = InMemoryMonsterCatalog::new();
        catalog.ingest("Troll", 5).await;
        catalog.ingest("Gorgon", 5).await;
        catalog.ingest("Troll", 5).await;

        assert_eq!(
            catalog.find_names_by_cr(5).await.unwrap(),
            vec!["Gorgon".to_string(), "Troll".to_string()]
        );
        assert_eq!(catalog.len().await, 2);
    }

    #[tokio::test]
    async fn test_srd_catalog_covers_low_crs() {
        let catalog = InMemoryMonsterCatalog::srd();
        for cr in 1..=17 {
            assert!(
                !catalog.find_names_by_cr(cr).await.unwrap().is_empty(),
                "no SRD monsters at CR {cr}"
            );
        }
        assert_eq!(
            catalog.find_names_by_cr(30).await.unwrap(),
            vec!["Tarrasque".to_string()]
        );
    }
}
