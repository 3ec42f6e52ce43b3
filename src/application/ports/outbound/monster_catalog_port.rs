use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog backend error: {0}")]
    Backend(String),
}

/// Monster lookup by challenge rating
#[async_trait]
pub trait MonsterCatalogPort: Send + Sync {
    /// Names of every monster with exactly this CR. May be empty.
    async fn find_names_by_cr(&self, cr: u32) -> Result<Vec<String>, CatalogError>;
}
