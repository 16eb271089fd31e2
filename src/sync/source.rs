use crate::catalog::model::Catalog;
use crate::sheets::api::FetchError;
use async_trait::async_trait;

/// Somewhere a fresh catalog can be read from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// A disabled source is never fetched from.
    fn is_enabled(&self) -> bool {
        true
    }

    async fn fetch(&self) -> Result<Catalog, FetchError>;
}
