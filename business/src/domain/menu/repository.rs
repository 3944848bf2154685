use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::MenuItem;

/// Read-only port to the menu catalog.
///
/// Implementations return a snapshot of the items currently orderable;
/// unavailable items are filtered out here, not by the suggestion engine.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn available_items(&self) -> Result<Vec<MenuItem>, CatalogError>;
}
