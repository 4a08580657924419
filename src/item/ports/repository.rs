//! Repository port for item persistence and lookup.

use crate::item::domain::{Item, ItemDetails, ItemId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for item repository operations.
pub type ItemRepositoryResult<T> = Result<T, ItemRepositoryError>;

/// Item persistence contract.
///
/// Identifiers are assigned by the repository on creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Stores a new item and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ItemRepositoryError::Persistence`] when the store is
    /// unavailable.
    async fn store(
        &self,
        details: &ItemDetails,
        recorded_at: DateTime<Utc>,
    ) -> ItemRepositoryResult<Item>;

    /// Finds an item by identifier.
    ///
    /// Returns `None` when the item does not exist.
    async fn find_by_id(&self, id: ItemId) -> ItemRepositoryResult<Option<Item>>;

    /// Returns every stored item ordered by identifier.
    async fn find_all(&self) -> ItemRepositoryResult<Vec<Item>>;

    /// Replaces the details of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemRepositoryError::NotFound`] when the item does not exist.
    async fn update(
        &self,
        id: ItemId,
        details: &ItemDetails,
        updated_at: DateTime<Utc>,
    ) -> ItemRepositoryResult<Item>;
}

/// Errors returned by item repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ItemRepositoryError {
    /// The item was not found.
    #[error("item not found: {0}")]
    NotFound(ItemId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ItemRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
