//! Service layer for item registration, lookup, and editing.

use crate::item::{
    domain::{Item, ItemDetails, ItemId},
    ports::{ItemRepository, ItemRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for item operations.
#[derive(Debug, Error)]
pub enum ItemServiceError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ItemRepositoryError),
}

impl ItemServiceError {
    /// Returns `true` when the error reports a missing item.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repository(ItemRepositoryError::NotFound(_)))
    }
}

/// Result type for item service operations.
pub type ItemServiceResult<T> = Result<T, ItemServiceError>;

/// Item orchestration service.
///
/// The repository may be a trait object so that the HTTP layer can hold the
/// service without naming a concrete adapter.
pub struct ItemService<R, C>
where
    R: ItemRepository + ?Sized,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for ItemService<R, C>
where
    R: ItemRepository + ?Sized,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> ItemService<R, C>
where
    R: ItemRepository + ?Sized,
    C: Clock + Send + Sync,
{
    /// Creates a new item service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Stores a new item and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::Repository`] when persistence fails.
    pub async fn register(&self, details: ItemDetails) -> ItemServiceResult<Item> {
        let item = self.repository.store(&details, self.clock.utc()).await?;
        Ok(item)
    }

    /// Retrieves an item by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ItemRepositoryError::NotFound`] (wrapped) when the item does
    /// not exist, or the repository failure otherwise.
    pub async fn find(&self, id: ItemId) -> ItemServiceResult<Item> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ItemServiceError::Repository(ItemRepositoryError::NotFound(id)))
    }

    /// Lists every item ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ItemServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> ItemServiceResult<Vec<Item>> {
        Ok(self.repository.find_all().await?)
    }

    /// Replaces the details of an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`ItemRepositoryError::NotFound`] (wrapped) when the item does
    /// not exist.
    pub async fn update(&self, id: ItemId, details: ItemDetails) -> ItemServiceResult<Item> {
        let item = self
            .repository
            .update(id, &details, self.clock.utc())
            .await?;
        Ok(item)
    }

    /// Stores each of `samples` in order.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first repository failure.
    pub async fn seed(&self, samples: Vec<ItemDetails>) -> ItemServiceResult<Vec<Item>> {
        let mut stored = Vec::new();
        for details in samples {
            stored.push(self.register(details).await?);
        }
        Ok(stored)
    }
}

/// The two sample items installed at startup when seeding is enabled.
#[must_use]
pub fn sample_items() -> Vec<ItemDetails> {
    vec![
        ItemDetails::new("itemA", 10_000, 10),
        ItemDetails::new("itemB", 20_000, 20),
    ]
}
