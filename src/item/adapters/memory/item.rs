//! In-memory repository for items.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::item::{
    domain::{Item, ItemDetails, ItemId},
    ports::{ItemRepository, ItemRepositoryError, ItemRepositoryResult},
};

/// Thread-safe in-memory item repository.
///
/// Identifiers are assigned from a sequence starting at 1.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemRepository {
    state: Arc<RwLock<InMemoryItemState>>,
}

#[derive(Debug, Default)]
struct InMemoryItemState {
    items: BTreeMap<ItemId, Item>,
    last_id: Option<ItemId>,
}

impl InMemoryItemState {
    fn next_id(&mut self) -> ItemId {
        let id = self.last_id.map_or_else(|| ItemId::new(1), ItemId::next);
        self.last_id = Some(id);
        id
    }
}

impl InMemoryItemRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored item and restarts the identifier sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ItemRepositoryError::Persistence`] when the state lock is
    /// poisoned.
    pub fn clear(&self) -> ItemRepositoryResult<()> {
        let mut state = self.write()?;
        state.items.clear();
        state.last_id = None;
        Ok(())
    }

    fn read(&self) -> ItemRepositoryResult<RwLockReadGuard<'_, InMemoryItemState>> {
        self.state.read().map_err(|err| {
            ItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> ItemRepositoryResult<RwLockWriteGuard<'_, InMemoryItemState>> {
        self.state.write().map_err(|err| {
            ItemRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn store(
        &self,
        details: &ItemDetails,
        recorded_at: DateTime<Utc>,
    ) -> ItemRepositoryResult<Item> {
        let mut state = self.write()?;
        let id = state.next_id();
        let item = Item::new(id, details.clone(), recorded_at);
        state.items.insert(id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: ItemId) -> ItemRepositoryResult<Option<Item>> {
        let state = self.read()?;
        Ok(state.items.get(&id).cloned())
    }

    async fn find_all(&self) -> ItemRepositoryResult<Vec<Item>> {
        let state = self.read()?;
        Ok(state.items.values().cloned().collect())
    }

    async fn update(
        &self,
        id: ItemId,
        details: &ItemDetails,
        updated_at: DateTime<Utc>,
    ) -> ItemRepositoryResult<Item> {
        let mut state = self.write()?;
        let item = state
            .items
            .get_mut(&id)
            .ok_or(ItemRepositoryError::NotFound(id))?;
        item.apply_update(details.clone(), updated_at);
        Ok(item.clone())
    }
}
