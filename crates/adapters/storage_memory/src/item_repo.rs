//! In-memory implementation of [`ItemRepository`].

use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use inventory_app::ports::ItemRepository;
use inventory_domain::error::InventoryError;
use inventory_domain::id::ItemId;
use inventory_domain::item::{Item, ItemPatch, NewItem};

use crate::error::StorageError;

/// Items in insertion order plus the next id to hand out.
///
/// `next_id` is strictly greater than every id ever issued, including ids of
/// deleted items.
#[derive(Debug)]
struct Inventory {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Inventory {
    fn insert(&mut self, new: NewItem) -> Item {
        let item = Item::from_new(self.next_id, new);
        self.next_id = self.next_id.successor();
        self.items.push(item.clone());
        item
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

/// Item store guarded by one exclusive lock.
///
/// Every operation holds the lock for its whole duration and releases it
/// before the returned future is polled, so operations never interleave and
/// the lock is never held across an `.await`.
#[derive(Debug)]
pub struct InMemoryItemRepository {
    inner: Mutex<Inventory>,
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inventory {
                items: Vec::new(),
                next_id: ItemId::FIRST,
            }),
        }
    }
}

impl InMemoryItemRepository {
    /// Create an empty store whose first item will get id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inventory>, InventoryError> {
        self.inner.lock().map_err(|_| {
            tracing::error!("item store lock poisoned");
            StorageError::Poisoned.into()
        })
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, InventoryError>> + Send {
        let result = self.lock().map(|mut inventory| inventory.insert(item));
        if let Ok(item) = &result {
            tracing::debug!(id = %item.id, "item created");
        }
        async move { result }
    }

    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, InventoryError>> + Send {
        let result = self.lock().map(|inventory| {
            inventory
                .position(id)
                .map(|index| inventory.items[index].clone())
        });
        async move { result }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, InventoryError>> + Send {
        let result = self.lock().map(|inventory| inventory.items.clone());
        async move { result }
    }

    fn update(
        &self,
        id: ItemId,
        patch: ItemPatch,
    ) -> impl Future<Output = Result<Option<Item>, InventoryError>> + Send {
        let result = self.lock().map(|mut inventory| {
            let index = inventory.position(id)?;
            let item = &mut inventory.items[index];
            item.apply(patch);
            tracing::debug!(%id, "item updated");
            Some(item.clone())
        });
        async move { result }
    }

    fn delete(&self, id: ItemId) -> impl Future<Output = Result<bool, InventoryError>> + Send {
        let result = self.lock().map(|mut inventory| match inventory.position(id) {
            Some(index) => {
                inventory.items.remove(index);
                tracing::debug!(%id, "item deleted");
                true
            }
            None => false,
        });
        async move { result }
    }
}
