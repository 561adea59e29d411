//! Storage port: the item store.

use std::future::Future;

use inventory_domain::error::InventoryError;
use inventory_domain::id::ItemId;
use inventory_domain::item::{Item, ItemPatch, NewItem};

/// Store for [`Item`]s.
///
/// Implementations must run each method as one atomic step with respect to
/// every other method: no caller may observe a partially applied write.
pub trait ItemRepository {
    /// Assign the next id to an already validated candidate and append it.
    fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, InventoryError>> + Send;

    /// Get an item by its identifier.
    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<Item>, InventoryError>> + Send;

    /// Snapshot of every item in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, InventoryError>> + Send;

    /// Apply `patch` to the item with `id`, returning the result or `None`
    /// when no such item exists.
    fn update(
        &self,
        id: ItemId,
        patch: ItemPatch,
    ) -> impl Future<Output = Result<Option<Item>, InventoryError>> + Send;

    /// Remove the item with `id`. Returns `false` when nothing was removed.
    fn delete(&self, id: ItemId) -> impl Future<Output = Result<bool, InventoryError>> + Send;
}
