//! Item service: use-cases for managing inventory items.

use inventory_domain::error::{InventoryError, NotFoundError};
use inventory_domain::id::ItemId;
use inventory_domain::item::{Item, ItemPatch, NewItem};

use crate::ports::ItemRepository;

fn not_found(id: ItemId) -> InventoryError {
    NotFoundError {
        entity: "Item",
        id: id.to_string(),
    }
    .into()
}

/// Application service for item CRUD operations.
pub struct ItemService<R> {
    repo: R,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate a candidate and store it under a freshly issued id.
    ///
    /// A rejected candidate never reaches the repository, so it does not
    /// consume an id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_item(&self, item: NewItem) -> Result<Item, InventoryError> {
        if let Err(err) = item.validate() {
            tracing::debug!(error = %err, "rejected item candidate");
            return Err(err);
        }
        self.repo.create(item).await
    }

    /// Look up an item by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_item(&self, id: ItemId) -> Result<Item, InventoryError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// List all items in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_items(&self) -> Result<Vec<Item>, InventoryError> {
        self.repo.get_all().await
    }

    /// Apply a partial update to an existing item.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    pub async fn update_item(&self, id: ItemId, patch: ItemPatch) -> Result<Item, InventoryError> {
        self.repo
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete an item by id.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::NotFound`] when no item with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_item(&self, id: ItemId) -> Result<(), InventoryError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_domain::error::ValidationError;
    use std::future::Future;
    use std::sync::Mutex;

    struct VecItemRepo {
        store: Mutex<(Vec<Item>, ItemId)>,
    }

    impl Default for VecItemRepo {
        fn default() -> Self {
            Self {
                store: Mutex::new((Vec::new(), ItemId::FIRST)),
            }
        }
    }

    impl ItemRepository for VecItemRepo {
        fn create(&self, item: NewItem) -> impl Future<Output = Result<Item, InventoryError>> + Send {
            let mut store = self.store.lock().unwrap();
            let item = Item::from_new(store.1, item);
            store.1 = store.1.successor();
            store.0.push(item.clone());
            async move { Ok(item) }
        }

        fn get_by_id(
            &self,
            id: ItemId,
        ) -> impl Future<Output = Result<Option<Item>, InventoryError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.0.iter().find(|i| i.id == id).cloned();
            async move { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<Item>, InventoryError>> + Send {
            let store = self.store.lock().unwrap();
            let result = store.0.clone();
            async move { Ok(result) }
        }

        fn update(
            &self,
            id: ItemId,
            patch: ItemPatch,
        ) -> impl Future<Output = Result<Option<Item>, InventoryError>> + Send {
            let mut store = self.store.lock().unwrap();
            let result = store.0.iter_mut().find(|i| i.id == id).map(|item| {
                item.apply(patch);
                item.clone()
            });
            async move { Ok(result) }
        }

        fn delete(&self, id: ItemId) -> impl Future<Output = Result<bool, InventoryError>> + Send {
            let mut store = self.store.lock().unwrap();
            let before = store.0.len();
            store.0.retain(|i| i.id != id);
            let removed = store.0.len() != before;
            async move { Ok(removed) }
        }
    }

    fn make_service() -> ItemService<VecItemRepo> {
        ItemService::new(VecItemRepo::default())
    }

    fn widget() -> NewItem {
        NewItem::builder()
            .name("Widget")
            .quantity(5)
            .price(2.5)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_item_when_valid() {
        let svc = make_service();

        let created = svc.create_item(widget()).await.unwrap();
        assert_eq!(created.id, ItemId::FIRST);

        let fetched = svc.get_item(created.id).await.unwrap();
        assert_eq!(fetched.name, "Widget");
    }

    #[tokio::test]
    async fn should_not_consume_an_id_when_candidate_is_rejected() {
        let svc = make_service();
        let blank = NewItem {
            name: "  ".to_string(),
            ..NewItem::default()
        };

        let result = svc.create_item(blank).await;
        assert!(matches!(
            result,
            Err(InventoryError::Validation(ValidationError::EmptyName))
        ));
        assert!(svc.list_items().await.unwrap().is_empty());

        let created = svc.create_item(widget()).await.unwrap();
        assert_eq!(created.id, ItemId::FIRST);
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let svc = make_service();
        let result = svc.get_item(ItemId::from_raw(9)).await;
        assert!(matches!(result, Err(InventoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_list_items_in_creation_order() {
        let svc = make_service();
        for name in ["a", "b", "c"] {
            svc.create_item(NewItem::builder().name(name).build().unwrap())
                .await
                .unwrap();
        }

        let names: Vec<String> = svc
            .list_items()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn should_update_item() {
        let svc = make_service();
        let created = svc.create_item(widget()).await.unwrap();

        let patch = ItemPatch {
            name: Some("Gadget".to_string()),
            ..ItemPatch::default()
        };
        let updated = svc.update_item(created.id, patch).await.unwrap();
        assert_eq!(updated.name, "Gadget");
        assert_eq!(updated.quantity, 5);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_item() {
        let svc = make_service();
        let result = svc
            .update_item(ItemId::from_raw(3), ItemPatch::default())
            .await;
        assert!(matches!(result, Err(InventoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_delete_item() {
        let svc = make_service();
        let created = svc.create_item(widget()).await.unwrap();

        svc.delete_item(created.id).await.unwrap();

        let result = svc.get_item(created.id).await;
        assert!(matches!(result, Err(InventoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_twice() {
        let svc = make_service();
        let created = svc.create_item(widget()).await.unwrap();

        svc.delete_item(created.id).await.unwrap();
        let result = svc.delete_item(created.id).await;
        assert!(matches!(result, Err(InventoryError::NotFound(_))));
    }
}
