//! # inventory-adapter-storage-memory
//!
//! Process-lifetime item store.
//!
//! ## Responsibilities
//! - Implement the `ItemRepository` port defined in `inventory-app::ports::storage`
//! - Hold the item sequence and the id counter behind a single exclusive lock
//!
//! ## Dependency rule
//! Depends on `inventory-app` (for port traits) and `inventory-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod item_repo;

pub use error::StorageError;
pub use item_repo::InMemoryItemRepository;
