//! # inventory-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter implements:
//!   `ItemRepository`, the item store
//! - Define the **driving port** as a use-case struct:
//!   `ItemService`, which validates candidates and turns missing records into
//!   `NotFound` errors
//!
//! ## Dependency rule
//! Depends on `inventory-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
