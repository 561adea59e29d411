//! # inventory-domain
//!
//! Pure domain model for the inventory tracker.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`ItemId`](id::ItemId) and error conventions
//! - Define **Items** and the shapes clients submit for them
//!   ([`NewItem`](item::NewItem) on create, [`ItemPatch`](item::ItemPatch) on update)
//! - Contain all invariant enforcement and partial-update rules
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod item;
