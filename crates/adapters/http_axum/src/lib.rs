//! # inventory-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Route `/items` and `/items/{id}` to the item use-cases
//! - Decode JSON request bodies and typed path ids, rejecting malformed input
//!   with `400` before any use-case runs
//! - Map application results into HTTP responses: JSON on success,
//!   plain-text status messages on failure
//!
//! ## Dependency rule
//! Depends on `inventory-app` (for port traits and services) and
//! `inventory-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;
