//! Core domain types and port definitions for the Onset Nation catalog.
//!
//! This crate holds the storefront's catalog synchronization logic:
//! the product domain model with its hardcoded seed list, the in-process
//! [`CatalogCache`], the [`CatalogService`] that keeps the cache consistent
//! with a remote document store, and the [`AccessGate`] protecting admin
//! mutations. Storage is reached only through the [`CatalogStore`] port;
//! no storage crate appears in any signature here.

pub mod auth;
pub mod cache;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use auth::{AccessGate, AuthState};
pub use cache::CatalogCache;
pub use domain::{ImageRef, NewProduct, PLACEHOLDER_IMAGE, Product, ProductDraft, seed_products};
pub use ports::{CatalogError, CatalogStore, PRODUCTS_COLLECTION, StoreDocument, StoreError};
pub use services::{CatalogPhase, CatalogService, LoadOutcome, SeedReason, StorefrontCore};
