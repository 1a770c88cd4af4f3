//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the catalog core expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or HTTP-client types in any signature
//! - The store port is minimal: list, create, delete (the store assigns ids)
//! - Decoding and validation belong in the domain, not here

pub mod catalog_store;

use thiserror::Error;

pub use catalog_store::{CatalogStore, PRODUCTS_COLLECTION, StoreDocument};

/// Errors surfaced by catalog store implementations.
///
/// This type abstracts away storage implementation details (sqlx errors,
/// transport failures, auth rejections) so the synchronizer can apply one
/// policy per path: read failures fall back to seed data, write failures
/// leave the cache untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be queried (read path).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected or failed a mutation (write path).
    #[error("Store write failed: {0}")]
    Write(String),
}

/// Core error type for the catalog and its access gate.
///
/// This is the canonical error type used across the core. Every variant is
/// handled at the boundary nearest its origin and surfaced as a single
/// user-visible notification; nothing here triggers a retry or escalates to
/// a fatal condition.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed or missing input, caught before any I/O.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The catalog store could not be read.
    #[error("Catalog store unavailable: {0}")]
    StoreUnavailable(String),

    /// The catalog store failed a write.
    #[error("Catalog store write failed: {0}")]
    StoreWrite(String),

    /// Credential mismatch, or a mutation attempted while locked.
    #[error("Authentication failed: {0}")]
    Auth(String),
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(msg) => Self::StoreUnavailable(msg),
            StoreError::Write(msg) => Self::StoreWrite(msg),
        }
    }
}
