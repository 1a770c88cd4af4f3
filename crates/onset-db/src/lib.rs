//! SQLite document-store adapter for the Onset Nation catalog.
//!
//! Implements the [`onset_core::CatalogStore`] port against a local SQLite
//! database shaped like a document collection: opaque doc ids, JSON field
//! payloads, insertion-order listing. The catalog core never sees a sqlx
//! type; any document-oriented backend could stand in behind the same port.

pub mod factory;
pub mod setup;
pub mod store;

// Re-export factory for convenient access
pub use factory::StoreFactory;

// Re-export the adapter and setup functions
pub use setup::setup_store;
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_store;
pub use store::SqliteCatalogStore;
