//! Composition utilities for wiring the storefront with a SQLite backend.
//!
//! This module is focused purely on construction and should not contain
//! any domain logic.

use sqlx::SqlitePool;
use std::sync::Arc;

use onset_core::{AccessGate, CatalogStore, StorefrontCore};

use crate::store::SqliteCatalogStore;

/// Factory for creating catalog store instances with SQLite backends.
///
/// This struct provides composition utilities only - no domain logic.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a SQLite connection pool from a connection URL.
    ///
    /// Prefer [`crate::setup_store`] when connecting to a file path, since
    /// it also ensures the schema exists.
    pub async fn create_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
        let pool = SqlitePool::connect(db_url).await?;
        Ok(pool)
    }

    /// Build a catalog store from a pool, wrapped for injection.
    pub fn catalog_store(pool: SqlitePool) -> Arc<dyn CatalogStore> {
        Arc::new(SqliteCatalogStore::new(pool))
    }

    /// Build a complete [`StorefrontCore`] from a pool and an access gate.
    ///
    /// This is the recommended single-step way for a presentation layer to
    /// obtain a fully composed storefront:
    ///
    /// ```ignore
    /// let pool = onset_db::setup_store(&db_path).await?;
    /// let gate = AccessGate::new(stored_credential_digest);
    /// let storefront = StoreFactory::build_storefront(pool, gate);
    /// ```
    pub fn build_storefront(pool: SqlitePool, gate: AccessGate) -> StorefrontCore {
        StorefrontCore::new(Self::catalog_store(pool), gate)
    }
}
