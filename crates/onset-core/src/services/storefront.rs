//! `StorefrontCore` - the primary application facade.
//!
//! This is the composition root for core services. A presentation layer
//! (web page, CLI, demo) receives a `StorefrontCore` instance and uses it
//! for everything: reading the catalog, submitting the admin credential,
//! and performing gated mutations.

use std::sync::{Arc, RwLock};

use crate::auth::{AccessGate, AuthState};
use crate::domain::{Product, ProductDraft};
use crate::ports::{CatalogError, CatalogStore};

use super::{CatalogPhase, CatalogService, LoadOutcome};

/// The storefront facade: catalog service plus access gate.
///
/// Read operations are always available; `add_product` and
/// `delete_product` refuse with an auth error until the gate is unlocked.
pub struct StorefrontCore {
    catalog: CatalogService,
    gate: RwLock<AccessGate>,
}

impl StorefrontCore {
    /// Create a storefront over the given store, with a locked gate.
    pub fn new(store: Arc<dyn CatalogStore>, gate: AccessGate) -> Self {
        Self {
            catalog: CatalogService::new(store),
            gate: RwLock::new(gate),
        }
    }

    /// Access the catalog service directly (read paths, startup load).
    pub const fn catalog(&self) -> &CatalogService {
        &self.catalog
    }

    /// Snapshot of the cached products, in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.catalog.products()
    }

    /// Current load phase.
    pub fn phase(&self) -> CatalogPhase {
        self.catalog.phase()
    }

    /// Current authentication state.
    pub fn auth_state(&self) -> AuthState {
        self.gate.read().expect("access gate lock poisoned").state()
    }

    /// Submit an admin credential attempt.
    pub fn submit_credential(&self, attempt: &str) -> Result<(), CatalogError> {
        self.gate
            .write()
            .expect("access gate lock poisoned")
            .submit_credential(attempt)
    }

    /// Run the one-shot startup load.
    pub async fn load_catalog(&self) -> LoadOutcome {
        self.catalog.load_catalog().await
    }

    /// Add a product (requires an unlocked gate).
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        self.require_unlocked()?;
        self.catalog.add_product(draft).await
    }

    /// Delete a product by id (requires an unlocked gate).
    pub async fn delete_product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        self.require_unlocked()?;
        self.catalog.delete_product(id).await
    }

    fn require_unlocked(&self) -> Result<(), CatalogError> {
        if self
            .gate
            .read()
            .expect("access gate lock poisoned")
            .is_unlocked()
        {
            Ok(())
        } else {
            Err(CatalogError::Auth("admin access is locked".to_string()))
        }
    }
}
