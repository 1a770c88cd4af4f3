//! Catalog synchronizer - keeps the cache consistent with the remote store.
//!
//! One-shot load on startup, write-through on every mutation: the store
//! confirms before the cache changes, which is the only consistency
//! guarantee the storefront relies on.

use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::cache::CatalogCache;
use crate::domain::{Product, ProductDraft, seed_products};
use crate::ports::{CatalogError, CatalogStore, PRODUCTS_COLLECTION};

/// Lifecycle of the initial catalog fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogPhase {
    /// The one-shot load has not resolved yet; callers should render a
    /// loading indicator, never a half-updated list.
    Loading,
    /// The load resolved (with live data or with the seed list standing).
    Ready,
}

/// Why the seed list was kept after the initial load.
///
/// An empty remote result and a failed read both leave the seed list
/// standing; they are distinguished here so a caller can show a read-error
/// banner even while seed data stays visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedReason {
    /// The store answered with no decodable product documents.
    EmptyRemote,
    /// The store could not be queried.
    StoreUnavailable(String),
}

/// Result of the one-shot catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The cache was replaced wholesale with the remote result set.
    Replaced {
        /// Number of products now in the cache.
        count: usize,
    },
    /// The seed list was kept.
    SeedRetained {
        /// Why the remote result was not used.
        reason: SeedReason,
    },
}

/// Service orchestrating catalog loads and admin mutations.
///
/// Owns the [`CatalogCache`] and the store handle. Mutations and the
/// initial load are serialized through an internal async mutex, so one
/// outstanding mutation at a time holds even if the caller forgets to
/// disable its controls.
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    cache: RwLock<CatalogCache>,
    load_outcome: RwLock<Option<LoadOutcome>>,
    write_gate: Mutex<()>,
}

impl CatalogService {
    /// Create a service whose cache starts as the hardcoded seed list.
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self::with_seed(store, seed_products())
    }

    /// Create a service with an explicit fallback product set.
    pub fn with_seed(store: Arc<dyn CatalogStore>, seed: Vec<Product>) -> Self {
        Self {
            store,
            cache: RwLock::new(CatalogCache::new(seed)),
            load_outcome: RwLock::new(None),
            write_gate: Mutex::new(()),
        }
    }

    /// Snapshot of the cached products, in insertion order.
    pub fn products(&self) -> Vec<Product> {
        self.cache
            .read()
            .expect("catalog cache lock poisoned")
            .products()
            .to_vec()
    }

    /// Current load phase.
    pub fn phase(&self) -> CatalogPhase {
        if self
            .load_outcome
            .read()
            .expect("load outcome lock poisoned")
            .is_some()
        {
            CatalogPhase::Ready
        } else {
            CatalogPhase::Loading
        }
    }

    /// One-shot startup load.
    ///
    /// Fetches all product documents and replaces the cache wholesale when
    /// at least one decodes; an empty result set and a store failure both
    /// leave the seed list standing. The failure is logged and folded into
    /// the returned [`LoadOutcome`] rather than propagated, and is never
    /// retried automatically. Calling again after the first resolution is a
    /// no-op returning the recorded outcome.
    pub async fn load_catalog(&self) -> LoadOutcome {
        let _guard = self.write_gate.lock().await;
        if let Some(outcome) = self
            .load_outcome
            .read()
            .expect("load outcome lock poisoned")
            .clone()
        {
            return outcome;
        }

        let outcome = match self.store.list_all(PRODUCTS_COLLECTION).await {
            Ok(docs) => {
                let mut products = Vec::with_capacity(docs.len());
                for doc in &docs {
                    match Product::from_document(&doc.id, &doc.fields) {
                        Ok(product) => products.push(product),
                        Err(err) => {
                            warn!(doc_id = %doc.id, error = %err, "skipping undecodable catalog document");
                        }
                    }
                }
                if products.is_empty() {
                    info!("remote catalog empty; keeping seed products");
                    LoadOutcome::SeedRetained {
                        reason: SeedReason::EmptyRemote,
                    }
                } else {
                    let count = products.len();
                    self.cache
                        .write()
                        .expect("catalog cache lock poisoned")
                        .replace(products);
                    info!(count, "catalog loaded from store");
                    LoadOutcome::Replaced { count }
                }
            }
            Err(err) => {
                warn!(error = %err, "catalog fetch failed; keeping seed products");
                LoadOutcome::SeedRetained {
                    reason: SeedReason::StoreUnavailable(err.to_string()),
                }
            }
        };

        *self
            .load_outcome
            .write()
            .expect("load outcome lock poisoned") = Some(outcome.clone());
        outcome
    }

    /// Add a product from admin-form input.
    ///
    /// Validation happens strictly before any store access; a rejected
    /// draft performs no I/O. On success the cache appends a product built
    /// from the store-assigned id - never before the store confirms.
    pub async fn add_product(&self, draft: ProductDraft) -> Result<Product, CatalogError> {
        let new = draft.validate()?;

        let _guard = self.write_gate.lock().await;
        let id = self.store.create(PRODUCTS_COLLECTION, &new.to_fields()).await?;
        let product = new.into_product(id);
        self.cache
            .write()
            .expect("catalog cache lock poisoned")
            .push(product.clone());
        info!(id = %product.id, name = %product.name, "product added");
        Ok(product)
    }

    /// Delete a product by id.
    ///
    /// The store deletion is attempted regardless of local presence; only
    /// after it confirms is the cache entry removed. Returns the removed
    /// product, or `None` when the id wasn't cached (a no-op locally).
    pub async fn delete_product(&self, id: &str) -> Result<Option<Product>, CatalogError> {
        let _guard = self.write_gate.lock().await;
        self.store.delete_by_id(PRODUCTS_COLLECTION, id).await?;
        let removed = self
            .cache
            .write()
            .expect("catalog cache lock poisoned")
            .remove(id);
        if let Some(product) = &removed {
            info!(id = %product.id, "product deleted");
        }
        Ok(removed)
    }
}
