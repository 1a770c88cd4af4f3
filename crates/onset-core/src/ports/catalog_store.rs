//! Catalog store trait definition.
//!
//! This port defines the interface for the remote document collection the
//! catalog synchronizes against. Implementations must handle all storage
//! details internally (connection handles, credentials, id generation).

use async_trait::async_trait;

use super::StoreError;

/// The fixed collection holding product documents.
pub const PRODUCTS_COLLECTION: &str = "products";

/// One document from the catalog store: an opaque id plus its fields.
///
/// Fields are schemaless JSON; the domain decodes them defensively
/// (see [`crate::domain::Product::from_document`]).
#[derive(Debug, Clone)]
pub struct StoreDocument {
    /// Opaque identifier assigned by the store.
    pub id: String,
    /// Stored field payload.
    pub fields: serde_json::Value,
}

/// Remote catalog store contract.
///
/// Three operations against a named document collection, with store-side
/// id generation on create. Read failures surface as
/// [`StoreError::Unavailable`], write failures as [`StoreError::Write`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// List every document in the collection, in insertion order.
    async fn list_all(&self, collection: &str) -> Result<Vec<StoreDocument>, StoreError>;

    /// Create a document with the given fields.
    ///
    /// Returns the identifier the store assigned to the new document.
    async fn create(
        &self,
        collection: &str,
        fields: &serde_json::Value,
    ) -> Result<String, StoreError>;

    /// Delete the document with the given identifier.
    ///
    /// Deleting an id that doesn't exist is a successful no-op
    /// (document-store semantics).
    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}
