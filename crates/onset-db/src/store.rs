//! SQLite implementation of the `CatalogStore` port.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use onset_core::{CatalogStore, StoreDocument, StoreError};

/// SQLite-backed document collection.
///
/// Documents live in one table keyed by `(collection, doc_id)` with their
/// fields as a JSON payload. Ids are v4 UUIDs generated here on create,
/// mirroring the hosted-store contract where the store assigns ids.
pub struct SqliteCatalogStore {
    pool: SqlitePool,
}

impl SqliteCatalogStore {
    /// Create a new SQLite catalog store over the given pool.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for SqliteCatalogStore {
    async fn list_all(&self, collection: &str) -> Result<Vec<StoreDocument>, StoreError> {
        let rows = sqlx::query(
            "SELECT doc_id, fields FROM documents WHERE collection = ? ORDER BY rowid",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        rows.iter()
            .map(|row| {
                let id: String = row
                    .try_get("doc_id")
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                let raw: String = row
                    .try_get("fields")
                    .map_err(|e| StoreError::Unavailable(e.to_string()))?;
                let fields = serde_json::from_str(&raw)
                    .map_err(|e| StoreError::Unavailable(format!("document {id}: {e}")))?;
                Ok(StoreDocument { id, fields })
            })
            .collect()
    }

    async fn create(
        &self,
        collection: &str,
        fields: &serde_json::Value,
    ) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        let payload =
            serde_json::to_string(fields).map_err(|e| StoreError::Write(e.to_string()))?;

        sqlx::query("INSERT INTO documents (collection, doc_id, fields) VALUES (?, ?, ?)")
            .bind(collection)
            .bind(&id)
            .bind(&payload)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        debug!(collection, doc_id = %id, "document created");
        Ok(id)
    }

    async fn delete_by_id(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        // Deleting an absent id is a successful no-op, as with the hosted
        // document stores this adapter stands in for.
        sqlx::query("DELETE FROM documents WHERE collection = ? AND doc_id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        debug!(collection, doc_id = %id, "document deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_test_store;
    use onset_core::PRODUCTS_COLLECTION;

    async fn store() -> SqliteCatalogStore {
        SqliteCatalogStore::new(setup_test_store().await.unwrap())
    }

    fn cap_fields() -> serde_json::Value {
        serde_json::json!({ "name": "Onset Cap", "price": 7500, "image": "/products/cap.png" })
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let store = store().await;
        let first = store.create(PRODUCTS_COLLECTION, &cap_fields()).await.unwrap();
        let second = store.create(PRODUCTS_COLLECTION, &cap_fields()).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let store = store().await;
        let mut created = Vec::new();
        for name in ["Onset Hoodie", "Onset Cap", "Onset T-Shirt"] {
            let fields = serde_json::json!({ "name": name, "price": 1000 });
            created.push(store.create(PRODUCTS_COLLECTION, &fields).await.unwrap());
        }

        let docs = store.list_all(PRODUCTS_COLLECTION).await.unwrap();
        let listed: Vec<String> = docs.into_iter().map(|d| d.id).collect();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn test_list_all_round_trips_fields() {
        let store = store().await;
        let id = store.create(PRODUCTS_COLLECTION, &cap_fields()).await.unwrap();

        let docs = store.list_all(PRODUCTS_COLLECTION).await.unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].id, id);
        assert_eq!(docs[0].fields, cap_fields());
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = store().await;
        store.create(PRODUCTS_COLLECTION, &cap_fields()).await.unwrap();
        store
            .create("drafts", &serde_json::json!({ "name": "unreleased" }))
            .await
            .unwrap();

        assert_eq!(store.list_all(PRODUCTS_COLLECTION).await.unwrap().len(), 1);
        assert_eq!(store.list_all("drafts").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_document() {
        let store = store().await;
        let id = store.create(PRODUCTS_COLLECTION, &cap_fields()).await.unwrap();
        store.delete_by_id(PRODUCTS_COLLECTION, &id).await.unwrap();
        assert!(store.list_all(PRODUCTS_COLLECTION).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_absent_id_succeeds() {
        let store = store().await;
        store
            .delete_by_id(PRODUCTS_COLLECTION, "never-existed")
            .await
            .unwrap();
    }
}
