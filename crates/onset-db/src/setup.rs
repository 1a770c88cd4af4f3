//! Database setup and initialization.
//!
//! This module provides the `setup_store()` function for initializing the
//! SQLite database with the document schema. Entry points call this with
//! the resolved database path (see [`onset_core::paths::database_path`]).

use anyhow::Result;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::path::Path;
use tracing::debug;

/// Sets up the SQLite connection and ensures the document schema exists.
///
/// This function:
/// 1. Establishes a connection to the SQLite database file
/// 2. Creates the database file if it doesn't exist
/// 3. Creates the documents table and its indexes
///
/// # Errors
///
/// Returns an error if the database file cannot be opened or created, or
/// if schema creation fails.
///
/// # Example
///
/// ```rust,no_run
/// use onset_db::setup_store;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_store(Path::new("/srv/onset/catalog.db")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_store(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let pool = SqlitePool::connect_with(
        SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true),
    )
    .await?;

    create_schema(&pool).await?;
    debug!(path = %db_path.display(), "catalog store ready");

    Ok(pool)
}

/// Sets up an in-memory SQLite store for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_store() -> Result<SqlitePool> {
    let pool = SqlitePool::connect("sqlite::memory:").await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Creates the document schema.
///
/// One table holds every collection; `rowid` ordering is the insertion
/// ordering the catalog relies on. Safe to call multiple times as all
/// operations use IF NOT EXISTS.
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            collection TEXT NOT NULL,
            doc_id TEXT NOT NULL,
            fields TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(collection, doc_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Index on collection for listing
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_documents_collection ON documents(collection)")
        .execute(pool)
        .await?;

    Ok(())
}
