//! Database access shared across the VibeTrackr backend
//!
//! One SQLite database in the root folder holds users and their journals.

pub mod models;

use crate::Result;
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize database connection pool
///
/// Connects to vibetrackr.db in the root folder, creating the file and
/// the schema on first run.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use proper SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;

    init_tables(&pool).await?;

    Ok(pool)
}

/// Initialize an in-memory database pool (test support)
pub async fn init_memory_pool() -> Result<SqlitePool> {
    let pool = SqlitePool::connect(":memory:").await?;
    init_tables(&pool).await?;
    Ok(pool)
}

/// Create tables if they don't exist
async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            uid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            token_hash TEXT NOT NULL UNIQUE,
            created_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS journals (
            id TEXT PRIMARY KEY,
            user_uid TEXT NOT NULL REFERENCES users(uid) ON DELETE CASCADE,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            analysis TEXT,
            timestamp INTEGER NOT NULL,
            date TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_journals_user ON journals(user_uid, timestamp)")
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn creates_database_file_and_schema() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("data").join("vibetrackr.db");

        let pool = init_database_pool(&db_path).await.unwrap();
        assert!(db_path.exists());

        // Schema is queryable
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn init_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("vibetrackr.db");

        let pool1 = init_database_pool(&db_path).await.unwrap();
        drop(pool1);
        let pool2 = init_database_pool(&db_path).await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM journals")
            .fetch_one(&pool2)
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }
}
