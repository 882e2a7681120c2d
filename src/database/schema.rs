//! Table bootstrap for the SQLite store

use anyhow::Result;
use sqlx::{Pool, Sqlite};

/// Create the songs table if it does not exist yet
pub async fn ensure_schema(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            album TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_songs_name ON songs(name);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
