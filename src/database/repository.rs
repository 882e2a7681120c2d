//! SQLite-backed song store
//! Delegates to ops modules for actual operations

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite, sqlite::SqlitePoolOptions};
use std::path::Path;

use super::{SongId, SongRow, SongStore, ops, schema};
use crate::settings::StoreSettings;

/// Database connection pool wrapper
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Open the store described by `settings`
    pub async fn open(settings: &StoreSettings) -> Result<Self> {
        let db_path = settings.resolved_database_path()?;
        Self::connect(&db_path, settings.max_connections, settings.wal).await
    }

    /// Create and initialize database at the given path with default settings
    pub async fn new(db_path: &Path) -> Result<Self> {
        let defaults = StoreSettings::default();
        Self::connect(db_path, defaults.max_connections, defaults.wal).await
    }

    /// Private in-memory database, gone when the store is dropped
    pub async fn in_memory() -> Result<Self> {
        // Every sqlite memory connection is its own database, so pin exactly one
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        schema::ensure_schema(&pool).await?;

        Ok(Self { pool })
    }

    async fn connect(db_path: &Path, max_connections: u32, wal: bool) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect(&db_url)
            .await?;

        if wal {
            sqlx::query("PRAGMA journal_mode = WAL")
                .execute(&pool)
                .await?;
        }

        schema::ensure_schema(&pool).await?;

        tracing::info!("Opened song store at: {}", db_path.display());
        Ok(Self { pool })
    }

    /// Underlying pool, for callers that need raw queries
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl SongStore for SqliteStore {
    async fn insert(&self, name: &str, album: &str) -> Result<SongId> {
        ops::insert_song(&self.pool, name, album).await
    }

    async fn update_by_id(&self, id: SongId, name: &str, album: &str) -> Result<u64> {
        ops::update_song(&self.pool, id, name, album).await
    }

    async fn select_by_name(&self, name: &str) -> Result<Option<SongRow>> {
        ops::get_song_by_name(&self.pool, name).await
    }

    async fn select_by_id(&self, id: SongId) -> Result<Option<SongRow>> {
        ops::get_song(&self.pool, id).await
    }

    async fn delete_by_id(&self, id: SongId) -> Result<u64> {
        ops::delete_song(&self.pool, id).await
    }

    async fn select_all(&self) -> Result<Vec<SongRow>> {
        ops::get_all_songs(&self.pool).await
    }
}
