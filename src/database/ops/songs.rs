//! Song CRUD operations

use anyhow::Result;
use sqlx::{Pool, Sqlite};

use super::current_timestamp;
use crate::database::{SongId, SongRow};

/// Insert a new song, returns the new song id
pub async fn insert_song(pool: &Pool<Sqlite>, name: &str, album: &str) -> Result<SongId> {
    let now = current_timestamp();

    let result = sqlx::query(
        r#"
        INSERT INTO songs (name, album, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(album)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(SongId(result.last_insert_rowid()))
}

/// Update every mutable column of the song with `id`
pub async fn update_song(pool: &Pool<Sqlite>, id: SongId, name: &str, album: &str) -> Result<u64> {
    let now = current_timestamp();

    let result = sqlx::query("UPDATE songs SET name = ?, album = ?, updated_at = ? WHERE id = ?")
        .bind(name)
        .bind(album)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Get song by id
pub async fn get_song(pool: &Pool<Sqlite>, id: SongId) -> Result<Option<SongRow>> {
    let song = sqlx::query_as::<_, SongRow>("SELECT id, name, album FROM songs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(song)
}

/// Get the first song with the given name
pub async fn get_song_by_name(pool: &Pool<Sqlite>, name: &str) -> Result<Option<SongRow>> {
    let song = sqlx::query_as::<_, SongRow>(
        "SELECT id, name, album FROM songs WHERE name = ? ORDER BY id LIMIT 1",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(song)
}

/// Get all songs
pub async fn get_all_songs(pool: &Pool<Sqlite>) -> Result<Vec<SongRow>> {
    let songs = sqlx::query_as::<_, SongRow>("SELECT id, name, album FROM songs ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(songs)
}

/// Delete song by id
pub async fn delete_song(pool: &Pool<Sqlite>, id: SongId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM songs WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
