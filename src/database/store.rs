//! Storage interface the record mapper is built on

use std::future::Future;

use anyhow::Result;

use super::{SongId, SongRow};

/// Backend that owns the `songs` rows.
///
/// Implementations hand out a fresh unique identifier on every insert and
/// address rows only by that identifier when writing.
pub trait SongStore {
    /// Insert a new row, returns the generated identifier
    fn insert(&self, name: &str, album: &str) -> impl Future<Output = Result<SongId>> + Send;

    /// Overwrite name and album of the row with `id`, returns rows affected
    fn update_by_id(
        &self,
        id: SongId,
        name: &str,
        album: &str,
    ) -> impl Future<Output = Result<u64>> + Send;

    /// Single row matching `name`, lowest identifier first
    fn select_by_name(&self, name: &str) -> impl Future<Output = Result<Option<SongRow>>> + Send;

    fn select_by_id(&self, id: SongId) -> impl Future<Output = Result<Option<SongRow>>> + Send;

    /// Delete the row with `id`, returns rows affected
    fn delete_by_id(&self, id: SongId) -> impl Future<Output = Result<u64>> + Send;

    /// Every row ordered by identifier
    fn select_all(&self) -> impl Future<Output = Result<Vec<SongRow>>> + Send;
}
