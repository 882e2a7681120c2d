//! Record mapper between [`Song`] entities and rows of a [`SongStore`]
//!
//! Rows are only ever written by identifier. A song without an identifier
//! is inserted and picks up the identifier storage generated; a song with
//! one updates exactly that row.

use crate::database::{Song, SongId, SongStore};
use crate::error::{MapperError, MapperResult};

/// Maps songs onto the rows of an injected store
#[derive(Debug)]
pub struct SongMapper<S> {
    store: S,
}

impl<S: SongStore> SongMapper<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Build a new song and persist it immediately
    pub async fn create(
        &self,
        name: impl Into<String>,
        album: impl Into<String>,
    ) -> MapperResult<Song> {
        let mut song = Song::new(name, album);
        self.save(&mut song).await?;
        Ok(song)
    }

    /// First song stored under `name`, if any
    pub async fn find_by_name(&self, name: &str) -> MapperResult<Option<Song>> {
        let row = self.store.select_by_name(name).await?;
        Ok(row.map(Song::from))
    }

    pub async fn find_by_id(&self, id: SongId) -> MapperResult<Option<Song>> {
        let row = self.store.select_by_id(id).await?;
        Ok(row.map(Song::from))
    }

    /// Every stored song, ordered by identifier
    pub async fn all(&self) -> MapperResult<Vec<Song>> {
        let rows = self.store.select_all().await?;
        Ok(rows.into_iter().map(Song::from).collect())
    }

    /// Insert the song if it has no identifier yet, update its row otherwise.
    ///
    /// Returns the song's identifier. Calling this again on the same song
    /// never creates a second row.
    pub async fn save(&self, song: &mut Song) -> MapperResult<SongId> {
        match song.id() {
            Some(id) => {
                self.update(song).await?;
                Ok(id)
            }
            None => {
                let id = self.store.insert(&song.name, &song.album).await?;
                song.assign_id(id);
                tracing::debug!("Inserted song {} ({:?})", id, song.name);
                Ok(id)
            }
        }
    }

    /// Write every mutable attribute of the song to the row its identifier addresses
    pub async fn update(&self, song: &Song) -> MapperResult<()> {
        let id = song.id().ok_or(MapperError::NotPersisted)?;
        let affected = self.store.update_by_id(id, &song.name, &song.album).await?;
        if affected == 0 {
            tracing::warn!("Update of song {} matched no row", id);
            return Err(MapperError::RowMissing(id));
        }
        tracing::debug!("Updated song {}", id);
        Ok(())
    }

    /// Remove the song's row
    pub async fn delete(&self, song: Song) -> MapperResult<()> {
        let id = song.id().ok_or(MapperError::NotPersisted)?;
        let affected = self.store.delete_by_id(id).await?;
        if affected == 0 {
            tracing::warn!("Delete of song {} matched no row", id);
            return Err(MapperError::RowMissing(id));
        }
        tracing::debug!("Deleted song {}", id);
        Ok(())
    }
}
