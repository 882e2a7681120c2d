//! Database models for persistent storage
//! `SongRow` maps directly to the `songs` table, `Song` is the in-memory entity

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Identifier assigned by storage when a song row is inserted
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(transparent)]
pub struct SongId(pub i64);

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Song row as stored in database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct SongRow {
    /// Unique identifier (auto-increment)
    pub id: SongId,
    /// Song name
    pub name: String,
    /// Album name
    pub album: String,
}

/// In-memory song entity.
///
/// The identifier is unset until the song is first saved through a
/// [`SongMapper`](crate::SongMapper). Once assigned it never changes, so it
/// has no public setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Song {
    id: Option<SongId>,
    /// Song name
    pub name: String,
    /// Album name
    pub album: String,
}

impl Song {
    /// Create an unsaved song
    pub fn new(name: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            album: album.into(),
        }
    }

    /// Storage identifier, `None` until the song has been saved
    pub fn id(&self) -> Option<SongId> {
        self.id
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Record the identifier storage handed out for this song's row
    pub(crate) fn assign_id(&mut self, id: SongId) {
        debug_assert!(self.id.is_none(), "song identifier is immutable once set");
        self.id = Some(id);
    }
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            album: row.album,
        }
    }
}
