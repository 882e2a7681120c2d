//! Error types for the record mapper

use crate::database::SongId;

/// Errors returned by [`SongMapper`](crate::SongMapper) operations
#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    /// The backing store failed; carried through unchanged
    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
    /// Operation needs an identifier but the song was never saved
    #[error("song has not been saved yet")]
    NotPersisted,
    /// No row exists for an identifier the entity carries
    #[error("no stored row for song {0}")]
    RowMissing(SongId),
}

pub type MapperResult<T> = Result<T, MapperError>;
