//! Songbook - a small record mapper for songs
//!
//! A [`Song`] is synchronized with one row of a [`SongStore`] through a
//! [`SongMapper`]. Saving a song that has never been stored inserts it and
//! records the identifier storage assigned; saving it again updates that
//! row and nothing else.
//!
//! ```no_run
//! use songbook::{SongMapper, SqliteStore, StoreSettings};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let store = SqliteStore::open(&StoreSettings::load()).await?;
//! let mapper = SongMapper::new(store);
//!
//! let mut song = mapper.create("99 Problems", "The Blueprint").await?;
//! song.album = "The Black Album".to_string();
//! mapper.save(&mut song).await?;
//! # Ok(())
//! # }
//! ```

mod database;
mod error;
mod mapper;
mod settings;

pub use database::{MemoryStore, Song, SongId, SongRow, SongStore, SqliteStore};
pub use error::{MapperError, MapperResult};
pub use mapper::SongMapper;
pub use settings::{SettingsError, StoreSettings};
