//! Database module for persistent storage
//! Uses SQLite via sqlx for storing songs, with an in-memory store alongside

mod memory;
mod models;
mod ops;
mod repository;
mod schema;
mod store;

pub use memory::MemoryStore;
pub use models::*;
pub use repository::SqliteStore;
pub use store::SongStore;
