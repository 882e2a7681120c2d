//! In-memory song store
//!
//! Keeps rows in a `BTreeMap` behind a mutex and hands out identifiers the
//! way an `AUTOINCREMENT` column does: strictly increasing, never reused.

use std::collections::BTreeMap;

use anyhow::Result;
use parking_lot::Mutex;

use super::{SongId, SongRow, SongStore};

#[derive(Debug, Default)]
struct Tables {
    songs: BTreeMap<SongId, SongRow>,
    last_id: i64,
}

/// Song store that lives entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.tables.lock().songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.lock().songs.is_empty()
    }
}

impl SongStore for MemoryStore {
    async fn insert(&self, name: &str, album: &str) -> Result<SongId> {
        let mut tables = self.tables.lock();
        tables.last_id += 1;
        let id = SongId(tables.last_id);
        tables.songs.insert(
            id,
            SongRow {
                id,
                name: name.to_string(),
                album: album.to_string(),
            },
        );
        Ok(id)
    }

    async fn update_by_id(&self, id: SongId, name: &str, album: &str) -> Result<u64> {
        let mut tables = self.tables.lock();
        match tables.songs.get_mut(&id) {
            Some(row) => {
                row.name = name.to_string();
                row.album = album.to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn select_by_name(&self, name: &str) -> Result<Option<SongRow>> {
        let tables = self.tables.lock();
        Ok(tables.songs.values().find(|row| row.name == name).cloned())
    }

    async fn select_by_id(&self, id: SongId) -> Result<Option<SongRow>> {
        Ok(self.tables.lock().songs.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: SongId) -> Result<u64> {
        let removed = self.tables.lock().songs.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn select_all(&self) -> Result<Vec<SongRow>> {
        Ok(self.tables.lock().songs.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let store = MemoryStore::new();
        let a = store.insert("A", "X").await.unwrap();
        store.delete_by_id(a).await.unwrap();
        let b = store.insert("B", "X").await.unwrap();
        assert!(b > a);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_select_by_name_returns_first_match() {
        let store = MemoryStore::new();
        let first = store.insert("Dup", "A").await.unwrap();
        store.insert("Dup", "B").await.unwrap();

        let row = store.select_by_name("Dup").await.unwrap().unwrap();
        assert_eq!(row.id, first);
        assert_eq!(row.album, "A");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let store = MemoryStore::new();
        assert_eq!(store.update_by_id(SongId(3), "n", "a").await.unwrap(), 0);
        assert!(store.is_empty());
    }
}
