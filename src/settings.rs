//! Store settings persistence
//!
//! Handles saving and loading the SQLite store configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const DATABASE_FILE: &str = "songbook.db";

/// Settings for the SQLite song store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    /// Database file, `None` means the platform data directory
    pub database_path: Option<PathBuf>,
    /// Pool size
    pub max_connections: u32,
    /// Enable write-ahead logging
    pub wal: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: None,
            max_connections: 5,
            wal: true,
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "songbook", "Songbook")
}

impl StoreSettings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("store.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        match Self::file_path() {
            Some(path) if path.exists() => Self::load_from_file(&path).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable store settings {}: {}", path.display(), e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        match Self::file_path() {
            Some(path) => self.save_to_file(&path),
            None => Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            )),
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Database file to open, falling back to the platform data directory
    pub fn resolved_database_path(&self) -> Result<PathBuf, SettingsError> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(DATABASE_FILE))
            .ok_or_else(|| SettingsError::Io("Could not determine data directory".to_string()))
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
