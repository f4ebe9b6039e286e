//! Key-value persistence for preferences and the high score.
//!
//! The store holds flat string entries. [`JsonFileStore`] keeps them in a
//! single JSON object on disk; [`MemoryStore`] is the in-process variant used
//! by tests and headless runs.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Theme;

/// Key of the persisted best score
pub const HIGH_SCORE_KEY: &str = "2048-high-score";

/// Key of the persisted palette ("light" / "dark")
pub const THEME_KEY: &str = "2048-theme";

/// Key of the persisted sound switch ("true" / "false")
pub const SOUND_KEY: &str = "2048-sound";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("store file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Flat string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// On-disk layout: one JSON object of string values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
struct Entries(BTreeMap<String, String>);

/// Store backed by a JSON file, rewritten on every `set`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Entries,
}

impl JsonFileStore {
    /// Open `path`. A missing file reads as an empty store and is created on
    /// the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Entries::default(),
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Entries::default(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, entries })
    }

    /// An empty store that will (over)write `path` on the first `set`
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: Entries::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let bytes = serde_json::to_vec_pretty(&self.entries)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.entries.0.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.entries.0.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Non-persistent store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Settings restored from the store at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub high_score: u32,
    pub theme: Theme,
    pub sound_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            high_score: 0,
            theme: Theme::Light,
            sound_enabled: true,
        }
    }
}

impl Preferences {
    /// Read preferences, falling back to defaults for missing or malformed
    /// entries. Sound stays on unless stored as exactly "false".
    pub fn load(store: &impl KeyValueStore) -> Self {
        let high_score = store
            .get(HIGH_SCORE_KEY)
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(0);
        let theme = store
            .get(THEME_KEY)
            .map(|s| Theme::from_stored(&s))
            .unwrap_or_default();
        let sound_enabled = store.get(SOUND_KEY).as_deref() != Some("false");

        Self {
            high_score,
            theme,
            sound_enabled,
        }
    }
}
