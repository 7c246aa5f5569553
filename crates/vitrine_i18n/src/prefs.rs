//! Persistent preference storage
//!
//! A small string key-value store holding the visitor's last language
//! choice. Writes happen on every language switch; reads happen once at
//! controller init.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::PrefsError;

/// Key under which the language code is stored.
pub const PREFERRED_LANGUAGE: &str = "preferred-language";

/// Key under which the layout direction is stored.
pub const PREFERRED_DIRECTION: &str = "preferred-direction";

/// String key-value storage that outlives the page session.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Clone, Debug, Default)]
pub struct MemoryPrefs {
    entries: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed store: one flat JSON object, rewritten on every set.
///
/// A write failure is logged and the in-memory value kept, so a
/// read-only disk degrades to session-only preferences instead of
/// breaking the language toggle.
#[derive(Debug)]
pub struct JsonFilePrefs {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFilePrefs {
    /// Open a store at `path`. A missing file starts empty; a corrupt
    /// file is an error so callers can decide whether to discard it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(src) => serde_json::from_str(&src).map_err(|e| PrefsError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => {
                return Err(PrefsError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to serialize preferences: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            warn!("failed to persist preferences to {}: {e}", self.path.display());
        }
    }
}

impl PreferenceStore for JsonFilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist();
    }
}
