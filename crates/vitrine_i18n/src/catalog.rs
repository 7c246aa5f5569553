//! JSON translation catalogs
//!
//! Catalogs are per-language assets at `locales/{lang}/translations.json`,
//! shaped as a flat mapping from translation key to string. Keys follow
//! `[A-Za-z0-9][A-Za-z0-9_.-]*`; entry counts and value sizes are
//! bounded so a corrupt asset cannot balloon the page.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;
use crate::language::Language;

const MAX_CATALOG_ENTRIES: usize = 10_000;
const MAX_KEY_BYTES: usize = 128;
const MAX_VALUE_BYTES: usize = 16 * 1024;

fn is_valid_key(key: &str) -> bool {
    let mut it = key.chars();
    match it.next() {
        Some(c) if c.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    it.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
}

/// A flat key -> string translation table for one language.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|s| s.as_str())
    }

    /// Lookup that degrades visibly: a missing key renders as the raw
    /// key rather than vanishing.
    pub fn get_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }

    /// Parse a JSON object of string values.
    pub fn parse(src: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value =
            serde_json::from_str(src).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let serde_json::Value::Object(map) = value else {
            return Err(CatalogError::Parse(
                "catalog must be a flat json object".to_string(),
            ));
        };
        if map.len() > MAX_CATALOG_ENTRIES {
            return Err(CatalogError::Parse(format!(
                "too many entries (max {MAX_CATALOG_ENTRIES})"
            )));
        }

        let mut catalog = Self::new();
        for (key, value) in map {
            if !is_valid_key(&key) {
                return Err(CatalogError::Parse(format!(
                    "invalid key `{key}` (allowed: [A-Za-z0-9][A-Za-z0-9_.-]*)"
                )));
            }
            if key.len() > MAX_KEY_BYTES {
                return Err(CatalogError::Parse(format!(
                    "key `{key}` is too long (max {MAX_KEY_BYTES} bytes)"
                )));
            }
            let serde_json::Value::String(text) = value else {
                return Err(CatalogError::Parse(format!(
                    "value for key `{key}` must be a string"
                )));
            };
            if text.len() > MAX_VALUE_BYTES {
                return Err(CatalogError::Parse(format!(
                    "value for key `{key}` is too long (max {MAX_VALUE_BYTES} bytes)"
                )));
            }
            catalog.insert(key, text);
        }
        Ok(catalog)
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let src = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&src)
    }

    /// Load the catalog for a language from the conventional layout
    /// `{root}/{lang}/translations.json`.
    pub fn load_dir(root: &Path, language: Language) -> Result<Self, CatalogError> {
        Self::load(&root.join(language.code()).join("translations.json"))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
