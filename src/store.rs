//! Option store trait and implementations
//!
//! The host platform owns the persistent key-value store for plugin options.
//! [`OptionStore`] is the seam: one named record per option key, read and
//! written wholesale (get-all / set-all, no partial-field updates).

use crate::error::{Error, Result};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Trait for host option store implementations
///
/// Implement this against the host platform's option table. The bundled
/// [`JsonFileStore`] and [`MemoryStore`] cover standalone use and tests.
pub trait OptionStore {
    /// Read the raw record stored under `key`, or `None` if absent
    fn read_raw(&self, key: &str) -> Result<Option<Value>>;

    /// Replace the record stored under `key` wholesale
    fn write_raw(&self, key: &str, value: &Value) -> Result<()>;

    /// Read and deserialize the record stored under `key`
    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.read_raw(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| Error::Parse(e.to_string())),
            None => Ok(None),
        }
    }

    /// Serialize and store the record under `key`
    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_value(value)?;
        self.write_raw(key, &raw)
    }
}

// =============================================================================
// JSON File Store
// =============================================================================

/// File-backed option store: one JSON file per option key
///
/// Used when the crate is embedded without a platform option table.
pub struct JsonFileStore {
    /// Directory holding one `<key>.json` file per option
    dir: PathBuf,
    /// Pretty print JSON output
    pretty: bool,
}

impl JsonFileStore {
    /// Create a store rooted at the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            pretty: true,
        }
    }

    /// Create a store in the system config directory for the given app name
    ///
    /// Falls back to the current directory when no system config directory
    /// is available.
    pub fn for_app(app_name: &str) -> Self {
        let dir = dirs::config_dir()
            .map(|d| d.join(app_name))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    /// Use compact JSON (no pretty printing)
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn option_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn serialize(&self, value: &Value) -> Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(value).map_err(Error::from)
        } else {
            serde_json::to_string(value).map_err(Error::from)
        }
    }
}

impl OptionStore for JsonFileStore {
    fn read_raw(&self, key: &str) -> Result<Option<Value>> {
        let path = self.option_path(key);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::FileRead { path, source: e }),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| Error::Parse(e.to_string()))
    }

    fn write_raw(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.option_path(key);
        let content = self.serialize(value)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // Atomic write: temp file + rename
        let temp_path = temp_sibling(&path);
        std::fs::write(&temp_path, &content).map_err(|e| Error::FileWrite {
            path: temp_path.clone(),
            source: e,
        })?;
        std::fs::rename(&temp_path, &path).map_err(|e| Error::FileWrite { path, source: e })
    }
}

/// Build a `.tmp`-suffixed sibling path, preserving the original filename
fn temp_sibling(path: &Path) -> PathBuf {
    let mut temp_filename = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    temp_filename.push(".tmp");
    path.with_file_name(temp_filename)
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// In-memory option store for tests and short-lived embedding hosts
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored option records
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn len(&self) -> usize {
        self.records.read().expect("Lock poisoned").len()
    }

    /// Check whether the store holds no records
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("Lock poisoned").is_empty()
    }
}

impl OptionStore for MemoryStore {
    fn read_raw(&self, key: &str) -> Result<Option<Value>> {
        let guard = self
            .records
            .read()
            .map_err(|_| Error::Config("Option store lock poisoned".into()))?;
        Ok(guard.get(key).cloned())
    }

    fn write_raw(&self, key: &str, value: &Value) -> Result<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| Error::Config("Option store lock poisoned".into()))?;
        guard.insert(key.to_string(), value.clone());
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
