//! Builder for AdminManager
//!
//! This module contains [`AdminManagerBuilder`] which provides a fluent API
//! for creating an [`AdminManager`](super::AdminManager) backed by the
//! bundled JSON file store.

use crate::error::{Error, Result};
use crate::host::{ContentType, ContentTypeDirectory, PluginInfo, StaticContentTypes};
use crate::store::JsonFileStore;
use std::path::PathBuf;

use super::AdminManager;

/// Builder for creating an [`AdminManager`] with a fluent API.
///
/// Hosts that bring their own option store construct the manager directly
/// with [`AdminManager::new`]; this builder covers the common standalone
/// case of a JSON file store on disk.
///
/// # Example
///
/// ```rust,no_run
/// use dcmeta::{AdminManager, ContentType, PluginInfo};
///
/// let plugin = PluginInfo::new("DC Meta Tags", "0.2.0", "dc-meta-tags/plugin", "4.5");
/// let manager = AdminManager::builder(plugin)
///     .config_dir("~/.config/dcmeta")
///     .content_types(vec![
///         ContentType::public("post", "Posts"),
///         ContentType::public("page", "Pages"),
///     ])
///     .build()
///     .unwrap();
/// ```
pub struct AdminManagerBuilder {
    plugin: PluginInfo,
    option_key: Option<String>,
    config_dir: Option<PathBuf>,
    compact_json: bool,
    directory: Option<Box<dyn ContentTypeDirectory>>,
}

impl AdminManagerBuilder {
    /// Create a new builder with the required plugin descriptor.
    pub fn new(plugin: PluginInfo) -> Self {
        Self {
            plugin,
            option_key: None,
            config_dir: None,
            compact_json: false,
            directory: None,
        }
    }

    /// Set the directory holding the option store files.
    ///
    /// Supports `~` expansion for the home directory. Defaults to the system
    /// config directory for the plugin.
    #[must_use]
    pub fn config_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path: PathBuf = path.into();
        let expanded = if path.starts_with("~") {
            if let Some(home) = dirs::home_dir() {
                home.join(path.strip_prefix("~").unwrap_or(&path))
            } else {
                path
            }
        } else {
            path
        };
        self.config_dir = Some(expanded);
        self
    }

    /// Use a different option store key (default: [`super::OPTION_KEY`]).
    #[must_use]
    pub fn option_key(mut self, key: impl Into<String>) -> Self {
        self.option_key = Some(key.into());
        self
    }

    /// Use compact JSON (no pretty printing).
    #[must_use]
    pub fn compact_json(mut self) -> Self {
        self.compact_json = true;
        self
    }

    /// Set the host content-type directory.
    #[must_use]
    pub fn directory(mut self, directory: Box<dyn ContentTypeDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Set a fixed list of host content types.
    ///
    /// Convenience over [`AdminManagerBuilder::directory`] for hosts whose
    /// type registry does not change at runtime. Defaults to an empty list.
    #[must_use]
    pub fn content_types(self, types: Vec<ContentType>) -> Self {
        self.directory(Box::new(StaticContentTypes::new(types)))
    }

    /// Build the `AdminManager`.
    ///
    /// If `config_dir` is not set, uses the system config directory for the
    /// plugin's directory name. The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn build(self) -> Result<AdminManager<JsonFileStore>> {
        let dir = self.config_dir.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|d| d.join(self.plugin.dir_name()))
                .unwrap_or_else(|| PathBuf::from("."))
        });

        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| Error::DirectoryCreate {
                path: dir.clone(),
                source: e,
            })?;
        }

        let mut store = JsonFileStore::new(dir);
        if self.compact_json {
            store = store.compact();
        }

        let directory = self
            .directory
            .unwrap_or_else(|| Box::new(StaticContentTypes::new(Vec::new())));

        let mut manager = AdminManager::new(store, directory, self.plugin);
        if let Some(key) = self.option_key {
            manager = manager.with_option_key(key);
        }
        Ok(manager)
    }
}

// =============================================================================
// Tests
// =============================================================================
