//! Common test utilities for dcmeta integration tests
//!
//! Provides shared fixtures: a fake host platform, a stock content-type
//! directory, and managers over both bundled option stores.

#![allow(dead_code)]

use dcmeta::{
    AdminManager, ContentType, Element, FormSubmission, JsonFileStore, MemoryStore, PluginHost,
    PluginInfo, StaticContentTypes, CHECKBOX_ON,
};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use tempfile::TempDir;

/// Plugin basename every fixture registers under
pub const BASENAME: &str = "dc-meta-tags/plugin";

/// Initialize test logging once; run with RUST_LOG=debug to see manager
/// activity
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The plugin descriptor used across the integration suite
pub fn plugin_info() -> PluginInfo {
    PluginInfo::new("DC Meta Tags", "0.2.0", BASENAME, "4.5")
}

/// The stock content types: two public, one internal
pub fn content_types() -> Vec<ContentType> {
    vec![
        ContentType::public("post", "Posts"),
        ContentType::public("page", "Pages"),
        ContentType::internal("revision", "Revisions"),
    ]
}

// =============================================================================
// Fake Host
// =============================================================================

/// A scripted host platform for gate and link tests
pub struct FakeHost {
    pub version: String,
    active: Cell<bool>,
    deactivations: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            active: Cell::new(true),
            deactivations: RefCell::new(Vec::new()),
        }
    }

    pub fn inactive(version: &str) -> Self {
        let host = Self::new(version);
        host.active.set(false);
        host
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Basenames passed to `deactivate_plugin`, in order
    pub fn deactivations(&self) -> Vec<String> {
        self.deactivations.borrow().clone()
    }
}

impl PluginHost for FakeHost {
    fn version(&self) -> String {
        self.version.clone()
    }

    fn is_plugin_active(&self, basename: &str) -> bool {
        basename == BASENAME && self.active.get()
    }

    fn deactivate_plugin(&self, basename: &str) {
        self.deactivations.borrow_mut().push(basename.to_string());
        if basename == BASENAME {
            self.active.set(false);
        }
    }

    fn admin_url(&self, path: &str) -> String {
        format!("https://cms.example/admin/{path}")
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// Manager over an in-memory store with the stock content types
pub fn memory_manager() -> AdminManager<MemoryStore> {
    init_logging();
    AdminManager::new(
        MemoryStore::new(),
        Box::new(StaticContentTypes::new(content_types())),
        plugin_info(),
    )
}

/// Test fixture holding a temp directory and a file-store-backed manager
pub struct FileFixture {
    pub temp_dir: TempDir,
    pub manager: AdminManager<JsonFileStore>,
}

impl FileFixture {
    pub fn new() -> Self {
        init_logging();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let manager = AdminManager::builder(plugin_info())
            .config_dir(temp_dir.path())
            .content_types(content_types())
            .build()
            .expect("Failed to build manager");

        Self { temp_dir, manager }
    }

    /// A second manager over the same directory, as a fresh admin process
    /// would construct it
    pub fn reopen(&self) -> AdminManager<JsonFileStore> {
        AdminManager::builder(plugin_info())
            .config_dir(self.temp_dir.path())
            .content_types(content_types())
            .build()
            .expect("Failed to rebuild manager")
    }

    /// Path of the stored option record on disk
    pub fn option_path(&self) -> PathBuf {
        self.temp_dir
            .path()
            .join(format!("{}.json", self.manager.option_key()))
    }
}

impl Default for FileFixture {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// A submission with every element toggle checked
pub fn all_checked() -> FormSubmission {
    let mut submission = FormSubmission::new();
    for element in Element::ALL {
        submission = submission.field(element.field_name(), CHECKBOX_ON);
    }
    submission
}

/// Read the raw stored record from a file fixture
pub fn read_stored_record(fixture: &FileFixture) -> Option<serde_json::Value> {
    let content = std::fs::read_to_string(fixture.option_path()).ok()?;
    serde_json::from_str(&content).ok()
}
