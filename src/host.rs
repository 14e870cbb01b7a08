//! Host platform abstraction
//!
//! The plugin never talks to a concrete CMS. Everything it needs from the
//! host (registered content types, platform version, plugin activation
//! state, admin URLs) comes through the traits in this module, injected
//! explicitly when the [`AdminManager`](crate::AdminManager) is built or
//! invoked.

/// A content type registered with the host (e.g. "post", "page")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType {
    /// Stable identifier used as a settings key
    pub id: String,
    /// Human-readable plural label (e.g. "Posts")
    pub label: String,
    /// Whether the type is publicly queryable; only public types get
    /// per-type settings
    pub public: bool,
}

impl ContentType {
    /// Create a public content type
    pub fn public(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            public: true,
        }
    }

    /// Create a non-public (internal) content type
    pub fn internal(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            public: false,
        }
    }
}

/// Read-only directory of the host's registered content types
///
/// Implementations return a snapshot of host state at call time.
pub trait ContentTypeDirectory {
    /// All registered content types, public or not
    fn content_types(&self) -> Vec<ContentType>;
}

/// A fixed, in-memory content-type directory
///
/// For hosts whose type registry does not change at runtime, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticContentTypes {
    types: Vec<ContentType>,
}

impl StaticContentTypes {
    /// Create a directory over a fixed list of types
    #[must_use]
    pub fn new(types: Vec<ContentType>) -> Self {
        Self { types }
    }
}

impl ContentTypeDirectory for StaticContentTypes {
    fn content_types(&self) -> Vec<ContentType> {
        self.types.clone()
    }
}

/// Handle to the host platform for one admin request
///
/// Covers the version gate and URL construction. `deactivate_plugin` is the
/// single state-mutating call; hosts use interior mutability for it.
pub trait PluginHost {
    /// The host platform version string (e.g. "6.4.2", "4.5")
    fn version(&self) -> String;

    /// Whether the plugin identified by `basename` is currently active
    fn is_plugin_active(&self, basename: &str) -> bool;

    /// Deactivate the plugin identified by `basename`
    fn deactivate_plugin(&self, basename: &str);

    /// Absolute URL of an admin page, given its path relative to the admin
    /// root (empty path yields the admin home)
    fn admin_url(&self, path: &str) -> String;
}

/// Static descriptor of this plugin, as the host sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
    /// Display name shown in error pages and the plugin list
    pub name: String,
    /// Plugin version
    pub version: String,
    /// Host-side identifier for the plugin row (directory/entry form)
    pub basename: String,
    /// Oldest host platform version the plugin runs on
    pub min_host_version: String,
}

impl PluginInfo {
    /// Create a descriptor with the required fields
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        basename: impl Into<String>,
        min_host_version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            basename: basename.into(),
            min_host_version: min_host_version.into(),
        }
    }

    /// Directory portion of the basename (e.g. `"dc-meta-tags"`)
    #[must_use]
    pub fn dir_name(&self) -> &str {
        match self.basename.split_once('/') {
            Some((dir, _)) => dir,
            None => &self.basename,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
