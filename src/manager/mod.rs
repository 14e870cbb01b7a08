//! Main admin manager module
//!
//! This module contains the [`AdminManager`] struct which is the primary
//! entry point for the plugin's admin-side behavior: seeding the default
//! settings record, validating form submissions, gating on host version,
//! and describing the settings page and plugin-row links.

use crate::compat;
use crate::error::Result;
use crate::form::FormSubmission;
use crate::host::{ContentTypeDirectory, PluginHost, PluginInfo};
use crate::links::{self, ActionLink};
use crate::menu::SettingsPage;
use crate::settings::MetaSettings;
use crate::store::{JsonFileStore, OptionStore};

use log::{debug, info};
use std::collections::BTreeMap;

/// Fixed key of the plugin's record in the host option store
pub const OPTION_KEY: &str = "dcm_options";

// =============================================================================
// Builder Module
// =============================================================================

mod builder;
pub use builder::AdminManagerBuilder;

/// Admin-side settings manager for the Dublin Core meta tags plugin
///
/// Constructed once by the host admin framework with its dependencies
/// injected explicitly: the option store, the content-type directory, and
/// the plugin descriptor. Every operation runs to completion within one
/// admin request; the only shared state is the host's option store.
///
/// # Example
///
/// ```rust,no_run
/// use dcmeta::{AdminManager, ContentType, PluginInfo};
///
/// let plugin = PluginInfo::new("DC Meta Tags", "0.2.0", "dc-meta-tags/plugin", "4.5");
/// let manager = AdminManager::builder(plugin)
///     .config_dir("/tmp/dcmeta")
///     .content_types(vec![ContentType::public("post", "Posts")])
///     .build()
///     .unwrap();
///
/// manager.initialize_defaults().unwrap();
/// ```
pub struct AdminManager<S: OptionStore = JsonFileStore> {
    /// Host option store holding the persisted record
    store: S,

    /// Host directory of registered content types
    directory: Box<dyn ContentTypeDirectory>,

    /// This plugin, as the host sees it
    plugin: PluginInfo,

    /// Key of the record in the option store
    option_key: String,

    /// Settings page registration descriptor
    page: SettingsPage,
}

impl AdminManager {
    /// Create a builder for an `AdminManager` backed by a JSON file store.
    ///
    /// This is the recommended way to create an `AdminManager` when the host
    /// does not bring its own option store. For a custom store, use
    /// [`AdminManager::new`].
    pub fn builder(plugin: PluginInfo) -> AdminManagerBuilder {
        AdminManagerBuilder::new(plugin)
    }
}

impl<S: OptionStore> AdminManager<S> {
    /// Create a manager over a custom option store
    ///
    /// # Example
    ///
    /// ```rust
    /// use dcmeta::{AdminManager, ContentType, MemoryStore, PluginInfo, StaticContentTypes};
    ///
    /// let plugin = PluginInfo::new("DC Meta Tags", "0.2.0", "dc-meta-tags/plugin", "4.5");
    /// let directory = StaticContentTypes::new(vec![ContentType::public("post", "Posts")]);
    /// let manager = AdminManager::new(MemoryStore::new(), Box::new(directory), plugin);
    /// ```
    pub fn new(store: S, directory: Box<dyn ContentTypeDirectory>, plugin: PluginInfo) -> Self {
        info!("Initialized dcmeta AdminManager for {}", plugin.name);
        Self {
            store,
            directory,
            plugin,
            option_key: OPTION_KEY.to_string(),
            page: SettingsPage::new(),
        }
    }

    /// Use a different option store key (default: [`OPTION_KEY`])
    #[must_use]
    pub fn with_option_key(mut self, key: impl Into<String>) -> Self {
        self.option_key = key.into();
        self
    }

    /// The plugin descriptor this manager was built with
    pub fn plugin(&self) -> &PluginInfo {
        &self.plugin
    }

    /// Key of the record in the option store
    pub fn option_key(&self) -> &str {
        &self.option_key
    }

    /// The option store
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Settings Record
    // =========================================================================

    /// Seed the default settings record if none exists
    ///
    /// Idempotent: when a record is already stored the call is a no-op and
    /// user edits are never overwritten. The default record's per-type labels
    /// are computed from the host's current public content types.
    ///
    /// Returns `true` when a record was written.
    pub fn initialize_defaults(&self) -> Result<bool> {
        if self.store.read_raw(&self.option_key)?.is_some() {
            debug!("Settings record already present, leaving it untouched");
            return Ok(false);
        }

        let mut defaults = MetaSettings::default();
        defaults.post_type_labels = self.public_content_type_labels();

        self.store.write(&self.option_key, &defaults)?;
        info!(
            "Seeded default settings under '{}' ({} content types)",
            self.option_key,
            defaults.post_type_labels.len()
        );
        Ok(true)
    }

    /// Load the current settings record
    ///
    /// Falls back to the computed defaults when no record is stored yet
    /// (nothing is written in that case).
    pub fn settings(&self) -> Result<MetaSettings> {
        match self.store.read(&self.option_key)? {
            Some(settings) => Ok(settings),
            None => {
                let mut defaults = MetaSettings::default();
                defaults.post_type_labels = self.public_content_type_labels();
                Ok(defaults)
            }
        }
    }

    /// Persist a settings record wholesale
    pub fn persist(&self, settings: &MetaSettings) -> Result<()> {
        self.store.write(&self.option_key, settings)?;
        info!("Settings record saved under '{}'", self.option_key);
        Ok(())
    }

    // =========================================================================
    // Content Types
    // =========================================================================

    /// Identifiers of the host's public content types
    pub fn public_content_types(&self) -> Vec<String> {
        self.directory
            .content_types()
            .into_iter()
            .filter(|t| t.public)
            .map(|t| t.id)
            .collect()
    }

    /// Identifier → label mapping of the host's public content types
    pub fn public_content_type_labels(&self) -> BTreeMap<String, String> {
        self.directory
            .content_types()
            .into_iter()
            .filter(|t| t.public)
            .map(|t| (t.id, t.label))
            .collect()
    }

    // =========================================================================
    // Form Validation
    // =========================================================================

    /// Coerce and sanitize a raw form submission into a settings record
    ///
    /// Never fails; see [`FormSubmission::validate`] for the coercion rules.
    /// The host persists the returned record verbatim (or lets
    /// [`AdminManager::apply_submission`] do both steps).
    #[must_use]
    pub fn validate(&self, submission: &FormSubmission) -> MetaSettings {
        submission.validate()
    }

    /// Validate a submission and persist the sanitized record
    pub fn apply_submission(&self, submission: &FormSubmission) -> Result<MetaSettings> {
        let settings = self.validate(submission);
        self.persist(&settings)?;
        Ok(settings)
    }

    // =========================================================================
    // Host Integration
    // =========================================================================

    /// Run the host version gate for the current admin request
    ///
    /// See [`crate::compat::check_host_compatibility`]; on failure the plugin
    /// has been deactivated and the returned error carries the page the host
    /// renders before halting.
    pub fn check_host_compatibility(&self, host: &dyn PluginHost) -> Result<()> {
        compat::check_host_compatibility(&self.plugin, host)
    }

    /// The settings page registration the host mounts under its admin menu
    pub fn settings_page(&self) -> &SettingsPage {
        &self.page
    }

    /// Absolute URL of the settings page on the given host
    pub fn settings_url(&self, host: &dyn PluginHost) -> String {
        host.admin_url(&self.page.admin_path())
    }

    /// Extend one plugin-list row's action links
    ///
    /// Called by the host once per plugin row; prepends a Settings link when
    /// the row is this plugin's, and returns the collection unchanged
    /// otherwise.
    #[must_use]
    pub fn settings_action_links(
        &self,
        host: &dyn PluginHost,
        links: Vec<ActionLink>,
        row_plugin_file: &str,
    ) -> Vec<ActionLink> {
        links::prepend_settings_link(
            links,
            &self.plugin.basename,
            row_plugin_file,
            self.settings_url(host),
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ContentType, StaticContentTypes};
    use crate::settings::Element;
    use crate::store::MemoryStore;

    fn manager() -> AdminManager<MemoryStore> {
        let directory = StaticContentTypes::new(vec![
            ContentType::public("post", "Posts"),
            ContentType::public("page", "Pages"),
            ContentType::internal("revision", "Revisions"),
        ]);
        AdminManager::new(
            MemoryStore::new(),
            Box::new(directory),
            PluginInfo::new("DC Meta Tags", "0.2.0", "dc-meta-tags/plugin", "4.5"),
        )
    }

    #[test]
    fn test_initialize_defaults_seeds_once() {
        let manager = manager();

        assert!(manager.initialize_defaults().unwrap());

        let settings = manager.settings().unwrap();
        assert!(!settings.is_enabled(Element::Language));
        assert_eq!(settings.post_type_labels.len(), 2);
        assert_eq!(settings.post_type_labels["post"], "Posts");

        // Second call is a no-op
        assert!(!manager.initialize_defaults().unwrap());
    }

    #[test]
    fn test_initialize_defaults_preserves_user_edits() {
        let manager = manager();
        manager.initialize_defaults().unwrap();

        let mut edited = manager.settings().unwrap();
        edited.set_enabled(Element::Title, false);
        manager.persist(&edited).unwrap();

        manager.initialize_defaults().unwrap();

        let reloaded = manager.settings().unwrap();
        assert!(!reloaded.is_enabled(Element::Title));
    }

    #[test]
    fn test_public_content_type_filtering() {
        let manager = manager();

        assert_eq!(manager.public_content_types(), vec!["post", "page"]);

        let labels = manager.public_content_type_labels();
        assert_eq!(labels.len(), 2);
        assert!(!labels.contains_key("revision"));
    }

    #[test]
    fn test_apply_submission_persists_sanitized_record() {
        let manager = manager();
        manager.initialize_defaults().unwrap();

        let submission = FormSubmission::new()
            .field("elem_title", "1")
            .field("rights_url", "<b>https://ok.example</b>")
            .post_type_label("post", "<i>Posts</i>");

        let applied = manager.apply_submission(&submission).unwrap();
        assert!(applied.is_enabled(Element::Title));
        assert!(!applied.is_enabled(Element::Creator));
        assert_eq!(applied.rights_url, "https://ok.example");

        // Wholesale replace: the stored record is exactly what validate returned
        assert_eq!(manager.settings().unwrap(), applied);
    }

    #[test]
    fn test_settings_without_record_are_defaults() {
        let manager = manager();

        let settings = manager.settings().unwrap();
        assert!(settings.is_enabled(Element::Creator));
        assert_eq!(settings.post_type_labels["page"], "Pages");

        // Reading alone must not seed the store
        assert!(manager.store().is_empty());
    }
}
