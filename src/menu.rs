//! Admin menu registration
//!
//! The settings page itself (form markup, localization) is the host's
//! business. This module only describes the registration: where the page
//! hangs in the admin menu, its fixed identifier, and the capability the
//! host must check before serving it.

/// Fixed page identifier under the host admin menu
pub const SETTINGS_PAGE_ID: &str = "dcm_settings";

/// Capability the host checks before serving the settings page
pub const REQUIRED_CAPABILITY: &str = "manage_options";

/// Registration descriptor for the plugin's settings page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPage {
    /// Title shown in the browser tab
    pub page_title: String,
    /// Shorter title shown in the admin menu
    pub menu_title: String,
    /// Page identifier, fixed to [`SETTINGS_PAGE_ID`]
    pub page_id: &'static str,
    /// Administrator-level capability gating the page
    pub capability: &'static str,
}

impl SettingsPage {
    /// The plugin's one settings page registration
    #[must_use]
    pub fn new() -> Self {
        Self {
            page_title: "Dublin Core Meta Tags".into(),
            menu_title: "DC Meta Tags".into(),
            page_id: SETTINGS_PAGE_ID,
            capability: REQUIRED_CAPABILITY,
        }
    }

    /// Path of the page relative to the admin root
    #[must_use]
    pub fn admin_path(&self) -> String {
        format!("admin.php?page={}", self.page_id)
    }
}

impl Default for SettingsPage {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
