//! Plugin-list action links
//!
//! While rendering its plugin list, the host passes each row's link
//! collection through the plugins that want to extend it. This plugin
//! prepends a single Settings link to its own row and leaves every other
//! row untouched.

/// One hyperlink in a plugin row's action link collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub label: String,
    pub href: String,
}

impl ActionLink {
    /// Create a link
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

impl std::fmt::Display for ActionLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<a href=\"{}\">{}</a>", self.href, self.label)
    }
}

/// Prepend a Settings link to the plugin's own row
///
/// Pure transformation: when `row_plugin_file` equals `plugin_basename`,
/// returns the collection with one Settings link prepended; otherwise
/// returns the collection unchanged.
#[must_use]
pub fn prepend_settings_link(
    mut links: Vec<ActionLink>,
    plugin_basename: &str,
    row_plugin_file: &str,
    settings_url: impl Into<String>,
) -> Vec<ActionLink> {
    if row_plugin_file == plugin_basename {
        links.insert(0, ActionLink::new("Settings", settings_url));
    }
    links
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BASENAME: &str = "dc-meta-tags/plugin";

    fn row_links() -> Vec<ActionLink> {
        vec![
            ActionLink::new("Deactivate", "https://cms.example/admin/deactivate"),
            ActionLink::new("Edit", "https://cms.example/admin/edit"),
        ]
    }

    #[test]
    fn test_matching_row_gets_one_link_prepended() {
        let links = prepend_settings_link(row_links(), BASENAME, BASENAME, "https://s.example");

        assert_eq!(links.len(), 3);
        assert_eq!(links[0].label, "Settings");
        assert_eq!(links[0].href, "https://s.example");
        assert_eq!(links[1].label, "Deactivate");
    }

    #[test]
    fn test_other_rows_unchanged() {
        let original = row_links();
        let links = prepend_settings_link(
            original.clone(),
            BASENAME,
            "other-plugin/plugin",
            "https://s.example",
        );

        assert_eq!(links, original);
    }

    #[test]
    fn test_link_renders_as_anchor() {
        let link = ActionLink::new("Settings", "https://cms.example/admin/admin.php?page=dcm_settings");
        assert_eq!(
            link.to_string(),
            "<a href=\"https://cms.example/admin/admin.php?page=dcm_settings\">Settings</a>"
        );
    }
}
