//! Settings form submission and validation
//!
//! The host posts the raw submitted form fields here;
//! [`FormSubmission::validate`] returns the sanitized record the host then
//! persists verbatim. Validation never fails: missing or malformed fields
//! coerce to safe defaults instead of being rejected.

use crate::sanitize::strip_markup;
use crate::settings::{Element, MetaSettings, OutputFormat};
use log::debug;
use std::collections::{BTreeMap, HashMap};

/// Canonical "on" value of a checked checkbox
///
/// An element toggle is enabled only when its field is submitted with
/// exactly this value. Any other value, and the field being absent entirely
/// (an unchecked checkbox submits nothing), disables the toggle. Exact
/// equality, never truthiness.
pub const CHECKBOX_ON: &str = "1";

/// Raw settings form fields, as posted by the host
///
/// Scalar fields are kept as submitted strings; per-content-type label
/// fields are kept separately, keyed by content type identifier.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    fields: HashMap<String, String>,
    post_type_labels: BTreeMap<String, String>,
}

impl FormSubmission {
    /// Create an empty submission (all toggles off, all text empty)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a scalar field (builder form)
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a per-content-type label field (builder form)
    #[must_use]
    pub fn post_type_label(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
        self.post_type_labels.insert(id.into(), label.into());
        self
    }

    /// Get a submitted scalar field value
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Rebuild the form state a sanitized record would render as
    ///
    /// Enabled toggles become `"1"` fields; disabled toggles are absent,
    /// matching checkbox semantics. Useful for re-rendering the form and for
    /// checking validation idempotence.
    #[must_use]
    pub fn from_settings(settings: &MetaSettings) -> Self {
        let mut submission = Self::new();
        for element in Element::ALL {
            if settings.is_enabled(element) {
                submission = submission.field(element.field_name(), CHECKBOX_ON);
            }
        }
        submission = submission
            .field("rights_url", settings.rights_url.as_str())
            .field("output_html", settings.output_format.as_str());
        for (id, label) in &settings.post_type_labels {
            submission = submission.post_type_label(id.as_str(), label.as_str());
        }
        submission
    }

    /// Coerce and sanitize this submission into a settings record
    ///
    /// - Element toggles: enabled iff the field equals [`CHECKBOX_ON`].
    /// - `rights_url`: markup stripped, otherwise preserved.
    /// - `output_html`: markup stripped, then matched against the known
    ///   formats; unrecognized values fall back to the default.
    /// - Post type labels: markup stripped from every value, keys unchanged.
    #[must_use]
    pub fn validate(&self) -> MetaSettings {
        let mut settings = MetaSettings::default();

        for element in Element::ALL {
            let enabled = self.get(&element.field_name()) == Some(CHECKBOX_ON);
            settings.set_enabled(element, enabled);
        }

        settings.rights_url = strip_markup(self.get("rights_url").unwrap_or_default());

        let raw_format = strip_markup(self.get("output_html").unwrap_or_default());
        settings.output_format = OutputFormat::parse(&raw_format).unwrap_or_else(|| {
            debug!("Unrecognized output format '{raw_format}', using default");
            OutputFormat::default()
        });

        settings.post_type_labels = self
            .post_type_labels
            .iter()
            .map(|(id, label)| (id.clone(), strip_markup(label)))
            .collect();

        settings
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// A submission with every toggle checked and well-formed text fields
    fn full_submission() -> FormSubmission {
        let mut submission = FormSubmission::new();
        for element in Element::ALL {
            submission = submission.field(element.field_name(), CHECKBOX_ON);
        }
        submission
            .field("rights_url", "https://example.org/rights")
            .field("output_html", "html")
            .post_type_label("post", "Posts")
            .post_type_label("page", "Pages")
    }

    #[test]
    fn test_checkbox_on_enables() {
        let settings = full_submission().validate();
        for element in Element::ALL {
            assert!(settings.is_enabled(element), "{element} should be enabled");
        }
    }

    #[test]
    fn test_absent_field_disables() {
        let settings = FormSubmission::new().validate();
        for element in Element::ALL {
            assert!(!settings.is_enabled(element), "{element} should be off");
        }
    }

    #[test]
    fn test_non_sentinel_values_disable() {
        // Exact equality with "1"; truthy lookalikes do not count
        for value in ["on", "true", "yes", "0", "", " 1", "11"] {
            let settings = FormSubmission::new()
                .field("elem_title", value)
                .validate();
            assert!(
                !settings.is_enabled(Element::Title),
                "value {value:?} must not enable the toggle"
            );
        }
    }

    #[test]
    fn test_text_fields_sanitized() {
        let settings = FormSubmission::new()
            .field("rights_url", "<script>alert(1)</script>https://ok.example")
            .post_type_label("post", "<b>Posts</b>")
            .validate();

        assert_eq!(settings.rights_url, "https://ok.example");
        assert_eq!(settings.post_type_labels["post"], "Posts");
    }

    #[test]
    fn test_label_keys_unchanged() {
        let settings = FormSubmission::new()
            .post_type_label("my_custom_type", "<i>Custom</i>")
            .validate();

        assert_eq!(
            settings.post_type_labels.get("my_custom_type").map(String::as_str),
            Some("Custom")
        );
    }

    #[test]
    fn test_output_format_coercion() {
        let html = FormSubmission::new().field("output_html", "html").validate();
        assert_eq!(html.output_format, OutputFormat::Html);

        // Unknown and missing values fall back to the default
        let junk = FormSubmission::new().field("output_html", "sgml").validate();
        assert_eq!(junk.output_format, OutputFormat::Xhtml);

        let missing = FormSubmission::new().validate();
        assert_eq!(missing.output_format, OutputFormat::Xhtml);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let first = full_submission()
            .field("rights_url", "keep <b>this</b> text")
            .post_type_label("page", "Pa<ges")
            .validate();

        let second = FormSubmission::from_settings(&first).validate();

        assert_eq!(first, second);
    }

    #[test]
    fn test_never_fails_on_garbage() {
        let settings = FormSubmission::new()
            .field("elem_bogus", "1")
            .field("unrelated", "<script>x</script>")
            .validate();

        // Unknown fields are ignored; the record is complete and default-safe
        assert_eq!(settings.enabled_elements().count(), 0);
        assert_eq!(settings.output_format, OutputFormat::Xhtml);
    }
}
