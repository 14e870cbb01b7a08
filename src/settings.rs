//! The persisted settings record
//!
//! One record controls everything the plugin emits: a per-element toggle for
//! each of the fifteen Dublin Core elements, the markup flavor of the emitted
//! tags, an optional rights URL, and a display label per host content type.
//! The record is read and written wholesale under a single option key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The fifteen Dublin Core metadata elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Contributor,
    Coverage,
    Creator,
    Date,
    Description,
    Format,
    Identifier,
    Language,
    Publisher,
    Relation,
    Rights,
    Source,
    Subject,
    Title,
    Type,
}

impl Element {
    /// All elements, in canonical Dublin Core order
    pub const ALL: [Element; 15] = [
        Element::Contributor,
        Element::Coverage,
        Element::Creator,
        Element::Date,
        Element::Description,
        Element::Format,
        Element::Identifier,
        Element::Language,
        Element::Publisher,
        Element::Relation,
        Element::Rights,
        Element::Source,
        Element::Subject,
        Element::Title,
        Element::Type,
    ];

    /// Lowercase Dublin Core element name (e.g. `"creator"`)
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Element::Contributor => "contributor",
            Element::Coverage => "coverage",
            Element::Creator => "creator",
            Element::Date => "date",
            Element::Description => "description",
            Element::Format => "format",
            Element::Identifier => "identifier",
            Element::Language => "language",
            Element::Publisher => "publisher",
            Element::Relation => "relation",
            Element::Rights => "rights",
            Element::Source => "source",
            Element::Subject => "subject",
            Element::Title => "title",
            Element::Type => "type",
        }
    }

    /// Name of the form field and stored key for this element's toggle
    /// (e.g. `"elem_creator"`)
    #[must_use]
    pub fn field_name(self) -> String {
        format!("elem_{}", self.name())
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Output Format
// =============================================================================

/// Markup flavor for emitted meta tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain HTML (`<meta ...>`)
    Html,
    /// Self-closing XHTML (`<meta ... />`)
    #[default]
    Xhtml,
}

impl OutputFormat {
    /// Stored string form of this format
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Xhtml => "xhtml",
        }
    }

    /// Parse a stored/submitted string form; `None` for anything unrecognized
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "html" => Some(OutputFormat::Html),
            "xhtml" => Some(OutputFormat::Xhtml),
            _ => None,
        }
    }
}

// =============================================================================
// Settings Record
// =============================================================================

/// The plugin's single persisted settings record
///
/// Every field has a safe default, and deserialization fills missing fields
/// from those defaults, so a record written by an older release loads
/// without errors.
///
/// Element toggles default to enabled except `language`, which is opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaSettings {
    #[serde(rename = "elem_contributor")]
    pub contributor: bool,
    #[serde(rename = "elem_coverage")]
    pub coverage: bool,
    #[serde(rename = "elem_creator")]
    pub creator: bool,
    #[serde(rename = "elem_date")]
    pub date: bool,
    #[serde(rename = "elem_description")]
    pub description: bool,
    #[serde(rename = "elem_format")]
    pub format: bool,
    #[serde(rename = "elem_identifier")]
    pub identifier: bool,
    #[serde(rename = "elem_language")]
    pub language: bool,
    #[serde(rename = "elem_publisher")]
    pub publisher: bool,
    #[serde(rename = "elem_relation")]
    pub relation: bool,
    #[serde(rename = "elem_rights")]
    pub rights: bool,
    #[serde(rename = "elem_source")]
    pub source: bool,
    #[serde(rename = "elem_subject")]
    pub subject: bool,
    #[serde(rename = "elem_title")]
    pub title: bool,
    pub elem_type: bool,

    /// Free-text URL of the rights statement emitted with the rights element
    pub rights_url: String,

    /// Markup flavor for emitted tags
    #[serde(rename = "output_html")]
    pub output_format: OutputFormat,

    /// Display label per public content type identifier
    ///
    /// Seeded from the host's registered public content types when the
    /// record is first created; values are user-editable afterwards.
    #[serde(rename = "post_types")]
    pub post_type_labels: BTreeMap<String, String>,
}

impl Default for MetaSettings {
    fn default() -> Self {
        Self {
            contributor: true,
            coverage: true,
            creator: true,
            date: true,
            description: true,
            format: true,
            identifier: true,
            language: false,
            publisher: true,
            relation: true,
            rights: true,
            source: true,
            subject: true,
            title: true,
            elem_type: true,
            rights_url: String::new(),
            output_format: OutputFormat::default(),
            post_type_labels: BTreeMap::new(),
        }
    }
}

impl MetaSettings {
    /// Check whether an element's emission is enabled
    #[must_use]
    pub fn is_enabled(&self, element: Element) -> bool {
        match element {
            Element::Contributor => self.contributor,
            Element::Coverage => self.coverage,
            Element::Creator => self.creator,
            Element::Date => self.date,
            Element::Description => self.description,
            Element::Format => self.format,
            Element::Identifier => self.identifier,
            Element::Language => self.language,
            Element::Publisher => self.publisher,
            Element::Relation => self.relation,
            Element::Rights => self.rights,
            Element::Source => self.source,
            Element::Subject => self.subject,
            Element::Title => self.title,
            Element::Type => self.elem_type,
        }
    }

    /// Enable or disable an element's emission
    pub fn set_enabled(&mut self, element: Element, enabled: bool) {
        let flag = match element {
            Element::Contributor => &mut self.contributor,
            Element::Coverage => &mut self.coverage,
            Element::Creator => &mut self.creator,
            Element::Date => &mut self.date,
            Element::Description => &mut self.description,
            Element::Format => &mut self.format,
            Element::Identifier => &mut self.identifier,
            Element::Language => &mut self.language,
            Element::Publisher => &mut self.publisher,
            Element::Relation => &mut self.relation,
            Element::Rights => &mut self.rights,
            Element::Source => &mut self.source,
            Element::Subject => &mut self.subject,
            Element::Title => &mut self.title,
            Element::Type => &mut self.elem_type,
        };
        *flag = enabled;
    }

    /// Elements currently enabled for emission, in canonical order
    pub fn enabled_elements(&self) -> impl Iterator<Item = Element> + '_ {
        Element::ALL.into_iter().filter(|e| self.is_enabled(*e))
    }
}

// =============================================================================
// Tests
// =============================================================================
