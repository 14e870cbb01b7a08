//! Text sanitization for admin-submitted values
//!
//! Free-text settings fields (rights URL, output format, post type labels)
//! accept whatever the admin form posts. Before persisting, every such value
//! passes through [`strip_markup`], which removes tags and script/style
//! blocks while preserving the remaining text.

use regex::Regex;
use std::sync::LazyLock;

/// Script and style elements are removed together with their content
static BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>")
        .expect("static regex must compile")
});

/// HTML comments, including multi-line ones
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("static regex must compile"));

/// Any remaining tag, opening or closing, possibly spanning lines
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("static regex must compile"));

/// Strip markup from a submitted text value
///
/// Removes script/style blocks (content included), HTML comments, and all
/// remaining tags. The surviving text is returned unchanged: no trimming,
/// no entity decoding.
///
/// ```
/// use dcmeta::sanitize::strip_markup;
///
/// assert_eq!(strip_markup("<b>Posts</b>"), "Posts");
/// assert_eq!(strip_markup("plain text"), "plain text");
/// ```
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let without_blocks = BLOCK_RE.replace_all(input, "");
    let without_comments = COMMENT_RE.replace_all(&without_blocks, "");
    TAG_RE.replace_all(&without_comments, "").into_owned()
}

// =============================================================================
// Tests
// =============================================================================
