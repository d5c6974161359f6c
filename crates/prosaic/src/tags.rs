//! Tag classification tables.
//!
//! Fixed lookup sets for HTML inline and block tags, compiled in with `phf`.
//! The two sets are disjoint by construction; `classify` maps every tag name
//! to exactly one `TagKind`.

use phf::phf_set;

/// Tags conventionally rendered without a forced line break that are
/// expected to hold only text or other inline content.
pub static INLINE_TAGS: phf::Set<&'static str> = phf_set! {
    "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "dfn",
    "em", "i", "kbd", "mark", "q", "rp", "rt", "ruby", "s", "samp",
    "small", "span", "strong", "sub", "sup", "time", "u", "var", "wbr",
};

/// Tags that structure layout rather than hold pure text.
pub static BLOCK_TAGS: phf::Set<&'static str> = phf_set! {
    "article", "aside", "button", "details", "div", "footer", "form",
    "header", "li", "main", "nav", "ol", "section", "summary", "table",
    "td", "th", "tr", "ul",
};

/// Classification of a JSX tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Uppercase-initial name: a user component, opaque to the linter
    Component,
    /// Member of the inline set
    Inline,
    /// Member of the block set
    Block,
    /// Lowercase HTML-style tag in neither set
    Unclassified,
}

/// Classify a tag name into exactly one `TagKind`.
///
/// Casing is checked first: an uppercase-initial name is always a component,
/// regardless of set membership.
#[inline]
pub fn classify(tag: &str) -> TagKind {
    if is_component(tag) {
        TagKind::Component
    } else if INLINE_TAGS.contains(tag) {
        TagKind::Inline
    } else if BLOCK_TAGS.contains(tag) {
        TagKind::Block
    } else {
        TagKind::Unclassified
    }
}

/// Check if a tag name refers to a user component (uppercase-initial)
#[inline]
pub fn is_component(tag: &str) -> bool {
    tag.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Check if a tag is in the inline set
#[inline]
pub fn is_inline_tag(tag: &str) -> bool {
    INLINE_TAGS.contains(tag)
}

/// Check if a tag is in the block set
#[inline]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(tag)
}
