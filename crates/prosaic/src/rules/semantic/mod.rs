//! Semantic markup rules.

mod prefer_paragraph;

pub use prefer_paragraph::PreferParagraph;
