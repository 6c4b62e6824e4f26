//! Format trait and implementations for different document types.
//!
//! This module defines the `Format` trait which abstracts over different document formats by
//! providing the tree-sitter grammar and heading query for each, plus how to read a heading's
//! level and title. Headings become the section markers of the scrolled list.

pub mod markdown;

/// Tree-sitter description of where a document format puts its section headings.
pub trait Format {
    /// Grammar used to parse the document.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node.
    fn section_query(&self) -> &str;
    /// Nesting level of a captured heading (1 for top-level).
    fn heading_level(&self, heading: tree_sitter::Node<'_>) -> usize;
    /// Heading text without markup.
    fn heading_title(&self, heading: tree_sitter::Node<'_>, source: &str) -> String;
}
