//! Markdown format implementation using tree-sitter-md.
//!
//! This module provides tree-sitter queries for parsing markdown documents
//! and extracting section structure from ATX-style headings (# syntax).

use crate::formats::Format;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn section_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn heading_level(&self, heading: tree_sitter::Node<'_>) -> usize {
        let mut cursor = heading.walk();
        let level = heading
            .children(&mut cursor)
            .find_map(|child| {
                child
                    .kind()
                    .strip_prefix("atx_h")
                    .and_then(|rest| rest.strip_suffix("_marker"))
                    .and_then(|digit| digit.parse::<usize>().ok())
            });
        level.unwrap_or(1)
    }

    fn heading_title(&self, heading: tree_sitter::Node<'_>, source: &str) -> String {
        let mut cursor = heading.walk();
        let inline = heading
            .children(&mut cursor)
            .find(|child| child.kind() == "inline");
        let text = match inline {
            Some(node) => node.utf8_text(source.as_bytes()).unwrap_or_default(),
            None => heading
                .utf8_text(source.as_bytes())
                .unwrap_or_default()
                .trim_start_matches('#'),
        };
        text.trim().to_string()
    }
}
