//! Loading documents into one long list of rows with their headings.
//!
//! Each line of a document is a list row. Headings are found with the format's tree-sitter query
//! and keep the row they sit on, so they can be turned into section markers directly.

use crate::formats::Format;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use streaming_iterator::StreamingIterator;
use tree_sitter::{Parser, Query, QueryCursor};

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading found in a document.
pub struct Heading {
    /// Row of the heading line in the list.
    pub row: usize,
    /// Nesting level (1 for top-level).
    pub level: usize,
    /// Heading text without markup.
    pub title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Rows and headings of one or more documents laid end to end.
pub struct Document {
    /// Every line, in order.
    pub rows: Vec<String>,
    /// Headings in row order.
    pub headings: Vec<Heading>,
}

impl Document {
    #[must_use]
    /// Concatenates documents, shifting each one's heading rows past the rows before it.
    pub fn merge(documents: Vec<Document>) -> Self {
        let mut merged = Self::default();
        for document in documents {
            let base = merged.rows.len();
            merged
                .headings
                .extend(document.headings.into_iter().map(|heading| Heading {
                    row: heading.row + base,
                    ..heading
                }));
            merged.rows.extend(document.rows);
        }
        merged
    }
}

/// Collects files under `paths` whose extension is in `extensions`.
///
/// Directories are walked recursively in sorted order; files named explicitly are always kept.
/// With no paths, the current directory is scanned.
///
/// # Errors
///
/// Returns an error if a path or directory cannot be read.
pub fn find_documents(paths: Vec<PathBuf>, extensions: &[String]) -> io::Result<Vec<PathBuf>> {
    let paths = if paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        paths
    };

    let mut documents = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(&path, extensions, &mut documents)?;
        } else if path.exists() {
            documents.push(path);
        } else {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            ));
        }
    }
    Ok(documents)
}

fn walk_dir(dir: &Path, extensions: &[String], found: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<_>>()?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            walk_dir(&path, extensions, found)?;
        } else if has_extension(&path, extensions) {
            found.push(path);
        }
    }
    Ok(())
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

/// Reads a document and finds its headings.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_document(path: &Path, format: &dyn Format) -> io::Result<Document> {
    let source = fs::read_to_string(path)?;
    parse_document(&source, format)
}

/// Splits `source` into rows and finds its headings.
///
/// # Errors
///
/// Returns an error if the grammar or query cannot be loaded or the source cannot be parsed.
pub fn parse_document(source: &str, format: &dyn Format) -> io::Result<Document> {
    Ok(Document {
        rows: source.lines().map(str::to_string).collect(),
        headings: extract_headings(source, format)?,
    })
}

/// Runs the format's heading query over `source`.
///
/// # Errors
///
/// Returns an error if the grammar or query cannot be loaded or the source cannot be parsed.
pub fn extract_headings(source: &str, format: &dyn Format) -> io::Result<Vec<Heading>> {
    let language = format.language();
    let mut parser = Parser::new();
    parser.set_language(&language).map_err(io::Error::other)?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| io::Error::other("tree-sitter could not parse the document"))?;
    let query = Query::new(&language, format.section_query()).map_err(io::Error::other)?;

    let mut headings = Vec::new();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), source.as_bytes());
    while let Some(found) = matches.next() {
        for capture in found.captures {
            let node = capture.node;
            headings.push(Heading {
                row: node.start_position().row,
                level: format.heading_level(node),
                title: format.heading_title(node, source),
            });
        }
    }
    headings.sort_by_key(|heading| heading.row);
    headings.dedup_by_key(|heading| heading.row);
    Ok(headings)
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
