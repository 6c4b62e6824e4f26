use super::{find_documents, load_document, parse_document, Document, Heading};
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use std::io;
use std::path::PathBuf;

const SOURCE: &str = "# Title\n\nIntro text\n\n## Part one\n\nbody\n\n### Deep\n";

#[test]
fn test_headings_keep_their_rows() {
    let document = parse_document(SOURCE, &MarkdownFormat).unwrap();
    assert_eq!(document.rows.len(), 9);
    assert_eq!(
        document.headings,
        vec![
            Heading {
                row: 0,
                level: 1,
                title: "Title".to_string(),
            },
            Heading {
                row: 4,
                level: 2,
                title: "Part one".to_string(),
            },
            Heading {
                row: 8,
                level: 3,
                title: "Deep".to_string(),
            },
        ]
    );
}

#[test]
fn test_document_without_headings() {
    let document = parse_document("just\nsome\nlines\n", &MarkdownFormat).unwrap();
    assert_eq!(document.rows, vec!["just", "some", "lines"]);
    assert!(document.headings.is_empty());
}

#[test]
fn test_merge_offsets_heading_rows() {
    let first = parse_document("# A\nx\ny\n", &MarkdownFormat).unwrap();
    let second = parse_document("# B\nz\n", &MarkdownFormat).unwrap();
    let merged = Document::merge(vec![first, second]);
    assert_eq!(merged.rows.len(), 5);
    let rows: Vec<usize> = merged.headings.iter().map(|h| h.row).collect();
    assert_eq!(rows, vec![0, 3]);
    assert_eq!(merged.rows[3], "# B");
}

#[test]
fn test_find_documents_walks_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("b.md"), "# B\n").unwrap();
    fs::write(dir.path().join("a.md"), "# A\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "skip").unwrap();
    fs::write(dir.path().join("sub").join("c.md"), "# C\n").unwrap();

    let found = find_documents(vec![dir.path().to_path_buf()], &["md".to_string()]).unwrap();
    let names: Vec<PathBuf> = found
        .iter()
        .map(|path| path.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("a.md"),
            PathBuf::from("b.md"),
            PathBuf::from("sub/c.md"),
        ]
    );

    let document = load_document(&found[2], &MarkdownFormat).unwrap();
    assert_eq!(document.headings[0].title, "C");
}

#[test]
fn test_explicit_file_always_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "plain").unwrap();
    let found = find_documents(vec![path.clone()], &["md".to_string()]).unwrap();
    assert_eq!(found, vec![path]);
}

#[test]
fn test_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = find_documents(vec![dir.path().join("absent.md")], &[]).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}
