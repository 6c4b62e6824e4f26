use super::{nearest_active_section, Section, SectionIndex, SectionLabel, SectionMarker};
use crate::error::InvalidInputError;
use ratatui::style::Color;
use ratatui::text::Line;
use std::sync::Arc;

fn table(indices: &[usize]) -> SectionIndex {
    SectionIndex::from_header_indices(indices).unwrap()
}

#[test]
fn test_from_markers_assigns_dense_ordinals() {
    let sections = table(&[0, 20, 40]);
    let got: Vec<(usize, usize, usize)> = sections
        .sections()
        .iter()
        .map(|s| (s.index, s.start_index, s.section_index))
        .collect();
    assert_eq!(got, vec![(0, 1, 0), (20, 21, 1), (40, 41, 2)]);
}

#[test]
fn test_from_header_indices_labels_with_ordinal() {
    let sections = table(&[3, 9]);
    let section = sections.get(1).unwrap();
    assert_eq!(section.label.render(section, false).to_string(), "2");
}

#[test]
fn test_unsorted_markers_rejected() {
    let err = SectionIndex::from_markers([
        SectionMarker::new(10, "a"),
        SectionMarker::new(5, "b"),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        InvalidInputError::UnsortedMarkers {
            position: 1,
            index: 5,
            previous: 10,
        }
    );
}

#[test]
fn test_duplicate_markers_rejected() {
    let result = SectionIndex::from_header_indices(&[4, 4]);
    assert!(matches!(
        result,
        Err(InvalidInputError::UnsortedMarkers { position: 1, .. })
    ));
}

#[test]
fn test_empty_table() {
    let sections = table(&[]);
    assert!(sections.is_empty());
    assert_eq!(sections.nearest_active_section(100), None);
}

#[test]
fn test_nearest_active_section_picks_last_at_or_before() {
    let sections = table(&[0, 20, 40]);
    assert_eq!(sections.nearest_active_section(25).unwrap().index, 20);
    assert_eq!(sections.nearest_active_section(5).unwrap().index, 0);
    assert_eq!(sections.nearest_active_section(20).unwrap().index, 20);
    assert_eq!(sections.nearest_active_section(1000).unwrap().index, 40);
}

#[test]
fn test_position_before_first_section() {
    let sections = table(&[10, 20]);
    assert_eq!(nearest_active_section(sections.sections(), 9), None);
    assert_eq!(
        nearest_active_section(sections.sections(), 10).map(|s| s.section_index),
        Some(0)
    );
}

#[test]
fn test_dot_color_carried_through() {
    let sections = SectionIndex::from_markers([
        SectionMarker::new(0, "Intro"),
        SectionMarker::new(8, "Usage").with_dot_color(Color::Gray),
    ])
    .unwrap();
    assert_eq!(sections.get(0).unwrap().dot_color, None);
    assert_eq!(sections.get(1).unwrap().dot_color, Some(Color::Gray));
}

#[test]
fn test_label_renderer_sees_active_state() {
    let renderer: SectionLabel = SectionLabel::Renderer(Arc::new(|section: &Section, is_active: bool| {
        let mark = if is_active { "*" } else { "" };
        Line::from(format!("{mark}{}", section.index))
    }));
    let sections = SectionIndex::from_markers([SectionMarker::new(7, renderer)]).unwrap();
    let section = sections.get(0).unwrap();
    assert_eq!(section.label.render(section, true).to_string(), "*7");
    assert_eq!(section.label.render(section, false).to_string(), "7");
}
