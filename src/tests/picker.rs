use super::{PickerTick, SectionPicker};
use crate::handle::SectionPresenter;
use crate::section::SectionIndex;

fn sections() -> SectionIndex {
    SectionIndex::from_header_indices(&[0, 20, 40]).unwrap()
}

#[test]
fn test_starts_hidden() {
    let picker = SectionPicker::new(3000, 1000);
    assert!(!picker.is_visible());
    assert_eq!(picker.highlighted(), None);
}

#[test]
fn test_show_highlights_and_requests_centre() {
    let sections = sections();
    let mut picker = SectionPicker::new(3000, 1000);
    picker.show(sections.get(1).unwrap(), 0);
    assert!(picker.is_visible());
    assert_eq!(picker.highlighted(), Some(1));
    assert_eq!(picker.take_centre_request(), Some(1));
    assert_eq!(picker.take_centre_request(), None);
}

#[test]
fn test_recentres_once_after_delay() {
    let sections = sections();
    let mut picker = SectionPicker::new(3000, 1000);
    picker.show(sections.get(2).unwrap(), 0);
    assert_eq!(picker.tick(999), PickerTick::default());
    assert_eq!(
        picker.tick(1000),
        PickerTick {
            hidden: false,
            centre_on: Some(2),
        }
    );
    assert_eq!(picker.tick(1500).centre_on, None);
}

#[test]
fn test_hides_when_idle() {
    let sections = sections();
    let mut picker = SectionPicker::new(3000, 1000);
    picker.show(sections.get(0).unwrap(), 0);
    picker.tick(1000);
    assert!(!picker.tick(2999).hidden);
    assert!(picker.tick(3000).hidden);
    assert!(!picker.is_visible());
}

#[test]
fn test_own_scroll_keeps_open() {
    let sections = sections();
    let mut picker = SectionPicker::new(3000, 1000);
    picker.show(sections.get(0).unwrap(), 0);
    picker.on_scroll(2500);
    assert!(!picker.tick(3000).hidden);
    assert!(picker.tick(5500).hidden);
}

#[test]
fn test_scroll_while_hidden_does_not_open() {
    let mut picker = SectionPicker::new(3000, 1000);
    picker.on_scroll(0);
    assert!(!picker.is_visible());
}

#[test]
fn test_hide_drops_recentre() {
    let sections = sections();
    let mut picker = SectionPicker::new(3000, 1000);
    picker.show(sections.get(1).unwrap(), 0);
    picker.hide();
    assert!(!picker.is_visible());
    assert_eq!(picker.take_centre_request(), None);
    assert_eq!(picker.tick(1000), PickerTick::default());
}
