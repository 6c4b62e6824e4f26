use super::ThumbIndicator;
use crate::gesture::ScrollCommand;
use crate::handle::ScrollListener;
use crate::position::ThumbTrack;

fn indicator() -> ThumbIndicator {
    ThumbIndicator::new(
        ThumbTrack {
            track_length: 200.0,
            thumb_length: 50.0,
        },
        2000,
    )
}

fn offset_of(command: Option<ScrollCommand>) -> f32 {
    match command {
        Some(ScrollCommand::ScrollToOffset { offset_percentage }) => offset_percentage,
        other => panic!("expected an offset command, got {other:?}"),
    }
}

#[test]
fn test_follows_list_scroll() {
    let mut indicator = indicator();
    assert!(!indicator.is_visible());
    indicator.on_scroll_to_offset_percentage(0.5, 0);
    assert!(indicator.is_visible());
    assert!((indicator.thumb_offset() - 75.0).abs() < 1e-4);
}

#[test]
fn test_drag_drives_list() {
    let mut indicator = indicator();
    let start = indicator.on_drag_start(100.0, 0);
    assert!((offset_of(Some(start)) - 0.5).abs() < 1e-4);
    assert!(indicator.is_dragging());

    let moved = indicator.on_drag_move(175.0, 10);
    assert!((offset_of(moved) - 1.0).abs() < 1e-4);
    assert!((indicator.thumb_offset() - 150.0).abs() < 1e-4);
}

#[test]
fn test_list_reports_ignored_while_dragging() {
    let mut indicator = indicator();
    indicator.on_drag_start(25.0, 0);
    indicator.on_scroll_to_offset_percentage(1.0, 5);
    assert!(indicator.thumb_offset().abs() < 1e-4);
}

#[test]
fn test_stays_visible_while_held() {
    let mut indicator = indicator();
    indicator.on_drag_start(100.0, 0);
    assert!(!indicator.tick(10_000));
    assert!(indicator.is_visible());

    assert!(indicator.on_drag_end(100.0, 10_000).is_some());
    assert!(!indicator.is_dragging());
    assert!(indicator.tick(12_000));
    assert!(!indicator.is_visible());
}

#[test]
fn test_move_without_grab_is_ignored() {
    let mut indicator = indicator();
    assert!(indicator.on_drag_move(100.0, 0).is_none());
    assert!(indicator.on_drag_end(100.0, 0).is_none());
}

#[test]
fn test_cancel_keeps_thumb() {
    let mut indicator = indicator();
    indicator.on_drag_start(100.0, 0);
    indicator.on_drag_cancel(5);
    indicator.on_drag_cancel(6);
    assert!(!indicator.is_dragging());
    assert!((indicator.thumb_offset() - 75.0).abs() < 1e-4);
}
