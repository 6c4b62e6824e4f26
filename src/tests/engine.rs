use super::{EngineConfig, EngineEvent, FastScrollEngine};
use crate::active_section::UpdateSource;
use crate::error::ScrollTargetFailure;
use crate::gesture::{DragPhase, ScrollCommand};
use crate::position::{TabMeasurement, ThumbTrack};
use crate::section::{SectionIndex, SectionMarker};

const DOT_1: f32 = 39.0;
const DOT_2: f32 = 61.0;

fn engine() -> FastScrollEngine {
    let sections = SectionIndex::from_header_indices(&[0, 20, 40]).unwrap();
    FastScrollEngine::new(sections, &EngineConfig::default())
}

fn scrolls(events: &[EngineEvent]) -> Vec<ScrollCommand> {
    events
        .iter()
        .filter_map(|event| match event {
            EngineEvent::Scroll(command) => Some(*command),
            _ => None,
        })
        .collect()
}

fn jump(index: usize, animated: bool) -> ScrollCommand {
    ScrollCommand::ScrollToIndex { index, animated }
}

#[test]
fn test_starts_in_first_section() {
    let mut engine = engine();
    assert_eq!(engine.active_section().map(|s| s.index), Some(0));
    assert!(engine.drain_events().is_empty());
    assert!(!engine.is_visible());
    assert_eq!(engine.phase(), DragPhase::Idle);
}

#[test]
fn test_list_scroll_updates_active_section() {
    let mut engine = engine();
    engine.on_visible_index_changed(25, 0);
    let events = engine.drain_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        EngineEvent::SectionChanged(change)
            if change.list_index == Some(20) && change.source == UpdateSource::List
    ));

    engine.on_visible_index_changed(5, 10);
    assert_eq!(engine.active_section().map(|s| s.index), Some(0));
}

#[test]
fn test_scroll_shows_then_hides_affordance() {
    let mut engine = engine();
    engine.on_scroll(0.3, 0);
    assert!(engine.is_visible());
    engine.tick(1999);
    assert!(engine.is_visible());
    engine.tick(2001);
    assert!(!engine.is_visible());
}

#[test]
fn test_scroll_percentage_clamped() {
    let mut engine = engine();
    engine.on_scroll(1.4, 0);
    assert!((engine.offset_percentage() - 1.0).abs() < f32::EPSILON);
    engine.on_scroll(f32::NAN, 0);
    assert!(engine.offset_percentage().abs() < f32::EPSILON);
}

#[test]
fn test_drag_scenario() {
    let mut engine = engine();
    engine.on_drag_start(DOT_1, 0);
    let events = engine.drain_events();
    assert_eq!(scrolls(&events), vec![jump(20, false)]);
    assert!(events.contains(&EngineEvent::CentrePicker { section_index: 1 }));
    assert!(engine.picker().is_visible());

    // The list catching up mid-drag does not move the highlight.
    engine.on_visible_index_changed(5, 20);
    assert_eq!(engine.active_section().map(|s| s.index), Some(20));

    engine.on_drag_move(DOT_2, 40);
    engine.tick(160);
    assert_eq!(scrolls(&engine.drain_events()), vec![jump(40, false)]);

    engine.on_drag_end(DOT_2, 200);
    engine.drain_events();
    engine.tick(1199);
    assert!(engine.state().suppress_list_events);

    engine.tick(1200);
    assert_eq!(scrolls(&engine.drain_events()), vec![jump(40, true)]);
    assert_eq!(engine.phase(), DragPhase::Idle);
    assert!(!engine.state().suppress_list_events);
    engine.on_visible_index_changed(25, 1300);
    assert_eq!(engine.active_section().map(|s| s.index), Some(20));
}

#[test]
fn test_affordance_stays_visible_through_long_drag() {
    let mut engine = engine();
    engine.on_drag_start(DOT_1, 0);
    engine.tick(3000);
    assert!(!engine.picker().is_visible());
    engine.tick(6000);
    assert_eq!(engine.phase(), DragPhase::Dragging);
    assert!(engine.is_visible());

    // Releasing brings the picker back; both hide once idle.
    engine.on_drag_end(DOT_1, 6000);
    assert!(engine.picker().is_visible());
    engine.tick(9000);
    assert!(engine.is_visible());
    engine.tick(11_000);
    assert!(!engine.is_visible());
}

#[test]
fn test_cancel_after_picker_timeout_unlocks_affordance() {
    let mut engine = engine();
    engine.on_drag_start(DOT_1, 0);
    engine.tick(4000);
    engine.on_drag_cancel(4000);
    engine.tick(5999);
    assert!(engine.is_visible());
    engine.tick(6000);
    assert!(!engine.is_visible());
}

#[test]
fn test_affordance_locked_while_picker_open() {
    let mut engine = engine();
    engine.on_drag_start(DOT_1, 0);
    engine.on_drag_end(DOT_1, 100);
    engine.tick(3000);
    assert!(engine.is_visible());

    // Picker closes 3000ms after the release, then the affordance's own countdown runs.
    engine.tick(3100);
    assert!(!engine.picker().is_visible());
    assert!(engine.is_visible());
    engine.tick(5100);
    assert!(!engine.is_visible());
}

#[test]
fn test_cancel_restores_list_reports() {
    let mut engine = engine();
    engine.on_drag_start(DOT_2, 0);
    engine.on_drag_move(DOT_1, 10);
    engine.on_drag_cancel(20);
    engine.on_drag_cancel(21);
    engine.drain_events();

    engine.tick(5000);
    assert!(scrolls(&engine.drain_events()).is_empty());
    assert!(!engine.state().suppress_list_events);
}

#[test]
fn test_failed_scroll_retried_once() {
    let mut engine = engine();
    engine.on_scroll_to_index_failed(ScrollTargetFailure { index: 40 }, 0);
    engine.tick(249);
    assert!(engine.drain_events().is_empty());
    engine.tick(250);
    assert_eq!(scrolls(&engine.drain_events()), vec![jump(40, false)]);

    engine.on_scroll_to_index_failed(ScrollTargetFailure { index: 40 }, 300);
    engine.tick(10_000);
    assert!(scrolls(&engine.drain_events()).is_empty());
}

#[test]
fn test_unrelated_scroll_keeps_retry_limit() {
    let mut engine = engine();
    engine.set_thumb_track(ThumbTrack {
        track_length: 200.0,
        thumb_length: 50.0,
    });
    engine.on_scroll_to_index_failed(ScrollTargetFailure { index: 40 }, 0);
    engine.on_thumb_drag_start(100.0, 100);
    engine.tick(250);
    let events = engine.drain_events();
    assert!(scrolls(&events).contains(&jump(40, false)));

    engine.on_thumb_drag_move(120.0, 260);
    engine.on_scroll_to_index_failed(ScrollTargetFailure { index: 40 }, 300);
    engine.tick(10_000);
    assert!(!scrolls(&engine.drain_events()).contains(&jump(40, false)));
}

#[test]
fn test_fresh_jump_rearms_retry() {
    let mut engine = engine();
    engine.on_scroll_to_index_failed(ScrollTargetFailure { index: 40 }, 0);
    engine.tick(250);
    engine.scroll_to_section(2, 300);
    engine.drain_events();

    engine.on_scroll_to_index_failed(ScrollTargetFailure { index: 40 }, 400);
    engine.tick(650);
    assert_eq!(scrolls(&engine.drain_events()), vec![jump(40, false)]);
}

#[test]
fn test_pick_section_jumps_and_closes_picker() {
    let mut engine = engine();
    engine.on_drag_start(DOT_1, 0);
    engine.on_drag_end(DOT_1, 10);
    engine.drain_events();

    engine.pick_section(2, 50);
    assert!(!engine.picker().is_visible());
    let events = engine.drain_events();
    assert_eq!(scrolls(&events), vec![jump(40, true)]);
    assert_eq!(engine.active_section().map(|s| s.index), Some(40));

    // The superseded release jump never fires.
    engine.tick(5000);
    assert!(scrolls(&engine.drain_events()).is_empty());
}

#[test]
fn test_thumb_drag_emits_offsets() {
    let mut engine = engine();
    engine.set_thumb_track(ThumbTrack {
        track_length: 200.0,
        thumb_length: 50.0,
    });
    engine.on_thumb_drag_start(100.0, 0);
    engine.on_thumb_drag_end(175.0, 10);
    let offsets: Vec<f32> = scrolls(&engine.drain_events())
        .into_iter()
        .map(|command| match command {
            ScrollCommand::ScrollToOffset { offset_percentage } => offset_percentage,
            ScrollCommand::ScrollToIndex { .. } => panic!("unexpected index jump"),
        })
        .collect();
    assert_eq!(offsets.len(), 2);
    assert!((offsets[0] - 0.5).abs() < 1e-4);
    assert!((offsets[1] - 1.0).abs() < 1e-4);
}

#[test]
fn test_thumb_sits_on_active_dot_when_idle() {
    let mut engine = engine();
    assert_eq!(engine.thumb_pixel(), Some(17.0));
    engine.on_visible_index_changed(41, 0);
    assert_eq!(engine.thumb_pixel(), Some(DOT_2));
}

#[test]
fn test_tab_scroll_follows_active_section() {
    let mut engine = engine();
    let tabs: Vec<TabMeasurement> = (0..3_u8)
        .map(|i| TabMeasurement {
            left: 50.0 * f32::from(i),
            width: 50.0,
        })
        .collect();
    assert!(engine.tab_scroll_amount(&tabs, 150.0, 60.0).abs() < 1e-4);
    engine.on_visible_index_changed(40, 0);
    assert!((engine.tab_scroll_amount(&tabs, 150.0, 60.0) - 90.0).abs() < 1e-4);
}

#[test]
fn test_unsorted_markers_fail_construction() {
    let result = FastScrollEngine::from_markers(
        [SectionMarker::new(5, "b"), SectionMarker::new(1, "a")],
        &EngineConfig::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_empty_table_is_inert() {
    let mut engine = FastScrollEngine::new(SectionIndex::default(), &EngineConfig::default());
    engine.on_drag_start(20.0, 0);
    engine.on_drag_move(40.0, 10);
    engine.on_drag_end(40.0, 20);
    engine.scroll_to_section(0, 30);
    engine.tick(10_000);
    assert!(scrolls(&engine.drain_events()).is_empty());
    assert_eq!(engine.active_section(), None);
    assert_eq!(engine.thumb_pixel(), None);
}
