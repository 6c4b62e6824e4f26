use super::Timer;

#[test]
fn test_idle_timer_never_fires() {
    let mut timer = Timer::idle();
    assert!(!timer.is_pending());
    assert!(!timer.fire(u64::MAX));
}

#[test]
fn test_fires_once_at_deadline() {
    let mut timer = Timer::idle();
    timer.schedule(100, 50);
    assert_eq!(timer.deadline(), Some(150));
    assert!(!timer.fire(149));
    assert!(timer.fire(150));
    assert!(!timer.fire(151));
    assert!(!timer.is_pending());
}

#[test]
fn test_reschedule_replaces_deadline() {
    let mut timer = Timer::idle();
    timer.schedule(0, 100);
    timer.schedule(80, 100);
    assert!(!timer.fire(100));
    assert!(timer.fire(180));
}

#[test]
fn test_cancel_is_idempotent() {
    let mut timer = Timer::idle();
    timer.schedule(0, 10);
    assert!(timer.cancel());
    assert!(!timer.cancel());
    assert!(!timer.fire(10));
}

#[test]
fn test_schedule_saturates() {
    let mut timer = Timer::idle();
    timer.schedule(u64::MAX - 1, 10);
    assert_eq!(timer.deadline(), Some(u64::MAX));
}
