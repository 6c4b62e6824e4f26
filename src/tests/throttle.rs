use super::{RateLimit, ScrollCommandThrottle};

#[test]
fn test_throttle_forwards_latest_once_per_interval() {
    let mut throttle = ScrollCommandThrottle::throttled(100);
    throttle.call(1, 0);
    throttle.call(2, 30);
    throttle.call(3, 60);
    assert_eq!(throttle.poll(99), None);
    assert_eq!(throttle.poll(100), Some(3));
    assert_eq!(throttle.poll(200), None);
}

#[test]
fn test_throttle_window_does_not_slide() {
    let mut throttle = ScrollCommandThrottle::throttled(100);
    throttle.call(1, 0);
    throttle.call(2, 90);
    assert_eq!(throttle.deadline(), Some(100));
}

#[test]
fn test_debounce_restarts_on_each_call() {
    let mut debounce = ScrollCommandThrottle::debounced(1000);
    debounce.call("a", 0);
    debounce.call("b", 500);
    assert_eq!(debounce.poll(1000), None);
    assert_eq!(debounce.poll(1500), Some("b"));
}

#[test]
fn test_cancel_drops_pending_value() {
    let mut throttle = ScrollCommandThrottle::throttled(50);
    throttle.call(7, 0);
    assert!(throttle.cancel());
    assert!(!throttle.cancel());
    assert_eq!(throttle.poll(1000), None);
    assert!(!throttle.is_pending());
}

#[test]
fn test_cancel_after_fire_is_noop() {
    let mut debounce = ScrollCommandThrottle::debounced(10);
    debounce.call(1, 0);
    assert_eq!(debounce.poll(10), Some(1));
    assert!(!debounce.cancel());
}

#[test]
fn test_mode_reported() {
    let throttle: ScrollCommandThrottle<usize> = ScrollCommandThrottle::debounced(5);
    assert_eq!(throttle.mode(), RateLimit::Debounced { delay_ms: 5 });
    assert_eq!(throttle.deadline(), None);
}
