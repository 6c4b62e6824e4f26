use super::Config;

#[test]
fn test_empty_file_uses_defaults() {
    assert_eq!(Config::parse(""), Config::default());
}

#[test]
fn test_partial_file_overrides_fields() {
    let cfg = Config::parse("hide_timeout_ms = 0\nsettle_reissue = true\n");
    assert_eq!(cfg.hide_timeout_ms, 0);
    assert!(cfg.settle_reissue);
    assert_eq!(cfg.release_debounce_ms, 1000);
    assert_eq!(cfg.file_extensions, vec!["md".to_string()]);
}

#[test]
fn test_invalid_file_falls_back() {
    let cfg = Config::parse("hide_timeout_ms = \"soon\"");
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_engine_config_mapping() {
    let cfg = Config {
        throttle_interval_ms: 80,
        settle_ms: 600,
        thumb_length: 4.0,
        ..Config::default()
    };
    let engine = cfg.engine_config();
    assert_eq!(engine.timing.throttle_interval_ms, 80);
    assert_eq!(engine.timing.settle_ms, 600);
    assert_eq!(engine.picker_recentre_ms, 600);
    assert_eq!(engine.hide_timeout_ms, 2000);
    assert!((engine.layout.dot_size - 1.0).abs() < f32::EPSILON);
    assert!((engine.thumb_track.thumb_length - 4.0).abs() < f32::EPSILON);
}
