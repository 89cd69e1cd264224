use super::Config;
use crate::formats::markdown::MarkdownFormat;
use crate::formats::Format;
use std::fs;
use std::time::Duration;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("tocsync.toml"));
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_partial_file_overrides_some_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tocsync.toml");
    fs::write(&path, "path_poll_ms = 250\nfallback_title = \"Index\"\n").unwrap();

    let cfg = Config::load_from(&path);
    assert_eq!(cfg.path_poll_ms, 250);
    assert_eq!(cfg.fallback_title, "Index");
    assert_eq!(cfg.ready_timeout_ms, 5000);
    assert_eq!(cfg.file_extensions, vec!["md".to_string()]);
}

#[test]
fn test_invalid_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tocsync.toml");
    fs::write(&path, "path_poll_ms = \"soon\"").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_settings_from_config() {
    let settings = Config::default().settings();
    assert_eq!(settings.ready_timeout, Duration::from_millis(5000));
    assert_eq!(settings.path_poll, Duration::from_millis(500));
    assert!((settings.threshold - 0.5).abs() < f64::EPSILON);
    assert_eq!(settings.fallback_title, "Contents");
}

#[test]
fn test_default_extensions_follow_parsed_formats() {
    assert_eq!(
        Config::default().file_extensions,
        vec![MarkdownFormat.file_extension().to_string()]
    );
}

#[test]
fn test_out_of_range_threshold_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tocsync.toml");
    fs::write(&path, "visibility_threshold = 1.5\n").unwrap();

    let cfg = Config::load_from(&path);
    assert!((cfg.visibility_threshold - 1.5).abs() < f64::EPSILON);
    assert!((cfg.settings().threshold - 1.0).abs() < f64::EPSILON);

    let negative = Config {
        visibility_threshold: -2.0,
        ..Config::default()
    };
    assert!(negative.settings().threshold.abs() < f64::EPSILON);
}
