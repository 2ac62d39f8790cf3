//! Unit tests for config loading, saving and watching.

use livepane::config::EditorConfig;
use livepane::config_watcher::ConfigWatcher;
use livepane::EditorProfile;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let config = EditorConfig {
        breakpoint_px: 900.0,
        edit_default_percent: 35.0,
        preview_debounce_ms: 250,
        ..Default::default()
    };
    config.save_to(&path).unwrap();

    assert_eq!(EditorConfig::read(&path).unwrap(), config);
    assert_eq!(EditorConfig::load_from(&path), config);
}

#[test]
fn test_missing_file_is_default() {
    let dir = tempdir().unwrap();
    let config = EditorConfig::load_from(&dir.path().join("absent.json"));
    assert_eq!(config, EditorConfig::default());
}

#[test]
fn test_strict_read_reports_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(EditorConfig::read(&path).is_err());
    assert_eq!(EditorConfig::load_from(&path), EditorConfig::default());
}

#[test]
fn test_derived_values() {
    let config = EditorConfig::default();
    assert_eq!(config.default_width(EditorProfile::Create), 40.0);
    assert_eq!(config.default_width(EditorProfile::Edit), 30.0);
    assert_eq!(config.sync_timing().debounce, Duration::from_millis(500));
    assert_eq!(config.sync_timing().load_timeout, Duration::from_secs(15));
    assert_eq!(config.breakpoint(), 768.0);

    let odd = EditorConfig {
        breakpoint_px: -5.0,
        create_default_percent: 95.0,
        ..Default::default()
    };
    assert_eq!(odd.breakpoint(), 768.0);
    // Clamped into the drag range
    assert_eq!(odd.default_width(EditorProfile::Create), 75.0);
}

#[test]
fn test_inverted_drag_bounds_fall_back() {
    let config = EditorConfig {
        min_drag_percent: 80.0,
        max_drag_percent: 10.0,
        ..Default::default()
    };
    let bounds = config.drag_bounds();
    assert_eq!(bounds.min_percent, 20.0);
    assert_eq!(bounds.max_percent, 75.0);
}

#[test]
fn test_watcher_starts_on_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("livepane").join("config.json");

    let mut watcher = ConfigWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());
    assert!(path.parent().unwrap().is_dir());
    assert_eq!(watcher.poll(), None);
}
