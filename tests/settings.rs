use sorting_visualizer::common::{Algorithm, Settings, VisualizerError, write_back};
use std::fs;

#[test]
fn test_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        delay_ms: 120,
        array_len: 20,
        last_algorithm: Some(Algorithm::Insertion),
        ..Settings::default()
    };

    settings.save(&path).unwrap();
    let loaded = Settings::load(&path).unwrap();

    assert_eq!(loaded, settings);
    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"insertion\""));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = Settings::load(&dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, Settings::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "delay_ms": 0 }"#).unwrap();

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded.delay_ms, 0);
    assert_eq!(loaded.array_len, Settings::default().array_len);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, VisualizerError::Settings { .. }));
}

#[test]
fn test_out_of_range_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{ "array_len": 500 }"#).unwrap();

    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(
        err,
        VisualizerError::InvalidSetting { field: "array_len", .. }
    ));
}

#[test]
fn test_invalid_settings_are_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        min_value: 50,
        max_value: 10,
        ..Settings::default()
    };

    assert!(settings.save(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_rejected_file_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let raw = r#"{"delay_ms":5000,"array_len":7,"min_value":10,"max_value":20,"last_algorithm":"bubble"}"#;
    fs::write(&path, raw).unwrap();

    let stored = Settings::load(&path).ok();
    assert!(stored.is_none());
    let effective = stored.clone().unwrap_or_default();

    let written = write_back(&path, stored, &effective, false, Some(Algorithm::Selection)).unwrap();
    assert!(!written);
    assert_eq!(fs::read_to_string(&path).unwrap(), raw);
}

#[test]
fn test_write_back_only_updates_last_algorithm() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let stored = Settings {
        array_len: 7,
        ..Settings::default()
    };
    stored.save(&path).unwrap();
    let effective = Settings {
        array_len: 30,
        delay_ms: 0,
        ..stored.clone()
    };

    assert!(write_back(&path, Some(stored), &effective, false, Some(Algorithm::Quick)).unwrap());

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded.array_len, 7);
    assert_eq!(loaded.delay_ms, Settings::default().delay_ms);
    assert_eq!(loaded.last_algorithm, Some(Algorithm::Quick));
}

#[test]
fn test_save_all_replaces_rejected_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{ not json").unwrap();
    let effective = Settings {
        delay_ms: 40,
        ..Settings::default()
    };

    assert!(write_back(&path, None, &effective, true, Some(Algorithm::Bubble)).unwrap());

    let loaded = Settings::load(&path).unwrap();
    assert_eq!(loaded.delay_ms, 40);
    assert_eq!(loaded.last_algorithm, Some(Algorithm::Bubble));
}

#[test]
fn test_nothing_written_without_a_completed_sort() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let written = write_back(&path, Some(Settings::default()), &Settings::default(), false, None).unwrap();
    assert!(!written);
    assert!(!path.exists());
}
