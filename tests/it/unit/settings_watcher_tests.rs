//! Settings hot reload as seen by a viewer.

use crate::helpers::{GREEN, invoice_viewer};
use labelview::ViewerSettings;
use labelview::settings_watcher::{SettingsEvent, SettingsWatcher};
use std::fs;
use tempfile::tempdir;

fn write_settings(path: &std::path::Path, settings: &ViewerSettings) {
    fs::write(path, serde_json::to_string(settings).unwrap()).unwrap();
}

#[test]
fn test_modified_file_reaches_viewer() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut viewer = invoice_viewer();
    assert_eq!(viewer.min_draw_size(), 1.0);

    write_settings(
        &path,
        &ViewerSettings {
            min_draw_size: 2.5,
            highlight_color: "#00ff00".into(),
            ..ViewerSettings::default()
        },
    );

    assert!(viewer.handle_settings_event(&SettingsEvent::Modified, &path));
    assert_eq!(viewer.min_draw_size(), 2.5);
    assert_eq!(viewer.highlight_color(), GREEN);
}

#[test]
fn test_created_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut viewer = invoice_viewer();

    fs::write(&path, r#"{"min_draw_size": 4.0}"#).unwrap();
    assert!(viewer.handle_settings_event(&SettingsEvent::Created, &path));
    assert_eq!(viewer.min_draw_size(), 4.0);
}

#[test]
fn test_deleted_file_keeps_current_settings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut viewer = invoice_viewer();

    fs::write(&path, r#"{"min_draw_size": 3.0}"#).unwrap();
    viewer.handle_settings_event(&SettingsEvent::Modified, &path);
    fs::remove_file(&path).unwrap();

    assert!(!viewer.handle_settings_event(&SettingsEvent::Deleted, &path));
    assert_eq!(viewer.min_draw_size(), 3.0);
}

#[test]
fn test_watch_error_changes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut viewer = invoice_viewer();

    assert!(!viewer.handle_settings_event(&SettingsEvent::Error("inotify limit".into()), &path));
    assert_eq!(viewer.min_draw_size(), 1.0);
}

#[test]
fn test_unreadable_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut viewer = invoice_viewer();

    fs::write(&path, r#"{"min_draw_size": 6.0}"#).unwrap();
    viewer.handle_settings_event(&SettingsEvent::Modified, &path);
    fs::write(&path, "{ not json").unwrap();

    assert!(viewer.handle_settings_event(&SettingsEvent::Modified, &path));
    assert_eq!(viewer.min_draw_size(), 1.0);
}

#[test]
fn test_idle_watcher_reports_no_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{}").unwrap();

    let mut watcher = SettingsWatcher::new(path.clone()).unwrap();
    assert_eq!(watcher.path(), path.as_path());

    let mut viewer = invoice_viewer();
    assert!(!viewer.check_settings_reload(&mut watcher));
    assert_eq!(viewer.min_draw_size(), 1.0);
}
