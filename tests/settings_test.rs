//! Tests for loading settings from disk.

use std::io::Write;
use tictactoe_cube::{Coord, CubeGame, GameSettings, Marker};

#[test]
fn test_load_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "first_marker = \"cross\"\nstop_after_win = true").unwrap();

    let settings = GameSettings::from_file(file.path()).unwrap();
    assert_eq!(*settings.first_marker(), Marker::Cross);
    assert!(*settings.stop_after_win());

    let mut game = CubeGame::with_settings(settings);
    let placement = game.place_coord(Coord::from_number(1).unwrap()).unwrap();
    assert_eq!(placement.action.marker, Marker::Cross);
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = GameSettings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, GameSettings::default());
}

#[test]
fn test_missing_file_is_an_error_when_required() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameSettings::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "stop_after_win = \"sometimes\"").unwrap();
    let err = GameSettings::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
