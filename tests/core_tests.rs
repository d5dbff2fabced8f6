//! Integration tests for settings and window configuration
//!
//! Settings files are written to per-test directories under the system temp
//! dir, never to the real config directory.

use clickchess::core::settings::MIN_WINDOW_SIZE;
use clickchess::core::settings_persistence::{read_settings, write_settings};
use clickchess::core::{GameSettings, WindowConfig};
use std::fs;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("clickchess-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

// ============================================================================
// Settings Serialization
// ============================================================================

#[test]
fn test_default_settings() {
    let settings = GameSettings::default();
    assert_eq!(settings.window_size, 800);
    assert!(settings.show_hints);
    assert!(settings.glyph_font.is_none());
    assert_eq!(settings.cell_size(), 100.0);
}

#[test]
fn test_partial_json_fills_defaults() {
    //! Files written by older builds may lack newer fields.
    let settings: GameSettings = serde_json::from_str(r#"{ "show_hints": false }"#).unwrap();
    assert_eq!(settings.window_size, 800);
    assert!(!settings.show_hints);
}

#[test]
fn test_window_size_is_clamped() {
    let settings: GameSettings = serde_json::from_str(r#"{ "window_size": 0 }"#).unwrap();
    assert_eq!(settings.board_size_px(), MIN_WINDOW_SIZE);
    assert_eq!(settings.cell_size(), MIN_WINDOW_SIZE as f32 / 8.0);
}

// ============================================================================
// Settings Persistence
// ============================================================================

#[test]
fn test_missing_file_reads_as_none() {
    let dir = scratch_dir("missing");
    assert!(read_settings(&dir.join("settings.json")).unwrap().is_none());
}

#[test]
fn test_write_then_read_settings() {
    let dir = scratch_dir("roundtrip");
    let path = dir.join("nested").join("settings.json");
    let settings = GameSettings {
        window_size: 640,
        show_hints: false,
        glyph_font: Some("fonts/DejaVuSans.ttf".to_string()),
    };

    write_settings(&path, &settings).unwrap();
    assert_eq!(read_settings(&path).unwrap(), Some(settings));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = scratch_dir("corrupt");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(read_settings(&path).is_err());

    let _ = fs::remove_dir_all(&dir);
}

// ============================================================================
// Window
// ============================================================================

#[test]
fn test_window_title_names_side_to_move() {
    assert_eq!(
        WindowConfig::title_for(chess_logic::Color::White),
        "Chess Game - Current Turn: White"
    );
    assert_eq!(
        WindowConfig::title_for(chess_logic::Color::Black),
        "Chess Game - Current Turn: Black"
    );
}
