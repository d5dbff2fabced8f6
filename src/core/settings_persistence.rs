//! Settings persistence system
//!
//! Saves and loads [`GameSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the platform config directory, e.g.
//! `~/.config/clickchess/settings.json` on Linux. Falls back to the working
//! directory when no config directory can be resolved.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings
//! - Save failures are logged but don't interrupt play
//!
//! Loading happens in `main` before the window exists, which is before bevy's
//! log plugin is running. The outcome is kept in [`SettingsStatus`] and logged
//! by [`report_settings_system`] at startup.

use crate::core::{CoreResult, GameSettings};
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// How the settings in use were obtained
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum SettingsStatus {
    Loaded(PathBuf),
    Missing(PathBuf),
    Invalid { path: PathBuf, reason: String },
}

/// Resolve the settings file path
pub fn get_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "clickchess", "clickchess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings from `path`, `Ok(None)` when the file does not exist
pub fn read_settings(path: &Path) -> CoreResult<Option<GameSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&contents)?))
}

/// Write settings to `path`, creating parent directories as needed
pub fn write_settings(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from the config directory, defaulting on any failure
pub fn load_settings() -> (GameSettings, SettingsStatus) {
    let path = get_settings_path();
    match read_settings(&path) {
        Ok(Some(settings)) => (settings, SettingsStatus::Loaded(path)),
        Ok(None) => (GameSettings::default(), SettingsStatus::Missing(path)),
        Err(e) => (
            GameSettings::default(),
            SettingsStatus::Invalid {
                path,
                reason: e.to_string(),
            },
        ),
    }
}

/// Log where the settings came from
pub fn report_settings_system(status: Option<Res<SettingsStatus>>) {
    match status.as_deref() {
        Some(SettingsStatus::Loaded(path)) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
        }
        Some(SettingsStatus::Missing(path)) => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        }
        Some(SettingsStatus::Invalid { path, reason }) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, reason
            );
        }
        None => {}
    }
}

/// Save settings to file when they change
///
/// The first run after insertion counts as a change, which also writes out the
/// defaults on a fresh install.
pub fn save_settings_system(settings: Res<GameSettings>) {
    if !settings.is_changed() {
        return;
    }

    let settings_path = get_settings_path();
    match write_settings(&settings_path, settings.as_ref()) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", settings_path),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", settings_path, e),
    }
}
