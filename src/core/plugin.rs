//! Core plugin
//!
//! Expects [`GameSettings`] to be inserted by `main` before the plugin is
//! added; it falls back to defaults otherwise.
//!
//! # Systems
//!
//! - `Startup`: log where the settings came from
//! - `Update`: write settings back to disk whenever they change

use bevy::prelude::*;

use super::{
    settings_persistence::{report_settings_system, save_settings_system},
    GameSettings,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameSettings>()
            .add_systems(Startup, report_settings_system)
            .add_systems(Update, save_settings_system);
    }
}
