//! Keyboard shortcuts

use crate::core::GameSettings;
use bevy::prelude::*;

/// Key that shows or hides destination highlights
pub const TOGGLE_HINTS_KEY: KeyCode = KeyCode::KeyH;

/// Flip [`GameSettings::show_hints`]; the settings saver persists the change
pub fn toggle_hints_system(keys: Res<ButtonInput<KeyCode>>, mut settings: ResMut<GameSettings>) {
    if keys.just_pressed(TOGGLE_HINTS_KEY) {
        settings.show_hints = !settings.show_hints;
        info!(
            "[SETTINGS] Move hints {}",
            if settings.show_hints { "on" } else { "off" }
        );
    }
}
