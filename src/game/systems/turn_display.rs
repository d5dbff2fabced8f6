//! Turn indicator
//!
//! The window title names the side to move and is refreshed whenever the game
//! changes.

use crate::core::WindowConfig;
use crate::game::resources::ActiveGame;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

pub fn update_window_title(
    game: Res<ActiveGame>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    let title = WindowConfig::title_for(game.current_turn());
    if window.title != title {
        debug!("[RENDER] Window title -> {}", title);
        window.title = title;
    }
}
