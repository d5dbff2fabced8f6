use bevy::prelude::*;

use clickchess::core::{settings_persistence::load_settings, CorePlugin, WindowConfig};
use clickchess::game::GamePlugin;
use clickchess::input::InputPlugin;
use clickchess::rendering::BoardPlugin;

fn main() {
    // Settings decide the window size, so they are read before the app exists
    let (settings, settings_status) = load_settings();
    let window_config = WindowConfig::from_settings(&settings);
    let primary_window = Some(window_config.to_window());

    App::new()
        // Core plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window,
            ..default()
        }))
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(settings)
        .insert_resource(settings_status)
        .insert_resource(window_config)

        // Game systems
        .add_plugins(CorePlugin)
        .add_plugins(GamePlugin)
        .add_plugins(InputPlugin)
        .add_plugins(BoardPlugin)
        .run();
}
