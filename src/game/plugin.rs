//! Game plugin
//!
//! Registers the [`ActiveGame`] resource, orders the [`GameSystems`] sets and
//! keeps the window title in sync with the side to move.
//!
//! # Plugin Dependencies
//!
//! - [`bevy::DefaultPlugins`] - Window and input
//! - [`crate::core::CorePlugin`] - Settings
//!
//! Add before [`crate::input::InputPlugin`] and
//! [`crate::rendering::BoardPlugin`], which schedule into the sets declared here.

use super::resources::ActiveGame;
use super::system_sets::GameSystems;
use super::systems::turn_display::update_window_title;
use bevy::prelude::*;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveGame>()
            .configure_sets(Update, (GameSystems::Input, GameSystems::Visual).chain())
            .add_systems(
                Update,
                update_window_title
                    .in_set(GameSystems::Visual)
                    .run_if(resource_changed::<ActiveGame>),
            );
    }
}
