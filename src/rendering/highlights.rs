//! Move hints visualization system
//!
//! Highlights the cached destinations of the selected piece when `show_hints`
//! is enabled. Hints are rebuilt from scratch whenever the game or the
//! settings change.

use crate::core::GameSettings;
use crate::game::ActiveGame;
use crate::rendering::utils::{BoardLayout, HINT_COLOR, HINT_Z};
use bevy::prelude::*;

/// Marker component for squares showing move hints
#[derive(Component)]
pub struct MoveHint;

pub fn update_move_hints_system(
    mut commands: Commands,
    settings: Res<GameSettings>,
    game: Res<ActiveGame>,
    layout: Res<BoardLayout>,
    hint_query: Query<Entity, With<MoveHint>>,
) {
    if !game.is_changed() && !settings.is_changed() {
        return;
    }

    for entity in hint_query.iter() {
        commands.entity(entity).despawn();
    }

    if !settings.show_hints {
        return;
    }

    let size = Vec2::splat(layout.cell_size);
    for &square in game.valid_moves() {
        commands.spawn((
            Sprite::from_color(HINT_COLOR, size),
            Transform::from_translation(layout.square_center(square).extend(HINT_Z)),
            MoveHint,
            Name::new("Move Hint"),
        ));
    }
}
