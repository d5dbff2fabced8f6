//! Static board: camera and the 64 squares

use crate::rendering::utils::{square_color, BoardLayout, SQUARE_Z};
use bevy::prelude::*;
use chess_logic::Square;

/// Marker for a board square sprite
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSquare(pub Square);

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Board Camera")));
}

pub fn spawn_board_squares(mut commands: Commands, layout: Res<BoardLayout>) {
    let size = Vec2::splat(layout.cell_size);
    for square in Square::all() {
        commands.spawn((
            Sprite::from_color(square_color(square), size),
            Transform::from_translation(layout.square_center(square).extend(SQUARE_Z)),
            BoardSquare(square),
            Name::new(format!("Square {}", square)),
        ));
    }
    debug!("[RENDER] Spawned 64 squares, cell size {:.1}px", layout.cell_size);
}
