//! Rendering module - flat 2D view of the game
//!
//! # Layers
//!
//! | z | Entities |
//! |---|----------|
//! | 0 | [`board::BoardSquare`] sprites |
//! | 1 | [`highlights::MoveHint`] overlays |
//! | 2 | [`pieces::PieceGlyph`] text |
//!
//! Squares are spawned once. Hints and glyphs are rebuilt whenever
//! [`ActiveGame`](crate::game::ActiveGame) changes, in
//! [`GameSystems::Visual`] after input has been applied.

pub mod board;
pub mod highlights;
pub mod pieces;
pub mod utils;

use crate::game::GameSystems;
use bevy::prelude::*;

use board::{spawn_board_squares, spawn_camera};
use highlights::update_move_hints_system;
use pieces::{load_glyph_font, update_piece_glyphs_system, GlyphFont};
use utils::BoardLayout;

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BoardLayout>()
            .init_resource::<GlyphFont>()
            .add_systems(Startup, (spawn_camera, spawn_board_squares, load_glyph_font))
            .add_systems(
                Update,
                (update_move_hints_system, update_piece_glyphs_system)
                    .in_set(GameSystems::Visual),
            );
    }
}
