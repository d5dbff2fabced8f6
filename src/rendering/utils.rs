//! Board geometry and palette
//!
//! Window pixels have their origin at the top-left corner with y pointing down.
//! The 2D camera sits at the board centre with y pointing up, so
//! [`BoardLayout::square_center`] flips the vertical axis.

use crate::core::GameSettings;
use bevy::prelude::*;
use chess_logic::{Color as PieceColor, Square, BOARD_SIZE};

pub const LIGHT_SQUARE: Color = Color::srgb(1.0, 1.0, 1.0);
pub const DARK_SQUARE: Color = Color::srgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
pub const HINT_COLOR: Color = Color::srgba(0.0, 1.0, 0.0, 50.0 / 255.0);
pub const WHITE_PIECE: Color = Color::srgb(218.0 / 255.0, 165.0 / 255.0, 32.0 / 255.0);
pub const BLACK_PIECE: Color = Color::BLACK;

/// Glyph height relative to a square
pub const GLYPH_SCALE: f32 = 0.8;

pub const SQUARE_Z: f32 = 0.0;
pub const HINT_Z: f32 = 1.0;
pub const GLYPH_Z: f32 = 2.0;

/// Light when `row + col` is even
pub fn square_color(square: Square) -> Color {
    if (square.row() + square.col()) % 2 == 0 {
        LIGHT_SQUARE
    } else {
        DARK_SQUARE
    }
}

pub fn piece_color(color: PieceColor) -> Color {
    match color {
        PieceColor::White => WHITE_PIECE,
        PieceColor::Black => BLACK_PIECE,
    }
}

/// Pixel size of the board, fixed for the lifetime of the window
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    pub board_px: f32,
    pub cell_size: f32,
}

impl BoardLayout {
    pub fn from_settings(settings: &GameSettings) -> Self {
        let board_px = settings.board_size_px() as f32;
        Self {
            board_px,
            cell_size: board_px / BOARD_SIZE as f32,
        }
    }

    /// Centre of `square` in world coordinates
    pub fn square_center(&self, square: Square) -> Vec2 {
        let half = self.board_px / 2.0;
        Vec2::new(
            (square.col() as f32 + 0.5) * self.cell_size - half,
            half - (square.row() as f32 + 0.5) * self.cell_size,
        )
    }

    pub fn glyph_size(&self) -> f32 {
        self.cell_size * GLYPH_SCALE
    }
}

impl FromWorld for BoardLayout {
    fn from_world(world: &mut World) -> Self {
        let settings = world
            .get_resource::<GameSettings>()
            .cloned()
            .unwrap_or_default();
        Self::from_settings(&settings)
    }
}
