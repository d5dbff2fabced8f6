//! User preferences
//!
//! Serialized to `settings.json` by [`super::settings_persistence`]. Missing
//! fields fall back to their defaults so older files keep loading.

use bevy::prelude::*;
use chess_logic::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// Smallest window side that still leaves clickable squares
pub const MIN_WINDOW_SIZE: u32 = 160;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Side of the square window in logical pixels
    pub window_size: u32,
    /// Highlight the destinations of the selected piece
    pub show_hints: bool,
    /// Asset path of a font with Unicode chess symbols
    ///
    /// bevy's bundled font has no chess glyphs, so without one the pieces
    /// are drawn as letters.
    pub glyph_font: Option<String>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            window_size: 800,
            show_hints: true,
            glyph_font: None,
        }
    }
}

impl GameSettings {
    /// Window side clamped to [`MIN_WINDOW_SIZE`]
    pub fn board_size_px(&self) -> u32 {
        self.window_size.max(MIN_WINDOW_SIZE)
    }

    /// Side of one square in logical pixels
    pub fn cell_size(&self) -> f32 {
        self.board_size_px() as f32 / BOARD_SIZE as f32
    }
}
