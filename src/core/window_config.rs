//! Window configuration resource
//!
//! Derives the primary window from [`GameSettings`] and formats the title,
//! which also reports whose turn it is.

use crate::core::GameSettings;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};
use chess_logic::Color as PieceColor;

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    /// Whether the window should be resizable
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::from_settings(&GameSettings::default())
    }
}

impl WindowConfig {
    /// Square, fixed-size window sized to the board
    pub fn from_settings(settings: &GameSettings) -> Self {
        let side = settings.board_size_px();
        Self {
            title: Self::title_for(PieceColor::White),
            width: side,
            height: side,
            resizable: false,
        }
    }

    /// Title shown while `turn` is to move
    pub fn title_for(turn: PieceColor) -> String {
        format!("Chess Game - Current Turn: {turn}")
    }

    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_matches_board_size() {
        let settings = GameSettings {
            window_size: 640,
            ..default()
        };
        let config = WindowConfig::from_settings(&settings);
        assert_eq!((config.width, config.height), (640, 640));
        assert!(!config.resizable);
        assert_eq!(config.title, "Chess Game - Current Turn: White");
    }

    #[test]
    fn test_tiny_window_is_clamped() {
        let settings = GameSettings {
            window_size: 10,
            ..default()
        };
        let config = WindowConfig::from_settings(&settings);
        assert_eq!(config.width, crate::core::settings::MIN_WINDOW_SIZE);
    }
}
