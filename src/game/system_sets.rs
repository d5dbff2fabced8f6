//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - Mouse clicks and key presses mutate the game and settings
//! 2. **Visual** - Squares, highlights, glyphs and window title catch up
//!
//! Rendering therefore sees a move either entirely before or entirely after it
//! is committed, never halfway.

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Input handling (pointer, keyboard)
    Input,

    /// Visual updates
    ///
    /// Systems: highlights, piece glyphs, turn title
    Visual,
}
