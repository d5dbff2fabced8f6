//! Input module - mouse and keyboard handling
//!
//! # Architecture
//!
//! - `pointer` - Left clicks become board clicks through
//!   [`chess_logic::GameState::handle_pointer`]
//! - `keyboard` - `H` toggles destination hints
//!
//! Both run in [`GameSystems::Input`], ahead of every render system.

pub mod keyboard;
pub mod pointer;

use crate::game::GameSystems;
use bevy::prelude::*;

pub use keyboard::toggle_hints_system;
pub use pointer::board_click_system;

pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (board_click_system, toggle_hints_system).in_set(GameSystems::Input),
        );
    }
}
