//! Game module - bevy glue around [`chess_logic::GameState`]
//!
//! The rules live in the `chess-logic` crate. This module owns the running game
//! as a resource and fixes the per-frame order in which input mutates it and the
//! renderer reads it.
//!
//! # Resources
//!
//! - [`resources::ActiveGame`] - The game being played
//!
//! # System Sets
//!
//! - [`system_sets::GameSystems`] - `Input` then `Visual`, chained every frame

pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;

pub use plugin::GamePlugin;
pub use resources::ActiveGame;
pub use system_sets::GameSystems;
