//! HTTP move service
//!
//! Exposes one shared [`chess_logic::GameState`] over a small JSON API so a
//! remote client can play through the same click transitions as the desktop
//! board. See [`api`] for the routes and [`config`] for environment settings.

pub mod api;
pub mod config;
