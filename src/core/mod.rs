//! Core module - Application infrastructure around the chess rules
//!
//! # Resources
//!
//! - [`GameSettings`] - User preferences (window size, move hints, glyph font)
//! - [`SettingsStatus`] - Where the settings came from, logged once at startup
//! - [`WindowConfig`] - Primary window settings derived from [`GameSettings`]
//!
//! The [`CorePlugin`] logs the settings origin and persists settings whenever
//! they change.

pub mod error;
pub mod plugin;
pub mod settings;
pub mod settings_persistence;
pub mod window_config;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use settings::GameSettings;
pub use settings_persistence::SettingsStatus;
pub use window_config::WindowConfig;
