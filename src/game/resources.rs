//! Game resources

use bevy::prelude::*;
use chess_logic::GameState;
use std::ops::{Deref, DerefMut};

/// The game being played
///
/// Render systems key off change detection on this resource, so input systems
/// only mark it changed when a click actually did something.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ActiveGame(pub GameState);

impl Deref for ActiveGame {
    type Target = GameState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ActiveGame {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
