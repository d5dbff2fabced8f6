//! Mouse clicks on the board
//!
//! The cursor position is read in window coordinates (top-left origin, y down),
//! which is exactly the pixel space [`chess_logic::Square::from_pixel`] expects,
//! so no camera projection is involved.

use crate::game::ActiveGame;
use crate::rendering::utils::BoardLayout;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use chess_logic::ClickOutcome;

/// Feed left clicks into the game
///
/// The game is only marked changed when the click did something, which keeps
/// the render systems idle on ignored clicks.
pub fn board_click_system(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    layout: Res<BoardLayout>,
    mut game: ResMut<ActiveGame>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        debug!("[INPUT] Click without a cursor inside the window");
        return;
    };

    let outcome = game
        .bypass_change_detection()
        .handle_pointer(cursor.x, cursor.y, layout.cell_size);

    match &outcome {
        ClickOutcome::Ignored => {
            trace!("[INPUT] Click at ({:.1}, {:.1}) ignored", cursor.x, cursor.y);
        }
        ClickOutcome::Selected {
            square,
            destinations,
        } => {
            info!("[INPUT] Selected {} ({} destinations)", square, destinations);
        }
        ClickOutcome::Moved(record) => {
            info!(
                "[INPUT] {} {} {} -> {}",
                record.color, record.piece_type, record.from, record.to
            );
            if let Some(captured) = record.captured {
                info!("[INPUT] Captured {}", captured);
            }
        }
        ClickOutcome::Deselected => {
            debug!("[INPUT] Selection cleared");
        }
    }

    if outcome.changed() {
        game.set_changed();
    }
}
