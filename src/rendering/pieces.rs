//! Piece glyphs
//!
//! Every piece is a [`Text2d`] centred on its square. Unicode chess symbols need
//! a font that has them, and bevy's bundled font does not, so without a
//! configured glyph font the pieces are drawn as letters.

use crate::core::GameSettings;
use crate::game::ActiveGame;
use crate::rendering::utils::{piece_color, BoardLayout, GLYPH_Z};
use bevy::prelude::*;
use chess_logic::{Color as PieceColor, PieceType};

/// Marker for a piece glyph entity
#[derive(Component)]
pub struct PieceGlyph;

/// Font with chess symbols, `None` when letters are used
#[derive(Resource, Debug, Clone, Default)]
pub struct GlyphFont(pub Option<Handle<Font>>);

/// Text drawn for a piece
pub fn glyph_for(piece_type: PieceType, color: PieceColor, unicode: bool) -> String {
    if unicode {
        piece_type.symbol(color).to_string()
    } else {
        piece_type.letter().to_string()
    }
}

pub fn load_glyph_font(
    mut commands: Commands,
    settings: Res<GameSettings>,
    asset_server: Res<AssetServer>,
) {
    let handle = settings.glyph_font.as_ref().map(|path| {
        info!("[RENDER] Loading glyph font {}", path);
        asset_server.load(path.clone())
    });
    if handle.is_none() {
        info!("[RENDER] No glyph font configured, drawing pieces as letters");
    }
    commands.insert_resource(GlyphFont(handle));
}

/// Respawn every glyph from the current board
pub fn update_piece_glyphs_system(
    mut commands: Commands,
    game: Res<ActiveGame>,
    layout: Res<BoardLayout>,
    glyph_font: Res<GlyphFont>,
    glyph_query: Query<Entity, With<PieceGlyph>>,
) {
    if !game.is_changed() {
        return;
    }

    for entity in glyph_query.iter() {
        commands.entity(entity).despawn();
    }

    let mut font = TextFont {
        font_size: layout.glyph_size(),
        ..default()
    };
    if let Some(handle) = &glyph_font.0 {
        font.font = handle.clone().into();
    }
    let unicode = glyph_font.0.is_some();

    for (_, piece) in game.board().pieces() {
        commands.spawn((
            Text2d::new(glyph_for(piece.piece_type, piece.color, unicode)),
            font.clone(),
            TextColor(piece_color(piece.color)),
            Transform::from_translation(layout.square_center(piece.position).extend(GLYPH_Z)),
            PieceGlyph,
            Name::new(format!("{} {}", piece.color, piece.piece_type)),
        ));
    }
    trace!("[RENDER] Drew {} pieces", game.board().len());
}
