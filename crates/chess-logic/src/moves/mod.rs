//! Chess piece movement rules
//!
//! Pure functions with no side effects. Each piece type maps to one rule
//! function; results are pseudo-legal, so king safety is never consulted.
//!
//! # Ordering
//!
//! Destinations come out in direction-table order. Along a ray the nearest
//! square always comes first.

use crate::board::Board;
use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;


pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
/// Rook directions followed by bishop directions
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Get all pseudo-legal destinations for a piece
///
/// Never fails; a fully blocked piece yields an empty vector.
pub fn valid_moves(piece: &Piece, board: &Board) -> Vec<Square> {
    let mut moves = Vec::new();
    match piece.piece_type {
        PieceType::Pawn => pawn_moves(piece, board, &mut moves),
        PieceType::Rook => slide(piece, board, &ROOK_DIRECTIONS, &mut moves),
        PieceType::Bishop => slide(piece, board, &BISHOP_DIRECTIONS, &mut moves),
        PieceType::Queen => slide(piece, board, &QUEEN_DIRECTIONS, &mut moves),
        PieceType::Knight => step(piece, board, &KNIGHT_OFFSETS, &mut moves),
        PieceType::King => step(piece, board, &QUEEN_DIRECTIONS, &mut moves),
    }
    moves
}

/// Pushes and diagonal captures
///
/// The double step looks only at the two cells straight ahead and only while
/// the pawn has never moved. There is no en passant.
fn pawn_moves(piece: &Piece, board: &Board, moves: &mut Vec<Square>) {
    let forward = piece.color.forward();

    if let Some(one) = piece.position.offset(forward, 0) {
        if board.is_empty(one) {
            moves.push(one);
            if !piece.has_moved {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = piece.position.offset(forward, d_col) {
            if is_enemy(board, target, piece.color) {
                moves.push(target);
            }
        }
    }
}

/// Walk each ray until the edge or the first occupant
///
/// An opposing occupant is included as a capture; a friendly one is not.
fn slide(piece: &Piece, board: &Board, directions: &[(i8, i8)], moves: &mut Vec<Square>) {
    for &(d_row, d_col) in directions {
        let mut current = piece.position;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.color_at(next) {
                None => moves.push(next),
                Some(color) => {
                    if color != piece.color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Single hops: on-board and not friendly-occupied
fn step(piece: &Piece, board: &Board, offsets: &[(i8, i8)], moves: &mut Vec<Square>) {
    moves.extend(
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| piece.position.offset(d_row, d_col))
            .filter(|&target| board.color_at(target) != Some(piece.color)),
    );
}

fn is_enemy(board: &Board, square: Square, color: Color) -> bool {
    board
        .color_at(square)
        .is_some_and(|occupant| occupant != color)
}
