//! Arena board
//!
//! The grid stores [`PieceId`]s rather than pieces. Piece records live in a
//! dense store indexed by id, so moving a piece rewrites two cells and one
//! record, and a capture empties the victim's store slot. A piece can never be
//! referenced from two cells at once.

use crate::error::{RulesError, RulesResult};
use crate::piece::{Color, Piece, PieceType};
use crate::square::{Square, BOARD_SIZE};

const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Stable handle to a piece in a [`Board`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<PieceId>; CELL_COUNT],
    pieces: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            pieces: Vec::new(),
        }
    }

    /// Standard starting layout: black on rows 0-1, white on rows 6-7
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for col in 0..BOARD_SIZE {
            for (row, color, piece_type) in [
                (0, Color::Black, PieceType::BACK_RANK[col as usize]),
                (1, Color::Black, PieceType::Pawn),
                (6, Color::White, PieceType::Pawn),
                (7, Color::White, PieceType::BACK_RANK[col as usize]),
            ] {
                if let Some(square) = Square::new(row, col) {
                    board.insert(Piece::new(color, piece_type, square));
                }
            }
        }
        board
    }

    /// Put a new piece on an empty square
    pub fn place(
        &mut self,
        piece_type: PieceType,
        color: Color,
        square: Square,
    ) -> RulesResult<PieceId> {
        if !self.is_empty(square) {
            return Err(RulesError::SquareOccupied { square });
        }
        Ok(self.insert(Piece::new(color, piece_type, square)))
    }

    fn insert(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.cells[piece.position.index()] = Some(id);
        self.pieces.push(Some(piece));
        id
    }

    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.cells[square.index()]
    }

    /// Piece record for an id, `None` once captured
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index()).and_then(Option::as_ref)
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.occupant(square).and_then(|id| self.piece(id))
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|piece| piece.color)
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    /// Pieces currently on the board, in row-major square order
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> + '_ {
        self.cells
            .iter()
            .flatten()
            .filter_map(move |&id| self.piece(id).map(|piece| (id, piece)))
    }

    /// Number of pieces on the board
    pub fn len(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Move a piece, capturing whatever stands on `to`
    ///
    /// Rewrites the destination cell, clears the source cell, updates the
    /// piece's position and marks it as moved. Returns the captured piece.
    /// Callers are responsible for `to` being a legal destination.
    pub(crate) fn relocate(&mut self, id: PieceId, to: Square) -> Option<Piece> {
        let from = self.piece(id)?.position;
        let captured = self
            .occupant(to)
            .filter(|&victim| victim != id)
            .and_then(|victim| self.pieces[victim.index()].take());

        self.cells[to.index()] = Some(id);
        self.cells[from.index()] = None;
        if let Some(piece) = self.pieces[id.index()].as_mut() {
            piece.position = to;
            piece.has_moved = true;
        }
        captured
    }

    /// Check that every cell and every stored piece point at each other
    pub fn validate(&self) -> RulesResult<()> {
        for square in Square::all() {
            let Some(id) = self.occupant(square) else {
                continue;
            };
            match self.piece(id) {
                Some(piece) if piece.position == square => {}
                Some(piece) => {
                    return Err(RulesError::InconsistentBoard {
                        message: format!(
                            "cell {square} holds piece {} which believes it is on {}",
                            id.index(),
                            piece.position
                        ),
                    })
                }
                None => {
                    return Err(RulesError::InconsistentBoard {
                        message: format!("cell {square} holds captured piece {}", id.index()),
                    })
                }
            }
        }

        for (index, piece) in self.pieces.iter().enumerate() {
            let Some(piece) = piece else {
                continue;
            };
            if self.occupant(piece.position).map(PieceId::index) != Some(index) {
                return Err(RulesError::InconsistentBoard {
                    message: format!("piece {index} is missing from cell {}", piece.position),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();
        assert_eq!(board.len(), 32);
        assert!(board.validate().is_ok());

        let white_king = board.piece_at(sq(7, 4)).unwrap();
        assert_eq!((white_king.color, white_king.piece_type), (Color::White, PieceType::King));
        let black_queen = board.piece_at(sq(0, 3)).unwrap();
        assert_eq!((black_queen.color, black_queen.piece_type), (Color::Black, PieceType::Queen));

        for col in 0..8 {
            assert_eq!(board.piece_at(sq(1, col)).map(|p| p.piece_type), Some(PieceType::Pawn));
            assert_eq!(board.color_at(sq(6, col)), Some(Color::White));
            for row in 2..6 {
                assert!(board.is_empty(sq(row, col)));
            }
        }
        assert!(board.pieces().all(|(_, p)| !p.has_moved));
    }

    #[test]
    fn test_place_rejects_occupied_square() {
        let mut board = Board::empty();
        board.place(PieceType::Rook, Color::White, sq(3, 3)).unwrap();
        assert_eq!(
            board.place(PieceType::Knight, Color::Black, sq(3, 3)),
            Err(RulesError::SquareOccupied { square: sq(3, 3) })
        );
        assert_eq!(board.len(), 1);
    }

    #[test]
    fn test_relocate_captures_by_overwrite() {
        let mut board = Board::empty();
        let rook = board.place(PieceType::Rook, Color::White, sq(4, 0)).unwrap();
        let victim = board.place(PieceType::Knight, Color::Black, sq(4, 5)).unwrap();

        let captured = board.relocate(rook, sq(4, 5));

        assert_eq!(captured.map(|p| p.piece_type), Some(PieceType::Knight));
        assert_eq!(board.occupant(sq(4, 5)), Some(rook));
        assert!(board.is_empty(sq(4, 0)));
        assert!(board.piece(victim).is_none(), "captured piece leaves the store");
        let moved = board.piece(rook).unwrap();
        assert_eq!(moved.position, sq(4, 5));
        assert!(moved.has_moved);
        assert_eq!(board.len(), 1);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_ids_stay_unique_past_u16_range() {
        //! Each capture-and-replace stores a new record, so ids keep growing.
        let mut board = Board::empty();
        let rook = board.place(PieceType::Rook, Color::White, sq(4, 0)).unwrap();
        for _ in 0..=u16::MAX as usize {
            let victim = board.place(PieceType::Pawn, Color::Black, sq(4, 1)).unwrap();
            assert_ne!(victim, rook);
            board.relocate(rook, sq(4, 1));
            board.relocate(rook, sq(4, 0));
        }
        assert_eq!(board.len(), 1);
        assert_eq!(board.occupant(sq(4, 0)), Some(rook));
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_validate_detects_stale_position() {
        let mut board = Board::empty();
        let id = board.place(PieceType::King, Color::White, sq(7, 4)).unwrap();
        board.pieces[id.index()].as_mut().unwrap().position = sq(0, 0);
        assert!(matches!(
            board.validate(),
            Err(RulesError::InconsistentBoard { .. })
        ));
    }
}
