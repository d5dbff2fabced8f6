//! Selection and turn state machine
//!
//! Two states: `Idle` (nothing selected) and `Selected` (a piece of the side to
//! move plus its cached destinations). Every click resolves completely before
//! the next one is looked at.
//!
//! # Transitions
//!
//! ```text
//! Idle     --click own piece-------------> Selected
//! Idle     --click anything else---------> Idle      (no-op)
//! Selected --click cached destination----> Idle      (move committed, turn flips)
//! Selected --click anything else---------> Idle      (selection dropped)
//! ```
//!
//! Clicking a second friendly piece while one is selected drops the selection
//! instead of switching to the new piece. A further click is needed to select it.

use crate::board::{Board, PieceId};
use crate::piece::{Color, Piece, PieceType};
use crate::square::Square;
use tracing::debug;


/// Currently selected piece and the destinations computed when it was picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub piece: PieceId,
    pub valid_moves: Vec<Square>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Idle,
    Selected,
}

/// A committed move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub color: Color,
    pub piece_type: PieceType,
    pub captured: Option<PieceType>,
}

/// What a click did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing changed
    Ignored,
    /// A piece of the side to move was picked up
    Selected { square: Square, destinations: usize },
    /// The selected piece moved
    Moved(MoveRecord),
    /// The click missed every destination and the selection was dropped
    Deselected,
}

impl ClickOutcome {
    /// Whether board or selection state changed
    pub fn changed(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }
}

/// Board, side to move and transient selection
///
/// Owns the [`Board`] outright. The selection only holds a [`PieceId`] into it,
/// and whenever a selection exists that id sits on the board and belongs to
/// [`GameState::current_turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_turn: Color,
    selection: Option<Selection>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Standard layout, white to move, nothing selected
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Color::White)
    }

    /// Start from an arbitrary placement
    pub fn with_board(board: Board, current_turn: Color) -> Self {
        Self {
            board,
            current_turn,
            selection: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selected_id(&self) -> Option<PieceId> {
        self.selection.as_ref().map(|selection| selection.piece)
    }

    pub fn selected_piece(&self) -> Option<&Piece> {
        self.selected_id().and_then(|id| self.board.piece(id))
    }

    /// Cached destinations of the selected piece, empty when idle
    pub fn valid_moves(&self) -> &[Square] {
        self.selection
            .as_ref()
            .map(|selection| selection.valid_moves.as_slice())
            .unwrap_or_default()
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.selection.is_some() {
            SelectionPhase::Selected
        } else {
            SelectionPhase::Idle
        }
    }

    /// Map a pointer position to a square and treat it as a click
    ///
    /// Positions outside the grid are dropped before they reach the state
    /// machine, so an in-progress selection survives them.
    pub fn handle_pointer(&mut self, x: f32, y: f32, cell_size: f32) -> ClickOutcome {
        match Square::from_pixel(x, y, cell_size) {
            Some(square) => self.handle_click(square),
            None => {
                debug!("[RULES] Pointer ({x:.1}, {y:.1}) is off the board");
                ClickOutcome::Ignored
            }
        }
    }

    /// Advance the state machine by one click
    pub fn handle_click(&mut self, square: Square) -> ClickOutcome {
        match self.selection.take() {
            None => self.try_select(square),
            Some(selection) => {
                if selection.valid_moves.contains(&square) {
                    self.commit(selection.piece, square)
                } else {
                    debug!("[RULES] {square} is not a destination, selection cleared");
                    ClickOutcome::Deselected
                }
            }
        }
    }

    fn try_select(&mut self, square: Square) -> ClickOutcome {
        let Some(id) = self.board.occupant(square) else {
            return ClickOutcome::Ignored;
        };
        let Some(piece) = self.board.piece(id) else {
            return ClickOutcome::Ignored;
        };
        if piece.color != self.current_turn {
            debug!(
                "[RULES] {square} holds a {} {}, not {}'s piece",
                piece.color, piece.piece_type, self.current_turn
            );
            return ClickOutcome::Ignored;
        }

        let valid_moves = piece.get_valid_moves(&self.board);
        let destinations = valid_moves.len();
        debug!(
            "[RULES] Selected {} {} on {square} with {destinations} destinations",
            piece.color, piece.piece_type
        );
        self.selection = Some(Selection {
            piece: id,
            valid_moves,
        });
        ClickOutcome::Selected {
            square,
            destinations,
        }
    }

    /// Move the piece, drop the selection and hand the turn over
    fn commit(&mut self, id: PieceId, to: Square) -> ClickOutcome {
        let Some(&piece) = self.board.piece(id) else {
            return ClickOutcome::Deselected;
        };
        let captured = self.board.relocate(id, to).map(|victim| victim.piece_type);
        self.current_turn = self.current_turn.opposite();

        let record = MoveRecord {
            from: piece.position,
            to,
            color: piece.color,
            piece_type: piece.piece_type,
            captured,
        };
        debug!(
            "[RULES] {} {} {} -> {}{}",
            record.color,
            record.piece_type,
            record.from,
            record.to,
            captured.map(|c| format!(" capturing {c}")).unwrap_or_default()
        );
        debug_assert!(self.board.validate().is_ok());
        ClickOutcome::Moved(record)
    }
}
