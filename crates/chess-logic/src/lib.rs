//! Chess rules core - pseudo-legal move generation and click-driven turn state
//!
//! Pure game logic with no rendering, windowing or network coupling. The bevy
//! front-end and the HTTP backend both drive the same [`GameState`] through
//! [`GameState::handle_click`], so every input source follows identical rules.
//!
//! # Module Structure
//!
//! - `square` - Board coordinates, algebraic notation and pixel mapping
//! - `piece` - Colors, piece types and the [`Piece`] record
//! - `board` - Arena board: 64 cells of [`PieceId`] plus a dense piece store
//! - `moves` - Per-piece movement rules (pawn, rook, knight, bishop, queen, king)
//! - `game_state` - Selection/turn state machine
//! - `error` - Typed errors for board construction and parsing
//!
//! # Rule Set
//!
//! Moves are pseudo-legal only. There is no check detection, castling,
//! en passant or promotion, and a king may be moved into check.
//!
//! # Example
//!
//! ```
//! use chess_logic::{ClickOutcome, Color, GameState, Square};
//!
//! let mut game = GameState::new();
//! let e2 = Square::new(6, 4).unwrap();
//! let e4 = Square::new(4, 4).unwrap();
//!
//! assert!(matches!(game.handle_click(e2), ClickOutcome::Selected { .. }));
//! assert!(matches!(game.handle_click(e4), ClickOutcome::Moved(_)));
//! assert_eq!(game.current_turn(), Color::Black);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod moves;
pub mod piece;
pub mod square;

// Re-export commonly used items
pub use board::{Board, PieceId};
pub use error::{RulesError, RulesResult};
pub use game_state::{ClickOutcome, GameState, MoveRecord, Selection, SelectionPhase};
pub use moves::valid_moves;
pub use piece::{Color, Piece, PieceType};
pub use square::{Square, BOARD_SIZE};
