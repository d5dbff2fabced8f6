//! Error types for the rules core
//!
//! Click handling never fails: anomalous clicks are silent no-ops. These errors
//! cover the fallible edges around it (building boards, parsing notation and
//! checking the arena invariants).

use crate::square::Square;
use thiserror::Error;

/// Errors that can occur while building or inspecting a board
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Coordinate outside the 8x8 grid
    #[error("Invalid square ({row}, {col}): both coordinates must be in 0..8")]
    InvalidSquare { row: i32, col: i32 },

    /// Text that is not algebraic notation such as `e2`
    #[error("Cannot parse square from {input:?}")]
    ParseSquare { input: String },

    /// Attempt to place a piece on a square that already holds one
    #[error("Square {square} is already occupied")]
    SquareOccupied { square: Square },

    /// Cells and piece store disagree
    #[error("Board is inconsistent: {message}")]
    InconsistentBoard { message: String },
}

/// Result type alias for rules operations
pub type RulesResult<T> = Result<T, RulesError>;
