//! Board coordinates
//!
//! A [`Square`] is a `(row, col)` pair with both components in `0..8`. Row 0 is
//! black's back rank (top of the window), row 7 is white's back rank. Every
//! constructor is checked, so a `Square` can index the grid without bounds
//! failures.

use crate::error::{RulesError, RulesResult};
use std::fmt;
use std::str::FromStr;

/// Number of rows and columns on the board
pub const BOARD_SIZE: u8 = 8;

/// A board coordinate, immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square, returning `None` when either coordinate is off the board
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Linear index `row * 8 + col`, always in `0..64`
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Square reached by stepping `(d_row, d_col)`, or `None` past an edge
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Map a pointer position (origin top-left) to the square under it
    ///
    /// `cell_size` is the side of one square in the same units as `x`/`y`.
    /// Positions left of or above the board, past its far edges, non-finite
    /// input or a non-positive cell size all yield `None`.
    pub fn from_pixel(x: f32, y: f32, cell_size: f32) -> Option<Self> {
        if !(cell_size > 0.0) || !x.is_finite() || !y.is_finite() || x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / cell_size).floor();
        let row = (y / cell_size).floor();
        if row >= BOARD_SIZE as f32 || col >= BOARD_SIZE as f32 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Iterate all 64 squares row by row
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }

    /// Algebraic file letter, `a` for column 0
    pub fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Algebraic rank number, 1 for row 7
    pub fn rank(self) -> u8 {
        BOARD_SIZE - self.row
    }
}

impl TryFrom<(i32, i32)> for Square {
    type Error = RulesError;

    fn try_from((row, col): (i32, i32)) -> RulesResult<Self> {
        let in_range = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(RulesError::InvalidSquare { row, col })
        }
    }
}

impl FromStr for Square {
    type Err = RulesError;

    /// Parse algebraic notation (`a1`..`h8`, case-insensitive file)
    fn from_str(s: &str) -> RulesResult<Self> {
        let parse_error = || RulesError::ParseSquare {
            input: s.to_string(),
        };
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(parse_error());
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(parse_error());
        }
        let col = file - b'a';
        let row = BOARD_SIZE - (rank - b'0');
        Self::new(row, col).ok_or_else(parse_error)
    }
}

impl TryFrom<String> for Square {
    type Error = RulesError;

    fn try_from(s: String) -> RulesResult<Self> {
        s.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> String {
        square.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}
