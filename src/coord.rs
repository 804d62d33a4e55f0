//! Human-facing board coordinates.
//!
//! A position is a pair of symbols drawn from [`ALPHABET`](crate::constants::ALPHABET),
//! column first. `"11"` is column 1, row 1; `"A3"` is column 10, row 3.
//! Whether a symbol is valid depends on the board size, so translation to a
//! cell index lives on [`Board`](crate::goban::Board).

use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: char,
    pub row: char,
}

impl Position {
    /// Symbols are normalized to upper case.
    pub fn new(col: char, row: char) -> Self {
        Self {
            col: col.to_ascii_uppercase(),
            row: row.to_ascii_uppercase(),
        }
    }
}

impl FromStr for Position {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => Ok(Position::new(col, row)),
            _ => Err(BoardError::MalformedPosition(s.to_string())),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.col, self.row)
    }
}
