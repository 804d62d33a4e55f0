//! Error types returned by the board.

use thiserror::Error;

/// Why a placement was refused.
///
/// These are ordinary game conditions; the caller should ask for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LegalityError {
    /// Point is not empty
    #[error("illegal move: point not empty")]
    Occupied,
    /// Move would leave its own group without liberties and captures nothing
    #[error("illegal move: suicide")]
    Suicide,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid board size {0}: must be odd and at most 35")]
    InvalidSize(usize),
    #[error("unknown coordinate symbol '{0}'")]
    UnknownSymbol(char),
    #[error("malformed position '{0}': expected two coordinate symbols")]
    MalformedPosition(String),
    #[error(transparent)]
    Illegal(#[from] LegalityError),
}
