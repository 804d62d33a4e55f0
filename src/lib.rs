//! Goban: the rules of placing and capturing stones on a Go board.
//!
//! The crate models a square board of odd size (up to 35x35), groups of
//! contiguous same-colored stones, liberty counting, suicide rejection and
//! capture removal. Coordinates are pairs of base-36 symbols (`0-9A-Z`).
//!
//! ## Modules
//!
//! - [`constants`] - Coordinate alphabet, size limits and render glyphs
//! - [`coord`] - Human-facing positions
//! - [`stone`] - Colors and stones
//! - [`group`] - Chains of contiguous stones
//! - [`goban`] - The board and the move rules
//! - [`error`] - Error types
//! - [`playout`] - Random games over the rules
//! - [`gtp`] - A GTP-style text command loop
//!
//! ## Example
//!
//! ```
//! use goban::goban::Board;
//! use goban::stone::Color;
//!
//! let mut board = Board::new(9).unwrap();
//! board.place(Color::Black, "11".parse().unwrap()).unwrap();
//! board.place(Color::White, "22".parse().unwrap()).unwrap();
//! assert_eq!(board.get("11".parse().unwrap()), Some(Color::Black));
//! println!("{board}");
//! ```

pub mod constants;
pub mod coord;
pub mod error;
pub mod goban;
pub mod group;
pub mod gtp;
pub mod playout;
pub mod stone;
