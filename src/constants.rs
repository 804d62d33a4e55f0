//! Constants for board geometry, coordinates and rendering.

// =============================================================================
// Board Geometry
// =============================================================================

/// Symbols used for both axes, truncated to the board size.
pub const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest supported board. The alphabet has 36 symbols; one is held back.
pub const MAX_SIZE: usize = 35;

/// Board size used by the CLI when none is given.
pub const DEFAULT_SIZE: usize = 9;

/// Placements played by `random` when no limit is given.
pub const DEFAULT_RANDOM_MOVES: usize = 200;

// =============================================================================
// Rendering Glyphs
// =============================================================================

pub const GLYPH_EMPTY: char = '.';
pub const GLYPH_BLACK: char = 'o';
pub const GLYPH_WHITE: char = '*';
pub const GLYPH_BLACK_HIGHLIGHT: char = '@';
pub const GLYPH_WHITE_HIGHLIGHT: char = '#';
