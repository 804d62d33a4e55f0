//! Stone colors and the stones placed on the board.

use crate::constants::{GLYPH_BLACK, GLYPH_BLACK_HIGHLIGHT, GLYPH_WHITE, GLYPH_WHITE_HIGHLIGHT};
use crate::group::GroupId;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// What a stone looks like when rendered.
///
/// The highlighted variants exist only for display; game logic always works
/// on [`Color`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Appearance {
    Black,
    White,
    HighlightedBlack,
    HighlightedWhite,
}

impl Appearance {
    pub fn glyph(self) -> char {
        match self {
            Appearance::Black => GLYPH_BLACK,
            Appearance::White => GLYPH_WHITE,
            Appearance::HighlightedBlack => GLYPH_BLACK_HIGHLIGHT,
            Appearance::HighlightedWhite => GLYPH_WHITE_HIGHLIGHT,
        }
    }
}

/// A stone on one cell, tagged with the group it currently belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stone {
    color: Color,
    pub(crate) group: GroupId,
    pub(crate) highlighted: bool,
}

impl Stone {
    pub(crate) fn new(color: Color, group: GroupId) -> Self {
        Self {
            color,
            group,
            highlighted: false,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn appearance(&self) -> Appearance {
        match (self.color, self.highlighted) {
            (Color::Black, false) => Appearance::Black,
            (Color::White, false) => Appearance::White,
            (Color::Black, true) => Appearance::HighlightedBlack,
            (Color::White, true) => Appearance::HighlightedWhite,
        }
    }
}
