//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Draughts piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Man,
    King,
}

impl Piece {
    /// Parse a piece from a character (m/k, any case)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'm' => Some(Piece::Man),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Returns true if this piece slides any distance along diagonals
    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::King)
    }
}

/// Draughts colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Man forward direction as a row delta (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color promotes (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rows holding this color's men in the starting position
    #[inline]
    #[must_use]
    pub const fn man_start_rows(self) -> std::ops::Range<usize> {
        match self {
            Color::White => 5..8,
            Color::Black => 0..3,
        }
    }

    /// How far a man of this color has advanced from its back row (0-7)
    #[inline]
    #[must_use]
    pub(crate) const fn advancement(self, row: usize) -> usize {
        match self {
            Color::White => 7 - row,
            Color::Black => row,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
