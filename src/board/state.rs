//! Board snapshot and move application.

use std::fmt;
use std::str::FromStr;

use super::error::{BoardParseError, MoveError};
use super::types::{Cell, Color, Move, Piece, Square};

/// An immutable 8x8 board snapshot.
///
/// The engine never mutates a snapshot in place; every move produces a fresh
/// board via [`Board::apply_move`], so concurrent search branches can never
/// alias each other's state.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// Standard starting position: Black men on rows 0-2, White men on
    /// rows 5-7, dark squares only.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for row in color.man_start_rows() {
                for col in 0..8 {
                    let sq = Square(row, col);
                    if sq.is_dark() {
                        board.cells[row][col] = Some((color, Piece::Man));
                    }
                }
            }
        }
        board
    }

    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Get the piece on a square, if any
    #[inline]
    #[must_use]
    pub const fn piece_at(&self, sq: Square) -> Cell {
        self.cells[sq.0][sq.1]
    }

    /// Returns true if the square holds no piece
    #[inline]
    #[must_use]
    pub const fn is_empty_at(&self, sq: Square) -> bool {
        self.cells[sq.0][sq.1].is_none()
    }

    /// Copy of this board with one cell replaced (position setup helper)
    #[must_use]
    pub fn with_piece(&self, sq: Square, cell: Cell) -> Self {
        let mut board = *self;
        board.cells[sq.0][sq.1] = cell;
        board
    }

    /// Iterate over all occupied squares of one color
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| match self.cells[row][col] {
                Some((c, piece)) if c == color => Some((Square(row, col), piece)),
                _ => None,
            })
        })
    }

    /// Count (men, kings) for one color
    #[must_use]
    pub fn count(&self, color: Color) -> (u32, u32) {
        let mut men = 0;
        let mut kings = 0;
        for (_, piece) in self.pieces(color) {
            match piece {
                Piece::Man => men += 1,
                Piece::King => kings += 1,
            }
        }
        (men, kings)
    }

    /// Returns true if the color has no pieces left
    #[must_use]
    pub fn is_wiped_out(&self, color: Color) -> bool {
        self.pieces(color).next().is_none()
    }

    /// Apply a move, returning the resulting board.
    ///
    /// A man landing on its promotion row becomes a king as part of this
    /// application, before any chained capture from the landing square is
    /// considered.
    ///
    /// # Errors
    ///
    /// Fails fast on illegal application: an empty source square, an
    /// occupied destination, or a capture square with nothing on it. These
    /// are integration errors, not game states.
    pub fn apply_move(&self, mv: Move) -> Result<Board, MoveError> {
        let (color, piece) = self
            .piece_at(mv.from)
            .ok_or(MoveError::EmptySource { from: mv.from })?;
        if !self.is_empty_at(mv.to) {
            return Err(MoveError::OccupiedDestination { to: mv.to });
        }
        if let Some(captured) = mv.captured {
            if self.is_empty_at(captured) {
                return Err(MoveError::EmptyCapture { captured });
            }
        }

        let mut board = *self;
        if let Some(captured) = mv.captured {
            board.cells[captured.0][captured.1] = None;
        }
        let piece = if piece == Piece::Man && mv.to.row() == color.promotion_row() {
            Piece::King
        } else {
            piece
        };
        board.cells[mv.from.0][mv.from.1] = None;
        board.cells[mv.to.0][mv.to.1] = Some((color, piece));
        Ok(board)
    }

    /// Apply a move that was just generated for this exact snapshot.
    ///
    /// Invariant: `mv` must come from move generation on `self`; such moves
    /// cannot fail validation.
    #[must_use]
    pub(crate) fn apply_unchecked(&self, mv: Move) -> Board {
        debug_assert!(self.piece_at(mv.from).is_some(), "moving from empty {}", mv.from);
        debug_assert!(self.is_empty_at(mv.to), "moving onto occupied {}", mv.to);

        let mut board = *self;
        if let Some(captured) = mv.captured {
            board.cells[captured.0][captured.1] = None;
        }
        if let Some((color, piece)) = board.cells[mv.from.0][mv.from.1].take() {
            let piece = if piece == Piece::Man && mv.to.row() == color.promotion_row() {
                Piece::King
            } else {
                piece
            };
            board.cells[mv.to.0][mv.to.1] = Some((color, piece));
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

fn cell_to_char(cell: Cell) -> char {
    match cell {
        None => '.',
        Some((Color::White, Piece::Man)) => 'w',
        Some((Color::White, Piece::King)) => 'W',
        Some((Color::Black, Piece::Man)) => 'b',
        Some((Color::Black, Piece::King)) => 'B',
    }
}

fn char_to_cell(c: char) -> Option<Cell> {
    match c {
        '.' => Some(None),
        'w' => Some(Some((Color::White, Piece::Man))),
        'W' => Some(Some((Color::White, Piece::King))),
        'b' => Some(Some((Color::Black, Piece::Man))),
        'B' => Some(Some((Color::Black, Piece::King))),
        _ => None,
    }
}

impl fmt::Display for Board {
    /// Eight lines of eight cells, row 0 (rank 8) first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                write!(f, "{}", cell_to_char(self.cells[row][col]))?;
            }
            if row < 7 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse a diagram produced by `Display`: 8 whitespace-separated lines
    /// of `.`/`w`/`b`/`W`/`B`, row 0 first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split_whitespace().collect();
        if rows.len() != 8 {
            return Err(BoardParseError::BadRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != 8 {
                return Err(BoardParseError::BadRowLength {
                    row,
                    found: chars.len(),
                });
            }
            for (col, &c) in chars.iter().enumerate() {
                board.cells[row][col] = char_to_cell(c).ok_or(BoardParseError::InvalidCell {
                    char: c,
                    row,
                    col,
                })?;
            }
        }
        Ok(board)
    }
}
