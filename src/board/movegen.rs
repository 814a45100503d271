//! Legal move enumeration under the forced-capture rule.

use super::state::Board;
use super::types::{Color, Move, Piece, Square};

/// The four diagonal directions as (row, col) deltas.
const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Board {
    /// All legal moves for the piece on `sq`, in board-scan order.
    ///
    /// If the piece has any capture available, only captures are returned
    /// and the second element is `true`; quiet moves are suppressed
    /// entirely. An empty square yields an empty list.
    #[must_use]
    pub fn raw_moves_for_square(&self, sq: Square) -> (Vec<Move>, bool) {
        let Some((color, piece)) = self.piece_at(sq) else {
            return (Vec::new(), false);
        };

        let mut moves = Vec::new();
        match piece {
            Piece::Man => self.man_captures(sq, color, &mut moves),
            Piece::King => self.king_captures(sq, color, &mut moves),
        }
        if !moves.is_empty() {
            return (moves, true);
        }

        match piece {
            Piece::Man => self.man_quiet_moves(sq, color, &mut moves),
            Piece::King => self.king_quiet_moves(sq, &mut moves),
        }
        (moves, false)
    }

    /// All legal moves for every piece of `color`, in board-scan order.
    ///
    /// Forced-capture rule: if any piece of the side can capture, the
    /// result is exactly the union of capture moves from every piece that
    /// has at least one, and `true`; all quiet moves are excluded. The side
    /// may capture with any capable piece, not only the one with the
    /// longest chain.
    #[must_use]
    pub fn raw_moves_for_side(&self, color: Color) -> (Vec<Move>, bool) {
        let mut moves = Vec::new();
        let mut forced = false;
        for (sq, _) in self.pieces(color) {
            let (piece_moves, piece_forced) = self.raw_moves_for_square(sq);
            if piece_forced && !forced {
                forced = true;
                moves.clear();
            }
            if piece_forced == forced {
                moves.extend(piece_moves);
            }
        }
        (moves, forced)
    }

    /// Men jump exactly two squares over an adjacent enemy, in any of the
    /// four diagonal directions (backward captures allowed).
    fn man_captures(&self, sq: Square, color: Color, moves: &mut Vec<Move>) {
        for (drow, dcol) in DIAGONALS {
            let Some(to) = sq.offset(2 * drow, 2 * dcol) else {
                continue;
            };
            if !self.is_empty_at(to) {
                continue;
            }
            let mid = sq.midpoint(to);
            if let Some((c, _)) = self.piece_at(mid) {
                if c != color {
                    moves.push(Move::capture(sq, to, mid));
                }
            }
        }
    }

    /// Kings capture along a diagonal: the first piece on the ray must be
    /// an enemy, and every empty square beyond it is a landing square until
    /// a second piece (of either color) closes the ray.
    fn king_captures(&self, sq: Square, color: Color, moves: &mut Vec<Move>) {
        for (drow, dcol) in DIAGONALS {
            let mut latched: Option<Square> = None;
            let mut cur = sq;
            while let Some(next) = cur.offset(drow, dcol) {
                cur = next;
                match self.piece_at(cur) {
                    Some((c, _)) => {
                        if c == color || latched.is_some() {
                            break;
                        }
                        latched = Some(cur);
                    }
                    None => {
                        if let Some(captured) = latched {
                            moves.push(Move::capture(sq, cur, captured));
                        }
                    }
                }
            }
        }
    }

    /// Men step one square diagonally, strictly forward.
    fn man_quiet_moves(&self, sq: Square, color: Color, moves: &mut Vec<Move>) {
        let drow = color.forward_direction();
        for dcol in [-1, 1] {
            if let Some(to) = sq.offset(drow, dcol) {
                if self.is_empty_at(to) {
                    moves.push(Move::quiet(sq, to));
                }
            }
        }
    }

    /// Kings slide any distance along a diagonal, stopping before the first
    /// occupied square.
    fn king_quiet_moves(&self, sq: Square, moves: &mut Vec<Move>) {
        for (drow, dcol) in DIAGONALS {
            let mut cur = sq;
            while let Some(next) = cur.offset(drow, dcol) {
                if !self.is_empty_at(next) {
                    break;
                }
                moves.push(Move::quiet(sq, next));
                cur = next;
            }
        }
    }
}
