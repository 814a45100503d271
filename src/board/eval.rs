//! Position evaluation.

use super::state::Board;
use super::types::{Color, Piece};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentinel score for a won position. Far above any attainable material
/// ratio (at most 60:1 with a full set of kings against a lone man).
pub const WIN_SCORE: f64 = 1e9;

/// Per-row advancement bonus for a man under
/// [`ScoringMode::MaterialAndPotential`].
const POTENTIAL_BONUS: f64 = 0.05;

/// How a position is scored.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScoringMode {
    /// Piece counts only; a king is worth 4 men.
    #[default]
    Material,
    /// Piece counts plus a bonus for men approaching promotion; a king is
    /// worth 5 men.
    MaterialAndPotential,
}

impl ScoringMode {
    /// King weight relative to a man
    #[inline]
    #[must_use]
    const fn king_coefficient(self) -> f64 {
        match self {
            ScoringMode::Material => 4.0,
            ScoringMode::MaterialAndPotential => 5.0,
        }
    }
}

/// Weighted material for one side, men first.
fn side_material(board: &Board, color: Color, mode: ScoringMode) -> (f64, f64) {
    let mut men = 0.0;
    let mut kings = 0.0;
    for (sq, piece) in board.pieces(color) {
        match piece {
            Piece::Man => {
                men += 1.0;
                if mode == ScoringMode::MaterialAndPotential {
                    men += POTENTIAL_BONUS * color.advancement(sq.row()) as f64;
                }
            }
            Piece::King => kings += 1.0,
        }
    }
    (men, kings)
}

/// Score a position from `perspective`'s point of view: higher is better.
///
/// A wiped-out opponent scores [`WIN_SCORE`]; a wiped-out `perspective`
/// side scores 0. Otherwise the score is the ratio of own weighted
/// material to the opponent's, so 1.0 is balanced.
#[must_use]
pub fn score(board: &Board, perspective: Color, mode: ScoringMode) -> f64 {
    let (own_men, own_kings) = side_material(board, perspective, mode);
    let (opp_men, opp_kings) = side_material(board, perspective.opponent(), mode);

    if opp_men + opp_kings == 0.0 {
        return WIN_SCORE;
    }
    if own_men + own_kings == 0.0 {
        return 0.0;
    }

    let k = mode.king_coefficient();
    (own_men + own_kings * k) / (opp_men + opp_kings * k)
}
