//! Core value types shared across the board crate.

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::Square;

/// Contents of a single board cell.
pub type Cell = Option<(Color, Piece)>;
