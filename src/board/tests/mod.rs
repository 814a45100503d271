//! Unit tests for the board crate.

mod eval;
mod search;

use super::Board;

/// Parse a test diagram, panicking with a useful message on bad input.
pub(crate) fn make_board(diagram: &str) -> Board {
    diagram.parse().expect("valid board diagram")
}
