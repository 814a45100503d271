//! Error types for board and engine operations.

use std::fmt;

use super::types::Square;

/// Error type for square construction/parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for illegal move application.
///
/// These indicate an integration bug in the caller, never a normal game
/// condition: a terminal position is signalled through empty move lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square holds no piece
    EmptySource { from: Square },
    /// The destination square is already occupied
    OccupiedDestination { to: Square },
    /// The capture square holds no piece
    EmptyCapture { captured: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { from } => {
                write!(f, "No piece on source square {from}")
            }
            MoveError::OccupiedDestination { to } => {
                write!(f, "Destination square {to} is not empty")
            }
            MoveError::EmptyCapture { captured } => {
                write!(f, "No piece to capture on {captured}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for board diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// Diagram has the wrong number of rows (needs exactly 8)
    BadRowCount { found: usize },
    /// A row has the wrong number of cells
    BadRowLength { row: usize, found: usize },
    /// Invalid cell character
    InvalidCell { char: char, row: usize, col: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::BadRowCount { found } => {
                write!(f, "Board diagram must have 8 rows, found {found}")
            }
            BoardParseError::BadRowLength { row, found } => {
                write!(f, "Row {row} must have 8 cells, found {found}")
            }
            BoardParseError::InvalidCell { char, row, col } => {
                write!(f, "Invalid cell character '{char}' at row {row}, col {col}")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

/// Error type for engine configuration failures, raised at construction
/// time rather than mid-search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Search depth must be at least 1
    ZeroDepth,
    /// Search depth exceeds the supported maximum
    DepthTooLarge { depth: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDepth => {
                write!(f, "Search depth must be at least 1")
            }
            ConfigError::DepthTooLarge { depth, max } => {
                write!(f, "Search depth {depth} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
