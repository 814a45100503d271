//! Draughts board representation, rules, and search.
//!
//! Implements 8x8 checkers with forced captures, multi-step capture
//! chains, and promotion to king, plus a bounded-depth minimax engine
//! with alpha-beta pruning.
//!
//! # Example
//! ```
//! use draughts_engine::board::{Board, Color, Engine, EngineConfig};
//!
//! let board = Board::new();
//! let mut engine = Engine::new(EngineConfig::default()).unwrap();
//! let (moves, forced) = engine.moves_for_side(&board, Color::White);
//! assert_eq!(moves.len(), 7);
//! assert!(!forced);
//! ```

mod error;
mod eval;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{BoardParseError, ConfigError, MoveError, SquareError};
pub use state::Board;
pub use types::{Cell, Color, Move, Piece, Square};

// Public API - evaluation and search
pub use eval::{score, ScoringMode, WIN_SCORE};
pub use search::{Engine, EngineConfig, SeedPolicy, MAX_DEPTH};
