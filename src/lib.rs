pub mod board;

pub use board::{Board, Color, Engine, EngineConfig, Move, Piece, Square};
