//! Error types for the game engine.

use thiserror::Error;

/// Errors raised by the core engine.
///
/// Collisions and game over are regular outcomes, not errors; these variants
/// only cover invalid input to constructors and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown piece type {0:?}")]
    UnknownPieceType(char),

    #[error("unknown piece value {0}")]
    UnknownPieceValue(u8),

    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("pattern must be square, got {rows} rows and {cols} columns")]
    NonSquarePattern { rows: usize, cols: usize },

    #[error("pattern size {0} exceeds the 4x4 limit")]
    PatternTooLarge(usize),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
