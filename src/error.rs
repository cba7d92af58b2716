//! Error types for tictactoe-core.

use thiserror::Error;

use crate::WinRule;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("cell {pos} is already occupied")]
    CellOccupied { pos: u16 },

    #[error("cell {pos} is outside a {size}x{size} board")]
    OutOfBounds { pos: u16, size: u8 },

    #[error("game is already over")]
    GameOver,

    #[error("step {step} is not in history (history has {len} snapshots)")]
    InvalidStep { step: usize, len: usize },

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("board size {size} is outside {min}..={max}")]
    InvalidSize { size: u8, min: u8, max: u8 },

    #[error("{rule:?} rule only plays on a {required}x{required} board, got {size}x{size}")]
    RuleRequiresSize {
        rule: WinRule,
        required: u8,
        size: u8,
    },

    #[error("expected {expected} cells, got {got}")]
    CellCount { expected: usize, got: usize },

    #[error("invalid cell character '{character}' at index {index}")]
    InvalidCell { character: char, index: usize },

    #[error("invalid move token '{token}' (expected '(col,row)')")]
    InvalidNotation { token: String },

    #[error("move {index} ({token}): {source}")]
    Replay {
        index: usize,
        token: String,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
