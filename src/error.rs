//! Error types

use thiserror::Error;

/// Problems with the shape or contents of a maze, detected before solving
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum GridError {
    #[error("Invalid maze dimensions {rows}x{cols}, each must be between 1 and {max}")]
    InvalidDimensions { rows: usize, cols: usize, max: usize },

    #[error("Maze input is empty")]
    EmptyInput,

    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid character '{ch}' at position ({row}, {col})")]
    InvalidCharacter { ch: char, row: usize, col: usize },

    #[error("There must be exactly one start point. Found: {0}")]
    StartCount(usize),

    #[error("There must be exactly one end point. Found: {0}")]
    EndCount(usize),

    #[error("Cannot generate a {rows}x{cols} maze, start and end would not fit")]
    TooSmallToGenerate { rows: usize, cols: usize },
}

/// Precondition violations found by a solver
///
/// Not finding a path is not an error, see [crate::Outcome::NoPath].
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SolveError {
    #[error("No starting position found")]
    NoStart,

    #[error("No end position found")]
    NoEnd,
}
