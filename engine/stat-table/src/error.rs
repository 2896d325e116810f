//! Error types for game log handling

use thiserror::Error;

/// Errors raised while building or reading a [`crate::GameLog`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatTableError {
    #[error("Game log has no header row")]
    MissingHeader,

    #[error("Game log header is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Row {row} has {found} columns, header has {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("Column '{0}' not found in header")]
    NoSuchColumn(String),

    #[error("Row {row}: invalid date '{value}'")]
    InvalidDate { row: usize, value: String },

    #[error("Row {row}: invalid number '{value}' in column '{column}'")]
    InvalidNumber { row: usize, column: String, value: String },

    #[error("Unknown sport '{0}' (expected NBA, WNBA, NFL or NHL)")]
    UnknownSport(String),
}
