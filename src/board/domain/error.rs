//! Error types for board domain validation, parsing, and bookkeeping.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task text is empty after trimming.
    #[error("task text must not be empty")]
    EmptyTaskText,

    /// The task text exceeds the configured character limit.
    #[error("task text has {actual} characters, limit is {max}")]
    TaskTextTooLong {
        /// Configured maximum number of characters.
        max: usize,
        /// Number of characters supplied.
        actual: usize,
    },
}

/// Error returned while parsing a stage label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown stage: {0}")]
pub struct ParseStageError(pub String);

/// Invariant violations reported by the in-memory board state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardStateError {
    /// A task with the same identifier is already on the board.
    #[error("duplicate task identifier on board: {0}")]
    DuplicateId(TaskId),

    /// No task with the identifier is on the board.
    #[error("task not on board: {0}")]
    NotFound(TaskId),
}
