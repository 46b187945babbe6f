//! Service-level error type for board operations.

use super::TaskRepositoryError;
use crate::board::domain::{BoardDomainError, BoardStateError};
use thiserror::Error;

/// Errors surfaced by board service operations.
///
/// Every error is scoped to the single call that produced it; the board is
/// left as it was before the call unless the remote write had already
/// succeeded.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The repository call failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// The in-memory board rejected a commit.
    #[error(transparent)]
    State(#[from] BoardStateError),
}

/// Result type for board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;
