//! Stage changes triggered by drop events.

use super::{TaskBoardResult, TaskRepository};
use crate::board::{
    domain::{BoardState, DropEvent, Stage, TaskId},
    ports::TaskStore,
};
use tokio::sync::RwLock;
use tracing::info;

/// Applies stage changes.
///
/// A move is written to the store first and committed to the board only
/// after the store confirms it, so the board never shows a stage the store
/// does not hold. The engine keeps no state between calls: two drops for the
/// same task run independently.
pub struct TransitionEngine<S>
where
    S: TaskStore,
{
    repository: TaskRepository<S>,
}

impl<S> Clone for TransitionEngine<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
        }
    }
}

impl<S> TransitionEngine<S>
where
    S: TaskStore,
{
    /// Creates an engine writing through `repository`.
    #[must_use]
    pub const fn new(repository: TaskRepository<S>) -> Self {
        Self { repository }
    }

    /// Moves `task_id` to `target` in the store, then on the board.
    ///
    /// Dropping a task onto its current stage still performs both writes and
    /// leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError::Repository`] when the store write
    /// fails (the board is untouched), or
    /// [`super::TaskBoardError::State`] when the task left the board while
    /// the store write was in flight.
    pub async fn apply(
        &self,
        board: &RwLock<BoardState>,
        task_id: &TaskId,
        target: Stage,
    ) -> TaskBoardResult<()> {
        self.repository.update_status(task_id, target).await?;
        board.write().await.set_status(task_id, target)?;
        info!(task_id = %task_id, stage = %target, "task moved");
        Ok(())
    }

    /// Applies a drop event emitted by the drag-and-drop layer.
    ///
    /// # Errors
    ///
    /// See [`TransitionEngine::apply`].
    pub async fn apply_drop(
        &self,
        board: &RwLock<BoardState>,
        event: &DropEvent,
    ) -> TaskBoardResult<()> {
        self.apply(board, &event.dragged_id, event.dropped_on_stage)
            .await
    }
}
