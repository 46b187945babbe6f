//! Task repository: maps board tasks to store documents.

use crate::board::{
    domain::{Stage, Task, TaskId, TaskText},
    ports::{StoredTaskDocument, TaskDocument, TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors returned by [`TaskRepository`] operations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task store could not be reached or failed the call.
    #[error("task store unavailable: {0}")]
    StoreUnavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The store holds no record for the task.
    #[error("task not found in store: {0}")]
    NotFound(TaskId),
}

impl From<TaskStoreError> for TaskRepositoryError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::Unavailable(source) => Self::StoreUnavailable(source),
            TaskStoreError::NotFound(key) => Self::NotFound(TaskId::new(key)),
        }
    }
}

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Reasons a stored document cannot be turned into a task.
#[derive(Debug, Error)]
enum DecodeError {
    #[error(transparent)]
    Stage(#[from] crate::board::domain::ParseStageError),
    #[error(transparent)]
    Text(#[from] crate::board::domain::BoardDomainError),
}

/// Translates between board tasks and task store documents.
///
/// The repository owns every remote call the board makes and keeps no state
/// between calls.
pub struct TaskRepository<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> Clone for TaskRepository<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> TaskRepository<S>
where
    S: TaskStore,
{
    /// Creates a repository over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Loads every task held by the store.
    ///
    /// Documents with an unknown stage label or empty text are skipped and
    /// logged; they never reach the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StoreUnavailable`] when the store
    /// cannot be listed.
    pub async fn load_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let documents = self.store.list_all().await?;
        let total = documents.len();
        let tasks: Vec<Task> = documents
            .into_iter()
            .filter_map(|stored| {
                let key = stored.key.clone();
                decode(stored)
                    .inspect_err(|err| {
                        warn!(task_id = %key, error = %err, "skipping undecodable task document");
                    })
                    .ok()
            })
            .collect();
        debug!(loaded = tasks.len(), listed = total, "loaded tasks from store");
        Ok(tasks)
    }

    /// Stores a new task and returns it with its store-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::StoreUnavailable`] when the store
    /// rejects the write.
    pub async fn create(&self, text: TaskText, status: Stage) -> TaskRepositoryResult<Task> {
        let document = TaskDocument::new(text.as_str(), status.as_str());
        let key = self.store.create(&document).await?;
        debug!(task_id = %key, stage = %status, "created task document");
        Ok(Task::new(TaskId::new(key), text, status))
    }

    /// Writes a new stage to the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the store has no such
    /// record or [`TaskRepositoryError::StoreUnavailable`] when the write
    /// fails.
    pub async fn update_status(&self, id: &TaskId, status: Stage) -> TaskRepositoryResult<()> {
        self.store
            .update_status(id.as_str(), status.as_str())
            .await?;
        Ok(())
    }

    /// Removes the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the store has no such
    /// record or [`TaskRepositoryError::StoreUnavailable`] when the delete
    /// fails.
    pub async fn delete(&self, id: &TaskId) -> TaskRepositoryResult<()> {
        self.store.delete(id.as_str()).await?;
        Ok(())
    }
}

fn decode(stored: StoredTaskDocument) -> Result<Task, DecodeError> {
    let StoredTaskDocument { key, document } = stored;
    let status = Stage::try_from(document.status.as_str())?;
    let text = TaskText::new(document.text)?;
    Ok(Task::new(TaskId::new(key), text, status))
}
