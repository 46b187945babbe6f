//! Board service: the entry points used by the presentation layer.

use super::{BoardConfig, TaskBoardResult, TaskRepository, TransitionEngine};
use crate::board::{
    domain::{BoardDomainError, BoardState, DropEvent, Stage, Task, TaskId, TaskText},
    ports::TaskStore,
};
use std::sync::Arc;
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

/// Task board orchestration service.
///
/// The service owns the board state. Every mutation waits for the store to
/// confirm the remote write before it touches the board, and a failed call
/// leaves the board exactly as it was.
pub struct TaskBoardService<S>
where
    S: TaskStore,
{
    repository: TaskRepository<S>,
    transitions: TransitionEngine<S>,
    board: Arc<RwLock<BoardState>>,
    loading: Arc<watch::Sender<bool>>,
    config: BoardConfig,
}

impl<S> Clone for TaskBoardService<S>
where
    S: TaskStore,
{
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            transitions: self.transitions.clone(),
            board: Arc::clone(&self.board),
            loading: Arc::clone(&self.loading),
            config: self.config,
        }
    }
}

impl<S> TaskBoardService<S>
where
    S: TaskStore,
{
    /// Creates a service with an empty board and default configuration.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, BoardConfig::default())
    }

    /// Creates a service with an empty board and the given configuration.
    #[must_use]
    pub fn with_config(store: Arc<S>, config: BoardConfig) -> Self {
        let repository = TaskRepository::new(store);
        let (loading, _) = watch::channel(false);
        Self {
            transitions: TransitionEngine::new(repository.clone()),
            repository,
            board: Arc::new(RwLock::new(BoardState::new())),
            loading: Arc::new(loading),
            config,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Loads every stored task onto the board.
    ///
    /// The loading flag is raised for the duration of the call. When the
    /// load fails the board is left empty and no retry is attempted; call
    /// [`TaskBoardService::reload`] to try again.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError::Repository`] when the store cannot be
    /// listed, or [`super::TaskBoardError::State`] when the store reports the
    /// same key twice.
    pub async fn startup(&self) -> TaskBoardResult<()> {
        self.loading.send_replace(true);
        let result = self.load_board().await;
        self.loading.send_replace(false);
        result
    }

    /// Reloads the board from the store.
    ///
    /// # Errors
    ///
    /// See [`TaskBoardService::startup`].
    pub async fn reload(&self) -> TaskBoardResult<()> {
        self.startup().await
    }

    async fn load_board(&self) -> TaskBoardResult<()> {
        let loaded = self.repository.load_all().await;
        let mut board = self.board.write().await;
        let tasks = match loaded {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(error = %err, "task load failed, showing an empty board");
                board.clear();
                return Err(err.into());
            }
        };
        let count = tasks.len();
        if let Err(err) = board.replace_all(tasks) {
            board.clear();
            return Err(err.into());
        }
        info!(count, "board loaded");
        Ok(())
    }

    /// Adds a task to the backlog.
    ///
    /// Whitespace-only text is ignored without contacting the store and
    /// yields `Ok(None)`. Otherwise the task is created in the store first
    /// and inserted on the board once the store has assigned its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError::Domain`] when a length limit is
    /// configured and the text exceeds it,
    /// [`super::TaskBoardError::Repository`] when the store write fails, or [`super::TaskBoardError::State`] if the store
    /// hands out an identifier already on the board.
    pub async fn add_task(&self, text: &str) -> TaskBoardResult<Option<Task>> {
        let Ok(task_text) = TaskText::new(text) else {
            debug!("ignoring task with blank text");
            return Ok(None);
        };
        if let Some(max) = self.config.max_text_length {
            let actual = task_text.char_count();
            if actual > max {
                return Err(BoardDomainError::TaskTextTooLong { max, actual }.into());
            }
        }

        let task = self.repository.create(task_text, Stage::Backlog).await?;
        self.board.write().await.insert(task.clone())?;
        info!(task_id = %task.id(), "task added");
        Ok(Some(task))
    }

    /// Deletes a task from the store and then from the board.
    ///
    /// A task already missing from the board is not an error once the store
    /// has confirmed the delete.
    ///
    /// # Errors
    ///
    /// Returns [`super::TaskBoardError::Repository`] when the store delete
    /// fails; the board is left untouched.
    pub async fn delete_task(&self, id: &TaskId) -> TaskBoardResult<()> {
        self.repository.delete(id).await?;
        if self.board.write().await.remove_by_id(id).is_none() {
            debug!(task_id = %id, "deleted task was not on the board");
        }
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    /// Moves a task to `target`.
    ///
    /// # Errors
    ///
    /// See [`TransitionEngine::apply`].
    pub async fn drop_task(&self, id: &TaskId, target: Stage) -> TaskBoardResult<()> {
        self.transitions.apply(&self.board, id, target).await
    }

    /// Handles a drop event from the drag-and-drop layer.
    ///
    /// # Errors
    ///
    /// See [`TransitionEngine::apply`].
    pub async fn handle_drop(&self, event: &DropEvent) -> TaskBoardResult<()> {
        self.transitions.apply_drop(&self.board, event).await
    }

    /// Returns the tasks in `stage` in insertion order.
    pub async fn tasks_for_stage(&self, stage: Stage) -> Vec<Task> {
        self.board.read().await.by_stage(stage)
    }

    /// Returns every task on the board in insertion order.
    pub async fn all_tasks(&self) -> Vec<Task> {
        self.board.read().await.all()
    }

    /// Returns each stage with its tasks, in board order.
    pub async fn columns(&self) -> Vec<(Stage, Vec<Task>)> {
        let board = self.board.read().await;
        Stage::ALL
            .iter()
            .map(|stage| (*stage, board.by_stage(*stage)))
            .collect()
    }

    /// Returns a copy of the current board state.
    pub async fn snapshot(&self) -> BoardState {
        self.board.read().await.clone()
    }

    /// Reports whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Subscribes to changes of the loading flag.
    #[must_use]
    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }
}
