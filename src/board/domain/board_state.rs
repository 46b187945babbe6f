//! In-memory authoritative view of the tasks on the board.

use super::{BoardStateError, Stage, Task, TaskId};
use std::collections::HashSet;

/// Canonical in-memory task set, partitioned by stage.
///
/// Tasks are kept in insertion order, so every per-stage view is a stable
/// subsequence of [`BoardState::all`]. Each task carries exactly one
/// [`Stage`], which makes the stage partitions disjoint by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardState {
    tasks: Vec<Task>,
}

impl BoardState {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns a snapshot of every task in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns the tasks in `stage`, preserving insertion order.
    #[must_use]
    pub fn by_stage(&self, stage: Stage) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.status() == stage)
            .cloned()
            .collect()
    }

    /// Returns the number of tasks in each stage, in board order.
    #[must_use]
    pub fn stage_counts(&self) -> [(Stage, usize); 3] {
        Stage::ALL.map(|stage| {
            let count = self
                .tasks
                .iter()
                .filter(|task| task.status() == stage)
                .count();
            (stage, count)
        })
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Reports whether a task with `id` is on the board.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Reports whether the board holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Adds a task that is not yet on the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStateError::DuplicateId`] when a task with the same
    /// identifier is already present.
    pub fn insert(&mut self, task: Task) -> Result<(), BoardStateError> {
        if self.contains(task.id()) {
            return Err(BoardStateError::DuplicateId(task.id().clone()));
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Removes the task with `id`, returning it when it was present.
    pub fn remove_by_id(&mut self, id: &TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Moves the task with `id` to `stage` in place.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStateError::NotFound`] when the task is not on the
    /// board.
    pub fn set_status(&mut self, id: &TaskId, stage: Stage) -> Result<(), BoardStateError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| BoardStateError::NotFound(id.clone()))?;
        task.move_to(stage);
        Ok(())
    }

    /// Replaces the whole task set, typically with the result of a load.
    ///
    /// # Errors
    ///
    /// Returns [`BoardStateError::DuplicateId`] when `tasks` repeats an
    /// identifier; the previous contents are kept in that case.
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> Result<(), BoardStateError> {
        let duplicate = {
            let mut seen = HashSet::with_capacity(tasks.len());
            tasks
                .iter()
                .find(|task| !seen.insert(task.id()))
                .map(|task| task.id().clone())
        };
        if let Some(id) = duplicate {
            return Err(BoardStateError::DuplicateId(id));
        }
        self.tasks = tasks;
        Ok(())
    }

    /// Removes every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
