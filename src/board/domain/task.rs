//! Task entity.

use super::{Stage, TaskId, TaskText};
use serde::{Deserialize, Serialize};

/// A card on the board.
///
/// Identity and text are fixed once the store has accepted the task; only
/// the stage changes, and only through [`super::BoardState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    status: Stage,
}

impl Task {
    /// Builds a task from a store-assigned identifier and its stored fields.
    #[must_use]
    pub const fn new(id: TaskId, text: TaskText, status: Stage) -> Self {
        Self { id, text, status }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the display text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn status(&self) -> Stage {
        self.status
    }

    pub(super) const fn move_to(&mut self, stage: Stage) {
        self.status = stage;
    }
}
