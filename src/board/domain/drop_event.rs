//! Drop events emitted by the drag-and-drop layer.

use super::{Stage, TaskId};
use serde::{Deserialize, Serialize};

/// A card was released over a stage column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropEvent {
    /// Identifier of the dragged task.
    pub dragged_id: TaskId,
    /// Stage column the task was dropped on.
    pub dropped_on_stage: Stage,
}

impl DropEvent {
    /// Creates a drop event.
    #[must_use]
    pub fn new(dragged_id: impl Into<TaskId>, dropped_on_stage: Stage) -> Self {
        Self {
            dragged_id: dragged_id.into(),
            dropped_on_stage,
        }
    }
}
