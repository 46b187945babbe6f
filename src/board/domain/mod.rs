//! Domain model for the task board.
//!
//! The board domain models tasks, their stages, and the in-memory board
//! state while keeping every storage concern outside of the domain boundary.

mod board_state;
mod drop_event;
mod error;
mod ids;
mod stage;
mod task;

pub use board_state::BoardState;
pub use drop_event::DropEvent;
pub use error::{BoardDomainError, BoardStateError, ParseStageError};
pub use ids::{TaskId, TaskText};
pub use stage::Stage;
pub use task::Task;
