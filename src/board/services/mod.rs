//! Application services for task board orchestration.

mod board_service;
mod config;
mod error;
mod repository;
mod transition;

pub use board_service::TaskBoardService;
pub use config::BoardConfig;
pub use error::{TaskBoardError, TaskBoardResult};
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
pub use transition::TransitionEngine;
