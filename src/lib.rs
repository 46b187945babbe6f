//! Taskboard: task-state synchronization for a staged task board.
//!
//! This crate keeps an in-memory board of tasks consistent with a remote
//! task store while tasks are added, deleted, and dragged between stages.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the task store
//! - **Adapters**: Concrete store implementations (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`board`]: Tasks, stages, the board state, and the board service

pub mod board;
