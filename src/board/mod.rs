//! Task board synchronization.
//!
//! Tasks sit in one of three stages and move between them through drop
//! events. Every change is written to the task store before it reaches the
//! in-memory board, so the board never shows state the store has not
//! accepted. The module follows hexagonal architecture:
//!
//! - Domain types and the board state in [`domain`]
//! - The task store contract in [`ports`]
//! - Store implementations in [`adapters`]
//! - The repository, transition engine, and board service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
