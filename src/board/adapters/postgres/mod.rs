//! `PostgreSQL` adapter for the task store port.

mod models;
mod schema;
mod store;

pub use store::{PostgresTaskStore, TaskPgPool};
