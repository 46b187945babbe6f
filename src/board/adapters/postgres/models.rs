//! Diesel row models for task board persistence.

use super::schema::board_tasks;
use diesel::prelude::*;

/// Query result row for task documents.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = board_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskDocumentRow {
    /// Document key.
    pub id: uuid::Uuid,
    /// Display text.
    pub text: String,
    /// Stage label.
    pub status: String,
}

/// Insert model for task documents.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = board_tasks)]
pub struct NewTaskDocumentRow {
    /// Document key.
    pub id: uuid::Uuid,
    /// Display text.
    pub text: String,
    /// Stage label.
    pub status: String,
}
