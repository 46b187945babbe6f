//! Document store port holding the durable task records.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Stored fields of a task record.
///
/// The store key is not part of the document; it is assigned by the store on
/// creation and reported alongside the document by [`TaskStore::list_all`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDocument {
    /// Display text.
    pub text: String,
    /// Stage label, one of `Backlog`, `In Progress`, or `Done`.
    pub status: String,
}

impl TaskDocument {
    /// Creates a document from its field values.
    #[must_use]
    pub fn new(text: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: status.into(),
        }
    }
}

/// A document together with its store key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTaskDocument {
    /// Store-assigned key.
    pub key: String,
    /// Stored fields.
    pub document: TaskDocument,
}

/// Keyed collection of task documents.
///
/// Implementations hold no task cache of their own; every call goes to the
/// backing store.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Lists every stored document.
    async fn list_all(&self) -> TaskStoreResult<Vec<StoredTaskDocument>>;

    /// Stores a new document and returns the key the store assigned to it.
    async fn create(&self, document: &TaskDocument) -> TaskStoreResult<String>;

    /// Overwrites the `status` field of the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no document has that key.
    async fn update_status(&self, key: &str, status: &str) -> TaskStoreResult<()>;

    /// Removes the document stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no document has that key.
    async fn delete(&self, key: &str) -> TaskStoreResult<()>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The store could not be reached or failed to complete the call.
    #[error("task store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// No document is stored under the key.
    #[error("task document not found: {0}")]
    NotFound(String),
}

impl TaskStoreError {
    /// Wraps a transport or backend failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
