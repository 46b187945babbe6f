//! In-memory task store for tests and local runs.

use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use uuid::Uuid;

use crate::board::ports::{
    StoredTaskDocument, TaskDocument, TaskStore, TaskStoreError, TaskStoreResult,
};

/// Number of calls received per store operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreCallCounts {
    /// Calls to [`TaskStore::list_all`].
    pub list_all: usize,
    /// Calls to [`TaskStore::create`].
    pub create: usize,
    /// Calls to [`TaskStore::update_status`].
    pub update_status: usize,
    /// Calls to [`TaskStore::delete`].
    pub delete: usize,
}

/// Thread-safe in-memory task store.
///
/// Documents are kept in insertion order. Created documents receive random
/// UUID keys. The store can be switched offline to simulate an unreachable
/// backend; calls are still counted while offline.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryStoreState>>,
}

#[derive(Debug, Default)]
struct InMemoryStoreState {
    documents: Vec<StoredTaskDocument>,
    offline: bool,
    calls: StoreCallCounts,
}

/// Failure reported while the store is switched offline.
#[derive(Debug, thiserror::Error)]
#[error("in-memory task store is offline")]
struct StoreOffline;

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `(key, document)` pairs.
    #[must_use]
    pub fn with_documents<I, K>(documents: I) -> Self
    where
        I: IntoIterator<Item = (K, TaskDocument)>,
        K: Into<String>,
    {
        let stored = documents
            .into_iter()
            .map(|(key, document)| StoredTaskDocument {
                key: key.into(),
                document,
            })
            .collect();
        Self {
            state: Arc::new(RwLock::new(InMemoryStoreState {
                documents: stored,
                ..InMemoryStoreState::default()
            })),
        }
    }

    /// Switches the simulated backend on or off.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] if the internal lock is
    /// poisoned.
    pub fn set_available(&self, available: bool) -> TaskStoreResult<()> {
        self.lock()?.offline = !available;
        Ok(())
    }

    /// Returns a snapshot of the stored documents in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] if the internal lock is
    /// poisoned.
    pub fn documents(&self) -> TaskStoreResult<Vec<StoredTaskDocument>> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.documents.clone())
    }

    /// Returns the number of calls received per operation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Unavailable`] if the internal lock is
    /// poisoned.
    pub fn calls(&self) -> TaskStoreResult<StoreCallCounts> {
        let state = self
            .state
            .read()
            .map_err(|err| TaskStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.calls)
    }

    fn lock(&self) -> TaskStoreResult<RwLockWriteGuard<'_, InMemoryStoreState>> {
        self.state
            .write()
            .map_err(|err| TaskStoreError::unavailable(std::io::Error::other(err.to_string())))
    }
}

impl InMemoryStoreState {
    fn ensure_online(&self) -> TaskStoreResult<()> {
        if self.offline {
            return Err(TaskStoreError::unavailable(StoreOffline));
        }
        Ok(())
    }

    fn find_mut(&mut self, key: &str) -> TaskStoreResult<&mut StoredTaskDocument> {
        self.documents
            .iter_mut()
            .find(|stored| stored.key == key)
            .ok_or_else(|| TaskStoreError::NotFound(key.to_owned()))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list_all(&self) -> TaskStoreResult<Vec<StoredTaskDocument>> {
        let mut state = self.lock()?;
        state.calls.list_all += 1;
        state.ensure_online()?;
        Ok(state.documents.clone())
    }

    async fn create(&self, document: &TaskDocument) -> TaskStoreResult<String> {
        let mut state = self.lock()?;
        state.calls.create += 1;
        state.ensure_online()?;
        let key = Uuid::new_v4().to_string();
        state.documents.push(StoredTaskDocument {
            key: key.clone(),
            document: document.clone(),
        });
        Ok(key)
    }

    async fn update_status(&self, key: &str, status: &str) -> TaskStoreResult<()> {
        let mut state = self.lock()?;
        state.calls.update_status += 1;
        state.ensure_online()?;
        state.find_mut(key)?.document.status = status.to_owned();
        Ok(())
    }

    async fn delete(&self, key: &str) -> TaskStoreResult<()> {
        let mut state = self.lock()?;
        state.calls.delete += 1;
        state.ensure_online()?;
        let position = state
            .documents
            .iter()
            .position(|stored| stored.key == key)
            .ok_or_else(|| TaskStoreError::NotFound(key.to_owned()))?;
        state.documents.remove(position);
        Ok(())
    }
}
