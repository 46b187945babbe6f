//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryTaskStore,
    ports::TaskDocument,
    services::{TaskBoardError, TaskBoardService},
};

/// Service type used by the BDD world.
pub type TestBoardService = TaskBoardService<InMemoryTaskStore>;

/// Scenario world for task board behaviour tests.
pub struct TaskBoardWorld {
    pub seed: Vec<(String, TaskDocument)>,
    pub store: Option<Arc<InMemoryTaskStore>>,
    pub service: Option<TestBoardService>,
    pub last_result: Option<Result<(), TaskBoardError>>,
}

impl TaskBoardWorld {
    /// Creates a world with no store yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seed: Vec::new(),
            store: None,
            service: None,
            last_result: None,
        }
    }

    /// Builds the store from the seeded documents on first use and returns
    /// the board service wired to it.
    pub fn connect(&mut self) -> (Arc<InMemoryTaskStore>, TestBoardService) {
        let store = self
            .store
            .get_or_insert_with(|| {
                Arc::new(InMemoryTaskStore::with_documents(self.seed.drain(..)))
            })
            .clone();
        let service = self
            .service
            .get_or_insert_with(|| TaskBoardService::new(Arc::clone(&store)))
            .clone();
        (store, service)
    }
}

impl Default for TaskBoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskBoardWorld {
    TaskBoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
