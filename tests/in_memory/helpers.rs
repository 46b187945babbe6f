//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{Stage, Task},
    ports::TaskDocument,
    services::TaskBoardService,
};

/// Board service wired to the in-memory store.
pub type MemoryBoard = TaskBoardService<InMemoryTaskStore>;

/// Provides an empty in-memory store.
#[fixture]
pub fn store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::new())
}

/// Provides a store holding the single "Write spec" backlog task keyed `1`.
#[fixture]
pub fn seeded_store() -> Arc<InMemoryTaskStore> {
    Arc::new(InMemoryTaskStore::with_documents([(
        "1",
        TaskDocument::new("Write spec", "Backlog"),
    )]))
}

/// Returns `(id, text, stage label)` triples for the board, sorted by id.
pub fn board_records(tasks: &[Task]) -> Vec<(String, String, String)> {
    let mut records: Vec<_> = tasks
        .iter()
        .map(|task| {
            (
                task.id().as_str().to_owned(),
                task.text().as_str().to_owned(),
                task.status().as_str().to_owned(),
            )
        })
        .collect();
    records.sort();
    records
}

/// Returns `(key, text, status)` triples for the store, sorted by key.
///
/// # Errors
///
/// Returns an error if the store snapshot cannot be read.
pub fn store_records(
    store: &InMemoryTaskStore,
) -> Result<Vec<(String, String, String)>, eyre::Report> {
    let mut records: Vec<_> = store
        .documents()?
        .into_iter()
        .map(|stored| (stored.key, stored.document.text, stored.document.status))
        .collect();
    records.sort();
    Ok(records)
}

/// Checks that the board shows exactly what the store holds.
///
/// # Errors
///
/// Returns an error describing the drift when the two differ.
pub async fn ensure_in_sync(
    service: &MemoryBoard,
    store: &InMemoryTaskStore,
) -> Result<(), eyre::Report> {
    let board = board_records(&service.all_tasks().await);
    let stored = store_records(store)?;
    eyre::ensure!(
        board == stored,
        "board drifted from store: board={board:?} store={stored:?}"
    );
    Ok(())
}

/// Checks that the stage columns are disjoint and cover every task.
///
/// # Errors
///
/// Returns an error when a column holds a task of another stage or the
/// columns do not add up to the full task list.
pub async fn ensure_partitioned(service: &MemoryBoard) -> Result<(), eyre::Report> {
    let all = service.all_tasks().await;
    let mut covered = 0;
    for stage in Stage::ALL {
        let column = service.tasks_for_stage(stage).await;
        eyre::ensure!(
            column.iter().all(|task| task.status() == stage),
            "column {stage} holds a task from another stage"
        );
        covered += column.len();
    }
    eyre::ensure!(
        covered == all.len(),
        "columns cover {covered} tasks, board holds {}",
        all.len()
    );
    Ok(())
}
