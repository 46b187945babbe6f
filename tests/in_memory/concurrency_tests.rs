//! Operations on different tasks may be in flight together.

use std::sync::Arc;

use super::helpers::{ensure_in_sync, ensure_partitioned, store};
use rstest::rstest;
use taskboard::board::{
    adapters::memory::InMemoryTaskStore, domain::Stage, services::TaskBoardService,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_moves_on_different_tasks_both_land(
    store: Arc<InMemoryTaskStore>,
) -> Result<(), eyre::Report> {
    let service = TaskBoardService::new(Arc::clone(&store));
    let first = service
        .add_task("Left")
        .await?
        .ok_or_else(|| eyre::eyre!("first task not created"))?;
    let second = service
        .add_task("Right")
        .await?
        .ok_or_else(|| eyre::eyre!("second task not created"))?;

    let (left, right) = tokio::join!(
        service.drop_task(first.id(), Stage::InProgress),
        service.drop_task(second.id(), Stage::Done),
    );
    left?;
    right?;

    eyre::ensure!(
        service.tasks_for_stage(Stage::InProgress).await.len() == 1,
        "left task should be in progress"
    );
    eyre::ensure!(
        service.tasks_for_stage(Stage::Done).await.len() == 1,
        "right task should be done"
    );
    ensure_in_sync(&service, &store).await
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cloned_handles_share_one_board(
    store: Arc<InMemoryTaskStore>,
) -> Result<(), eyre::Report> {
    let service = TaskBoardService::new(Arc::clone(&store));
    let handles: Vec<_> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|text| {
            let handle = service.clone();
            tokio::spawn(async move { handle.add_task(text).await })
        })
        .collect();

    for handle in handles {
        handle.await??;
    }

    eyre::ensure!(service.all_tasks().await.len() == 4, "all adds should land");
    ensure_partitioned(&service).await?;
    ensure_in_sync(&service, &store).await
}
